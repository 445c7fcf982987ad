// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{GradeFilter, ProgramFilter, RepositoryFactory, StudentFilter};
use registrar_domain::{
    DomainError, EnrollmentNumber, Grade, GradeValue, Program, Student, validate_entity_id,
};

/// One line of a grade sheet.
///
/// Every field is carried as text. On export the grade column holds the
/// stored value or is empty when the student has no grade yet; on import
/// it holds whatever the sheet author typed, and the import pass decides
/// whether that text is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSheetRow {
    /// The student's enrollment number.
    pub enrollment_number: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's first name.
    pub first_name: String,
    /// The course code the sheet covers.
    pub course_code: String,
    /// The course title the sheet covers.
    pub course_title: String,
    /// The grade cell, possibly empty.
    pub grade: String,
}

/// What an accepted grade sheet did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeSheetOutcome {
    /// Grades written for pairs that had none.
    pub created: usize,
    /// Grades overwritten for pairs that already had one.
    pub updated: usize,
    /// Rows left alone because their grade cell was empty.
    pub skipped: usize,
}

impl GradeSheetOutcome {
    /// Returns how many grades the sheet wrote in total.
    #[must_use]
    pub const fn saved(&self) -> usize {
        self.created + self.updated
    }
}

/// Builds the grade sheet for a course.
///
/// The roster is every student enrolled in a program that teaches the
/// course. A student reachable through several programs appears once, at
/// the position of their first appearance. Students without a grade get a
/// row with an empty grade cell so the sheet can be filled in and sent
/// back through [`import_course_grades`].
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `course_id` - The course identifier
///
/// # Returns
///
/// The sheet rows in roster order.
///
/// # Errors
///
/// Returns an error if the course does not exist or a repository
/// operation fails.
pub fn export_course_grades(
    factory: &mut dyn RepositoryFactory,
    course_id: i64,
) -> Result<Vec<GradeSheetRow>, CoreError> {
    validate_entity_id("course", course_id)?;

    let Some(course) = factory.courses().find_by_id(course_id)? else {
        return Err(CoreError::DomainViolation(DomainError::CourseNotFound {
            course_id,
        }));
    };

    let programs: Vec<Program> = factory
        .programs()
        .find_by(&ProgramFilter::CourseId(course_id))?;

    let mut seen: Vec<i64> = Vec::new();
    let mut roster: Vec<(i64, Student)> = Vec::new();
    for program in &programs {
        let Some(program_id) = program.program_id else {
            continue;
        };
        let enrolled: Vec<Student> = factory
            .students()
            .find_by(&StudentFilter::ProgramId(program_id))?;
        for student in enrolled {
            if let Some(student_id) = student.student_id {
                if !seen.contains(&student_id) {
                    seen.push(student_id);
                    roster.push((student_id, student));
                }
            }
        }
    }

    let mut rows: Vec<GradeSheetRow> = Vec::with_capacity(roster.len());
    for (student_id, student) in &roster {
        let grades: Vec<Grade> = factory.grades().find_by(&GradeFilter::StudentAndCourse {
            student_id: *student_id,
            course_id,
        })?;
        let grade: String = grades
            .first()
            .map_or_else(String::new, |grade| grade.value.to_string());
        rows.push(GradeSheetRow {
            enrollment_number: student.enrollment_number.value().to_string(),
            last_name: student.last_name.clone(),
            first_name: student.first_name.clone(),
            course_code: course.code.value().to_string(),
            course_title: course.title.clone(),
            grade,
        });
    }

    Ok(rows)
}

/// Applies a filled-in grade sheet to a course.
///
/// The sheet is processed in two phases. The first phase checks every row
/// and resolves its student without writing anything; every problem found
/// is collected. If any row is bad the whole sheet is rejected and the
/// store is untouched. The second phase writes every pending grade,
/// overwriting any value already on file for the pair, and ends the unit
/// of work with a single commit.
///
/// Rows with an empty grade cell are skipped, not treated as errors.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `course_id` - The course identifier
/// * `rows` - The sheet rows to apply
///
/// # Returns
///
/// Counts of created, updated, and skipped rows.
///
/// # Errors
///
/// Returns [`CoreError::SheetRejected`] with one message per bad row if
/// any row fails its checks, and other errors if the course does not
/// exist or a repository operation fails.
pub fn import_course_grades(
    factory: &mut dyn RepositoryFactory,
    course_id: i64,
    rows: &[GradeSheetRow],
) -> Result<GradeSheetOutcome, CoreError> {
    validate_entity_id("course", course_id)?;

    if factory.courses().find_by_id(course_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::CourseNotFound {
            course_id,
        }));
    }

    let mut errors: Vec<String> = Vec::new();
    let mut pending: Vec<(i64, GradeValue)> = Vec::new();
    let mut skipped: usize = 0;

    for row in rows {
        let raw: &str = row.grade.trim();
        if raw.is_empty() {
            skipped += 1;
            continue;
        }

        let Ok(value) = raw.parse::<f32>() else {
            errors.push(format!(
                "invalid grade for {}: '{}' is not a number",
                row.enrollment_number, raw
            ));
            continue;
        };

        let Ok(grade_value) = GradeValue::new(value) else {
            errors.push(format!(
                "invalid grade for {}: {} must be between 0 and 20",
                row.enrollment_number, value
            ));
            continue;
        };

        let number: EnrollmentNumber = EnrollmentNumber::new(&row.enrollment_number);
        let students: Vec<Student> = factory
            .students()
            .find_by(&StudentFilter::EnrollmentNumber(number))?;
        let Some(student_id) = students.first().and_then(|student| student.student_id) else {
            errors.push(format!("student not found: {}", row.enrollment_number));
            continue;
        };

        pending.push((student_id, grade_value));
    }

    if !errors.is_empty() {
        return Err(CoreError::SheetRejected { errors });
    }

    let mut created: usize = 0;
    let mut updated: usize = 0;
    for (student_id, grade_value) in pending {
        // Re-read the pair inside the write loop so a sheet that lists the
        // same student twice updates its own first write.
        let existing: Vec<Grade> = factory.grades().find_by(&GradeFilter::StudentAndCourse {
            student_id,
            course_id,
        })?;
        if let Some(current) = existing.into_iter().next() {
            let revised: Grade = Grade {
                value: grade_value,
                ..current
            };
            factory.grades().update(&revised)?;
            updated += 1;
        } else {
            let grade: Grade = Grade::new(grade_value, student_id, course_id);
            factory.grades().create(&grade)?;
            created += 1;
        }
    }
    factory.commit()?;

    Ok(GradeSheetOutcome {
        created,
        updated,
        skipped,
    })
}
