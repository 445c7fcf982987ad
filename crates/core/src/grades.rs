// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{CourseFilter, GradeFilter, RepositoryFactory};
use registrar_domain::{DomainError, Grade, GradeValue, validate_entity_id};

/// Records a grade for a student in a course.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student_id` - The student identifier
/// * `course_id` - The course identifier
/// * `value` - The grade value on the 0 to 20 scale
///
/// # Returns
///
/// The stored grade.
///
/// # Errors
///
/// Returns an error if the value is out of range, either entity is missing,
/// the pair already has a grade, the student has no program, the course is
/// not taught in the student's program, or a repository operation fails.
pub fn record_grade(
    factory: &mut dyn RepositoryFactory,
    student_id: i64,
    course_id: i64,
    value: f32,
) -> Result<Grade, CoreError> {
    validate_entity_id("student", student_id)?;
    validate_entity_id("course", course_id)?;
    let grade_value: GradeValue = GradeValue::new(value)?;

    let Some(student) = factory.students().find_by_id(student_id)? else {
        return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
            student_id,
        }));
    };

    if factory.courses().find_by_id(course_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::CourseNotFound {
            course_id,
        }));
    }

    let existing: Vec<Grade> = factory.grades().find_by(&GradeFilter::StudentAndCourse {
        student_id,
        course_id,
    })?;
    if !existing.is_empty() {
        return Err(CoreError::DomainViolation(DomainError::DuplicateGrade {
            student_id,
            course_id,
        }));
    }

    // Rule: a grade only makes sense for a course the student actually takes,
    // which means the course must belong to the student's program.
    let Some(program_id) = student.program_id else {
        return Err(CoreError::DomainViolation(
            DomainError::StudentNotInAnyProgram { student_id },
        ));
    };

    let program_courses = factory
        .courses()
        .find_by(&CourseFilter::ProgramId(program_id))?;
    let is_taught: bool = program_courses
        .iter()
        .any(|course| course.course_id == Some(course_id));
    if !is_taught {
        return Err(CoreError::DomainViolation(
            DomainError::CourseNotInStudentProgram {
                student_id,
                course_id,
            },
        ));
    }

    let grade: Grade = Grade::new(grade_value, student_id, course_id);
    let stored: Grade = factory.grades().create(&grade)?;
    factory.commit()?;

    Ok(stored)
}

/// Returns every grade recorded for a student.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student_id` - The student identifier
///
/// # Returns
///
/// The student's grades.
///
/// # Errors
///
/// Returns an error if the student does not exist or a repository
/// operation fails.
pub fn list_student_grades(
    factory: &mut dyn RepositoryFactory,
    student_id: i64,
) -> Result<Vec<Grade>, CoreError> {
    validate_entity_id("student", student_id)?;

    if factory.students().find_by_id(student_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
            student_id,
        }));
    }

    let grades: Vec<Grade> = factory.grades().find_by(&GradeFilter::StudentId(student_id))?;
    Ok(grades)
}
