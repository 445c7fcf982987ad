// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{GradeFilter, RepositoryFactory, StudentFilter};
use registrar_domain::{
    DomainError, Grade, Program, Student, validate_email, validate_email_unique,
    validate_enrollment_number, validate_enrollment_number_unique, validate_entity_id,
    validate_last_name,
};

/// A student together with the program and grades resolved for them.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    /// The student record.
    pub student: Student,
    /// The program the student follows, if any.
    pub program: Option<Program>,
    /// Every grade the student has obtained.
    pub grades: Vec<Grade>,
}

/// Creates a student.
///
/// Checks, in order: the enrollment number is usable and unused, the email
/// is well-formed and unused, the last name is long enough. Only then is
/// the student written and the unit of work committed.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student` - The student to create (without identifier)
///
/// # Returns
///
/// The stored student with its assigned identifier.
///
/// # Errors
///
/// Returns an error if any business rule is violated or a repository
/// operation fails.
pub fn create_student(
    factory: &mut dyn RepositoryFactory,
    student: Student,
) -> Result<Student, CoreError> {
    validate_enrollment_number(&student.enrollment_number)?;

    let same_number: Vec<Student> = factory.students().find_by(&StudentFilter::EnrollmentNumber(
        student.enrollment_number.clone(),
    ))?;
    validate_enrollment_number_unique(&student.enrollment_number, &same_number)?;

    validate_email(&student.email)?;

    let same_email: Vec<Student> = factory
        .students()
        .find_by(&StudentFilter::Email(student.email.clone()))?;
    validate_email_unique(&student.email, &same_email)?;

    validate_last_name(&student.last_name)?;

    let created: Student = factory.students().create(&student)?;
    factory.commit()?;
    Ok(created)
}

/// Retrieves a student by identifier.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student_id` - The student identifier
///
/// # Errors
///
/// Returns `DomainError::StudentNotFound` if no such student exists, or an
/// error if a repository operation fails.
pub fn get_student(
    factory: &mut dyn RepositoryFactory,
    student_id: i64,
) -> Result<Student, CoreError> {
    validate_entity_id("student", student_id)?;

    factory
        .students()
        .find_by_id(student_id)?
        .ok_or_else(|| CoreError::DomainViolation(DomainError::StudentNotFound { student_id }))
}

/// Retrieves a student's full profile: the record, the program it follows,
/// and every grade it has obtained.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student_id` - The student identifier
///
/// # Errors
///
/// Returns `DomainError::StudentNotFound` if no such student exists, or an
/// error if a repository operation fails.
pub fn get_student_profile(
    factory: &mut dyn RepositoryFactory,
    student_id: i64,
) -> Result<StudentProfile, CoreError> {
    let student: Student = get_student(factory, student_id)?;

    let program: Option<Program> = match student.program_id {
        Some(program_id) => factory.programs().find_by_id(program_id)?,
        None => None,
    };

    let grades: Vec<Grade> = factory
        .grades()
        .find_by(&GradeFilter::StudentId(student_id))?;

    Ok(StudentProfile {
        student,
        program,
        grades,
    })
}

/// Returns every student in the registry.
///
/// # Errors
///
/// Returns an error if a repository operation fails.
pub fn list_students(factory: &mut dyn RepositoryFactory) -> Result<Vec<Student>, CoreError> {
    Ok(factory.students().find_all()?)
}

/// Updates a student's fields.
///
/// Structural validation only: the record must carry an identifier that
/// exists in the store, a well-formed email, and a long enough last name.
/// Uniqueness is not re-checked; the enrollment number is immutable in
/// practice because the stored value is keyed on it.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student` - The student to update (with identifier)
///
/// # Returns
///
/// The updated student.
///
/// # Errors
///
/// Returns an error if the student does not exist, a field is invalid, or
/// a repository operation fails.
pub fn update_student(
    factory: &mut dyn RepositoryFactory,
    student: Student,
) -> Result<Student, CoreError> {
    let student_id: i64 = student.student_id.unwrap_or(0);
    validate_entity_id("student", student_id)?;
    validate_email(&student.email)?;
    validate_last_name(&student.last_name)?;

    if factory.students().find_by_id(student_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
            student_id,
        }));
    }

    factory.students().update(&student)?;
    factory.commit()?;
    Ok(student)
}

/// Deletes a student.
///
/// The student's grades are removed with it; that cascade belongs to the
/// storage layer.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `student_id` - The student identifier
///
/// # Errors
///
/// Returns an error if the student does not exist or a repository
/// operation fails.
pub fn delete_student(
    factory: &mut dyn RepositoryFactory,
    student_id: i64,
) -> Result<(), CoreError> {
    validate_entity_id("student", student_id)?;

    if factory.students().find_by_id(student_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
            student_id,
        }));
    }

    factory.students().delete(student_id)?;
    factory.commit()?;
    Ok(())
}
