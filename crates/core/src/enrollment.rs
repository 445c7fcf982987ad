// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::RepositoryFactory;
use registrar_domain::{DomainError, Program, validate_entity_id};

/// Enrolls a single student in a program.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program_id` - The program identifier
/// * `student_id` - The student identifier
///
/// # Returns
///
/// The program the student was enrolled in.
///
/// # Errors
///
/// Returns an error if either entity is missing, the student is already in
/// this exact program, or a repository operation fails.
pub fn enroll_student(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    student_id: i64,
) -> Result<Program, CoreError> {
    enroll_students(factory, program_id, &[student_id])
}

/// Enrolls several students in a program.
///
/// Every (program, student) pair is checked before anything is written;
/// the write itself is a single bulk repository call followed by one
/// commit. A student already enrolled in a different program is simply
/// reassigned; only re-enrolling in the same program is rejected.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program_id` - The program identifier
/// * `student_ids` - The student identifiers to enroll
///
/// # Returns
///
/// The program the students were enrolled in.
///
/// # Errors
///
/// Returns an error if any pair violates a business rule or a repository
/// operation fails.
pub fn enroll_students(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    student_ids: &[i64],
) -> Result<Program, CoreError> {
    for student_id in student_ids {
        check_enrollment_rules(factory, program_id, *student_id)?;
    }

    factory.students().assign_program(program_id, student_ids)?;
    factory.commit()?;

    factory
        .programs()
        .find_by_id(program_id)?
        .ok_or_else(|| CoreError::DomainViolation(DomainError::ProgramNotFound { program_id }))
}

/// Checks the rules for enrolling one student in one program: positive
/// identifiers, both sides exist, and the student is not already enrolled
/// in this exact program.
fn check_enrollment_rules(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    student_id: i64,
) -> Result<(), CoreError> {
    validate_entity_id("program", program_id)?;
    validate_entity_id("student", student_id)?;

    if factory.programs().find_by_id(program_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::ProgramNotFound {
            program_id,
        }));
    }

    let Some(student) = factory.students().find_by_id(student_id)? else {
        return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
            student_id,
        }));
    };

    if student.program_id == Some(program_id) {
        return Err(CoreError::DomainViolation(DomainError::DuplicateEnrollment {
            student_id,
            program_id,
        }));
    }

    Ok(())
}
