// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{CourseFilter, ProgramFilter, RepositoryFactory};
use registrar_domain::{
    Course, DomainError, Program, validate_entity_id, validate_program_name,
    validate_program_name_unique,
};

/// Creates a program.
///
/// The formation year is validated at construction of the record; here the
/// name must be usable and unused.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program` - The program to create (without identifier)
///
/// # Returns
///
/// The stored program with its assigned identifier.
///
/// # Errors
///
/// Returns an error if any business rule is violated or a repository
/// operation fails.
pub fn create_program(
    factory: &mut dyn RepositoryFactory,
    program: Program,
) -> Result<Program, CoreError> {
    validate_program_name(&program.name)?;

    let same_name: Vec<Program> = factory
        .programs()
        .find_by(&ProgramFilter::Name(program.name.clone()))?;
    validate_program_name_unique(&program.name, &same_name)?;

    let created: Program = factory.programs().create(&program)?;
    factory.commit()?;
    Ok(created)
}

/// Returns every program in the registry.
///
/// # Errors
///
/// Returns an error if a repository operation fails.
pub fn list_programs(factory: &mut dyn RepositoryFactory) -> Result<Vec<Program>, CoreError> {
    Ok(factory.programs().find_all()?)
}

/// Returns every course a program teaches.
///
/// The course list is a view derived from the stored (program, course)
/// relationship pairs.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program_id` - The program identifier
///
/// # Errors
///
/// Returns `DomainError::ProgramNotFound` if no such program exists, or an
/// error if a repository operation fails.
pub fn list_program_courses(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
) -> Result<Vec<Course>, CoreError> {
    validate_entity_id("program", program_id)?;

    if factory.programs().find_by_id(program_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::ProgramNotFound {
            program_id,
        }));
    }

    Ok(factory
        .courses()
        .find_by(&CourseFilter::ProgramId(program_id))?)
}

/// Attaches a single course to a program.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program_id` - The program identifier
/// * `course_id` - The course identifier
///
/// # Returns
///
/// The program the course was attached to.
///
/// # Errors
///
/// Returns an error if either entity is missing, the course is already
/// attached, or a repository operation fails.
pub fn attach_course_to_program(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    course_id: i64,
) -> Result<Program, CoreError> {
    attach_courses_to_program(factory, program_id, &[course_id])
}

/// Attaches several courses to a program.
///
/// Every (program, course) pair is checked before any edge is written;
/// the write itself is a single bulk repository call followed by one
/// commit.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `program_id` - The program identifier
/// * `course_ids` - The course identifiers to attach
///
/// # Returns
///
/// The program the courses were attached to.
///
/// # Errors
///
/// Returns an error if any pair violates a business rule or a repository
/// operation fails.
pub fn attach_courses_to_program(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    course_ids: &[i64],
) -> Result<Program, CoreError> {
    for course_id in course_ids {
        check_attachment_rules(factory, program_id, *course_id)?;
    }

    factory.programs().attach_courses(program_id, course_ids)?;
    factory.commit()?;

    factory
        .programs()
        .find_by_id(program_id)?
        .ok_or_else(|| CoreError::DomainViolation(DomainError::ProgramNotFound { program_id }))
}

/// Checks the rules for attaching one course to one program: positive
/// identifiers, both sides exist, and the edge is not already present.
fn check_attachment_rules(
    factory: &mut dyn RepositoryFactory,
    program_id: i64,
    course_id: i64,
) -> Result<(), CoreError> {
    validate_entity_id("program", program_id)?;
    validate_entity_id("course", course_id)?;

    if factory.courses().find_by_id(course_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::CourseNotFound {
            course_id,
        }));
    }

    if factory.programs().find_by_id(program_id)?.is_none() {
        return Err(CoreError::DomainViolation(DomainError::ProgramNotFound {
            program_id,
        }));
    }

    let taught: Vec<Course> = factory
        .courses()
        .find_by(&CourseFilter::ProgramId(program_id))?;
    if taught
        .iter()
        .any(|course| course.course_id == Some(course_id))
    {
        return Err(CoreError::DomainViolation(
            DomainError::DuplicateCourseInProgram {
                course_id,
                program_id,
            },
        ));
    }

    Ok(())
}
