// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{CourseFilter, RepositoryFactory};
use registrar_domain::{
    Course, DomainError, validate_course_code, validate_course_code_unique,
    validate_course_title, validate_entity_id,
};

/// Creates a course.
///
/// Checks, in order: the code is usable, the title is long enough, and the
/// code is unused.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `course` - The course to create (without identifier)
///
/// # Returns
///
/// The stored course with its assigned identifier.
///
/// # Errors
///
/// Returns an error if any business rule is violated or a repository
/// operation fails.
pub fn create_course(
    factory: &mut dyn RepositoryFactory,
    course: Course,
) -> Result<Course, CoreError> {
    validate_course_code(&course.code)?;
    validate_course_title(&course.title)?;

    let same_code: Vec<Course> = factory
        .courses()
        .find_by(&CourseFilter::Code(course.code.clone()))?;
    validate_course_code_unique(&course.code, &same_code)?;

    let created: Course = factory.courses().create(&course)?;
    factory.commit()?;
    Ok(created)
}

/// Retrieves a course by identifier.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `course_id` - The course identifier
///
/// # Errors
///
/// Returns `DomainError::CourseNotFound` if no such course exists, or an
/// error if a repository operation fails.
pub fn get_course(
    factory: &mut dyn RepositoryFactory,
    course_id: i64,
) -> Result<Course, CoreError> {
    validate_entity_id("course", course_id)?;

    factory
        .courses()
        .find_by_id(course_id)?
        .ok_or_else(|| CoreError::DomainViolation(DomainError::CourseNotFound { course_id }))
}

/// Returns every course in the registry.
///
/// # Errors
///
/// Returns an error if a repository operation fails.
pub fn list_courses(factory: &mut dyn RepositoryFactory) -> Result<Vec<Course>, CoreError> {
    Ok(factory.courses().find_all()?)
}
