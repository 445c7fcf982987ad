// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Course, CourseCode, EnrollmentNumber, Program, Student};

/// Validates that an enrollment number is usable.
///
/// # Arguments
///
/// * `enrollment_number` - The enrollment number to validate
///
/// # Returns
///
/// * `Ok(())` if the enrollment number is valid
/// * `Err(DomainError::InvalidEnrollmentNumber)` if it is empty
///
/// # Errors
///
/// Returns an error if the enrollment number is empty or whitespace.
pub fn validate_enrollment_number(
    enrollment_number: &EnrollmentNumber,
) -> Result<(), DomainError> {
    if enrollment_number.value().trim().is_empty() {
        return Err(DomainError::InvalidEnrollmentNumber(
            "Enrollment number cannot be empty",
        ));
    }
    Ok(())
}

/// Validates that an email address matches a well-formed address pattern.
///
/// The check is structural: one `@`, a non-empty local part, and a domain
/// containing a dot. It deliberately stops short of full address grammar.
///
/// # Arguments
///
/// * `email` - The email address to validate
///
/// # Returns
///
/// * `Ok(())` if the address is well-formed
/// * `Err(DomainError::InvalidEmail)` otherwise
///
/// # Errors
///
/// Returns an error if the address is malformed.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if is_well_formed_email(email) {
        Ok(())
    } else {
        Err(DomainError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.')
}

/// Validates that a student last name satisfies the minimum length rule.
///
/// # Arguments
///
/// * `last_name` - The last name to validate
///
/// # Returns
///
/// * `Ok(())` if the name is long enough
/// * `Err(DomainError::InvalidLastName)` otherwise
///
/// # Errors
///
/// Returns an error if the name is shorter than 3 characters.
pub fn validate_last_name(last_name: &str) -> Result<(), DomainError> {
    // Rule: a last name must contain at least 3 characters
    if last_name.chars().count() < 3 {
        return Err(DomainError::InvalidLastName(
            "Last name must be at least 3 characters",
        ));
    }
    Ok(())
}

/// Validates that a program name is usable.
///
/// # Arguments
///
/// * `name` - The program name to validate
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace.
pub fn validate_program_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidProgramName(
            "Program name cannot be empty",
        ));
    }
    Ok(())
}

/// Validates that a course code is usable.
///
/// # Arguments
///
/// * `code` - The course code to validate
///
/// # Errors
///
/// Returns an error if the code is empty or whitespace.
pub fn validate_course_code(code: &CourseCode) -> Result<(), DomainError> {
    if code.value().trim().is_empty() {
        return Err(DomainError::InvalidCourseCode("Course code cannot be empty"));
    }
    Ok(())
}

/// Validates that a course title satisfies the minimum length rule.
///
/// # Arguments
///
/// * `title` - The course title to validate
///
/// # Returns
///
/// * `Ok(())` if the title is long enough
/// * `Err(DomainError::InvalidCourseTitle)` otherwise
///
/// # Errors
///
/// Returns an error if the title is shorter than 4 characters.
pub fn validate_course_title(title: &str) -> Result<(), DomainError> {
    // Rule: a course title must contain at least 4 characters
    if title.chars().count() < 4 {
        return Err(DomainError::InvalidCourseTitle(
            "Course title must be at least 4 characters",
        ));
    }
    Ok(())
}

/// Validates that an entity identifier is positive.
///
/// # Arguments
///
/// * `entity` - The kind of entity the identifier refers to
/// * `id` - The identifier value
///
/// # Errors
///
/// Returns an error if the identifier is zero or negative.
pub const fn validate_entity_id(entity: &'static str, id: i64) -> Result<(), DomainError> {
    if id > 0 {
        Ok(())
    } else {
        Err(DomainError::InvalidEntityId { entity, id })
    }
}

/// Validates that an enrollment number is unique among existing students.
///
/// This function is pure, deterministic, and has no side effects; the
/// caller supplies the students to check against.
///
/// # Arguments
///
/// * `enrollment_number` - The enrollment number to validate
/// * `existing` - The collection of existing students
///
/// # Returns
///
/// * `Ok(())` if the enrollment number is unique
/// * `Err(DomainError::DuplicateEnrollmentNumber)` if it is already in use
///
/// # Errors
///
/// Returns an error if any existing student carries the same enrollment
/// number.
pub fn validate_enrollment_number_unique(
    enrollment_number: &EnrollmentNumber,
    existing: &[Student],
) -> Result<(), DomainError> {
    // Rule: enrollment numbers are unique across the whole registry
    if existing
        .iter()
        .any(|student| student.enrollment_number == *enrollment_number)
    {
        return Err(DomainError::DuplicateEnrollmentNumber {
            enrollment_number: enrollment_number.value().to_string(),
        });
    }

    Ok(())
}

/// Validates that an email is not already used by an existing student.
///
/// # Arguments
///
/// * `email` - The email address to validate
/// * `existing` - The collection of existing students
///
/// # Errors
///
/// Returns an error if any existing student carries the same email.
pub fn validate_email_unique(email: &str, existing: &[Student]) -> Result<(), DomainError> {
    if existing.iter().any(|student| student.email == email) {
        return Err(DomainError::DuplicateEmail {
            email: email.to_string(),
        });
    }

    Ok(())
}

/// Validates that a program name is unique among existing programs.
///
/// # Arguments
///
/// * `name` - The program name to validate
/// * `existing` - The collection of existing programs
///
/// # Errors
///
/// Returns an error if any existing program carries the same name.
pub fn validate_program_name_unique(name: &str, existing: &[Program]) -> Result<(), DomainError> {
    if existing.iter().any(|program| program.name == name) {
        return Err(DomainError::DuplicateProgramName {
            name: name.to_string(),
        });
    }

    Ok(())
}

/// Validates that a course code is unique among existing courses.
///
/// # Arguments
///
/// * `code` - The course code to validate
/// * `existing` - The collection of existing courses
///
/// # Errors
///
/// Returns an error if any existing course carries the same code.
pub fn validate_course_code_unique(
    code: &CourseCode,
    existing: &[Course],
) -> Result<(), DomainError> {
    if existing.iter().any(|course| course.code == *code) {
        return Err(DomainError::DuplicateCourseCode {
            code: code.value().to_string(),
        });
    }

    Ok(())
}
