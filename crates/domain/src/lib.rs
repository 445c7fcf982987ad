// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use types::{
    Course, CourseCode, EnrollmentNumber, FormationYear, Grade, GradeValue, Program, Role,
    Student, UserAccount,
};
pub use validation::{
    validate_course_code, validate_course_code_unique, validate_course_title, validate_email,
    validate_email_unique, validate_enrollment_number, validate_enrollment_number_unique,
    validate_entity_id, validate_last_name, validate_program_name, validate_program_name_unique,
};
