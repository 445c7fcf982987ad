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

mod accounts;
mod courses;
mod enrollment;
mod error;
mod grades;
mod memory;
mod programs;
mod repository;
mod students;
mod transfer;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use accounts::{create_account, find_account_by_email, is_in_role};
pub use courses::{create_course, get_course, list_courses};
pub use enrollment::{enroll_student, enroll_students};
pub use error::{CoreError, RepositoryError};
pub use grades::{list_student_grades, record_grade};
pub use memory::MemoryRegistry;
pub use programs::{
    attach_course_to_program, attach_courses_to_program, create_program, list_program_courses,
    list_programs,
};
pub use repository::{
    AccountFilter, AccountRepository, CourseFilter, CourseRepository, GradeFilter,
    GradeRepository, ProgramFilter, ProgramRepository, RepositoryFactory, StudentFilter,
    StudentRepository,
};
pub use students::{
    StudentProfile, create_student, delete_student, get_student, get_student_profile,
    list_students, update_student,
};
pub use transfer::{
    GradeSheetOutcome, GradeSheetRow, export_course_grades, import_course_grades,
};
