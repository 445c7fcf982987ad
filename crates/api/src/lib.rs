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

mod auth;
mod error;
mod grade_sheet_csv;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use auth::{AuthenticatedActor, AuthorizationService, authenticate_actor};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use grade_sheet_csv::{decode_grade_sheet, encode_grade_sheet};
pub use handlers::{
    attach_courses, create_account, create_course, create_program, create_student, delete_student,
    enroll_students, export_grade_sheet, get_student, get_student_profile, import_grade_sheet,
    list_courses, list_program_courses, list_programs, list_students, record_grade, update_student,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AccountResponse, AttachCoursesRequest, AttachCoursesResponse, CourseInfo, CreateAccountRequest,
    CreateCourseRequest, CreateProgramRequest, CreateStudentRequest, DeleteStudentResponse,
    EnrollStudentsRequest, EnrollStudentsResponse, GradeInfo, ImportGradeSheetResponse,
    ListCoursesResponse, ListProgramsResponse, ListStudentsResponse, ProgramInfo,
    RecordGradeRequest, StudentInfo, StudentProfileResponse, UpdateStudentRequest,
};
