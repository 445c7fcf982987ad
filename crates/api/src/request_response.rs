// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use registrar_domain::{Course, Grade, Program, Student, UserAccount};

/// API request to create a new student record.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateStudentRequest {
    /// The student's enrollment number.
    pub enrollment_number: String,
    /// The student's first name.
    pub first_name: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's email address.
    pub email: String,
}

/// API request to replace the mutable fields of a student record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateStudentRequest {
    /// The student's enrollment number.
    pub enrollment_number: String,
    /// The student's first name.
    pub first_name: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's email address.
    pub email: String,
}

/// A student record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudentInfo {
    /// The canonical student identifier.
    pub student_id: i64,
    /// The student's enrollment number.
    pub enrollment_number: String,
    /// The student's first name.
    pub first_name: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's email address.
    pub email: String,
    /// The program the student is enrolled in, if any.
    pub program_id: Option<i64>,
}

impl StudentInfo {
    /// Builds the DTO from a stored student record.
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        Self {
            student_id: student.student_id.unwrap_or(0),
            enrollment_number: student.enrollment_number.value().to_string(),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            program_id: student.program_id,
        }
    }
}

/// API response for a successful student deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteStudentResponse {
    /// The identifier of the deleted record.
    pub student_id: i64,
    /// A success message.
    pub message: String,
}

/// API response listing every student record.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListStudentsResponse {
    /// The student records, ordered by identifier.
    pub students: Vec<StudentInfo>,
}

/// A student together with the program and grades resolved for them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StudentProfileResponse {
    /// The student record.
    pub student: StudentInfo,
    /// The program the student follows, if any.
    pub program: Option<ProgramInfo>,
    /// Every grade the student has obtained.
    pub grades: Vec<GradeInfo>,
}

/// API request to create a new program.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateProgramRequest {
    /// The program name.
    pub name: String,
    /// The formation year the program covers (1 or 2).
    pub formation_year: u8,
}

/// A program as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProgramInfo {
    /// The canonical program identifier.
    pub program_id: i64,
    /// The program name.
    pub name: String,
    /// The formation year the program covers.
    pub formation_year: u8,
}

impl ProgramInfo {
    /// Builds the DTO from a stored program record.
    #[must_use]
    pub fn from_program(program: &Program) -> Self {
        Self {
            program_id: program.program_id.unwrap_or(0),
            name: program.name.clone(),
            formation_year: program.formation_year.year(),
        }
    }
}

/// API response listing every program.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListProgramsResponse {
    /// The programs, ordered by identifier.
    pub programs: Vec<ProgramInfo>,
}

/// API request to create a new course.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateCourseRequest {
    /// The course code.
    pub code: String,
    /// The course title.
    pub title: String,
}

/// A course as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourseInfo {
    /// The canonical course identifier.
    pub course_id: i64,
    /// The course code.
    pub code: String,
    /// The course title.
    pub title: String,
}

impl CourseInfo {
    /// Builds the DTO from a stored course record.
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            course_id: course.course_id.unwrap_or(0),
            code: course.code.value().to_string(),
            title: course.title.clone(),
        }
    }
}

/// API response listing courses.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListCoursesResponse {
    /// The courses, ordered by identifier.
    pub courses: Vec<CourseInfo>,
}

/// API request to enroll students in a program.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnrollStudentsRequest {
    /// The students to enroll.
    pub student_ids: Vec<i64>,
}

/// API response for a successful enrollment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnrollStudentsResponse {
    /// The program the students were enrolled in.
    pub program: ProgramInfo,
    /// How many students were enrolled.
    pub enrolled: usize,
    /// A success message.
    pub message: String,
}

/// API request to attach courses to a program.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttachCoursesRequest {
    /// The courses to attach.
    pub course_ids: Vec<i64>,
}

/// API response for a successful course attachment.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttachCoursesResponse {
    /// The program the courses were attached to.
    pub program: ProgramInfo,
    /// How many courses were attached.
    pub attached: usize,
    /// A success message.
    pub message: String,
}

/// API request to record a grade.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordGradeRequest {
    /// The graded student.
    pub student_id: i64,
    /// The graded course.
    pub course_id: i64,
    /// The grade value (0 to 20 inclusive).
    pub value: f64,
}

/// A grade as returned by the API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradeInfo {
    /// The canonical grade identifier.
    pub grade_id: i64,
    /// The grade value.
    pub value: f32,
    /// The graded student.
    pub student_id: i64,
    /// The graded course.
    pub course_id: i64,
}

impl GradeInfo {
    /// Builds the DTO from a stored grade record.
    #[must_use]
    pub fn from_grade(grade: &Grade) -> Self {
        Self {
            grade_id: grade.grade_id.unwrap_or(0),
            value: grade.value.value(),
            student_id: grade.student_id,
            course_id: grade.course_id,
        }
    }
}

/// API response for a committed grade sheet import.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImportGradeSheetResponse {
    /// How many grades were created.
    pub created: usize,
    /// How many grades were overwritten.
    pub updated: usize,
    /// How many rows carried no grade and were skipped.
    pub skipped: usize,
    /// A success message.
    pub message: String,
}

/// API request to create a login account.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAccountRequest {
    /// The login email address.
    pub email: String,
    /// The plain password; hashed before storage, never stored.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
    /// The role the account holds.
    pub role: String,
    /// The student record the account belongs to, for student accounts.
    pub student_id: Option<i64>,
}

/// API response for a successful account creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AccountResponse {
    /// The canonical account identifier.
    pub user_id: i64,
    /// The login email address.
    pub email: String,
    /// The role the account holds.
    pub role: String,
    /// The linked student record, if any.
    pub student_id: Option<i64>,
    /// A success message.
    pub message: String,
}

impl AccountResponse {
    /// Builds the DTO from a stored account record.
    #[must_use]
    pub fn from_account(account: &UserAccount, message: String) -> Self {
        Self {
            user_id: account.user_id.unwrap_or(0),
            email: account.email.clone(),
            role: account.role.as_str().to_string(),
            student_id: account.student_id,
            message,
        }
    }
}
