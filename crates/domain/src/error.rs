// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Enrollment number is empty or invalid.
    InvalidEnrollmentNumber(&'static str),
    /// A student with the same enrollment number already exists.
    DuplicateEnrollmentNumber {
        /// The duplicate enrollment number.
        enrollment_number: String,
    },
    /// Email address does not match a well-formed address pattern.
    InvalidEmail {
        /// The malformed email address.
        email: String,
    },
    /// A student with the same email already exists.
    DuplicateEmail {
        /// The duplicate email address.
        email: String,
    },
    /// Student last name is too short or invalid.
    InvalidLastName(&'static str),
    /// Program name is empty or invalid.
    InvalidProgramName(&'static str),
    /// Formation year is outside the permitted set.
    InvalidFormationYear {
        /// The invalid year value.
        year: u8,
    },
    /// A program with the same name already exists.
    DuplicateProgramName {
        /// The duplicate program name.
        name: String,
    },
    /// Course code is empty or invalid.
    InvalidCourseCode(&'static str),
    /// Course title is too short or invalid.
    InvalidCourseTitle(&'static str),
    /// A course with the same code already exists.
    DuplicateCourseCode {
        /// The duplicate course code.
        code: String,
    },
    /// Grade value is outside the permitted range.
    InvalidGradeValue {
        /// The invalid grade value.
        value: f32,
    },
    /// A grade for this (student, course) pair already exists.
    DuplicateGrade {
        /// The student identifier.
        student_id: i64,
        /// The course identifier.
        course_id: i64,
    },
    /// An entity identifier is zero or negative.
    InvalidEntityId {
        /// The kind of entity the identifier refers to.
        entity: &'static str,
        /// The invalid identifier value.
        id: i64,
    },
    /// Student does not exist.
    StudentNotFound {
        /// The student identifier.
        student_id: i64,
    },
    /// Program does not exist.
    ProgramNotFound {
        /// The program identifier.
        program_id: i64,
    },
    /// Course does not exist.
    CourseNotFound {
        /// The course identifier.
        course_id: i64,
    },
    /// Student is already enrolled in this exact program.
    DuplicateEnrollment {
        /// The student identifier.
        student_id: i64,
        /// The program identifier.
        program_id: i64,
    },
    /// Course is already attached to this program.
    DuplicateCourseInProgram {
        /// The course identifier.
        course_id: i64,
        /// The program identifier.
        program_id: i64,
    },
    /// Student has no program, so no grade can be recorded.
    StudentNotInAnyProgram {
        /// The student identifier.
        student_id: i64,
    },
    /// The student's program does not teach the target course.
    CourseNotInStudentProgram {
        /// The student identifier.
        student_id: i64,
        /// The course identifier.
        course_id: i64,
    },
    /// Role string is not part of the closed role set.
    UnknownRole(String),
    /// An account with the same email already exists.
    DuplicateAccountEmail {
        /// The duplicate email address.
        email: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEnrollmentNumber(msg) => {
                write!(f, "Invalid enrollment number: {msg}")
            }
            Self::DuplicateEnrollmentNumber { enrollment_number } => {
                write!(
                    f,
                    "Student with enrollment number '{enrollment_number}' already exists"
                )
            }
            Self::InvalidEmail { email } => write!(f, "Invalid email address: '{email}'"),
            Self::DuplicateEmail { email } => {
                write!(f, "Student with email '{email}' already exists")
            }
            Self::InvalidLastName(msg) => write!(f, "Invalid last name: {msg}"),
            Self::InvalidProgramName(msg) => write!(f, "Invalid program name: {msg}"),
            Self::InvalidFormationYear { year } => {
                write!(f, "Invalid formation year: {year}. Must be 1 or 2")
            }
            Self::DuplicateProgramName { name } => {
                write!(f, "Program '{name}' already exists")
            }
            Self::InvalidCourseCode(msg) => write!(f, "Invalid course code: {msg}"),
            Self::InvalidCourseTitle(msg) => write!(f, "Invalid course title: {msg}"),
            Self::DuplicateCourseCode { code } => {
                write!(f, "Course with code '{code}' already exists")
            }
            Self::InvalidGradeValue { value } => {
                write!(f, "Invalid grade value: {value}. Must be between 0 and 20")
            }
            Self::DuplicateGrade {
                student_id,
                course_id,
            } => {
                write!(
                    f,
                    "A grade already exists for student {student_id} in course {course_id}"
                )
            }
            Self::InvalidEntityId { entity, id } => {
                write!(f, "Invalid {entity} id: {id}. Must be greater than 0")
            }
            Self::StudentNotFound { student_id } => {
                write!(f, "Student {student_id} not found")
            }
            Self::ProgramNotFound { program_id } => {
                write!(f, "Program {program_id} not found")
            }
            Self::CourseNotFound { course_id } => {
                write!(f, "Course {course_id} not found")
            }
            Self::DuplicateEnrollment {
                student_id,
                program_id,
            } => {
                write!(
                    f,
                    "Student {student_id} is already enrolled in program {program_id}"
                )
            }
            Self::DuplicateCourseInProgram {
                course_id,
                program_id,
            } => {
                write!(
                    f,
                    "Course {course_id} is already attached to program {program_id}"
                )
            }
            Self::StudentNotInAnyProgram { student_id } => {
                write!(f, "Student {student_id} is not enrolled in any program")
            }
            Self::CourseNotInStudentProgram {
                student_id,
                course_id,
            } => {
                write!(
                    f,
                    "Course {course_id} is not taught in student {student_id}'s program"
                )
            }
            Self::UnknownRole(role) => write!(f, "Unknown role: '{role}'"),
            Self::DuplicateAccountEmail { email } => {
                write!(f, "An account with email '{email}' already exists")
            }
        }
    }
}

impl std::error::Error for DomainError {}
