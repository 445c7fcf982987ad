// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::DuplicateEnrollmentNumber {
        enrollment_number: String::from("ET1"),
    };
    assert_eq!(
        format!("{err}"),
        "Student with enrollment number 'ET1' already exists"
    );

    let err: DomainError = DomainError::InvalidEnrollmentNumber("test");
    assert_eq!(format!("{err}"), "Invalid enrollment number: test");

    let err: DomainError = DomainError::InvalidEmail {
        email: String::from("not-an-email"),
    };
    assert_eq!(format!("{err}"), "Invalid email address: 'not-an-email'");

    let err: DomainError = DomainError::DuplicateEmail {
        email: String::from("a@b.fr"),
    };
    assert_eq!(format!("{err}"), "Student with email 'a@b.fr' already exists");

    let err: DomainError = DomainError::InvalidLastName("test");
    assert_eq!(format!("{err}"), "Invalid last name: test");

    let err: DomainError = DomainError::InvalidFormationYear { year: 3 };
    assert_eq!(format!("{err}"), "Invalid formation year: 3. Must be 1 or 2");

    let err: DomainError = DomainError::DuplicateProgramName {
        name: String::from("Informatique"),
    };
    assert_eq!(format!("{err}"), "Program 'Informatique' already exists");

    let err: DomainError = DomainError::InvalidCourseTitle("test");
    assert_eq!(format!("{err}"), "Invalid course title: test");

    let err: DomainError = DomainError::DuplicateCourseCode {
        code: String::from("UE101"),
    };
    assert_eq!(format!("{err}"), "Course with code 'UE101' already exists");

    let err: DomainError = DomainError::InvalidGradeValue { value: 20.5 };
    assert_eq!(
        format!("{err}"),
        "Invalid grade value: 20.5. Must be between 0 and 20"
    );

    let err: DomainError = DomainError::DuplicateGrade {
        student_id: 1,
        course_id: 2,
    };
    assert_eq!(
        format!("{err}"),
        "A grade already exists for student 1 in course 2"
    );

    let err: DomainError = DomainError::InvalidEntityId {
        entity: "student",
        id: 0,
    };
    assert_eq!(format!("{err}"), "Invalid student id: 0. Must be greater than 0");
}

#[test]
fn test_domain_error_display_relationships() {
    let err: DomainError = DomainError::StudentNotFound { student_id: 7 };
    assert_eq!(format!("{err}"), "Student 7 not found");

    let err: DomainError = DomainError::ProgramNotFound { program_id: 3 };
    assert_eq!(format!("{err}"), "Program 3 not found");

    let err: DomainError = DomainError::CourseNotFound { course_id: 9 };
    assert_eq!(format!("{err}"), "Course 9 not found");

    let err: DomainError = DomainError::DuplicateEnrollment {
        student_id: 7,
        program_id: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Student 7 is already enrolled in program 3"
    );

    let err: DomainError = DomainError::DuplicateCourseInProgram {
        course_id: 9,
        program_id: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Course 9 is already attached to program 3"
    );

    let err: DomainError = DomainError::StudentNotInAnyProgram { student_id: 7 };
    assert_eq!(format!("{err}"), "Student 7 is not enrolled in any program");

    let err: DomainError = DomainError::CourseNotInStudentProgram {
        student_id: 7,
        course_id: 9,
    };
    assert_eq!(
        format!("{err}"),
        "Course 9 is not taught in student 7's program"
    );

    let err: DomainError = DomainError::UnknownRole(String::from("Admin"));
    assert_eq!(format!("{err}"), "Unknown role: 'Admin'");

    let err: DomainError = DomainError::DuplicateAccountEmail {
        email: String::from("a@b.fr"),
    };
    assert_eq!(
        format!("{err}"),
        "An account with email 'a@b.fr' already exists"
    );
}
