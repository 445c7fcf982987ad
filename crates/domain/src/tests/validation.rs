// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Course, CourseCode, DomainError, EnrollmentNumber, FormationYear, Program, Student,
    validate_course_code, validate_course_code_unique, validate_course_title, validate_email,
    validate_email_unique, validate_enrollment_number, validate_enrollment_number_unique,
    validate_entity_id, validate_last_name, validate_program_name, validate_program_name_unique,
};

fn create_test_student(enrollment_number: &str, email: &str) -> Student {
    Student::new(
        EnrollmentNumber::new(enrollment_number),
        String::from("Jean"),
        String::from("Dupont"),
        String::from(email),
    )
}

#[test]
fn test_validate_enrollment_number_accepts_non_empty() {
    let number: EnrollmentNumber = EnrollmentNumber::new("ET1");
    assert!(validate_enrollment_number(&number).is_ok());
}

#[test]
fn test_validate_enrollment_number_rejects_empty() {
    let number: EnrollmentNumber = EnrollmentNumber::new("");
    let result: Result<(), DomainError> = validate_enrollment_number(&number);
    assert!(matches!(
        result,
        Err(DomainError::InvalidEnrollmentNumber(_))
    ));

    let number: EnrollmentNumber = EnrollmentNumber::new("   ");
    assert!(validate_enrollment_number(&number).is_err());
}

#[test]
fn test_validate_email_accepts_well_formed_addresses() {
    assert!(validate_email("jean.dupont@etud.u-picardie.fr").is_ok());
    assert!(validate_email("a@b.fr").is_ok());
}

#[test]
fn test_validate_email_rejects_malformed_addresses() {
    for email in [
        "",
        "no-at-sign",
        "missing@dot",
        "@no-local.fr",
        "two@@signs.fr",
        "space in@local.fr",
        "trailing@dot.",
        "leading@.dot",
    ] {
        let result: Result<(), DomainError> = validate_email(email);
        assert!(
            matches!(result, Err(DomainError::InvalidEmail { .. })),
            "expected '{email}' to be rejected"
        );
    }
}

#[test]
fn test_validate_last_name_accepts_three_characters() {
    assert!(validate_last_name("Dup").is_ok());
    assert!(validate_last_name("Dupont").is_ok());
}

#[test]
fn test_validate_last_name_rejects_short_names() {
    let result: Result<(), DomainError> = validate_last_name("Du");
    assert!(matches!(result, Err(DomainError::InvalidLastName(_))));

    assert!(validate_last_name("").is_err());
}

#[test]
fn test_validate_program_name_rejects_empty() {
    assert!(validate_program_name("Informatique").is_ok());
    assert!(matches!(
        validate_program_name(""),
        Err(DomainError::InvalidProgramName(_))
    ));
    assert!(validate_program_name("  ").is_err());
}

#[test]
fn test_validate_course_code_rejects_empty() {
    assert!(validate_course_code(&CourseCode::new("UE101")).is_ok());
    assert!(matches!(
        validate_course_code(&CourseCode::new("")),
        Err(DomainError::InvalidCourseCode(_))
    ));
}

#[test]
fn test_validate_course_title_accepts_four_characters() {
    assert!(validate_course_title("Math").is_ok());
    assert!(validate_course_title("Mathematiques").is_ok());
}

#[test]
fn test_validate_course_title_rejects_short_titles() {
    let result: Result<(), DomainError> = validate_course_title("abc");
    assert!(matches!(result, Err(DomainError::InvalidCourseTitle(_))));

    assert!(validate_course_title("").is_err());
}

#[test]
fn test_validate_entity_id_requires_positive() {
    assert!(validate_entity_id("student", 1).is_ok());
    assert!(matches!(
        validate_entity_id("student", 0),
        Err(DomainError::InvalidEntityId {
            entity: "student",
            id: 0
        })
    ));
    assert!(validate_entity_id("course", -5).is_err());
}

#[test]
fn test_validate_enrollment_number_unique_accepts_new_number() {
    let existing: Vec<Student> = vec![create_test_student("ET1", "et1@etud.u-picardie.fr")];
    let number: EnrollmentNumber = EnrollmentNumber::new("ET2");

    assert!(validate_enrollment_number_unique(&number, &existing).is_ok());
}

#[test]
fn test_validate_enrollment_number_unique_rejects_duplicate() {
    let existing: Vec<Student> = vec![create_test_student("ET1", "et1@etud.u-picardie.fr")];
    let number: EnrollmentNumber = EnrollmentNumber::new("ET1");

    let result: Result<(), DomainError> =
        validate_enrollment_number_unique(&number, &existing);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateEnrollmentNumber { .. })
    ));
}

#[test]
fn test_validate_enrollment_number_unique_is_case_insensitive() {
    let existing: Vec<Student> = vec![create_test_student("ET1", "et1@etud.u-picardie.fr")];
    let number: EnrollmentNumber = EnrollmentNumber::new("et1");

    assert!(validate_enrollment_number_unique(&number, &existing).is_err());
}

#[test]
fn test_validate_email_unique_rejects_duplicate() {
    let existing: Vec<Student> = vec![create_test_student("ET1", "et1@etud.u-picardie.fr")];

    assert!(validate_email_unique("et2@etud.u-picardie.fr", &existing).is_ok());

    let result: Result<(), DomainError> =
        validate_email_unique("et1@etud.u-picardie.fr", &existing);
    assert!(matches!(result, Err(DomainError::DuplicateEmail { .. })));
}

#[test]
fn test_validate_program_name_unique_rejects_duplicate() {
    let year: FormationYear = FormationYear::new(1).unwrap();
    let existing: Vec<Program> = vec![Program::new(String::from("Informatique"), year)];

    assert!(validate_program_name_unique("Mathematiques", &existing).is_ok());

    let result: Result<(), DomainError> =
        validate_program_name_unique("Informatique", &existing);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateProgramName { .. })
    ));
}

#[test]
fn test_validate_course_code_unique_rejects_duplicate() {
    let existing: Vec<Course> = vec![Course::new(
        CourseCode::new("UE101"),
        String::from("Mathematiques"),
    )];

    assert!(validate_course_code_unique(&CourseCode::new("UE102"), &existing).is_ok());

    let result: Result<(), DomainError> =
        validate_course_code_unique(&CourseCode::new("ue101"), &existing);
    assert!(matches!(
        result,
        Err(DomainError::DuplicateCourseCode { .. })
    ));
}
