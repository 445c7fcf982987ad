// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for course creation and lookup.

use crate::{CoreError, MemoryRegistry, create_course, get_course, list_courses};
use registrar_domain::{Course, CourseCode, DomainError};

use super::helpers::seed_course;

#[test]
fn test_create_course_assigns_identifier_and_normalizes_code() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let course: Course = Course::new(CourseCode::new("ue101"), String::from("Programmation"));

    let stored: Course = create_course(&mut registry, course).unwrap();

    assert!(stored.course_id.is_some());
    assert_eq!(stored.code.value(), "UE101");
    assert_eq!(stored.title, "Programmation");
}

#[test]
fn test_create_course_rejects_blank_code() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let course: Course = Course::new(CourseCode::new("  "), String::from("Programmation"));

    let result = create_course(&mut registry, course);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidCourseCode(_))
    ));
}

#[test]
fn test_create_course_rejects_short_title() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let course: Course = Course::new(CourseCode::new("UE101"), String::from("Pro"));

    let result = create_course(&mut registry, course);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidCourseTitle(_))
    ));
}

#[test]
fn test_create_course_rejects_duplicate_code() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    seed_course(&mut registry, "UE101");

    // Codes are uppercased on construction, so this collides.
    let duplicate: Course = Course::new(CourseCode::new("ue101"), String::from("Autre titre"));
    let result = create_course(&mut registry, duplicate);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateCourseCode { .. })
    ));
}

#[test]
fn test_get_course_returns_stored_record() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let course_id: i64 = seed_course(&mut registry, "UE101");

    let found: Course = get_course(&mut registry, course_id).unwrap();

    assert_eq!(found.course_id, Some(course_id));
    assert_eq!(found.code.value(), "UE101");
}

#[test]
fn test_get_course_rejects_unknown_id() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();

    let result = get_course(&mut registry, 42);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::CourseNotFound { course_id: 42 })
    ));
}

#[test]
fn test_get_course_rejects_non_positive_id() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();

    let result = get_course(&mut registry, 0);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidEntityId { .. })
    ));
}

#[test]
fn test_list_courses_returns_everything() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    seed_course(&mut registry, "UE101");
    seed_course(&mut registry, "UE102");

    let courses: Vec<Course> = list_courses(&mut registry).unwrap();

    assert_eq!(courses.len(), 2);
}
