// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for enrolling students in programs.

use crate::{CoreError, MemoryRegistry, enroll_student, enroll_students, get_student};
use registrar_domain::{DomainError, Program, Student};

use super::helpers::{seed_program, seed_student};

#[test]
fn test_enroll_student_sets_program_reference() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let program_id: i64 = seed_program(&mut registry, "Informatique L1");
    let student_id: i64 = seed_student(&mut registry, "ET1");

    let program: Program = enroll_student(&mut registry, program_id, student_id).unwrap();

    assert_eq!(program.program_id, Some(program_id));
    let student: Student = get_student(&mut registry, student_id).unwrap();
    assert_eq!(student.program_id, Some(program_id));
}

#[test]
fn test_enroll_student_rejects_unknown_program() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let student_id: i64 = seed_student(&mut registry, "ET1");

    let result = enroll_student(&mut registry, 99, student_id);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ProgramNotFound { program_id: 99 })
    ));
}

#[test]
fn test_enroll_student_rejects_unknown_student() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let program_id: i64 = seed_program(&mut registry, "Informatique L1");

    let result = enroll_student(&mut registry, program_id, 99);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::StudentNotFound { student_id: 99 })
    ));
}

#[test]
fn test_enroll_student_checks_program_before_student() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();

    // Both sides unknown; the program check fires first.
    let result = enroll_student(&mut registry, 98, 99);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ProgramNotFound { program_id: 98 })
    ));
}

#[test]
fn test_enroll_student_rejects_non_positive_ids() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();

    assert!(matches!(
        enroll_student(&mut registry, 0, 1).unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidEntityId { .. })
    ));
    assert!(matches!(
        enroll_student(&mut registry, 1, -2).unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidEntityId { .. })
    ));
}

#[test]
fn test_enroll_student_rejects_same_program_twice() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let program_id: i64 = seed_program(&mut registry, "Informatique L1");
    let student_id: i64 = seed_student(&mut registry, "ET1");
    enroll_student(&mut registry, program_id, student_id).unwrap();

    let result = enroll_student(&mut registry, program_id, student_id);

    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::DuplicateEnrollment { .. })
    ));
}

#[test]
fn test_enroll_student_reassigns_across_programs() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let first: i64 = seed_program(&mut registry, "Informatique L1");
    let second: i64 = seed_program(&mut registry, "Mathematiques L1");
    let student_id: i64 = seed_student(&mut registry, "ET1");
    enroll_student(&mut registry, first, student_id).unwrap();

    enroll_student(&mut registry, second, student_id).unwrap();

    let student: Student = get_student(&mut registry, student_id).unwrap();
    assert_eq!(student.program_id, Some(second));
}

#[test]
fn test_enroll_students_bulk_assigns_everyone() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let program_id: i64 = seed_program(&mut registry, "Informatique L1");
    let first: i64 = seed_student(&mut registry, "ET1");
    let second: i64 = seed_student(&mut registry, "ET2");

    enroll_students(&mut registry, program_id, &[first, second]).unwrap();

    assert_eq!(
        get_student(&mut registry, first).unwrap().program_id,
        Some(program_id)
    );
    assert_eq!(
        get_student(&mut registry, second).unwrap().program_id,
        Some(program_id)
    );
}

#[test]
fn test_enroll_students_bulk_assigns_nothing_on_failure() {
    let mut registry: MemoryRegistry = MemoryRegistry::new();
    let program_id: i64 = seed_program(&mut registry, "Informatique L1");
    let first: i64 = seed_student(&mut registry, "ET1");
    let second: i64 = seed_student(&mut registry, "ET2");

    let result = enroll_students(&mut registry, program_id, &[first, second, 99]);

    assert!(result.is_err());
    assert!(get_student(&mut registry, first).unwrap().program_id.is_none());
    assert!(get_student(&mut registry, second).unwrap().program_id.is_none());
}
