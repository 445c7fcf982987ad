// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{open_store, sample_student, seed_program, seed_student};
use crate::SqlitePersistence;
use registrar::{RepositoryError, RepositoryFactory, StudentFilter, StudentRepository};
use registrar_domain::{EnrollmentNumber, Student};

#[test]
fn create_assigns_identifier_and_round_trips() {
    let mut store: SqlitePersistence = open_store();

    let stored: Student =
        StudentRepository::create(&mut store, &sample_student("ET1")).unwrap();
    let student_id: i64 = stored.student_id.unwrap();
    assert!(student_id > 0);

    let found: Student = store
        .students()
        .find_by_id(student_id)
        .unwrap()
        .expect("student should exist");
    assert_eq!(found.enrollment_number, EnrollmentNumber::new("ET1"));
    assert_eq!(found.last_name, "Dupont");
    assert_eq!(found.program_id, None);
}

#[test]
fn find_by_id_answers_none_for_missing_row() {
    let mut store: SqlitePersistence = open_store();
    assert!(store.students().find_by_id(999).unwrap().is_none());
}

#[test]
fn enrollment_number_filter_matches_exactly_one() {
    let mut store: SqlitePersistence = open_store();
    seed_student(&mut store, "ET1");
    seed_student(&mut store, "ET2");

    let matches: Vec<Student> = store
        .students()
        .find_by(&StudentFilter::EnrollmentNumber(EnrollmentNumber::new(
            "ET2",
        )))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].enrollment_number, EnrollmentNumber::new("ET2"));
}

#[test]
fn email_filter_matches_the_seeded_address() {
    let mut store: SqlitePersistence = open_store();
    seed_student(&mut store, "ET1");

    let matches: Vec<Student> = store
        .students()
        .find_by(&StudentFilter::Email(String::from(
            "et1@etud.u-picardie.fr",
        )))
        .unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn program_id_filter_lists_the_roster_in_insertion_order() {
    let mut store: SqlitePersistence = open_store();
    let program_id: i64 = seed_program(&mut store, "Informatique L1");
    let first: i64 = seed_student(&mut store, "ET1");
    let second: i64 = seed_student(&mut store, "ET2");
    seed_student(&mut store, "ET3");

    store
        .students()
        .assign_program(program_id, &[first, second])
        .unwrap();

    let roster: Vec<Student> = store
        .students()
        .find_by(&StudentFilter::ProgramId(program_id))
        .unwrap();
    let ids: Vec<i64> = roster.iter().map(|s| s.student_id.unwrap()).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn update_replaces_fields() {
    let mut store: SqlitePersistence = open_store();
    let student_id: i64 = seed_student(&mut store, "ET1");

    let mut revised: Student = store.students().find_by_id(student_id).unwrap().unwrap();
    revised.last_name = String::from("Martin");
    store.students().update(&revised).unwrap();

    let found: Student = store.students().find_by_id(student_id).unwrap().unwrap();
    assert_eq!(found.last_name, "Martin");
}

#[test]
fn update_of_missing_row_is_not_found() {
    let mut store: SqlitePersistence = open_store();
    let mut ghost: Student = sample_student("ET1");
    ghost.student_id = Some(999);

    let err: RepositoryError = store.students().update(&ghost).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::NotFound {
            entity: "student",
            id: 999
        }
    ));
}

#[test]
fn delete_removes_the_row() {
    let mut store: SqlitePersistence = open_store();
    let student_id: i64 = seed_student(&mut store, "ET1");

    store.students().delete(student_id).unwrap();
    assert!(store.students().find_by_id(student_id).unwrap().is_none());
}

#[test]
fn delete_of_missing_row_is_not_found() {
    let mut store: SqlitePersistence = open_store();
    let err: RepositoryError = store.students().delete(42).unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::NotFound {
            entity: "student",
            id: 42
        }
    ));
}

#[test]
fn duplicate_enrollment_number_is_rejected_by_the_schema() {
    let mut store: SqlitePersistence = open_store();
    seed_student(&mut store, "ET1");

    let mut twin: Student = sample_student("ET1");
    twin.email = String::from("other@etud.u-picardie.fr");
    let err: RepositoryError =
        StudentRepository::create(&mut store, &twin).unwrap_err();
    assert!(matches!(err, RepositoryError::Backend(_)));
}
