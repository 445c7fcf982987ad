// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{open_store, seed_course};
use crate::SqlitePersistence;
use registrar::{CourseFilter, CourseRepository, RepositoryError, RepositoryFactory};
use registrar_domain::{Course, CourseCode};

#[test]
fn create_assigns_identifier_and_round_trips() {
    let mut store: SqlitePersistence = open_store();
    let course_id: i64 = seed_course(&mut store, "UE101");

    let found: Course = store
        .courses()
        .find_by_id(course_id)
        .unwrap()
        .expect("course should exist");
    assert_eq!(found.code, CourseCode::new("UE101"));
    assert_eq!(found.title, "Cours UE101");
}

#[test]
fn code_filter_matches_exactly_one() {
    let mut store: SqlitePersistence = open_store();
    seed_course(&mut store, "UE101");
    seed_course(&mut store, "UE102");

    let matches: Vec<Course> = store
        .courses()
        .find_by(&CourseFilter::Code(CourseCode::new("UE102")))
        .unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].code, CourseCode::new("UE102"));
}

#[test]
fn duplicate_code_is_rejected_by_the_schema() {
    let mut store: SqlitePersistence = open_store();
    seed_course(&mut store, "UE101");

    let twin: Course = Course::new(CourseCode::new("UE101"), String::from("Physique"));
    let err: RepositoryError = CourseRepository::create(&mut store, &twin).unwrap_err();
    assert!(matches!(err, RepositoryError::Backend(_)));
}

#[test]
fn update_replaces_the_title() {
    let mut store: SqlitePersistence = open_store();
    let course_id: i64 = seed_course(&mut store, "UE101");

    let mut revised: Course = store.courses().find_by_id(course_id).unwrap().unwrap();
    revised.title = String::from("Mathematiques");
    store.courses().update(&revised).unwrap();

    let found: Course = store.courses().find_by_id(course_id).unwrap().unwrap();
    assert_eq!(found.title, "Mathematiques");
}

#[test]
fn list_orders_by_identifier() {
    let mut store: SqlitePersistence = open_store();
    let first: i64 = seed_course(&mut store, "UE101");
    let second: i64 = seed_course(&mut store, "UE102");

    let all: Vec<Course> = store.courses().find_all().unwrap();
    let ids: Vec<i64> = all.iter().map(|c| c.course_id.unwrap()).collect();
    assert_eq!(ids, vec![first, second]);
}
