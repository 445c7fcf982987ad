// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod course_tests;
mod student_tests;

use crate::SqlitePersistence;
use registrar::{
    CourseRepository, ProgramRepository, RepositoryFactory, StudentRepository,
};
use registrar_domain::{Course, CourseCode, EnrollmentNumber, FormationYear, Program, Student};

pub fn open_store() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn sample_student(enrollment_number: &str) -> Student {
    Student::new(
        EnrollmentNumber::new(enrollment_number),
        String::from("Jean"),
        String::from("Dupont"),
        format!("{}@etud.u-picardie.fr", enrollment_number.to_lowercase()),
    )
}

pub fn seed_student(store: &mut SqlitePersistence, enrollment_number: &str) -> i64 {
    let stored: Student = StudentRepository::create(store, &sample_student(enrollment_number))
        .expect("Failed to insert student");
    stored.student_id.unwrap()
}

pub fn seed_program(store: &mut SqlitePersistence, name: &str) -> i64 {
    let program: Program = Program::new(String::from(name), FormationYear::new(1).unwrap());
    let stored: Program =
        ProgramRepository::create(store, &program).expect("Failed to insert program");
    stored.program_id.unwrap()
}

pub fn seed_course(store: &mut SqlitePersistence, code: &str) -> i64 {
    let course: Course = Course::new(CourseCode::new(code), format!("Cours {code}"));
    let stored: Course = CourseRepository::create(store, &course).expect("Failed to insert course");
    stored.course_id.unwrap()
}

/// Seeds a program teaching one course and returns both identifiers.
pub fn seed_taught_course(
    store: &mut SqlitePersistence,
    program_name: &str,
    code: &str,
) -> (i64, i64) {
    let program_id: i64 = seed_program(store, program_name);
    let course_id: i64 = seed_course(store, code);
    store
        .programs()
        .attach_courses(program_id, &[course_id])
        .expect("Failed to attach course");
    (program_id, course_id)
}
