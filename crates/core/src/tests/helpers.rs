// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    MemoryRegistry, attach_course_to_program, create_course, create_program, create_student,
};
use registrar_domain::{Course, CourseCode, EnrollmentNumber, FormationYear, Program, Student};

pub fn create_test_student(enrollment_number: &str) -> Student {
    Student::new(
        EnrollmentNumber::new(enrollment_number),
        String::from("Jean"),
        String::from("Dupont"),
        format!("{}@etud.u-picardie.fr", enrollment_number.to_lowercase()),
    )
}

pub fn seed_student(registry: &mut MemoryRegistry, enrollment_number: &str) -> i64 {
    let stored: Student =
        create_student(registry, create_test_student(enrollment_number)).unwrap();
    stored.student_id.unwrap()
}

pub fn seed_program(registry: &mut MemoryRegistry, name: &str) -> i64 {
    let program: Program = Program::new(String::from(name), FormationYear::new(1).unwrap());
    let stored: Program = create_program(registry, program).unwrap();
    stored.program_id.unwrap()
}

pub fn seed_course(registry: &mut MemoryRegistry, code: &str) -> i64 {
    let course: Course = Course::new(CourseCode::new(code), format!("Cours {code}"));
    let stored: Course = create_course(registry, course).unwrap();
    stored.course_id.unwrap()
}

/// Seeds a program that teaches one course and returns both identifiers.
pub fn seed_taught_course(
    registry: &mut MemoryRegistry,
    program_name: &str,
    code: &str,
) -> (i64, i64) {
    let program_id: i64 = seed_program(registry, program_name);
    let course_id: i64 = seed_course(registry, code);
    attach_course_to_program(registry, program_id, course_id).unwrap();
    (program_id, course_id)
}
