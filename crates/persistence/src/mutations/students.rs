// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student mutations.

use diesel::prelude::*;
use registrar_domain::Student;
use tracing::{debug, info};

use crate::diesel_schema::students;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new student row.
///
/// # Returns
///
/// The identifier assigned to the new row.
///
/// # Errors
///
/// Returns an error if the insert fails, including unique-constraint
/// violations on the enrollment number or email.
pub fn create_student(
    conn: &mut SqliteConnection,
    student: &Student,
) -> Result<i64, PersistenceError> {
    info!(
        "Creating student with enrollment number: {}",
        student.enrollment_number
    );

    diesel::insert_into(students::table)
        .values((
            students::enrollment_number.eq(student.enrollment_number.value()),
            students::first_name.eq(&student.first_name),
            students::last_name.eq(&student.last_name),
            students::email.eq(&student.email),
            students::program_id.eq(student.program_id),
        ))
        .execute(conn)?;

    let student_id: i64 = get_last_insert_rowid(conn)?;
    info!(student_id, "Student created");

    Ok(student_id)
}

/// Replaces a stored student's fields.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the student's identifier, or an
/// error if the update fails.
pub fn update_student(
    conn: &mut SqliteConnection,
    student_id: i64,
    student: &Student,
) -> Result<(), PersistenceError> {
    debug!("Updating student ID: {}", student_id);

    let affected: usize = diesel::update(students::table)
        .filter(students::student_id.eq(student_id))
        .set((
            students::enrollment_number.eq(student.enrollment_number.value()),
            students::first_name.eq(&student.first_name),
            students::last_name.eq(&student.last_name),
            students::email.eq(&student.email),
            students::program_id.eq(student.program_id),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "student {student_id}"
        )));
    }

    Ok(())
}

/// Deletes a student row. The schema cascades the student's grades.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the identifier, or an error if the
/// delete fails.
pub fn delete_student(conn: &mut SqliteConnection, student_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting student ID: {}", student_id);

    let affected: usize = diesel::delete(students::table)
        .filter(students::student_id.eq(student_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "student {student_id}"
        )));
    }

    Ok(())
}

/// Sets the program reference of every listed student in one statement.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn assign_program(
    conn: &mut SqliteConnection,
    program_id: i64,
    student_ids: &[i64],
) -> Result<(), PersistenceError> {
    info!(
        program_id,
        count = student_ids.len(),
        "Assigning students to program"
    );

    diesel::update(students::table)
        .filter(students::student_id.eq_any(student_ids))
        .set(students::program_id.eq(Some(program_id)))
        .execute(conn)?;

    Ok(())
}
