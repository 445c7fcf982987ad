// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Student queries.

use diesel::prelude::*;
use registrar::StudentFilter;
use registrar_domain::Student;
use tracing::debug;

use crate::data_models::StudentRow;
use crate::diesel_schema::students;
use crate::error::PersistenceError;

/// Retrieves a student by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the student is not found.
pub fn get_student_by_id(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<Student>, PersistenceError> {
    debug!("Looking up student by ID: {}", student_id);

    let result: Result<StudentRow, diesel::result::Error> = students::table
        .filter(students::student_id.eq(student_id))
        .select(StudentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every student matching a port filter.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_students(
    conn: &mut SqliteConnection,
    filter: &StudentFilter,
) -> Result<Vec<Student>, PersistenceError> {
    let rows: Vec<StudentRow> = match filter {
        StudentFilter::EnrollmentNumber(number) => students::table
            .filter(students::enrollment_number.eq(number.value()))
            .select(StudentRow::as_select())
            .load(conn)?,
        StudentFilter::Email(email) => students::table
            .filter(students::email.eq(email))
            .select(StudentRow::as_select())
            .load(conn)?,
        StudentFilter::ProgramId(program_id) => students::table
            .filter(students::program_id.eq(Some(*program_id)))
            .order(students::student_id.asc())
            .select(StudentRow::as_select())
            .load(conn)?,
    };

    Ok(rows.into_iter().map(StudentRow::into_domain).collect())
}

/// Retrieves every student, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_students(conn: &mut SqliteConnection) -> Result<Vec<Student>, PersistenceError> {
    let rows: Vec<StudentRow> = students::table
        .order(students::student_id.asc())
        .select(StudentRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(StudentRow::into_domain).collect())
}
