// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grade mutations.

use diesel::prelude::*;
use registrar_domain::Grade;
use tracing::{debug, info};

use crate::diesel_schema::grades;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new grade row.
///
/// # Returns
///
/// The identifier assigned to the new row.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation on the (student, course) pair.
pub fn create_grade(conn: &mut SqliteConnection, grade: &Grade) -> Result<i64, PersistenceError> {
    info!(
        student_id = grade.student_id,
        course_id = grade.course_id,
        "Creating grade"
    );

    diesel::insert_into(grades::table)
        .values((
            grades::value.eq(grade.value.value()),
            grades::student_id.eq(grade.student_id),
            grades::course_id.eq(grade.course_id),
        ))
        .execute(conn)?;

    let grade_id: i64 = get_last_insert_rowid(conn)?;
    info!(grade_id, "Grade created");

    Ok(grade_id)
}

/// Replaces a stored grade's fields.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the grade's identifier, or an
/// error if the update fails.
pub fn update_grade(
    conn: &mut SqliteConnection,
    grade_id: i64,
    grade: &Grade,
) -> Result<(), PersistenceError> {
    debug!("Updating grade ID: {}", grade_id);

    let affected: usize = diesel::update(grades::table)
        .filter(grades::grade_id.eq(grade_id))
        .set((
            grades::value.eq(grade.value.value()),
            grades::student_id.eq(grade.student_id),
            grades::course_id.eq(grade.course_id),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("grade {grade_id}")));
    }

    Ok(())
}

/// Deletes a grade row.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the identifier, or an error if the
/// delete fails.
pub fn delete_grade(conn: &mut SqliteConnection, grade_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting grade ID: {}", grade_id);

    let affected: usize = diesel::delete(grades::table)
        .filter(grades::grade_id.eq(grade_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("grade {grade_id}")));
    }

    Ok(())
}
