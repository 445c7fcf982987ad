// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course mutations.

use diesel::prelude::*;
use registrar_domain::Course;
use tracing::{debug, info};

use crate::diesel_schema::courses;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new course row.
///
/// # Returns
///
/// The identifier assigned to the new row.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation on the code.
pub fn create_course(conn: &mut SqliteConnection, course: &Course) -> Result<i64, PersistenceError> {
    info!("Creating course: {}", course.code);

    diesel::insert_into(courses::table)
        .values((
            courses::code.eq(course.code.value()),
            courses::title.eq(&course.title),
        ))
        .execute(conn)?;

    let course_id: i64 = get_last_insert_rowid(conn)?;
    info!(course_id, "Course created");

    Ok(course_id)
}

/// Replaces a stored course's fields.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the course's identifier, or an
/// error if the update fails.
pub fn update_course(
    conn: &mut SqliteConnection,
    course_id: i64,
    course: &Course,
) -> Result<(), PersistenceError> {
    debug!("Updating course ID: {}", course_id);

    let affected: usize = diesel::update(courses::table)
        .filter(courses::course_id.eq(course_id))
        .set((
            courses::code.eq(course.code.value()),
            courses::title.eq(&course.title),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("course {course_id}")));
    }

    Ok(())
}

/// Deletes a course row. The schema cascades its grades and relationship
/// rows.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the identifier, or an error if the
/// delete fails.
pub fn delete_course(conn: &mut SqliteConnection, course_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting course ID: {}", course_id);

    let affected: usize = diesel::delete(courses::table)
        .filter(courses::course_id.eq(course_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("course {course_id}")));
    }

    Ok(())
}
