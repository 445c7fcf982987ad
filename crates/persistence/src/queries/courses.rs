// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course queries, including the courses-of-a-program view derived from
//! the relationship table.

use diesel::prelude::*;
use registrar::CourseFilter;
use registrar_domain::Course;
use tracing::debug;

use crate::data_models::CourseRow;
use crate::diesel_schema::{courses, program_courses};
use crate::error::PersistenceError;

/// Retrieves a course by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the course is not found.
pub fn get_course_by_id(
    conn: &mut SqliteConnection,
    course_id: i64,
) -> Result<Option<Course>, PersistenceError> {
    debug!("Looking up course by ID: {}", course_id);

    let result: Result<CourseRow, diesel::result::Error> = courses::table
        .filter(courses::course_id.eq(course_id))
        .select(CourseRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every course matching a port filter.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_courses(
    conn: &mut SqliteConnection,
    filter: &CourseFilter,
) -> Result<Vec<Course>, PersistenceError> {
    let rows: Vec<CourseRow> = match filter {
        CourseFilter::Code(code) => courses::table
            .filter(courses::code.eq(code.value()))
            .select(CourseRow::as_select())
            .load(conn)?,
        CourseFilter::ProgramId(program_id) => courses::table
            .inner_join(program_courses::table)
            .filter(program_courses::program_id.eq(*program_id))
            .order(courses::course_id.asc())
            .select(CourseRow::as_select())
            .load(conn)?,
    };

    Ok(rows.into_iter().map(CourseRow::into_domain).collect())
}

/// Retrieves every course, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_courses(conn: &mut SqliteConnection) -> Result<Vec<Course>, PersistenceError> {
    let rows: Vec<CourseRow> = courses::table
        .order(courses::course_id.asc())
        .select(CourseRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(CourseRow::into_domain).collect())
}
