// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Program queries, including the programs-teaching-a-course view derived
//! from the relationship table.

use diesel::prelude::*;
use registrar::ProgramFilter;
use registrar_domain::Program;
use tracing::debug;

use crate::data_models::ProgramRow;
use crate::diesel_schema::{program_courses, programs};
use crate::error::PersistenceError;

/// Retrieves a program by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the program is not found.
pub fn get_program_by_id(
    conn: &mut SqliteConnection,
    program_id: i64,
) -> Result<Option<Program>, PersistenceError> {
    debug!("Looking up program by ID: {}", program_id);

    let result: Result<ProgramRow, diesel::result::Error> = programs::table
        .filter(programs::program_id.eq(program_id))
        .select(ProgramRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every program matching a port filter.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_programs(
    conn: &mut SqliteConnection,
    filter: &ProgramFilter,
) -> Result<Vec<Program>, PersistenceError> {
    let rows: Vec<ProgramRow> = match filter {
        ProgramFilter::Name(name) => programs::table
            .filter(programs::name.eq(name))
            .select(ProgramRow::as_select())
            .load(conn)?,
        ProgramFilter::CourseId(course_id) => programs::table
            .inner_join(program_courses::table)
            .filter(program_courses::course_id.eq(*course_id))
            .order(programs::program_id.asc())
            .select(ProgramRow::as_select())
            .load(conn)?,
    };

    rows.into_iter().map(ProgramRow::into_domain).collect()
}

/// Retrieves every program, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_programs(conn: &mut SqliteConnection) -> Result<Vec<Program>, PersistenceError> {
    let rows: Vec<ProgramRow> = programs::table
        .order(programs::program_id.asc())
        .select(ProgramRow::as_select())
        .load(conn)?;

    rows.into_iter().map(ProgramRow::into_domain).collect()
}
