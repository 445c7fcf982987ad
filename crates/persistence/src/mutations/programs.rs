// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Program mutations, including the relationship table writes.

use diesel::prelude::*;
use registrar_domain::Program;
use tracing::{debug, info};

use crate::diesel_schema::{program_courses, programs};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new program row.
///
/// # Returns
///
/// The identifier assigned to the new row.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation on the name.
pub fn create_program(
    conn: &mut SqliteConnection,
    program: &Program,
) -> Result<i64, PersistenceError> {
    info!("Creating program: {}", program.name);

    diesel::insert_into(programs::table)
        .values((
            programs::name.eq(&program.name),
            programs::formation_year.eq(i32::from(program.formation_year.year())),
        ))
        .execute(conn)?;

    let program_id: i64 = get_last_insert_rowid(conn)?;
    info!(program_id, "Program created");

    Ok(program_id)
}

/// Replaces a stored program's fields.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the program's identifier, or an
/// error if the update fails.
pub fn update_program(
    conn: &mut SqliteConnection,
    program_id: i64,
    program: &Program,
) -> Result<(), PersistenceError> {
    debug!("Updating program ID: {}", program_id);

    let affected: usize = diesel::update(programs::table)
        .filter(programs::program_id.eq(program_id))
        .set((
            programs::name.eq(&program.name),
            programs::formation_year.eq(i32::from(program.formation_year.year())),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "program {program_id}"
        )));
    }

    Ok(())
}

/// Deletes a program row. The schema detaches its students and removes its
/// relationship rows.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the identifier, or an error if the
/// delete fails.
pub fn delete_program(conn: &mut SqliteConnection, program_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting program ID: {}", program_id);

    let affected: usize = diesel::delete(programs::table)
        .filter(programs::program_id.eq(program_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "program {program_id}"
        )));
    }

    Ok(())
}

/// Records that a program teaches every listed course, in one statement.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation when a pair already exists.
pub fn attach_courses(
    conn: &mut SqliteConnection,
    program_id: i64,
    course_ids: &[i64],
) -> Result<(), PersistenceError> {
    info!(
        program_id,
        count = course_ids.len(),
        "Attaching courses to program"
    );

    let pairs: Vec<_> = course_ids
        .iter()
        .map(|course_id| {
            (
                program_courses::program_id.eq(program_id),
                program_courses::course_id.eq(*course_id),
            )
        })
        .collect();

    diesel::insert_into(program_courses::table)
        .values(pairs)
        .execute(conn)?;

    Ok(())
}
