// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grade queries.

use diesel::prelude::*;
use registrar::GradeFilter;
use registrar_domain::Grade;
use tracing::debug;

use crate::data_models::GradeRow;
use crate::diesel_schema::grades;
use crate::error::PersistenceError;

/// Retrieves a grade by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the grade is not found.
pub fn get_grade_by_id(
    conn: &mut SqliteConnection,
    grade_id: i64,
) -> Result<Option<Grade>, PersistenceError> {
    debug!("Looking up grade by ID: {}", grade_id);

    let result: Result<GradeRow, diesel::result::Error> = grades::table
        .filter(grades::grade_id.eq(grade_id))
        .select(GradeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every grade matching a port filter.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_grades(
    conn: &mut SqliteConnection,
    filter: &GradeFilter,
) -> Result<Vec<Grade>, PersistenceError> {
    let rows: Vec<GradeRow> = match filter {
        GradeFilter::StudentId(student_id) => grades::table
            .filter(grades::student_id.eq(*student_id))
            .order(grades::grade_id.asc())
            .select(GradeRow::as_select())
            .load(conn)?,
        GradeFilter::CourseId(course_id) => grades::table
            .filter(grades::course_id.eq(*course_id))
            .order(grades::grade_id.asc())
            .select(GradeRow::as_select())
            .load(conn)?,
        GradeFilter::StudentAndCourse {
            student_id,
            course_id,
        } => grades::table
            .filter(grades::student_id.eq(*student_id))
            .filter(grades::course_id.eq(*course_id))
            .select(GradeRow::as_select())
            .load(conn)?,
    };

    rows.into_iter().map(GradeRow::into_domain).collect()
}

/// Retrieves every grade, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_grades(conn: &mut SqliteConnection) -> Result<Vec<Grade>, PersistenceError> {
    let rows: Vec<GradeRow> = grades::table
        .order(grades::grade_id.asc())
        .select(GradeRow::as_select())
        .load(conn)?;

    rows.into_iter().map(GradeRow::into_domain).collect()
}
