// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login account queries.

use diesel::prelude::*;
use registrar::AccountFilter;
use registrar_domain::UserAccount;
use tracing::debug;

use crate::data_models::AccountRow;
use crate::diesel_schema::user_accounts;
use crate::error::PersistenceError;

/// Retrieves an account by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserAccount>, PersistenceError> {
    debug!("Looking up account by ID: {}", user_id);

    let result: Result<AccountRow, diesel::result::Error> = user_accounts::table
        .filter(user_accounts::user_id.eq(user_id))
        .select(AccountRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every account matching a port filter.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn find_accounts(
    conn: &mut SqliteConnection,
    filter: &AccountFilter,
) -> Result<Vec<UserAccount>, PersistenceError> {
    let rows: Vec<AccountRow> = match filter {
        AccountFilter::Email(email) => user_accounts::table
            .filter(user_accounts::email.eq(email))
            .select(AccountRow::as_select())
            .load(conn)?,
        AccountFilter::StudentId(student_id) => user_accounts::table
            .filter(user_accounts::student_id.eq(Some(*student_id)))
            .select(AccountRow::as_select())
            .load(conn)?,
    };

    rows.into_iter().map(AccountRow::into_domain).collect()
}

/// Retrieves every account, ordered by identifier.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_accounts(conn: &mut SqliteConnection) -> Result<Vec<UserAccount>, PersistenceError> {
    let rows: Vec<AccountRow> = user_accounts::table
        .order(user_accounts::user_id.asc())
        .select(AccountRow::as_select())
        .load(conn)?;

    rows.into_iter().map(AccountRow::into_domain).collect()
}
