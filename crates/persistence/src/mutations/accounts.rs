// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login account mutations.

use diesel::prelude::*;
use registrar_domain::UserAccount;
use tracing::{debug, info};

use crate::diesel_schema::user_accounts;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a new account row.
///
/// The password hash arrives pre-computed; this layer never sees plain
/// passwords.
///
/// # Returns
///
/// The identifier assigned to the new row.
///
/// # Errors
///
/// Returns an error if the insert fails, including a unique-constraint
/// violation on the email.
pub fn create_account(
    conn: &mut SqliteConnection,
    account: &UserAccount,
) -> Result<i64, PersistenceError> {
    info!("Creating account for: {}", account.email);

    diesel::insert_into(user_accounts::table)
        .values((
            user_accounts::email.eq(&account.email),
            user_accounts::password_hash.eq(&account.password_hash),
            user_accounts::role.eq(account.role.as_str()),
            user_accounts::student_id.eq(account.student_id),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, "Account created");

    Ok(user_id)
}

/// Replaces a stored account's fields.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the account's identifier, or an
/// error if the update fails.
pub fn update_account(
    conn: &mut SqliteConnection,
    user_id: i64,
    account: &UserAccount,
) -> Result<(), PersistenceError> {
    debug!("Updating account ID: {}", user_id);

    let affected: usize = diesel::update(user_accounts::table)
        .filter(user_accounts::user_id.eq(user_id))
        .set((
            user_accounts::email.eq(&account.email),
            user_accounts::password_hash.eq(&account.password_hash),
            user_accounts::role.eq(account.role.as_str()),
            user_accounts::student_id.eq(account.student_id),
        ))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("account {user_id}")));
    }

    Ok(())
}

/// Deletes an account row.
///
/// # Errors
///
/// Returns `NotFound` if no row carries the identifier, or an error if the
/// delete fails.
pub fn delete_account(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    info!("Deleting account ID: {}", user_id);

    let affected: usize = diesel::delete(user_accounts::table)
        .filter(user_accounts::user_id.eq(user_id))
        .execute(conn)?;

    if affected == 0 {
        return Err(PersistenceError::NotFound(format!("account {user_id}")));
    }

    Ok(())
}
