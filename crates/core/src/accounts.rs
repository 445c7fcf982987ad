// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::repository::{AccountFilter, RepositoryFactory};
use registrar_domain::{DomainError, Role, UserAccount, validate_email, validate_entity_id};

/// Creates a login account.
///
/// The password arrives already hashed; this layer never sees plain
/// passwords.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `email` - The login email address
/// * `password_hash` - The hashed password to store
/// * `role` - The role the account holds
/// * `student_id` - The student record the account belongs to, for
///   student accounts
///
/// # Returns
///
/// The stored account.
///
/// # Errors
///
/// Returns an error if the email is malformed or already taken, the
/// linked student does not exist, or a repository operation fails.
pub fn create_account(
    factory: &mut dyn RepositoryFactory,
    email: &str,
    password_hash: &str,
    role: Role,
    student_id: Option<i64>,
) -> Result<UserAccount, CoreError> {
    validate_email(email)?;

    let existing: Vec<UserAccount> = factory
        .accounts()
        .find_by(&AccountFilter::Email(email.to_string()))?;
    if !existing.is_empty() {
        return Err(CoreError::DomainViolation(
            DomainError::DuplicateAccountEmail {
                email: email.to_string(),
            },
        ));
    }

    if let Some(student_id) = student_id {
        validate_entity_id("student", student_id)?;
        if factory.students().find_by_id(student_id)?.is_none() {
            return Err(CoreError::DomainViolation(DomainError::StudentNotFound {
                student_id,
            }));
        }
    }

    let account: UserAccount = UserAccount::new(
        email.to_string(),
        password_hash.to_string(),
        role,
        student_id,
    );
    let stored: UserAccount = factory.accounts().create(&account)?;
    factory.commit()?;

    Ok(stored)
}

/// Looks up the account registered under an email address.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `email` - The login email address
///
/// # Returns
///
/// The account, or `None` if no account uses this address.
///
/// # Errors
///
/// Returns an error if a repository operation fails.
pub fn find_account_by_email(
    factory: &mut dyn RepositoryFactory,
    email: &str,
) -> Result<Option<UserAccount>, CoreError> {
    let accounts: Vec<UserAccount> = factory
        .accounts()
        .find_by(&AccountFilter::Email(email.to_string()))?;
    Ok(accounts.into_iter().next())
}

/// Checks whether the account under an email address holds a role.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `email` - The login email address
/// * `role` - The role to check for
///
/// # Returns
///
/// `true` if the account exists and holds exactly this role.
///
/// # Errors
///
/// Returns an error if a repository operation fails.
pub fn is_in_role(
    factory: &mut dyn RepositoryFactory,
    email: &str,
    role: Role,
) -> Result<bool, CoreError> {
    let account: Option<UserAccount> = find_account_by_email(factory, email)?;
    Ok(account.is_some_and(|account| account.role == role))
}
