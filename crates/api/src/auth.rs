// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use registrar::{RepositoryFactory, find_account_by_email};
use registrar_domain::{Role, UserAccount};
use tracing::debug;

use crate::error::AuthError;

/// An authenticated actor with an associated role.
///
/// Identity resolution happens outside this system; what arrives here is
/// an email address and a claimed role string. The actor is only built
/// once the claim has been checked against the account store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The actor's email address.
    pub email: String,
    /// The role the actor holds.
    pub role: Role,
    /// The student record linked to the actor's account, for student
    /// accounts.
    pub student_id: Option<i64>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `email` - The actor's email address
    /// * `role` - The role the actor holds
    /// * `student_id` - The linked student record, if any
    #[must_use]
    pub const fn new(email: String, role: Role, student_id: Option<i64>) -> Self {
        Self {
            email,
            role,
            student_id,
        }
    }
}

/// Authenticates an actor from an email address and a claimed role string.
///
/// The claimed role must parse from the closed role set; an unparseable
/// role is always denied. When an account is registered under the email,
/// the claimed role must match the stored one and the actor inherits the
/// account's student link. An email without an account is accepted with
/// the claimed role alone, since identity was already resolved upstream.
///
/// # Arguments
///
/// * `factory` - The repository factory
/// * `email` - The actor's email address
/// * `claimed_role` - The role string the actor claims
///
/// # Errors
///
/// Returns an error if the role does not parse, the stored account holds
/// a different role, or the account lookup fails.
pub fn authenticate_actor(
    factory: &mut dyn RepositoryFactory,
    email: &str,
    claimed_role: &str,
) -> Result<AuthenticatedActor, AuthError> {
    let Ok(role) = Role::parse(claimed_role) else {
        return Err(AuthError::UnknownRole {
            role: claimed_role.to_string(),
        });
    };

    let account: Option<UserAccount> =
        find_account_by_email(factory, email).map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Account lookup failed: {e}"),
        })?;

    let student_id: Option<i64> = match account {
        Some(account) => {
            if account.role != role {
                return Err(AuthError::AuthenticationFailed {
                    reason: format!("Claimed role does not match the account under '{email}'"),
                });
            }
            account.student_id
        }
        None => None,
    };

    debug!("Authenticated '{}' as {}", email, role.as_str());
    Ok(AuthenticatedActor::new(email.to_string(), role, student_id))
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific operation based on their role. Every handler
/// checks here before touching a repository.
pub struct AuthorizationService;

/// The two staff roles, allowed on all record administration.
const STAFF: &[Role] = &[Role::Scolarite, Role::Responsable];

/// The registrar office alone, allowed on grade sheets and accounts.
const REGISTRAR_ONLY: &[Role] = &[Role::Scolarite];

impl AuthorizationService {
    fn require(
        actor: &AuthenticatedActor,
        action: &str,
        allowed: &[Role],
    ) -> Result<(), AuthError> {
        if allowed.contains(&actor.role) {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: allowed
                    .iter()
                    .map(|role| role.as_str())
                    .collect::<Vec<&str>>()
                    .join(" or "),
            })
        }
    }

    /// Checks if an actor may create, update, delete, or list students.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_manage_students(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "manage_students", STAFF)
    }

    /// Checks if an actor may view a single student record.
    ///
    /// Staff may view any record; a student may only view the record
    /// linked to their own account.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `student_id` - The record being viewed
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a student viewing another record.
    pub fn authorize_view_student(
        actor: &AuthenticatedActor,
        student_id: i64,
    ) -> Result<(), AuthError> {
        if actor.role == Role::Etudiant {
            if actor.student_id == Some(student_id) {
                return Ok(());
            }
            return Err(AuthError::Unauthorized {
                action: String::from("view_student"),
                required_role: String::from("Scolarite or Responsable, or the record owner"),
            });
        }
        Self::require(actor, "view_student", STAFF)
    }

    /// Checks if an actor may create or list programs.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_manage_programs(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "manage_programs", STAFF)
    }

    /// Checks if an actor may create or list courses.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_manage_courses(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "manage_courses", STAFF)
    }

    /// Checks if an actor may enroll students in a program.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_enroll_students(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "enroll_students", STAFF)
    }

    /// Checks if an actor may attach courses to a program.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_attach_courses(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "attach_courses", STAFF)
    }

    /// Checks if an actor may record a grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor holds neither staff role.
    pub fn authorize_record_grade(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "record_grade", STAFF)
    }

    /// Checks if an actor may export a grade sheet.
    ///
    /// Only the registrar office handles grade sheets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not Scolarite.
    pub fn authorize_export_grade_sheet(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "export_grade_sheet", REGISTRAR_ONLY)
    }

    /// Checks if an actor may import a grade sheet.
    ///
    /// Only the registrar office handles grade sheets.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not Scolarite.
    pub fn authorize_import_grade_sheet(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "import_grade_sheet", REGISTRAR_ONLY)
    }

    /// Checks if an actor may create a login account.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not Scolarite.
    pub fn authorize_create_account(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require(actor, "create_account", REGISTRAR_ONLY)
    }
}
