// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use registrar::{CoreError, RepositoryError};
use registrar_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The claimed role is not part of the closed role set.
    UnknownRole {
        /// The role string that failed to parse.
        role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::UnknownRole { role } => {
                write!(f, "Unknown role: '{role}'")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A grade sheet was rejected as a whole; nothing was written.
    SheetRejected {
        /// One message per offending row, in row order.
        errors: Vec<String>,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::SheetRejected { errors } => {
                write!(f, "Grade sheet rejected: {}", errors.join("; "))
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
            AuthError::UnknownRole { role } => Self::Unauthorized {
                action: format!("act with role '{role}'"),
                required_role: String::from("Scolarite, Responsable, or Etudiant"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Rule violations become `DomainRuleViolation` with the variant name as
/// the rule tag; missing entities become `ResourceNotFound`.
#[must_use]
pub fn translate_domain_error(err: &DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::StudentNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message,
        },
        DomainError::ProgramNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Program"),
            message,
        },
        DomainError::CourseNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Course"),
            message,
        },
        DomainError::InvalidEnrollmentNumber(_) => ApiError::DomainRuleViolation {
            rule: String::from("InvalidEnrollmentNumber"),
            message,
        },
        DomainError::DuplicateEnrollmentNumber { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateEnrollmentNumber"),
            message,
        },
        DomainError::InvalidEmail { .. } => ApiError::DomainRuleViolation {
            rule: String::from("InvalidEmail"),
            message,
        },
        DomainError::DuplicateEmail { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateEmail"),
            message,
        },
        DomainError::InvalidLastName(_) => ApiError::DomainRuleViolation {
            rule: String::from("InvalidLastName"),
            message,
        },
        DomainError::InvalidProgramName(_) => ApiError::DomainRuleViolation {
            rule: String::from("InvalidProgramName"),
            message,
        },
        DomainError::InvalidFormationYear { .. } => ApiError::DomainRuleViolation {
            rule: String::from("InvalidFormationYear"),
            message,
        },
        DomainError::DuplicateProgramName { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateProgramName"),
            message,
        },
        DomainError::InvalidCourseCode(_) => ApiError::DomainRuleViolation {
            rule: String::from("InvalidCourseCode"),
            message,
        },
        DomainError::InvalidCourseTitle(_) => ApiError::DomainRuleViolation {
            rule: String::from("InvalidCourseTitle"),
            message,
        },
        DomainError::DuplicateCourseCode { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateCourseCode"),
            message,
        },
        DomainError::InvalidGradeValue { .. } => ApiError::DomainRuleViolation {
            rule: String::from("InvalidGradeValue"),
            message,
        },
        DomainError::DuplicateGrade { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateGrade"),
            message,
        },
        DomainError::InvalidEntityId { entity, .. } => ApiError::InvalidInput {
            field: format!("{entity}_id"),
            message,
        },
        DomainError::DuplicateEnrollment { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateEnrollment"),
            message,
        },
        DomainError::DuplicateCourseInProgram { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateCourseInProgram"),
            message,
        },
        DomainError::StudentNotInAnyProgram { .. } => ApiError::DomainRuleViolation {
            rule: String::from("StudentNotInAnyProgram"),
            message,
        },
        DomainError::CourseNotInStudentProgram { .. } => ApiError::DomainRuleViolation {
            rule: String::from("CourseNotInStudentProgram"),
            message,
        },
        DomainError::UnknownRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message,
        },
        DomainError::DuplicateAccountEmail { .. } => ApiError::DomainRuleViolation {
            rule: String::from("DuplicateAccountEmail"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: &CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Repository(repo_err) => match repo_err {
            RepositoryError::NotFound { entity, id } => ApiError::ResourceNotFound {
                resource_type: String::from(*entity),
                message: format!("No {entity} with id {id} exists"),
            },
            RepositoryError::Backend(msg) => ApiError::Internal {
                message: format!("Storage backend failure: {msg}"),
            },
        },
        CoreError::SheetRejected { errors } => ApiError::SheetRejected {
            errors: errors.clone(),
        },
    }
}
