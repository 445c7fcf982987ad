// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use registrar_domain::DomainError;

/// Errors that can occur inside a repository implementation.
///
/// These are storage-shaped failures, distinct from business-rule
/// violations: a missing row, or the backend refusing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested entity does not exist in the store.
    NotFound {
        /// The kind of entity that was looked up.
        entity: &'static str,
        /// The identifier that was looked up.
        id: i64,
    },
    /// The storage backend failed.
    Backend(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => {
                write!(f, "No {entity} with id {id} exists in the store")
            }
            Self::Backend(msg) => write!(f, "Storage backend failure: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Errors that can occur while executing a use case.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A repository operation failed.
    Repository(RepositoryError),
    /// A grade sheet failed validation; no row was written.
    SheetRejected {
        /// One message per offending row, in row order.
        errors: Vec<String>,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Repository(err) => write!(f, "Repository failure: {err}"),
            Self::SheetRejected { errors } => {
                write!(f, "Errors in the grade sheet: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
