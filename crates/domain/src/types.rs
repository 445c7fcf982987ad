// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents a student enrollment number.
///
/// The enrollment number is the human-facing identifier for a student and
/// is unique across the whole registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnrollmentNumber {
    /// The enrollment number value.
    value: String,
}

impl EnrollmentNumber {
    /// Creates a new `EnrollmentNumber`.
    ///
    /// Enrollment numbers are normalized to uppercase to ensure
    /// case-insensitive uniqueness.
    ///
    /// # Arguments
    ///
    /// * `value` - The enrollment number (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the enrollment number value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EnrollmentNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a course code (e.g. "UE101").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseCode {
    /// The course code value.
    value: String,
}

impl CourseCode {
    /// Creates a new `CourseCode`.
    ///
    /// Codes are normalized to uppercase to ensure case-insensitive
    /// uniqueness.
    ///
    /// # Arguments
    ///
    /// * `value` - The course code (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the course code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for CourseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the formation year of a program.
///
/// Programs run over one of two formation years; no other value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormationYear {
    /// The year value (1 or 2).
    year: u8,
}

impl FormationYear {
    /// Creates a new `FormationYear`.
    ///
    /// # Arguments
    ///
    /// * `year` - The formation year (must be 1 or 2)
    ///
    /// # Returns
    ///
    /// * `Ok(FormationYear)` if the year is valid
    /// * `Err(DomainError::InvalidFormationYear)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the year is not 1 or 2.
    pub const fn new(year: u8) -> Result<Self, DomainError> {
        if year == 1 || year == 2 {
            Ok(Self { year })
        } else {
            Err(DomainError::InvalidFormationYear { year })
        }
    }

    /// Returns the year value.
    #[must_use]
    pub const fn year(&self) -> u8 {
        self.year
    }
}

/// Represents a grade value on the twenty-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeValue {
    /// The grade value (0 to 20 inclusive).
    value: f32,
}

impl GradeValue {
    /// Creates a new `GradeValue`.
    ///
    /// # Arguments
    ///
    /// * `value` - The grade value (must be between 0 and 20 inclusive)
    ///
    /// # Returns
    ///
    /// * `Ok(GradeValue)` if the value is within range
    /// * `Err(DomainError::InvalidGradeValue)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not between 0 and 20.
    pub const fn new(value: f32) -> Result<Self, DomainError> {
        if value >= 0.0 && value <= 20.0 {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidGradeValue { value })
        }
    }

    /// Returns the grade value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.value
    }
}

impl std::fmt::Display for GradeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents an actor role.
///
/// Roles are a closed set; any string outside it fails to parse and a
/// caller holding an unparsed role string is always denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Registrar office staff. May administer records and grade sheets.
    Scolarite,
    /// Program director. May administer records but not grade sheets.
    Responsable,
    /// Student. May only view the record linked to their own account.
    Etudiant,
}

impl Role {
    /// Parses a role from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    ///
    /// # Returns
    ///
    /// * `Ok(Role)` if the string is part of the closed role set
    /// * `Err(DomainError::UnknownRole)` otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Scolarite" => Ok(Self::Scolarite),
            "Responsable" => Ok(Self::Responsable),
            "Etudiant" => Ok(Self::Etudiant),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }

    /// Returns the string representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scolarite => "Scolarite",
            Self::Responsable => "Responsable",
            Self::Etudiant => "Etudiant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a student record.
///
/// `student_id` is the canonical internal identifier; the enrollment number
/// is the unique human-facing one. A student follows at most one program at
/// a time, referenced by `program_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub student_id: Option<i64>,
    /// The student's enrollment number (unique).
    pub enrollment_number: EnrollmentNumber,
    /// The student's first name.
    pub first_name: String,
    /// The student's last name.
    pub last_name: String,
    /// The student's email address (unique).
    pub email: String,
    /// The program the student is enrolled in, if any.
    pub program_id: Option<i64>,
}

// Two Students are equal if they have the same enrollment number,
// regardless of their IDs
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.enrollment_number == other.enrollment_number
    }
}

impl Eq for Student {}

impl std::hash::Hash for Student {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.enrollment_number.hash(state);
    }
}

impl Student {
    /// Creates a new `Student` without a persisted ID or program.
    ///
    /// # Arguments
    ///
    /// * `enrollment_number` - The unique enrollment number
    /// * `first_name` - The student's first name
    /// * `last_name` - The student's last name
    /// * `email` - The student's email address
    #[must_use]
    pub const fn new(
        enrollment_number: EnrollmentNumber,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Self {
        Self {
            student_id: None,
            enrollment_number,
            first_name,
            last_name,
            email,
            program_id: None,
        }
    }

    /// Creates a `Student` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `student_id` - The canonical numeric identifier
    /// * `enrollment_number` - The unique enrollment number
    /// * `first_name` - The student's first name
    /// * `last_name` - The student's last name
    /// * `email` - The student's email address
    /// * `program_id` - The program the student follows, if any
    #[must_use]
    pub const fn with_id(
        student_id: i64,
        enrollment_number: EnrollmentNumber,
        first_name: String,
        last_name: String,
        email: String,
        program_id: Option<i64>,
    ) -> Self {
        Self {
            student_id: Some(student_id),
            enrollment_number,
            first_name,
            last_name,
            email,
            program_id,
        }
    }
}

/// Represents a program ("parcours") a student can follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub program_id: Option<i64>,
    /// The program name (unique).
    pub name: String,
    /// The formation year this program covers.
    pub formation_year: FormationYear,
}

// Two Programs are equal if they have the same name, regardless of their IDs
impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Program {}

impl std::hash::Hash for Program {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Program {
    /// Creates a new `Program` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `name` - The unique program name
    /// * `formation_year` - The formation year the program covers
    #[must_use]
    pub const fn new(name: String, formation_year: FormationYear) -> Self {
        Self {
            program_id: None,
            name,
            formation_year,
        }
    }

    /// Creates a `Program` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `program_id` - The canonical numeric identifier
    /// * `name` - The unique program name
    /// * `formation_year` - The formation year the program covers
    #[must_use]
    pub const fn with_id(program_id: i64, name: String, formation_year: FormationYear) -> Self {
        Self {
            program_id: Some(program_id),
            name,
            formation_year,
        }
    }
}

/// Represents a course ("UE") that programs can teach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub course_id: Option<i64>,
    /// The course code (unique).
    pub code: CourseCode,
    /// The course title.
    pub title: String,
}

// Two Courses are equal if they have the same code, regardless of their IDs
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Course {}

impl std::hash::Hash for Course {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl Course {
    /// Creates a new `Course` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `code` - The unique course code
    /// * `title` - The course title
    #[must_use]
    pub const fn new(code: CourseCode, title: String) -> Self {
        Self {
            course_id: None,
            code,
            title,
        }
    }

    /// Creates a `Course` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `course_id` - The canonical numeric identifier
    /// * `code` - The unique course code
    /// * `title` - The course title
    #[must_use]
    pub const fn with_id(course_id: i64, code: CourseCode, title: String) -> Self {
        Self {
            course_id: Some(course_id),
            code,
            title,
        }
    }
}

/// Represents a grade a student obtained in a course.
///
/// At most one grade exists per (student, course) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub grade_id: Option<i64>,
    /// The grade value.
    pub value: GradeValue,
    /// The student this grade belongs to.
    pub student_id: i64,
    /// The course this grade was obtained in.
    pub course_id: i64,
}

impl Grade {
    /// Creates a new `Grade` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `value` - The grade value
    /// * `student_id` - The student the grade belongs to
    /// * `course_id` - The course the grade was obtained in
    #[must_use]
    pub const fn new(value: GradeValue, student_id: i64, course_id: i64) -> Self {
        Self {
            grade_id: None,
            value,
            student_id,
            course_id,
        }
    }

    /// Creates a `Grade` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `grade_id` - The canonical numeric identifier
    /// * `value` - The grade value
    /// * `student_id` - The student the grade belongs to
    /// * `course_id` - The course the grade was obtained in
    #[must_use]
    pub const fn with_id(grade_id: i64, value: GradeValue, student_id: i64, course_id: i64) -> Self {
        Self {
            grade_id: Some(grade_id),
            value,
            student_id,
            course_id,
        }
    }
}

/// Represents a login account bound to a role.
///
/// An `Etudiant` account is linked to exactly one student record through
/// `student_id`; staff accounts carry no link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub user_id: Option<i64>,
    /// The account email address (unique).
    pub email: String,
    /// The bcrypt hash of the account password.
    pub password_hash: String,
    /// The role this account holds.
    pub role: Role,
    /// The student record this account is linked to, if any.
    pub student_id: Option<i64>,
}

// Two UserAccounts are equal if they have the same email,
// regardless of their IDs
impl PartialEq for UserAccount {
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for UserAccount {}

impl std::hash::Hash for UserAccount {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.email.hash(state);
    }
}

impl UserAccount {
    /// Creates a new `UserAccount` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `email` - The unique account email
    /// * `password_hash` - The bcrypt hash of the password
    /// * `role` - The role the account holds
    /// * `student_id` - The linked student record, if any
    #[must_use]
    pub const fn new(
        email: String,
        password_hash: String,
        role: Role,
        student_id: Option<i64>,
    ) -> Self {
        Self {
            user_id: None,
            email,
            password_hash,
            role,
            student_id,
        }
    }

    /// Creates a `UserAccount` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The canonical numeric identifier
    /// * `email` - The unique account email
    /// * `password_hash` - The bcrypt hash of the password
    /// * `role` - The role the account holds
    /// * `student_id` - The linked student record, if any
    #[must_use]
    pub const fn with_id(
        user_id: i64,
        email: String,
        password_hash: String,
        role: Role,
        student_id: Option<i64>,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            email,
            password_hash,
            role,
            student_id,
        }
    }
}
