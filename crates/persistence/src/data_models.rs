// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their conversions to domain records.

use diesel::prelude::*;
use registrar_domain::{
    Course, CourseCode, EnrollmentNumber, FormationYear, Grade, GradeValue, Program, Role,
    Student, UserAccount,
};

use crate::diesel_schema::{courses, grades, programs, students, user_accounts};
use crate::error::PersistenceError;

/// Diesel Queryable struct for program rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = programs)]
pub(crate) struct ProgramRow {
    pub program_id: i64,
    pub name: String,
    pub formation_year: i32,
}

impl ProgramRow {
    /// Converts the row back into a domain `Program`.
    ///
    /// The formation year is range-checked on the way out; the schema's
    /// CHECK constraint makes a violation a corrupt row, not a user error.
    pub fn into_domain(self) -> Result<Program, PersistenceError> {
        let year: u8 = u8::try_from(self.formation_year).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "program {} carries formation year {}",
                self.program_id, self.formation_year
            ))
        })?;
        let formation_year: FormationYear = FormationYear::new(year).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "program {} carries formation year {year}",
                self.program_id
            ))
        })?;
        Ok(Program::with_id(self.program_id, self.name, formation_year))
    }
}

/// Diesel Queryable struct for student rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
pub(crate) struct StudentRow {
    pub student_id: i64,
    pub enrollment_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub program_id: Option<i64>,
}

impl StudentRow {
    pub fn into_domain(self) -> Student {
        Student::with_id(
            self.student_id,
            EnrollmentNumber::new(&self.enrollment_number),
            self.first_name,
            self.last_name,
            self.email,
            self.program_id,
        )
    }
}

/// Diesel Queryable struct for course rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = courses)]
pub(crate) struct CourseRow {
    pub course_id: i64,
    pub code: String,
    pub title: String,
}

impl CourseRow {
    pub fn into_domain(self) -> Course {
        Course::with_id(self.course_id, CourseCode::new(&self.code), self.title)
    }
}

/// Diesel Queryable struct for grade rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = grades)]
pub(crate) struct GradeRow {
    pub grade_id: i64,
    pub value: f32,
    pub student_id: i64,
    pub course_id: i64,
}

impl GradeRow {
    /// Converts the row back into a domain `Grade`.
    ///
    /// The value is range-checked on the way out; the schema's CHECK
    /// constraint makes a violation a corrupt row, not a user error.
    pub fn into_domain(self) -> Result<Grade, PersistenceError> {
        let value: GradeValue = GradeValue::new(self.value).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "grade {} carries value {}",
                self.grade_id, self.value
            ))
        })?;
        Ok(Grade::with_id(
            self.grade_id,
            value,
            self.student_id,
            self.course_id,
        ))
    }
}

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = user_accounts)]
pub(crate) struct AccountRow {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub student_id: Option<i64>,
}

impl AccountRow {
    /// Converts the row back into a domain `UserAccount`.
    ///
    /// The stored role text must still be part of the closed role set.
    pub fn into_domain(self) -> Result<UserAccount, PersistenceError> {
        let role: Role = Role::parse(&self.role).map_err(|_| {
            PersistenceError::CorruptRow(format!(
                "account {} carries unknown role '{}'",
                self.user_id, self.role
            ))
        })?;
        Ok(UserAccount::with_id(
            self.user_id,
            self.email,
            self.password_hash,
            role,
            self.student_id,
        ))
    }
}
