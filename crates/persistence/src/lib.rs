// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel/SQLite persistence adapter for the registrar.
//!
//! [`SqlitePersistence`] owns a `SQLite` connection and implements every
//! repository port of the use-case engine, plus the factory that lends the
//! ports out. Writes are applied as they are issued (`SQLite` autocommit);
//! the engine's two-phase operations obtain their no-partial-write
//! guarantee by validating everything before the first write.
//!
//! In-memory databases are used for tests; each one receives a unique
//! shared-cache URI from an atomic counter so tests never collide. File
//! databases run in WAL mode. Foreign key enforcement is switched on per
//! connection and verified at startup.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use registrar::{
    AccountFilter, AccountRepository, CourseFilter, CourseRepository, GradeFilter,
    GradeRepository, ProgramFilter, ProgramRepository, RepositoryError, RepositoryFactory,
    StudentFilter, StudentRepository,
};
use registrar_domain::{Course, Grade, Program, Student, UserAccount};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use error::to_port_error;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter backing the registrar's repository ports.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }
}

impl StudentRepository for SqlitePersistence {
    fn find_by_id(&mut self, student_id: i64) -> Result<Option<Student>, RepositoryError> {
        queries::students::get_student_by_id(&mut self.conn, student_id)
            .map_err(to_port_error("student", student_id))
    }

    fn find_by(&mut self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError> {
        queries::students::find_students(&mut self.conn, filter)
            .map_err(to_port_error("student", 0))
    }

    fn find_all(&mut self) -> Result<Vec<Student>, RepositoryError> {
        queries::students::list_students(&mut self.conn).map_err(to_port_error("student", 0))
    }

    fn create(&mut self, student: &Student) -> Result<Student, RepositoryError> {
        let student_id: i64 = mutations::students::create_student(&mut self.conn, student)
            .map_err(to_port_error("student", 0))?;
        let mut stored: Student = student.clone();
        stored.student_id = Some(student_id);
        Ok(stored)
    }

    fn update(&mut self, student: &Student) -> Result<(), RepositoryError> {
        let student_id: i64 = student.student_id.ok_or(RepositoryError::NotFound {
            entity: "student",
            id: 0,
        })?;
        mutations::students::update_student(&mut self.conn, student_id, student)
            .map_err(to_port_error("student", student_id))
    }

    fn delete(&mut self, student_id: i64) -> Result<(), RepositoryError> {
        mutations::students::delete_student(&mut self.conn, student_id)
            .map_err(to_port_error("student", student_id))
    }

    fn assign_program(
        &mut self,
        program_id: i64,
        student_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        mutations::students::assign_program(&mut self.conn, program_id, student_ids)
            .map_err(to_port_error("program", program_id))
    }
}

impl ProgramRepository for SqlitePersistence {
    fn find_by_id(&mut self, program_id: i64) -> Result<Option<Program>, RepositoryError> {
        queries::programs::get_program_by_id(&mut self.conn, program_id)
            .map_err(to_port_error("program", program_id))
    }

    fn find_by(&mut self, filter: &ProgramFilter) -> Result<Vec<Program>, RepositoryError> {
        queries::programs::find_programs(&mut self.conn, filter)
            .map_err(to_port_error("program", 0))
    }

    fn find_all(&mut self) -> Result<Vec<Program>, RepositoryError> {
        queries::programs::list_programs(&mut self.conn).map_err(to_port_error("program", 0))
    }

    fn create(&mut self, program: &Program) -> Result<Program, RepositoryError> {
        let program_id: i64 = mutations::programs::create_program(&mut self.conn, program)
            .map_err(to_port_error("program", 0))?;
        let mut stored: Program = program.clone();
        stored.program_id = Some(program_id);
        Ok(stored)
    }

    fn update(&mut self, program: &Program) -> Result<(), RepositoryError> {
        let program_id: i64 = program.program_id.ok_or(RepositoryError::NotFound {
            entity: "program",
            id: 0,
        })?;
        mutations::programs::update_program(&mut self.conn, program_id, program)
            .map_err(to_port_error("program", program_id))
    }

    fn delete(&mut self, program_id: i64) -> Result<(), RepositoryError> {
        mutations::programs::delete_program(&mut self.conn, program_id)
            .map_err(to_port_error("program", program_id))
    }

    fn attach_courses(
        &mut self,
        program_id: i64,
        course_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        mutations::programs::attach_courses(&mut self.conn, program_id, course_ids)
            .map_err(to_port_error("program", program_id))
    }
}

impl CourseRepository for SqlitePersistence {
    fn find_by_id(&mut self, course_id: i64) -> Result<Option<Course>, RepositoryError> {
        queries::courses::get_course_by_id(&mut self.conn, course_id)
            .map_err(to_port_error("course", course_id))
    }

    fn find_by(&mut self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        queries::courses::find_courses(&mut self.conn, filter).map_err(to_port_error("course", 0))
    }

    fn find_all(&mut self) -> Result<Vec<Course>, RepositoryError> {
        queries::courses::list_courses(&mut self.conn).map_err(to_port_error("course", 0))
    }

    fn create(&mut self, course: &Course) -> Result<Course, RepositoryError> {
        let course_id: i64 = mutations::courses::create_course(&mut self.conn, course)
            .map_err(to_port_error("course", 0))?;
        let mut stored: Course = course.clone();
        stored.course_id = Some(course_id);
        Ok(stored)
    }

    fn update(&mut self, course: &Course) -> Result<(), RepositoryError> {
        let course_id: i64 = course.course_id.ok_or(RepositoryError::NotFound {
            entity: "course",
            id: 0,
        })?;
        mutations::courses::update_course(&mut self.conn, course_id, course)
            .map_err(to_port_error("course", course_id))
    }

    fn delete(&mut self, course_id: i64) -> Result<(), RepositoryError> {
        mutations::courses::delete_course(&mut self.conn, course_id)
            .map_err(to_port_error("course", course_id))
    }
}

impl GradeRepository for SqlitePersistence {
    fn find_by_id(&mut self, grade_id: i64) -> Result<Option<Grade>, RepositoryError> {
        queries::grades::get_grade_by_id(&mut self.conn, grade_id)
            .map_err(to_port_error("grade", grade_id))
    }

    fn find_by(&mut self, filter: &GradeFilter) -> Result<Vec<Grade>, RepositoryError> {
        queries::grades::find_grades(&mut self.conn, filter).map_err(to_port_error("grade", 0))
    }

    fn find_all(&mut self) -> Result<Vec<Grade>, RepositoryError> {
        queries::grades::list_grades(&mut self.conn).map_err(to_port_error("grade", 0))
    }

    fn create(&mut self, grade: &Grade) -> Result<Grade, RepositoryError> {
        let grade_id: i64 = mutations::grades::create_grade(&mut self.conn, grade)
            .map_err(to_port_error("grade", 0))?;
        let mut stored: Grade = grade.clone();
        stored.grade_id = Some(grade_id);
        Ok(stored)
    }

    fn update(&mut self, grade: &Grade) -> Result<(), RepositoryError> {
        let grade_id: i64 = grade.grade_id.ok_or(RepositoryError::NotFound {
            entity: "grade",
            id: 0,
        })?;
        mutations::grades::update_grade(&mut self.conn, grade_id, grade)
            .map_err(to_port_error("grade", grade_id))
    }

    fn delete(&mut self, grade_id: i64) -> Result<(), RepositoryError> {
        mutations::grades::delete_grade(&mut self.conn, grade_id)
            .map_err(to_port_error("grade", grade_id))
    }
}

impl AccountRepository for SqlitePersistence {
    fn find_by_id(&mut self, user_id: i64) -> Result<Option<UserAccount>, RepositoryError> {
        queries::accounts::get_account_by_id(&mut self.conn, user_id)
            .map_err(to_port_error("account", user_id))
    }

    fn find_by(&mut self, filter: &AccountFilter) -> Result<Vec<UserAccount>, RepositoryError> {
        queries::accounts::find_accounts(&mut self.conn, filter)
            .map_err(to_port_error("account", 0))
    }

    fn find_all(&mut self) -> Result<Vec<UserAccount>, RepositoryError> {
        queries::accounts::list_accounts(&mut self.conn).map_err(to_port_error("account", 0))
    }

    fn create(&mut self, account: &UserAccount) -> Result<UserAccount, RepositoryError> {
        let user_id: i64 = mutations::accounts::create_account(&mut self.conn, account)
            .map_err(to_port_error("account", 0))?;
        let mut stored: UserAccount = account.clone();
        stored.user_id = Some(user_id);
        Ok(stored)
    }

    fn update(&mut self, account: &UserAccount) -> Result<(), RepositoryError> {
        let user_id: i64 = account.user_id.ok_or(RepositoryError::NotFound {
            entity: "account",
            id: 0,
        })?;
        mutations::accounts::update_account(&mut self.conn, user_id, account)
            .map_err(to_port_error("account", user_id))
    }

    fn delete(&mut self, user_id: i64) -> Result<(), RepositoryError> {
        mutations::accounts::delete_account(&mut self.conn, user_id)
            .map_err(to_port_error("account", user_id))
    }
}

impl RepositoryFactory for SqlitePersistence {
    fn students(&mut self) -> &mut dyn StudentRepository {
        self
    }

    fn programs(&mut self) -> &mut dyn ProgramRepository {
        self
    }

    fn courses(&mut self) -> &mut dyn CourseRepository {
        self
    }

    fn grades(&mut self) -> &mut dyn GradeRepository {
        self
    }

    fn accounts(&mut self) -> &mut dyn AccountRepository {
        self
    }

    fn commit(&mut self) -> Result<(), RepositoryError> {
        // Writes are applied as they are issued (SQLite autocommit); the
        // commit call marks the unit-of-work boundary for the engine.
        debug!("Unit of work committed");
        Ok(())
    }
}
