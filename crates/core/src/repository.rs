// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use registrar_domain::{Course, CourseCode, EnrollmentNumber, Grade, Program, Student, UserAccount};

/// Conditions a student lookup can filter on.
///
/// Each variant corresponds to one predicate the use cases need; the
/// storage adapter translates it to its own query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentFilter {
    /// Students carrying this enrollment number (at most one).
    EnrollmentNumber(EnrollmentNumber),
    /// Students carrying this email address (at most one).
    Email(String),
    /// Students enrolled in this program.
    ProgramId(i64),
}

/// Conditions a program lookup can filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramFilter {
    /// Programs carrying this name (at most one).
    Name(String),
    /// Programs that teach this course.
    CourseId(i64),
}

/// Conditions a course lookup can filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    /// Courses carrying this code (at most one).
    Code(CourseCode),
    /// Courses taught in this program.
    ProgramId(i64),
}

/// Conditions a grade lookup can filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradeFilter {
    /// Grades belonging to this student.
    StudentId(i64),
    /// Grades obtained in this course.
    CourseId(i64),
    /// The single grade for this (student, course) pair, if any.
    StudentAndCourse {
        /// The student identifier.
        student_id: i64,
        /// The course identifier.
        course_id: i64,
    },
}

/// Conditions an account lookup can filter on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountFilter {
    /// Accounts carrying this email address (at most one).
    Email(String),
    /// Accounts linked to this student record.
    StudentId(i64),
}

/// Storage port for student records.
pub trait StudentRepository {
    /// Finds a student by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, student_id: i64) -> Result<Option<Student>, RepositoryError>;

    /// Finds all students matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by(&mut self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError>;

    /// Returns every student in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_all(&mut self) -> Result<Vec<Student>, RepositoryError>;

    /// Stores a new student and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, student: &Student) -> Result<Student, RepositoryError>;

    /// Replaces a stored student's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the backend fails.
    fn update(&mut self, student: &Student) -> Result<(), RepositoryError>;

    /// Deletes a student. The student's grades go with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the student does not exist or the backend fails.
    fn delete(&mut self, student_id: i64) -> Result<(), RepositoryError>;

    /// Sets the program reference of every listed student in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn assign_program(
        &mut self,
        program_id: i64,
        student_ids: &[i64],
    ) -> Result<(), RepositoryError>;
}

/// Storage port for program records.
pub trait ProgramRepository {
    /// Finds a program by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, program_id: i64) -> Result<Option<Program>, RepositoryError>;

    /// Finds all programs matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by(&mut self, filter: &ProgramFilter) -> Result<Vec<Program>, RepositoryError>;

    /// Returns every program in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_all(&mut self) -> Result<Vec<Program>, RepositoryError>;

    /// Stores a new program and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, program: &Program) -> Result<Program, RepositoryError>;

    /// Replaces a stored program's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the program does not exist or the backend fails.
    fn update(&mut self, program: &Program) -> Result<(), RepositoryError>;

    /// Deletes a program. Enrolled students fall back to no program.
    ///
    /// # Errors
    ///
    /// Returns an error if the program does not exist or the backend fails.
    fn delete(&mut self, program_id: i64) -> Result<(), RepositoryError>;

    /// Records that the program teaches every listed course, in one call.
    ///
    /// The relationship is stored as (program, course) pairs; both per-side
    /// views derive from the same pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn attach_courses(
        &mut self,
        program_id: i64,
        course_ids: &[i64],
    ) -> Result<(), RepositoryError>;
}

/// Storage port for course records.
pub trait CourseRepository {
    /// Finds a course by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, course_id: i64) -> Result<Option<Course>, RepositoryError>;

    /// Finds all courses matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by(&mut self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError>;

    /// Returns every course in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_all(&mut self) -> Result<Vec<Course>, RepositoryError>;

    /// Stores a new course and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, course: &Course) -> Result<Course, RepositoryError>;

    /// Replaces a stored course's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the course does not exist or the backend fails.
    fn update(&mut self, course: &Course) -> Result<(), RepositoryError>;

    /// Deletes a course. Grades in the course go with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the course does not exist or the backend fails.
    fn delete(&mut self, course_id: i64) -> Result<(), RepositoryError>;
}

/// Storage port for grade records.
pub trait GradeRepository {
    /// Finds a grade by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, grade_id: i64) -> Result<Option<Grade>, RepositoryError>;

    /// Finds all grades matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by(&mut self, filter: &GradeFilter) -> Result<Vec<Grade>, RepositoryError>;

    /// Returns every grade in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_all(&mut self) -> Result<Vec<Grade>, RepositoryError>;

    /// Stores a new grade and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, grade: &Grade) -> Result<Grade, RepositoryError>;

    /// Replaces a stored grade's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the grade does not exist or the backend fails.
    fn update(&mut self, grade: &Grade) -> Result<(), RepositoryError>;

    /// Deletes a grade.
    ///
    /// # Errors
    ///
    /// Returns an error if the grade does not exist or the backend fails.
    fn delete(&mut self, grade_id: i64) -> Result<(), RepositoryError>;
}

/// Storage port for login accounts.
pub trait AccountRepository {
    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by_id(&mut self, user_id: i64) -> Result<Option<UserAccount>, RepositoryError>;

    /// Finds all accounts matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_by(&mut self, filter: &AccountFilter) -> Result<Vec<UserAccount>, RepositoryError>;

    /// Returns every account in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn find_all(&mut self) -> Result<Vec<UserAccount>, RepositoryError>;

    /// Stores a new account and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn create(&mut self, account: &UserAccount) -> Result<UserAccount, RepositoryError>;

    /// Replaces a stored account's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or the backend fails.
    fn update(&mut self, account: &UserAccount) -> Result<(), RepositoryError>;

    /// Deletes an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist or the backend fails.
    fn delete(&mut self, user_id: i64) -> Result<(), RepositoryError>;
}

/// The unit-of-work port handed to every use case.
///
/// A factory lends out one repository per entity and owns the commit
/// boundary. Use cases never touch a storage handle directly; everything
/// they read or write goes through these ports.
pub trait RepositoryFactory {
    /// The student repository.
    fn students(&mut self) -> &mut dyn StudentRepository;

    /// The program repository.
    fn programs(&mut self) -> &mut dyn ProgramRepository;

    /// The course repository.
    fn courses(&mut self) -> &mut dyn CourseRepository;

    /// The grade repository.
    fn grades(&mut self) -> &mut dyn GradeRepository;

    /// The account repository.
    fn accounts(&mut self) -> &mut dyn AccountRepository;

    /// Marks the end of the current unit of work.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to persist the written state.
    fn commit(&mut self) -> Result<(), RepositoryError>;
}
