// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RepositoryError;
use crate::repository::{
    AccountFilter, AccountRepository, CourseFilter, CourseRepository, GradeFilter,
    GradeRepository, ProgramFilter, ProgramRepository, RepositoryFactory, StudentFilter,
    StudentRepository,
};
use registrar_domain::{Course, Grade, Program, Student, UserAccount};

/// In-memory implementation of every repository port.
///
/// Backs the engine and API tests. Identifiers are assigned from a single
/// counter, so no two entities ever share one. Deletions cascade the same
/// way the SQLite schema does: removing a student or course removes its
/// grades, removing a program detaches its students and courses.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    students: Vec<Student>,
    programs: Vec<Program>,
    courses: Vec<Course>,
    grades: Vec<Grade>,
    accounts: Vec<UserAccount>,
    /// (program_id, course_id) relationship pairs.
    program_courses: Vec<(i64, i64)>,
    next_id: i64,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl StudentRepository for MemoryRegistry {
    fn find_by_id(&mut self, student_id: i64) -> Result<Option<Student>, RepositoryError> {
        Ok(self
            .students
            .iter()
            .find(|student| student.student_id == Some(student_id))
            .cloned())
    }

    fn find_by(&mut self, filter: &StudentFilter) -> Result<Vec<Student>, RepositoryError> {
        let matches: Vec<Student> = self
            .students
            .iter()
            .filter(|student| match filter {
                StudentFilter::EnrollmentNumber(number) => student.enrollment_number == *number,
                StudentFilter::Email(email) => student.email == *email,
                StudentFilter::ProgramId(program_id) => student.program_id == Some(*program_id),
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn find_all(&mut self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.students.clone())
    }

    fn create(&mut self, student: &Student) -> Result<Student, RepositoryError> {
        let mut stored: Student = student.clone();
        stored.student_id = Some(self.next_id());
        self.students.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, student: &Student) -> Result<(), RepositoryError> {
        let Some(student_id) = student.student_id else {
            return Err(RepositoryError::NotFound {
                entity: "student",
                id: 0,
            });
        };
        let Some(index) = self
            .students
            .iter()
            .position(|s| s.student_id == Some(student_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "student",
                id: student_id,
            });
        };
        self.students[index] = student.clone();
        Ok(())
    }

    fn delete(&mut self, student_id: i64) -> Result<(), RepositoryError> {
        let Some(index) = self
            .students
            .iter()
            .position(|s| s.student_id == Some(student_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "student",
                id: student_id,
            });
        };
        self.students.remove(index);
        self.grades.retain(|grade| grade.student_id != student_id);
        for account in &mut self.accounts {
            if account.student_id == Some(student_id) {
                account.student_id = None;
            }
        }
        Ok(())
    }

    fn assign_program(
        &mut self,
        program_id: i64,
        student_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        for student_id in student_ids {
            let Some(student) = self
                .students
                .iter_mut()
                .find(|s| s.student_id == Some(*student_id))
            else {
                return Err(RepositoryError::NotFound {
                    entity: "student",
                    id: *student_id,
                });
            };
            student.program_id = Some(program_id);
        }
        Ok(())
    }
}

impl ProgramRepository for MemoryRegistry {
    fn find_by_id(&mut self, program_id: i64) -> Result<Option<Program>, RepositoryError> {
        Ok(self
            .programs
            .iter()
            .find(|program| program.program_id == Some(program_id))
            .cloned())
    }

    fn find_by(&mut self, filter: &ProgramFilter) -> Result<Vec<Program>, RepositoryError> {
        let matches: Vec<Program> = match filter {
            ProgramFilter::Name(name) => self
                .programs
                .iter()
                .filter(|program| program.name == *name)
                .cloned()
                .collect(),
            ProgramFilter::CourseId(course_id) => {
                let program_ids: Vec<i64> = self
                    .program_courses
                    .iter()
                    .filter(|(_, cid)| cid == course_id)
                    .map(|(pid, _)| *pid)
                    .collect();
                self.programs
                    .iter()
                    .filter(|program| {
                        program
                            .program_id
                            .is_some_and(|pid| program_ids.contains(&pid))
                    })
                    .cloned()
                    .collect()
            }
        };
        Ok(matches)
    }

    fn find_all(&mut self) -> Result<Vec<Program>, RepositoryError> {
        Ok(self.programs.clone())
    }

    fn create(&mut self, program: &Program) -> Result<Program, RepositoryError> {
        let mut stored: Program = program.clone();
        stored.program_id = Some(self.next_id());
        self.programs.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, program: &Program) -> Result<(), RepositoryError> {
        let Some(program_id) = program.program_id else {
            return Err(RepositoryError::NotFound {
                entity: "program",
                id: 0,
            });
        };
        let Some(index) = self
            .programs
            .iter()
            .position(|p| p.program_id == Some(program_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "program",
                id: program_id,
            });
        };
        self.programs[index] = program.clone();
        Ok(())
    }

    fn delete(&mut self, program_id: i64) -> Result<(), RepositoryError> {
        let Some(index) = self
            .programs
            .iter()
            .position(|p| p.program_id == Some(program_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "program",
                id: program_id,
            });
        };
        self.programs.remove(index);
        self.program_courses.retain(|(pid, _)| *pid != program_id);
        for student in &mut self.students {
            if student.program_id == Some(program_id) {
                student.program_id = None;
            }
        }
        Ok(())
    }

    fn attach_courses(
        &mut self,
        program_id: i64,
        course_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        for course_id in course_ids {
            self.program_courses.push((program_id, *course_id));
        }
        Ok(())
    }
}

impl CourseRepository for MemoryRegistry {
    fn find_by_id(&mut self, course_id: i64) -> Result<Option<Course>, RepositoryError> {
        Ok(self
            .courses
            .iter()
            .find(|course| course.course_id == Some(course_id))
            .cloned())
    }

    fn find_by(&mut self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError> {
        let matches: Vec<Course> = match filter {
            CourseFilter::Code(code) => self
                .courses
                .iter()
                .filter(|course| course.code == *code)
                .cloned()
                .collect(),
            CourseFilter::ProgramId(program_id) => {
                let course_ids: Vec<i64> = self
                    .program_courses
                    .iter()
                    .filter(|(pid, _)| pid == program_id)
                    .map(|(_, cid)| *cid)
                    .collect();
                self.courses
                    .iter()
                    .filter(|course| {
                        course.course_id.is_some_and(|cid| course_ids.contains(&cid))
                    })
                    .cloned()
                    .collect()
            }
        };
        Ok(matches)
    }

    fn find_all(&mut self) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.courses.clone())
    }

    fn create(&mut self, course: &Course) -> Result<Course, RepositoryError> {
        let mut stored: Course = course.clone();
        stored.course_id = Some(self.next_id());
        self.courses.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, course: &Course) -> Result<(), RepositoryError> {
        let Some(course_id) = course.course_id else {
            return Err(RepositoryError::NotFound {
                entity: "course",
                id: 0,
            });
        };
        let Some(index) = self
            .courses
            .iter()
            .position(|c| c.course_id == Some(course_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "course",
                id: course_id,
            });
        };
        self.courses[index] = course.clone();
        Ok(())
    }

    fn delete(&mut self, course_id: i64) -> Result<(), RepositoryError> {
        let Some(index) = self
            .courses
            .iter()
            .position(|c| c.course_id == Some(course_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "course",
                id: course_id,
            });
        };
        self.courses.remove(index);
        self.program_courses.retain(|(_, cid)| *cid != course_id);
        self.grades.retain(|grade| grade.course_id != course_id);
        Ok(())
    }
}

impl GradeRepository for MemoryRegistry {
    fn find_by_id(&mut self, grade_id: i64) -> Result<Option<Grade>, RepositoryError> {
        Ok(self
            .grades
            .iter()
            .find(|grade| grade.grade_id == Some(grade_id))
            .cloned())
    }

    fn find_by(&mut self, filter: &GradeFilter) -> Result<Vec<Grade>, RepositoryError> {
        let matches: Vec<Grade> = self
            .grades
            .iter()
            .filter(|grade| match filter {
                GradeFilter::StudentId(student_id) => grade.student_id == *student_id,
                GradeFilter::CourseId(course_id) => grade.course_id == *course_id,
                GradeFilter::StudentAndCourse {
                    student_id,
                    course_id,
                } => grade.student_id == *student_id && grade.course_id == *course_id,
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn find_all(&mut self) -> Result<Vec<Grade>, RepositoryError> {
        Ok(self.grades.clone())
    }

    fn create(&mut self, grade: &Grade) -> Result<Grade, RepositoryError> {
        let mut stored: Grade = grade.clone();
        stored.grade_id = Some(self.next_id());
        self.grades.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, grade: &Grade) -> Result<(), RepositoryError> {
        let Some(grade_id) = grade.grade_id else {
            return Err(RepositoryError::NotFound {
                entity: "grade",
                id: 0,
            });
        };
        let Some(index) = self
            .grades
            .iter()
            .position(|g| g.grade_id == Some(grade_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "grade",
                id: grade_id,
            });
        };
        self.grades[index] = grade.clone();
        Ok(())
    }

    fn delete(&mut self, grade_id: i64) -> Result<(), RepositoryError> {
        let Some(index) = self
            .grades
            .iter()
            .position(|g| g.grade_id == Some(grade_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "grade",
                id: grade_id,
            });
        };
        self.grades.remove(index);
        Ok(())
    }
}

impl AccountRepository for MemoryRegistry {
    fn find_by_id(&mut self, user_id: i64) -> Result<Option<UserAccount>, RepositoryError> {
        Ok(self
            .accounts
            .iter()
            .find(|account| account.user_id == Some(user_id))
            .cloned())
    }

    fn find_by(&mut self, filter: &AccountFilter) -> Result<Vec<UserAccount>, RepositoryError> {
        let matches: Vec<UserAccount> = self
            .accounts
            .iter()
            .filter(|account| match filter {
                AccountFilter::Email(email) => account.email == *email,
                AccountFilter::StudentId(student_id) => {
                    account.student_id == Some(*student_id)
                }
            })
            .cloned()
            .collect();
        Ok(matches)
    }

    fn find_all(&mut self) -> Result<Vec<UserAccount>, RepositoryError> {
        Ok(self.accounts.clone())
    }

    fn create(&mut self, account: &UserAccount) -> Result<UserAccount, RepositoryError> {
        let mut stored: UserAccount = account.clone();
        stored.user_id = Some(self.next_id());
        self.accounts.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, account: &UserAccount) -> Result<(), RepositoryError> {
        let Some(user_id) = account.user_id else {
            return Err(RepositoryError::NotFound {
                entity: "account",
                id: 0,
            });
        };
        let Some(index) = self
            .accounts
            .iter()
            .position(|a| a.user_id == Some(user_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "account",
                id: user_id,
            });
        };
        self.accounts[index] = account.clone();
        Ok(())
    }

    fn delete(&mut self, user_id: i64) -> Result<(), RepositoryError> {
        let Some(index) = self
            .accounts
            .iter()
            .position(|a| a.user_id == Some(user_id))
        else {
            return Err(RepositoryError::NotFound {
                entity: "account",
                id: user_id,
            });
        };
        self.accounts.remove(index);
        Ok(())
    }
}

impl RepositoryFactory for MemoryRegistry {
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
        Ok(())
    }
}
