// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation handlers.
//!
//! Every handler follows the same shape: authorize the actor first, then
//! run the use case against the repository factory, then translate the
//! outcome into the API contract. No repository is touched before the
//! authorization check passes.

use num_traits::cast::ToPrimitive;
use registrar::{GradeSheetOutcome, GradeSheetRow, RepositoryFactory, StudentProfile};
use registrar_domain::{
    Course, CourseCode, EnrollmentNumber, FormationYear, Grade, Program, Role, Student,
    UserAccount,
};
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::grade_sheet_csv::{decode_grade_sheet, encode_grade_sheet};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AccountResponse, AttachCoursesRequest, AttachCoursesResponse, CourseInfo, CreateAccountRequest,
    CreateCourseRequest, CreateProgramRequest, CreateStudentRequest, DeleteStudentResponse,
    EnrollStudentsRequest, EnrollStudentsResponse, GradeInfo, ImportGradeSheetResponse,
    ListCoursesResponse, ListProgramsResponse, ListStudentsResponse, ProgramInfo,
    RecordGradeRequest, StudentInfo, StudentProfileResponse, UpdateStudentRequest,
};

/// Creates a student record.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or a business rule
/// is violated.
pub fn create_student(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    request: &CreateStudentRequest,
) -> Result<StudentInfo, ApiError> {
    AuthorizationService::authorize_manage_students(actor)?;

    let student: Student = Student::new(
        EnrollmentNumber::new(&request.enrollment_number),
        request.first_name.clone(),
        request.last_name.clone(),
        request.email.clone(),
    );
    let stored: Student =
        registrar::create_student(factory, student).map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' created student '{}'",
        actor.email,
        stored.enrollment_number.value()
    );
    Ok(StudentInfo::from_student(&stored))
}

/// Fetches one student record.
///
/// Staff may fetch any record; a student only their own.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or the student does
/// not exist.
pub fn get_student(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    student_id: i64,
) -> Result<StudentInfo, ApiError> {
    AuthorizationService::authorize_view_student(actor, student_id)?;

    let student: Student =
        registrar::get_student(factory, student_id).map_err(|e| translate_core_error(&e))?;
    Ok(StudentInfo::from_student(&student))
}

/// Fetches one student together with their program and grades.
///
/// Scoped like [`get_student`].
///
/// # Errors
///
/// Returns an error if the actor is not authorized or the student does
/// not exist.
pub fn get_student_profile(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    student_id: i64,
) -> Result<StudentProfileResponse, ApiError> {
    AuthorizationService::authorize_view_student(actor, student_id)?;

    let profile: StudentProfile = registrar::get_student_profile(factory, student_id)
        .map_err(|e| translate_core_error(&e))?;
    Ok(StudentProfileResponse {
        student: StudentInfo::from_student(&profile.student),
        program: profile.program.as_ref().map(ProgramInfo::from_program),
        grades: profile.grades.iter().map(GradeInfo::from_grade).collect(),
    })
}

/// Lists every student record.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn list_students(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
) -> Result<ListStudentsResponse, ApiError> {
    AuthorizationService::authorize_manage_students(actor)?;

    let students: Vec<Student> =
        registrar::list_students(factory).map_err(|e| translate_core_error(&e))?;
    Ok(ListStudentsResponse {
        students: students.iter().map(StudentInfo::from_student).collect(),
    })
}

/// Replaces the mutable fields of a student record.
///
/// The program link is not touched here; enrollment has its own
/// operation.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the student does
/// not exist, or a business rule is violated.
pub fn update_student(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    student_id: i64,
    request: &UpdateStudentRequest,
) -> Result<StudentInfo, ApiError> {
    AuthorizationService::authorize_manage_students(actor)?;

    let current: Student =
        registrar::get_student(factory, student_id).map_err(|e| translate_core_error(&e))?;
    let revised: Student = Student::with_id(
        student_id,
        EnrollmentNumber::new(&request.enrollment_number),
        request.first_name.clone(),
        request.last_name.clone(),
        request.email.clone(),
        current.program_id,
    );
    let stored: Student =
        registrar::update_student(factory, revised).map_err(|e| translate_core_error(&e))?;

    info!("'{}' updated student {}", actor.email, student_id);
    Ok(StudentInfo::from_student(&stored))
}

/// Deletes a student record.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or the student does
/// not exist.
pub fn delete_student(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    student_id: i64,
) -> Result<DeleteStudentResponse, ApiError> {
    AuthorizationService::authorize_manage_students(actor)?;

    registrar::delete_student(factory, student_id).map_err(|e| translate_core_error(&e))?;

    info!("'{}' deleted student {}", actor.email, student_id);
    Ok(DeleteStudentResponse {
        student_id,
        message: format!("Student {student_id} deleted"),
    })
}

/// Creates a program.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or a business rule
/// is violated.
pub fn create_program(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    request: &CreateProgramRequest,
) -> Result<ProgramInfo, ApiError> {
    AuthorizationService::authorize_manage_programs(actor)?;

    let formation_year: FormationYear =
        FormationYear::new(request.formation_year).map_err(|e| translate_domain_error(&e))?;
    let program: Program = Program::new(request.name.clone(), formation_year);
    let stored: Program =
        registrar::create_program(factory, program).map_err(|e| translate_core_error(&e))?;

    info!("'{}' created program '{}'", actor.email, stored.name);
    Ok(ProgramInfo::from_program(&stored))
}

/// Lists every program.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn list_programs(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
) -> Result<ListProgramsResponse, ApiError> {
    AuthorizationService::authorize_manage_programs(actor)?;

    let programs: Vec<Program> =
        registrar::list_programs(factory).map_err(|e| translate_core_error(&e))?;
    Ok(ListProgramsResponse {
        programs: programs.iter().map(ProgramInfo::from_program).collect(),
    })
}

/// Creates a course.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or a business rule
/// is violated.
pub fn create_course(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    request: &CreateCourseRequest,
) -> Result<CourseInfo, ApiError> {
    AuthorizationService::authorize_manage_courses(actor)?;

    let course: Course = Course::new(CourseCode::new(&request.code), request.title.clone());
    let stored: Course =
        registrar::create_course(factory, course).map_err(|e| translate_core_error(&e))?;

    info!("'{}' created course '{}'", actor.email, stored.code.value());
    Ok(CourseInfo::from_course(&stored))
}

/// Lists every course.
///
/// # Errors
///
/// Returns an error if the actor is not authorized.
pub fn list_courses(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
) -> Result<ListCoursesResponse, ApiError> {
    AuthorizationService::authorize_manage_courses(actor)?;

    let courses: Vec<Course> =
        registrar::list_courses(factory).map_err(|e| translate_core_error(&e))?;
    Ok(ListCoursesResponse {
        courses: courses.iter().map(CourseInfo::from_course).collect(),
    })
}

/// Enrolls one or more students in a program.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or any pair violates
/// a business rule; nothing is written in that case.
pub fn enroll_students(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    program_id: i64,
    request: &EnrollStudentsRequest,
) -> Result<EnrollStudentsResponse, ApiError> {
    AuthorizationService::authorize_enroll_students(actor)?;

    let program: Program = registrar::enroll_students(factory, program_id, &request.student_ids)
        .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' enrolled {} student(s) in program {}",
        actor.email,
        request.student_ids.len(),
        program_id
    );
    Ok(EnrollStudentsResponse {
        program: ProgramInfo::from_program(&program),
        enrolled: request.student_ids.len(),
        message: format!(
            "Enrolled {} student(s) in '{}'",
            request.student_ids.len(),
            program.name
        ),
    })
}

/// Attaches one or more courses to a program.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or any pair violates
/// a business rule; nothing is written in that case.
pub fn attach_courses(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    program_id: i64,
    request: &AttachCoursesRequest,
) -> Result<AttachCoursesResponse, ApiError> {
    AuthorizationService::authorize_attach_courses(actor)?;

    let program: Program =
        registrar::attach_courses_to_program(factory, program_id, &request.course_ids)
            .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' attached {} course(s) to program {}",
        actor.email,
        request.course_ids.len(),
        program_id
    );
    Ok(AttachCoursesResponse {
        program: ProgramInfo::from_program(&program),
        attached: request.course_ids.len(),
        message: format!(
            "Attached {} course(s) to '{}'",
            request.course_ids.len(),
            program.name
        ),
    })
}

/// Lists the courses a program teaches.
///
/// # Errors
///
/// Returns an error if the actor is not authorized or the program does
/// not exist.
pub fn list_program_courses(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    program_id: i64,
) -> Result<ListCoursesResponse, ApiError> {
    AuthorizationService::authorize_manage_programs(actor)?;

    let courses: Vec<Course> = registrar::list_program_courses(factory, program_id)
        .map_err(|e| translate_core_error(&e))?;
    Ok(ListCoursesResponse {
        courses: courses.iter().map(CourseInfo::from_course).collect(),
    })
}

/// Records a grade for a (student, course) pair.
///
/// # Errors
///
/// Returns an error if the actor is not authorized, the value is not
/// representable, or a business rule is violated.
pub fn record_grade(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    request: &RecordGradeRequest,
) -> Result<GradeInfo, ApiError> {
    AuthorizationService::authorize_record_grade(actor)?;

    let value: f32 = request.value.to_f32().ok_or_else(|| ApiError::InvalidInput {
        field: String::from("value"),
        message: format!("'{}' is not a representable grade value", request.value),
    })?;
    let grade: Grade = registrar::record_grade(factory, request.student_id, request.course_id, value)
        .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' recorded grade {} for student {} in course {}",
        actor.email, value, request.student_id, request.course_id
    );
    Ok(GradeInfo::from_grade(&grade))
}

/// Exports the grade sheet of a course as CSV text.
///
/// # Errors
///
/// Returns an error if the actor is not Scolarite or the course does
/// not exist.
pub fn export_grade_sheet(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    course_id: i64,
) -> Result<String, ApiError> {
    AuthorizationService::authorize_export_grade_sheet(actor)?;

    let rows: Vec<GradeSheetRow> = registrar::export_course_grades(factory, course_id)
        .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' exported grade sheet for course {} ({} row(s))",
        actor.email,
        course_id,
        rows.len()
    );
    encode_grade_sheet(&rows)
}

/// Imports a grade sheet for a course from CSV text.
///
/// The whole sheet is validated before anything is written; one bad row
/// rejects the file with every error reported at once.
///
/// # Errors
///
/// Returns an error if the actor is not Scolarite, the file shape is
/// wrong, or any row fails validation.
pub fn import_grade_sheet(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    course_id: i64,
    csv_text: &str,
) -> Result<ImportGradeSheetResponse, ApiError> {
    AuthorizationService::authorize_import_grade_sheet(actor)?;

    let rows: Vec<GradeSheetRow> = decode_grade_sheet(csv_text)?;
    let outcome: GradeSheetOutcome = registrar::import_course_grades(factory, course_id, &rows)
        .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' imported grade sheet for course {}: {} created, {} updated, {} skipped",
        actor.email, course_id, outcome.created, outcome.updated, outcome.skipped
    );
    Ok(ImportGradeSheetResponse {
        created: outcome.created,
        updated: outcome.updated,
        skipped: outcome.skipped,
        message: format!("Grade sheet committed: {} grade(s) saved", outcome.saved()),
    })
}

/// Creates a login account.
///
/// The password is checked against the policy and stored as a bcrypt
/// hash; the plain text never leaves this function.
///
/// # Errors
///
/// Returns an error if the actor is not Scolarite, the password fails
/// the policy, the role does not parse, or a business rule is violated.
pub fn create_account(
    factory: &mut dyn RepositoryFactory,
    actor: &AuthenticatedActor,
    request: &CreateAccountRequest,
) -> Result<AccountResponse, ApiError> {
    AuthorizationService::authorize_create_account(actor)?;

    let policy: PasswordPolicy = PasswordPolicy::default();
    policy.validate(
        &request.password,
        &request.password_confirmation,
        &request.email,
    )?;

    let role: Role = Role::parse(&request.role).map_err(|e| translate_domain_error(&e))?;
    let password_hash: String =
        bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|e| ApiError::Internal {
            message: format!("Failed to hash password: {e}"),
        })?;

    let stored: UserAccount = registrar::create_account(
        factory,
        &request.email,
        &password_hash,
        role,
        request.student_id,
    )
    .map_err(|e| translate_core_error(&e))?;

    info!(
        "'{}' created {} account for '{}'",
        actor.email,
        role.as_str(),
        stored.email
    );
    Ok(AccountResponse::from_account(
        &stored,
        format!("Account created for '{}'", stored.email),
    ))
}
