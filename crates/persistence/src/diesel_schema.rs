// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    programs (program_id) {
        program_id -> BigInt,
        name -> Text,
        formation_year -> Integer,
    }
}

diesel::table! {
    students (student_id) {
        student_id -> BigInt,
        enrollment_number -> Text,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        program_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    courses (course_id) {
        course_id -> BigInt,
        code -> Text,
        title -> Text,
    }
}

diesel::table! {
    program_courses (id) {
        id -> BigInt,
        program_id -> BigInt,
        course_id -> BigInt,
    }
}

diesel::table! {
    grades (grade_id) {
        grade_id -> BigInt,
        value -> Float,
        student_id -> BigInt,
        course_id -> BigInt,
    }
}

diesel::table! {
    user_accounts (user_id) {
        user_id -> BigInt,
        email -> Text,
        password_hash -> Text,
        role -> Text,
        student_id -> Nullable<BigInt>,
    }
}

diesel::joinable!(students -> programs (program_id));
diesel::joinable!(program_courses -> programs (program_id));
diesel::joinable!(program_courses -> courses (course_id));
diesel::joinable!(grades -> students (student_id));
diesel::joinable!(grades -> courses (course_id));
diesel::joinable!(user_accounts -> students (student_id));

diesel::allow_tables_to_appear_in_same_query!(
    programs,
    students,
    courses,
    program_courses,
    grades,
    user_accounts,
);
