// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::grade_sheet_csv::{decode_grade_sheet, encode_grade_sheet};
use registrar::GradeSheetRow;

fn sample_row(enrollment_number: &str, grade: &str) -> GradeSheetRow {
    GradeSheetRow {
        enrollment_number: String::from(enrollment_number),
        last_name: String::from("Dupont"),
        first_name: String::from("Jean"),
        course_code: String::from("UE101"),
        course_title: String::from("Cours UE101"),
        grade: String::from(grade),
    }
}

#[test]
fn encode_writes_the_expected_shape() {
    let text: String =
        encode_grade_sheet(&[sample_row("ET1", "15.5"), sample_row("ET2", "")]).unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("enrollment_number;last_name;first_name;course_code;course_title;grade")
    );
    assert_eq!(lines.next(), Some("ET1;Dupont;Jean;UE101;Cours UE101;15.5"));
    assert_eq!(lines.next(), Some("ET2;Dupont;Jean;UE101;Cours UE101;"));
    assert_eq!(lines.next(), None);
}

#[test]
fn decode_round_trips_the_encoded_sheet() {
    let rows = vec![sample_row("ET1", "15.5"), sample_row("ET2", "")];
    let text: String = encode_grade_sheet(&rows).unwrap();

    let decoded: Vec<GradeSheetRow> = decode_grade_sheet(&text).unwrap();
    assert_eq!(decoded, rows);
}

#[test]
fn decode_tolerates_reordered_columns() {
    let text = "grade;first_name;enrollment_number;course_title;last_name;course_code\n\
                12;Jean;ET1;Cours UE101;Dupont;UE101\n";

    let rows: Vec<GradeSheetRow> = decode_grade_sheet(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].enrollment_number, "ET1");
    assert_eq!(rows[0].course_code, "UE101");
    assert_eq!(rows[0].grade, "12");
}

#[test]
fn decode_normalizes_header_case_and_spacing() {
    let text = " Enrollment Number ;LAST_NAME;first_name;Course Code;course_title;Grade\n\
                ET1;Dupont;Jean;UE101;Cours UE101;9.5\n";

    let rows: Vec<GradeSheetRow> = decode_grade_sheet(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].grade, "9.5");
}

#[test]
fn decode_rejects_missing_headers_by_name() {
    let text = "enrollment_number;last_name;first_name;course_code\nET1;Dupont;Jean;UE101\n";

    let err: ApiError = decode_grade_sheet(text).unwrap_err();
    match err {
        ApiError::InvalidInput { field, message } => {
            assert_eq!(field, "grade_sheet");
            assert!(message.contains("course_title"));
            assert!(message.contains("grade"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn decode_keeps_the_grade_as_raw_text() {
    let text = "enrollment_number;last_name;first_name;course_code;course_title;grade\n\
                ET1;Dupont;Jean;UE101;Cours UE101;vingt\n";

    let rows: Vec<GradeSheetRow> = decode_grade_sheet(text).unwrap();
    assert_eq!(rows[0].grade, "vingt");
}
