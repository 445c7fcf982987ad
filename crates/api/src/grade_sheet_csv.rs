// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV codec for grade sheets.
//!
//! Sheets travel as semicolon-separated text with one row per enrolled
//! student. Decoding only checks the file shape; grade values stay raw
//! text so the engine can validate them row by row.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use registrar::GradeSheetRow;
use std::collections::HashMap;

use crate::error::ApiError;

/// The sheet delimiter.
const DELIMITER: u8 = b';';

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &[
    "enrollment_number",
    "last_name",
    "first_name",
    "course_code",
    "course_title",
    "grade",
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present and maps them to columns.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    let mut missing: Vec<String> = Vec::new();
    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            missing.push(String::from(*required));
        }
    }

    if !missing.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("grade_sheet"),
            message: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Decodes a grade sheet from CSV text.
///
/// Columns may arrive in any order; rows are yielded in file order with
/// every field kept as text.
///
/// # Arguments
///
/// * `text` - The CSV text, including the header line
///
/// # Errors
///
/// Returns an error if a required header is missing or a record cannot
/// be read.
pub fn decode_grade_sheet(text: &str) -> Result<Vec<GradeSheetRow>, ApiError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidInput {
            field: String::from("grade_sheet"),
            message: format!("Unreadable header line: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let field = |record: &StringRecord, name: &str| -> String {
        header_map
            .get(name)
            .and_then(|idx| record.get(*idx))
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    let mut rows: Vec<GradeSheetRow> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record: StringRecord = record.map_err(|e| ApiError::InvalidInput {
            field: String::from("grade_sheet"),
            message: format!("Unreadable record on line {}: {e}", line + 2),
        })?;
        rows.push(GradeSheetRow {
            enrollment_number: field(&record, "enrollment_number"),
            last_name: field(&record, "last_name"),
            first_name: field(&record, "first_name"),
            course_code: field(&record, "course_code"),
            course_title: field(&record, "course_title"),
            grade: field(&record, "grade"),
        });
    }

    Ok(rows)
}

/// Encodes a grade sheet as CSV text.
///
/// # Arguments
///
/// * `rows` - The sheet rows, already in roster order
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn encode_grade_sheet(rows: &[GradeSheetRow]) -> Result<String, ApiError> {
    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    let write_failure = |e: csv::Error| ApiError::Internal {
        message: format!("Failed to write grade sheet: {e}"),
    };

    writer.write_record(REQUIRED_HEADERS).map_err(write_failure)?;
    for row in rows {
        writer
            .write_record([
                row.enrollment_number.as_str(),
                row.last_name.as_str(),
                row.first_name.as_str(),
                row.course_code.as_str(),
                row.course_title.as_str(),
                row.grade.as_str(),
            ])
            .map_err(write_failure)?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to flush grade sheet: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("Grade sheet is not valid UTF-8: {e}"),
    })
}
