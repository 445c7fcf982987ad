// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes, one module per entity.
//!
//! Inserts report the assigned identifier via `last_insert_rowid()`;
//! updates and deletes check the affected row count and answer `NotFound`
//! when the target row does not exist.

pub mod accounts;
pub mod courses;
pub mod grades;
pub mod programs;
pub mod students;
