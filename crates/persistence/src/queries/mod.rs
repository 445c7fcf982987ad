// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries, one module per entity.
//!
//! Every function takes a `SqliteConnection` and returns domain records;
//! single-row lookups answer `Ok(None)` when the row is absent instead of
//! surfacing Diesel's `NotFound`.

pub mod accounts;
pub mod courses;
pub mod grades;
pub mod programs;
pub mod students;
