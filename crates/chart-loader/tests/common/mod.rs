// File: crates/chart-loader/tests/common/mod.rs
// Purpose: Shared helpers for loader integration tests.

pub mod json_server;
