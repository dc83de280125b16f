//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary (matklad's layout),
//! reducing linking overhead.
//!
//! Structure:
//! - integration: Multi-component workflow tests (contact submission, carousels, page flow)
//! - unit: Single-component unit tests

mod helpers;
mod integration;
