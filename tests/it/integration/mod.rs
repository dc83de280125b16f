//! Integration tests for PhotoCraft.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod carousel_flow_tests;
mod page_flow_tests;
