//! Common test utilities for che-projects
//!
//! Fakes for the prompt, tool lookup and clone seams so the creation flow
//! can be exercised without a terminal or network.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mocks;

pub use mocks::*;
