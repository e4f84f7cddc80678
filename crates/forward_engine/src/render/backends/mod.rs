//! Backend implementations for the render module
//!
//! The real GPU command-buffer library is an external collaborator; the
//! in-tree backend records the command stream for tests, headless runs,
//! and tooling.

pub mod recording;
