//! File system abstraction
//!
//! The driver reads one file and writes one file. Going through a trait
//! keeps the pipeline testable against in-memory text instead of fixtures
//! on disk.

mod r#trait;

pub use r#trait::{FileSystem, MockFileSystem, RealFileSystem};
