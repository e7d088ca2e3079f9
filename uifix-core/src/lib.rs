//! Text transformations behind the `uifix` maintenance CLI.
//!
//! Two independent repairs for the Orbit LMS web UI source tree:
//! - [`mojibake`]: fixes mis-decoded emoji sequences in a single source file.
//! - [`logo`]: swaps the hard-coded placeholder logo `<div>` for the real
//!   `<img>` tag across a tree of markup files.
//!
//! Both are deterministic, sequential, and operate on fully buffered file
//! contents; neither keeps state across runs.

pub mod error;
pub mod logo;
pub mod mojibake;

pub use error::{FixError, FixResult};
