//! Turns plain text extracted from structured documents into nested
//! chapter/section/article trees.

pub mod error;
pub mod segment;
pub mod util;

pub use error::{DocTreeError, Result};
pub use segment::{Dialect, DocumentParser, DocumentTree};
