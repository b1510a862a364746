//! Error types for the segmentation library.
//!
//! Commands wrap these in `anyhow` with extra context; library callers can
//! match on the variants directly.

use std::path::PathBuf;

use thiserror::Error;

use crate::segment::Dialect;

#[derive(Debug, Error)]
pub enum DocTreeError {
    /// Dialect selector outside the supported set.
    #[error("unsupported dialect '{0}': expected one of a, b, c (or 1, 2, 3)")]
    UnsupportedDialect(String),

    /// No marker of the selected dialect matched anywhere in the text.
    #[error("no {dialect} markers found in document")]
    EmptyDocument { dialect: Dialect },

    /// A registry pattern failed to compile.
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A registry pattern compiled but lacks the groups its matcher reads.
    #[error("pattern {name} has {found} capture groups, needs {expected}")]
    PatternGroups {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("source document not found: {}", .0.display())]
    MissingSource(PathBuf),

    /// External extraction tool could not run or returned non-zero.
    #[error("{tool} failed for {}: {detail}", .path.display())]
    ExtractionTool {
        tool: String,
        path: PathBuf,
        detail: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocTreeError>;
