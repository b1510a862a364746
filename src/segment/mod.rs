//! Pattern-driven segmentation of extracted document text.
//!
//! A [`DocumentParser`] owns the compiled [`PatternRegistry`] and turns raw
//! text into a [`DocumentTree`] for one of three layout dialects:
//!
//! - [`Dialect::Articles`]: `Chapter IV Title` → `Article 12. Title`
//! - [`Dialect::Sections`]: `SECTION 1. Title` → `Chapter 2. Title` → `Article 3. Title`
//! - [`Dialect::Outline`]: `IV. Title` → `3. Title` → `3.1. Title`, line by line
//!
//! Parsing is best-effort: text that matches no heading is dropped and a
//! document without headings yields an empty tree rather than an error.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{DocTreeError, Result};

mod articles;
mod footnotes;
mod outline;
mod patterns;
mod sections;
mod split;
mod types;

pub use articles::parse_articles;
pub use footnotes::{FootnoteConvention, FootnoteExtractor};
pub use outline::parse_outline;
pub use patterns::{
    LineCapture, LineMatcher, MatchStrategy, PatternEntry, PatternRegistry, SplitMatcher,
};
pub use sections::parse_sections;
pub use split::{MarkerCapture, split_markers};
pub use types::{
    ArticleNode, ChapterNode, DocumentTree, NodeCounts, OutlineChapter, OutlineSection,
    OutlineSubsection, SectionNode,
};

/// Document layout dialect, chosen by the caller.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dialect {
    /// Chapters holding articles.
    Articles,
    /// Sections holding chapters holding articles.
    Sections,
    /// Chapters, sections and dotted subsections with free text.
    Outline,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Self::Articles, Self::Sections, Self::Outline];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Sections => "sections",
            Self::Outline => "outline",
        }
    }

    /// Footnote marker convention extracted from this dialect's bodies.
    pub fn footnote_convention(self) -> FootnoteConvention {
        match self {
            Self::Articles | Self::Sections | Self::Outline => FootnoteConvention::Bracketed,
        }
    }

    /// Short selector used on the command line.
    pub fn selector(self) -> &'static str {
        match self {
            Self::Articles => "a",
            Self::Sections => "b",
            Self::Outline => "c",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DocTreeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "a" | "1" | "articles" => Ok(Self::Articles),
            "b" | "2" | "sections" => Ok(Self::Sections),
            "c" | "3" | "outline" => Ok(Self::Outline),
            _ => Err(DocTreeError::UnsupportedDialect(value.to_string())),
        }
    }
}

impl DocumentTree {
    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Articles(_) => Dialect::Articles,
            Self::Sections(_) => Dialect::Sections,
            Self::Outline(_) => Dialect::Outline,
        }
    }

    /// Fails with [`DocTreeError::EmptyDocument`] when nothing was recognised.
    pub fn ensure_populated(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DocTreeError::EmptyDocument {
                dialect: self.dialect(),
            });
        }
        Ok(())
    }

    /// Reads back JSON produced from a tree of the given dialect.
    pub fn from_json(dialect: Dialect, json: &str) -> serde_json::Result<Self> {
        Ok(match dialect {
            Dialect::Articles => Self::Articles(serde_json::from_str(json)?),
            Dialect::Sections => Self::Sections(serde_json::from_str(json)?),
            Dialect::Outline => Self::Outline(serde_json::from_str(json)?),
        })
    }
}

/// Entry point for segmentation. Cheap to share: the registry is read-only.
#[derive(Debug, Clone)]
pub struct DocumentParser {
    registry: PatternRegistry,
}

impl DocumentParser {
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(PatternRegistry::new()?))
    }

    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    pub fn process(&self, text: &str, dialect: Dialect) -> DocumentTree {
        let tree = match dialect {
            Dialect::Articles => DocumentTree::Articles(parse_articles(&self.registry, text)),
            Dialect::Sections => DocumentTree::Sections(parse_sections(&self.registry, text)),
            Dialect::Outline => DocumentTree::Outline(parse_outline(&self.registry, text)),
        };

        let counts = tree.counts();
        debug!(
            dialect = %dialect,
            top_level = tree.top_level_len(),
            sections = counts.sections,
            chapters = counts.chapters,
            articles = counts.articles,
            subsections = counts.subsections,
            footnotes = counts.footnotes,
            "segmented document"
        );
        tree
    }

    /// Like [`process`](Self::process) but takes the selector as a string.
    pub fn process_selector(&self, text: &str, selector: &str) -> Result<DocumentTree> {
        let dialect = selector.parse::<Dialect>()?;
        Ok(self.process(text, dialect))
    }
}
