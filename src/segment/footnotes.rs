use regex::Regex;

use crate::error::Result;

/// Footnote marker conventions found in source documents.
///
/// Every dialect currently selects `Bracketed`; `Labeled` lines such as
/// `Footnote. see annex` stay in the body text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FootnoteConvention {
    /// Inline `[12]` references.
    Bracketed,
    /// Whole lines starting with `Footnote.` (case-insensitive).
    Labeled,
}

impl FootnoteConvention {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bracketed => "footnote.bracketed",
            Self::Labeled => "footnote.labeled",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Bracketed => r"\[\d+\]",
            Self::Labeled => r"(?mi)^Footnote\.\s+(.+)$",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FootnoteExtractor {
    convention: FootnoteConvention,
    regex: Regex,
}

impl FootnoteExtractor {
    pub fn new(convention: FootnoteConvention) -> Result<Self> {
        Ok(Self {
            convention,
            regex: Regex::new(convention.pattern())?,
        })
    }

    pub fn convention(&self) -> FootnoteConvention {
        self.convention
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Every marker in `body`, left to right, duplicates kept.
    pub fn extract(&self, body: &str) -> Vec<String> {
        self.regex
            .find_iter(body)
            .map(|found| found.as_str().to_string())
            .collect()
    }

    /// `body` with every marker removed and the ends trimmed.
    pub fn strip(&self, body: &str) -> String {
        self.regex.replace_all(body, "").trim().to_string()
    }
}
