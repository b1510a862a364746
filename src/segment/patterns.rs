use regex::{Captures, Regex};

use crate::error::{DocTreeError, Result};

use super::Dialect;
use super::footnotes::{FootnoteConvention, FootnoteExtractor};

/// How a matcher is applied to the text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MatchStrategy {
    /// Run over a whole blob, partitioning it at every heading.
    Split,
    /// Run against one line at a time.
    Line,
    /// Find every occurrence inside a body.
    Scan,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Line => "line",
            Self::Scan => "scan",
        }
    }
}

/// Heading matcher applied to a whole blob.
///
/// Every pattern carries exactly two groups: the heading number and the
/// heading title.
#[derive(Debug, Clone)]
pub struct SplitMatcher {
    name: &'static str,
    regex: Regex,
}

impl SplitMatcher {
    fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        let found = group_count(&regex);
        if found != 2 {
            return Err(DocTreeError::PatternGroups {
                name,
                expected: 2,
                found,
            });
        }
        Ok(Self { name, regex })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// A heading found by a [`LineMatcher`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LineCapture<'t> {
    pub number: &'t str,
    pub title: &'t str,
}

impl LineCapture<'_> {
    /// Number of dot-separated components in the heading number.
    pub fn depth(&self) -> usize {
        self.number.split('.').count()
    }
}

/// Heading matcher tested against a single line.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    name: &'static str,
    regex: Regex,
    number_group: usize,
    title_group: usize,
}

impl LineMatcher {
    fn new(
        name: &'static str,
        pattern: &str,
        number_group: usize,
        title_group: usize,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        let expected = number_group.max(title_group);
        let found = group_count(&regex);
        if number_group == 0 || title_group == 0 || found < expected {
            return Err(DocTreeError::PatternGroups {
                name,
                expected,
                found,
            });
        }
        Ok(Self {
            name,
            regex,
            number_group,
            title_group,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn captures<'t>(&self, line: &'t str) -> Option<LineCapture<'t>> {
        let captures = self.regex.captures(line)?;
        let number = group_str(&captures, self.number_group)?;
        let title = group_str(&captures, self.title_group)?;
        Some(LineCapture {
            number,
            title: title.trim(),
        })
    }
}

/// Explicit capture groups, not counting the implicit whole-match group.
fn group_count(regex: &Regex) -> usize {
    regex.captures_len() - 1
}

fn group_str<'t>(captures: &Captures<'t>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|value| value.as_str())
}

/// Chapter and article headings of the two-level layout.
#[derive(Debug, Clone)]
pub struct ArticlePatterns {
    pub chapter: SplitMatcher,
    pub article: SplitMatcher,
}

/// Section, chapter and article headings of the three-level layout.
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    pub section: SplitMatcher,
    pub chapter: SplitMatcher,
    pub article: SplitMatcher,
}

/// Roman chapter lines and dotted numbered lines of the outline layout.
#[derive(Debug, Clone)]
pub struct OutlinePatterns {
    pub chapter: LineMatcher,
    pub numbered: LineMatcher,
}

/// One row of [`PatternRegistry::entries`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PatternEntry {
    pub name: &'static str,
    pub strategy: MatchStrategy,
    pub pattern: String,
}

/// Every compiled matcher, built once and shared read-only by the segmenters.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    pub articles: ArticlePatterns,
    pub sections: SectionPatterns,
    pub outline: OutlinePatterns,
    pub bracketed_footnotes: FootnoteExtractor,
    pub labeled_footnotes: FootnoteExtractor,
}

impl PatternRegistry {
    pub fn new() -> Result<Self> {
        Ok(Self {
            articles: ArticlePatterns {
                chapter: SplitMatcher::new(
                    "articles.chapter",
                    r"(?m)^Chapter\s+([IVXLC]+)\s+(.+)$",
                )?,
                article: SplitMatcher::new(
                    "articles.article",
                    r"(?m)^Article\s+(\d+)\.\s+(.+)$",
                )?,
            },
            sections: SectionPatterns {
                section: SplitMatcher::new(
                    "sections.section",
                    r"(?mi)^SECTION\s+(\d+)\.\s+(.+)$",
                )?,
                chapter: SplitMatcher::new(
                    "sections.chapter",
                    r"(?m)^Chapter\s+(\d+)\.\s+(.+)$",
                )?,
                article: SplitMatcher::new(
                    "sections.article",
                    r"(?m)^Article\s+(\d+)\.\s+(.+)$",
                )?,
            },
            outline: OutlinePatterns {
                chapter: LineMatcher::new("outline.chapter", r"^([IVXLC]+)\.\s+(.+)$", 1, 2)?,
                numbered: LineMatcher::new(
                    "outline.numbered",
                    r"^(\d+(\.\d+)*)\.\s+(.+)$",
                    1,
                    3,
                )?,
            },
            bracketed_footnotes: FootnoteExtractor::new(FootnoteConvention::Bracketed)?,
            labeled_footnotes: FootnoteExtractor::new(FootnoteConvention::Labeled)?,
        })
    }

    pub fn footnotes(&self, convention: FootnoteConvention) -> &FootnoteExtractor {
        match convention {
            FootnoteConvention::Bracketed => &self.bracketed_footnotes,
            FootnoteConvention::Labeled => &self.labeled_footnotes,
        }
    }

    pub fn entries(&self) -> Vec<PatternEntry> {
        let split = |matcher: &SplitMatcher| PatternEntry {
            name: matcher.name(),
            strategy: MatchStrategy::Split,
            pattern: matcher.regex().as_str().to_string(),
        };
        let line = |matcher: &LineMatcher| PatternEntry {
            name: matcher.name(),
            strategy: MatchStrategy::Line,
            pattern: matcher.regex().as_str().to_string(),
        };
        let scan = |extractor: &FootnoteExtractor| PatternEntry {
            name: extractor.convention().name(),
            strategy: MatchStrategy::Scan,
            pattern: extractor.regex().as_str().to_string(),
        };

        vec![
            split(&self.articles.chapter),
            split(&self.articles.article),
            split(&self.sections.section),
            split(&self.sections.chapter),
            split(&self.sections.article),
            line(&self.outline.chapter),
            line(&self.outline.numbered),
            scan(&self.bracketed_footnotes),
            scan(&self.labeled_footnotes),
        ]
    }

    /// Entries a segmenter for `dialect` consults, footnote convention included.
    pub fn entries_for(&self, dialect: Dialect) -> Vec<PatternEntry> {
        let heading_prefix = format!("{}.", dialect.as_str());
        let footnote_name = dialect.footnote_convention().name();
        self.entries()
            .into_iter()
            .filter(|entry| entry.name.starts_with(&heading_prefix) || entry.name == footnote_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_matcher_rejects_wrong_group_count() {
        let err = SplitMatcher::new("articles.article", r"(?m)^Article\s+(\d+)\.").unwrap_err();
        assert!(matches!(
            err,
            DocTreeError::PatternGroups {
                name: "articles.article",
                expected: 2,
                found: 1,
            }
        ));

        assert!(SplitMatcher::new("extra", r"^(a)(b)(c)$").is_err());
    }

    #[test]
    fn line_matcher_rejects_groups_beyond_the_pattern() {
        let err = LineMatcher::new("outline.numbered", r"^(\d+)\.\s+(.+)$", 1, 3).unwrap_err();
        assert!(matches!(
            err,
            DocTreeError::PatternGroups {
                expected: 3,
                found: 2,
                ..
            }
        ));

        assert!(LineMatcher::new("whole", r"^(.+)$", 0, 1).is_err());
    }

    fn names(entries: &[PatternEntry]) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.name).collect()
    }

    #[test]
    fn entries_for_keeps_only_the_dialect_patterns() {
        let registry = PatternRegistry::new().expect("patterns compile");

        assert_eq!(
            names(&registry.entries_for(Dialect::Sections)),
            vec![
                "sections.section",
                "sections.chapter",
                "sections.article",
                "footnote.bracketed",
            ]
        );
        assert_eq!(
            names(&registry.entries_for(Dialect::Outline)),
            vec!["outline.chapter", "outline.numbered", "footnote.bracketed"]
        );
    }

    #[test]
    fn registry_patterns_pass_group_checks() {
        let registry = PatternRegistry::new().expect("patterns compile");
        assert_eq!(registry.entries().len(), 9);
    }
}
