use super::Dialect;
use super::articles::collect_articles;
use super::patterns::PatternRegistry;
use super::split::split_markers;
use super::types::{ChapterNode, SectionNode};

/// Three-level layout: `SECTION 1. Title` (any case) → `Chapter 2. Title` →
/// `Article 3. Title`. Article bodies are stored without footnote markers.
pub fn parse_sections(registry: &PatternRegistry, text: &str) -> Vec<SectionNode> {
    let patterns = &registry.sections;
    let footnotes = registry.footnotes(Dialect::Sections.footnote_convention());

    split_markers(&patterns.section, text)
        .into_iter()
        .map(|section| SectionNode {
            section_number: section.number.to_string(),
            section_title: section.title.to_string(),
            chapters: split_markers(&patterns.chapter, section.body)
                .into_iter()
                .map(|chapter| ChapterNode {
                    chapter_number: chapter.number.to_string(),
                    chapter_title: chapter.title.to_string(),
                    articles: collect_articles(&patterns.article, footnotes, chapter.body, true),
                })
                .collect(),
        })
        .collect()
}
