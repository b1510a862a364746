use serde::{Deserialize, Serialize};

/// Leaf of the chapter/article layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleNode {
    pub article_number: String,
    pub article_title: String,
    pub article_body: String,
    pub footnotes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterNode {
    pub chapter_number: String,
    pub chapter_title: String,
    pub articles: Vec<ArticleNode>,
}

/// Top level of the section/chapter/article layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    pub section_number: String,
    pub section_title: String,
    pub chapters: Vec<ChapterNode>,
}

/// Dotted heading (`2.1.`, `2.1.3.`) under an outline section.
///
/// Every depth below the section lands in the same flat list, so
/// `subsubsections` is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSubsection {
    pub subsection_number: String,
    pub subsection_title: String,
    #[serde(default)]
    pub subsubsections: Vec<OutlineSubsection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineSection {
    pub section_number: String,
    pub section_title: String,
    pub subsections: Vec<OutlineSubsection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineChapter {
    pub chapter_number: String,
    pub chapter_title: String,
    pub sections: Vec<OutlineSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Parsed document, one variant per dialect.
///
/// Serializes as the bare top-level array of the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DocumentTree {
    Articles(Vec<ChapterNode>),
    Sections(Vec<SectionNode>),
    Outline(Vec<OutlineChapter>),
}

/// Node totals of a [`DocumentTree`], by level name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeCounts {
    pub sections: usize,
    pub chapters: usize,
    pub articles: usize,
    pub subsections: usize,
    pub footnotes: usize,
}

impl DocumentTree {
    pub fn is_empty(&self) -> bool {
        self.top_level_len() == 0
    }

    pub fn top_level_len(&self) -> usize {
        match self {
            Self::Articles(chapters) => chapters.len(),
            Self::Sections(sections) => sections.len(),
            Self::Outline(chapters) => chapters.len(),
        }
    }

    pub fn counts(&self) -> NodeCounts {
        let mut counts = NodeCounts::default();
        match self {
            Self::Articles(chapters) => count_chapters(&mut counts, chapters),
            Self::Sections(sections) => {
                counts.sections = sections.len();
                for section in sections {
                    count_chapters(&mut counts, &section.chapters);
                }
            }
            Self::Outline(chapters) => {
                counts.chapters = chapters.len();
                for section in chapters.iter().flat_map(|chapter| &chapter.sections) {
                    counts.sections += 1;
                    counts.subsections += section.subsections.len();
                    counts.footnotes += section.footnotes.as_ref().map_or(0, Vec::len);
                }
            }
        }
        counts
    }
}

fn count_chapters(counts: &mut NodeCounts, chapters: &[ChapterNode]) {
    counts.chapters += chapters.len();
    for article in chapters.iter().flat_map(|chapter| &chapter.articles) {
        counts.articles += 1;
        counts.footnotes += article.footnotes.len();
    }
}
