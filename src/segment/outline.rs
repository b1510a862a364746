use super::Dialect;
use super::footnotes::FootnoteExtractor;
use super::patterns::{LineCapture, PatternRegistry};
use super::types::{OutlineChapter, OutlineSection, OutlineSubsection};

/// Line-oriented layout: `IV. Title` chapters, `3. Title` sections and
/// `3.1. Title` (any depth) subsections, with free text between headings.
///
/// Free text goes to the open section, else to the open chapter, else it is
/// dropped. Subsection headings never take free text: lines after `3.1.`
/// still extend the content of section `3`.
pub fn parse_outline(registry: &PatternRegistry, text: &str) -> Vec<OutlineChapter> {
    let patterns = &registry.outline;
    let mut chapters = Vec::<OutlineChapter>::new();
    let mut cursor = OutlineCursor::default();

    for raw_line in text.lines() {
        if let Some(heading) = patterns.chapter.captures(raw_line) {
            chapters.extend(cursor.close_chapter());
            cursor.open_chapter(heading);
            continue;
        }

        if let Some(heading) = patterns.numbered.captures(raw_line) {
            if heading.depth() == 1 {
                cursor.open_section(heading);
            } else {
                cursor.push_subsection(heading);
            }
            continue;
        }

        cursor.append_text(raw_line.trim());
    }
    chapters.extend(cursor.close_chapter());

    attach_section_footnotes(
        &mut chapters,
        registry.footnotes(Dialect::Outline.footnote_convention()),
    );
    chapters
}

#[derive(Debug)]
struct OpenSection {
    node: OutlineSection,
    // false when the section heading appeared before any chapter
    attached: bool,
}

#[derive(Debug, Default)]
struct OutlineCursor {
    chapter: Option<OutlineChapter>,
    section: Option<OpenSection>,
}

impl OutlineCursor {
    fn open_chapter(&mut self, heading: LineCapture<'_>) {
        self.chapter = Some(OutlineChapter {
            chapter_number: heading.number.to_string(),
            chapter_title: heading.title.to_string(),
            sections: Vec::new(),
            content: None,
        });
    }

    fn open_section(&mut self, heading: LineCapture<'_>) {
        self.close_section();
        self.section = Some(OpenSection {
            node: OutlineSection {
                section_number: heading.number.to_string(),
                section_title: heading.title.to_string(),
                subsections: Vec::new(),
                content: None,
                footnotes: None,
            },
            attached: self.chapter.is_some(),
        });
    }

    fn push_subsection(&mut self, heading: LineCapture<'_>) {
        if let Some(open) = self.section.as_mut() {
            open.node.subsections.push(OutlineSubsection {
                subsection_number: heading.number.to_string(),
                subsection_title: heading.title.to_string(),
                subsubsections: Vec::new(),
            });
        }
    }

    fn append_text(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        let content = if let Some(open) = self.section.as_mut() {
            &mut open.node.content
        } else if let Some(chapter) = self.chapter.as_mut() {
            &mut chapter.content
        } else {
            return;
        };

        match content {
            Some(existing) => {
                existing.push(' ');
                existing.push_str(line);
            }
            None => *content = Some(line.to_string()),
        }
    }

    fn close_section(&mut self) {
        let Some(open) = self.section.take() else {
            return;
        };
        if !open.attached {
            return;
        }
        if let Some(chapter) = self.chapter.as_mut() {
            chapter.sections.push(open.node);
        }
    }

    fn close_chapter(&mut self) -> Option<OutlineChapter> {
        self.close_section();
        self.chapter.take()
    }
}

fn attach_section_footnotes(chapters: &mut [OutlineChapter], footnotes: &FootnoteExtractor) {
    for section in chapters
        .iter_mut()
        .flat_map(|chapter| chapter.sections.iter_mut())
    {
        if let Some(content) = section.content.as_deref() {
            section.footnotes = Some(footnotes.extract(content));
        }
    }
}
