use super::Dialect;
use super::footnotes::FootnoteExtractor;
use super::patterns::{PatternRegistry, SplitMatcher};
use super::split::split_markers;
use super::types::{ArticleNode, ChapterNode};

/// Two-level layout: `Chapter IV Title` headings holding `Article 12. Title`
/// headings. Article bodies keep their footnote markers.
pub fn parse_articles(registry: &PatternRegistry, text: &str) -> Vec<ChapterNode> {
    let patterns = &registry.articles;
    let footnotes = registry.footnotes(Dialect::Articles.footnote_convention());

    split_markers(&patterns.chapter, text)
        .into_iter()
        .map(|chapter| ChapterNode {
            chapter_number: chapter.number.to_string(),
            chapter_title: chapter.title.to_string(),
            articles: collect_articles(&patterns.article, footnotes, chapter.body, false),
        })
        .collect()
}

/// Articles under one chapter body. With `strip_markers` the stored body is
/// the footnote-free copy; the marker list is filled either way.
pub(super) fn collect_articles(
    matcher: &SplitMatcher,
    footnotes: &FootnoteExtractor,
    chapter_body: &str,
    strip_markers: bool,
) -> Vec<ArticleNode> {
    split_markers(matcher, chapter_body)
        .into_iter()
        .map(|article| ArticleNode {
            article_number: article.number.to_string(),
            article_title: article.title.to_string(),
            article_body: if strip_markers {
                footnotes.strip(article.body)
            } else {
                article.body.to_string()
            },
            footnotes: footnotes.extract(article.body),
        })
        .collect()
}
