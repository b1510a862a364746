use super::patterns::SplitMatcher;

/// One heading found by a [`SplitMatcher`] together with the text it owns.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MarkerCapture<'t> {
    /// Heading number exactly as written.
    pub number: &'t str,
    /// Heading title, trimmed.
    pub title: &'t str,
    /// Text up to the next heading of the same matcher, trimmed.
    pub body: &'t str,
}

/// Partitions `text` at every heading matched by `matcher`.
///
/// Text ahead of the first heading is dropped. A match missing either group
/// is skipped together with the text it would own, so a partial heading never
/// produces a node and never leaks into a sibling body.
pub fn split_markers<'t>(matcher: &SplitMatcher, text: &'t str) -> Vec<MarkerCapture<'t>> {
    let matches = matcher.regex().captures_iter(text).collect::<Vec<_>>();
    let mut captures = Vec::with_capacity(matches.len());

    for (index, current) in matches.iter().enumerate() {
        let Some(whole) = current.get(0) else {
            continue;
        };
        let body_end = matches
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map(|next| next.start())
            .unwrap_or(text.len());

        let (Some(number), Some(title)) = (current.get(1), current.get(2)) else {
            continue;
        };

        captures.push(MarkerCapture {
            number: number.as_str(),
            title: title.as_str().trim(),
            body: text[whole.end()..body_end].trim(),
        });
    }

    captures
}
