use std::io::Write;

use anyhow::{Context, Result};
use doctree::util::{render_json_pretty, write_text};
use doctree::{Dialect, DocumentParser, DocumentTree};
use tracing::{debug, info, warn};

use super::extract::extract_document_text;
use crate::cli::ParseArgs;

pub fn run(args: ParseArgs) -> Result<()> {
    let dialect = args.dialect.dialect();

    info!(
        input = %args.input.display(),
        dialect = %dialect,
        selector = dialect.selector(),
        "starting parse"
    );

    let parser = DocumentParser::new().context("failed to build pattern registry")?;
    log_patterns(&parser, dialect);

    let extracted = extract_document_text(&args.input)
        .with_context(|| format!("failed to extract text from {}", args.input.display()))?;
    info!(
        backend = extracted.backend,
        pages = extracted.page_count.unwrap_or(0),
        chars = extracted.text.chars().count(),
        "extracted document text"
    );

    let tree = parser.process(&extracted.text, dialect);
    warn_if_empty(&tree);

    let rendered = render_json_pretty(&tree)?;
    match &args.output {
        Some(path) => {
            write_text(path, &rendered)?;
            info!(path = %path.display(), "wrote document tree");
        }
        None => write_stdout(&rendered)?,
    }

    let counts = tree.counts();
    info!(
        top_level = tree.top_level_len(),
        sections = counts.sections,
        chapters = counts.chapters,
        articles = counts.articles,
        subsections = counts.subsections,
        footnotes = counts.footnotes,
        "parse completed"
    );

    Ok(())
}

fn log_patterns(parser: &DocumentParser, dialect: Dialect) {
    for entry in parser.registry().entries_for(dialect) {
        debug!(
            name = entry.name,
            strategy = entry.strategy.as_str(),
            pattern = %entry.pattern,
            "pattern"
        );
    }
}

/// Empty trees are still written; the caller only gets a warning.
fn warn_if_empty(tree: &DocumentTree) -> bool {
    match tree.ensure_populated() {
        Ok(()) => false,
        Err(err) => {
            warn!(error = %err, "document produced an empty tree");
            true
        }
    }
}

fn write_stdout(rendered: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(rendered.as_bytes())
        .and_then(|()| handle.write_all(b"\n"))
        .context("failed to write document tree to stdout")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::cli::DialectArg;

    fn args(input: PathBuf, output: Option<PathBuf>) -> ParseArgs {
        ParseArgs {
            input,
            dialect: DialectArg::A,
            output,
        }
    }

    #[test]
    fn run_writes_tree_to_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("out").join("tree.json");
        fs::write(
            &input,
            "Chapter I Intro\nArticle 1. First\nBody [1]\nArticle 2. Second\nEnd",
        )
        .expect("writes input");

        run(args(input, Some(output.clone()))).expect("parse runs");

        let written = fs::read_to_string(&output).expect("tree written");
        assert!(written.ends_with("]\n"));
        let tree = DocumentTree::from_json(Dialect::Articles, &written).expect("valid json");
        assert_eq!(tree.top_level_len(), 1);
        let counts = tree.counts();
        assert_eq!(counts.articles, 2);
        assert_eq!(counts.footnotes, 1);
    }

    #[test]
    fn run_writes_empty_array_for_unstructured_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("tree.json");
        fs::write(&input, "nothing structured here").expect("writes input");

        run(args(input, Some(output.clone()))).expect("parse runs");

        assert_eq!(fs::read_to_string(&output).expect("tree written"), "[]\n");
    }

    #[test]
    fn warn_if_empty_flags_only_empty_trees() {
        let parser = DocumentParser::new().expect("patterns compile");
        assert!(warn_if_empty(&parser.process("plain prose", Dialect::Sections)));
        assert!(!warn_if_empty(
            &parser.process("Chapter I Intro\nArticle 1. First\nbody", Dialect::Articles)
        ));
    }

    #[test]
    fn run_fails_for_missing_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("tree.json");

        let err = run(args(dir.path().join("missing.pdf"), Some(output.clone())))
            .expect_err("missing input");
        assert!(matches!(
            err.root_cause().downcast_ref::<doctree::DocTreeError>(),
            Some(doctree::DocTreeError::MissingSource(_))
        ));
        assert!(!output.exists());
    }
}
