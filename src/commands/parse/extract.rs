use std::fs;
use std::path::Path;
use std::process::Command;

use doctree::DocTreeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExtractedText {
    pub text: String,
    pub backend: &'static str,
    pub page_count: Option<usize>,
}

/// Reads the document behind `path` as a single string.
///
/// `.txt`/`.text` files are taken verbatim; everything else goes through the
/// pdftotext text layer with every page followed by a line break.
pub(super) fn extract_document_text(path: &Path) -> Result<ExtractedText, DocTreeError> {
    if !path.is_file() {
        return Err(DocTreeError::MissingSource(path.to_path_buf()));
    }

    if is_plain_text(path) {
        let text = fs::read_to_string(path).map_err(|source| DocTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(ExtractedText {
            text,
            backend: "plain_text",
            page_count: None,
        });
    }

    let pages = extract_pages_with_pdftotext(path)?;
    Ok(ExtractedText {
        page_count: Some(pages.len()),
        text: join_pages(&pages),
        backend: "pdftotext",
    })
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt") || ext.eq_ignore_ascii_case("text"))
        .unwrap_or(false)
}

fn extract_pages_with_pdftotext(pdf_path: &Path) -> Result<Vec<String>, DocTreeError> {
    let output = Command::new("pdftotext")
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .map_err(|error| DocTreeError::ExtractionTool {
            tool: "pdftotext".to_string(),
            path: pdf_path.to_path_buf(),
            detail: format!("failed to execute: {error}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DocTreeError::ExtractionTool {
            tool: "pdftotext".to_string(),
            path: pdf_path.to_path_buf(),
            detail: format!("exit status {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(split_pages(&String::from_utf8_lossy(&output.stdout)))
}

/// Splits pdftotext output on form feeds, dropping NULs and trailing blank pages.
fn split_pages(raw: &str) -> Vec<String> {
    let mut pages: Vec<String> = raw
        .split('\u{000C}')
        .map(|chunk| chunk.replace('\u{0000}', ""))
        .collect();

    while let Some(last_page) = pages.last() {
        if last_page.trim().is_empty() {
            pages.pop();
            continue;
        }
        break;
    }

    pages
}

fn join_pages(pages: &[String]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|page| page.len() + 1).sum());
    for page in pages {
        text.push_str(page);
        text.push('\n');
    }
    text
}
