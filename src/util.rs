use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

const JSON_INDENT: &[u8] = b"    ";

pub fn ensure_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

/// Pretty JSON with four-space indentation. Non-ASCII text is written as-is.
pub fn render_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(JSON_INDENT));
    value
        .serialize(&mut serializer)
        .context("failed to serialize json")?;

    String::from_utf8(data).context("serialized json is not valid UTF-8")
}

/// Writes `contents` followed by a newline, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut file = File::create(path)
        .with_context(|| format!("failed to create file: {}", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("failed to finalize file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn render_json_pretty_indents_with_four_spaces() {
        let rendered = render_json_pretty(&json!({ "a": [1] })).expect("renders");
        assert_eq!(rendered, "{\n    \"a\": [\n        1\n    ]\n}");
    }

    #[test]
    fn render_json_pretty_keeps_non_ascii() {
        let rendered = render_json_pretty(&vec!["Überblick – § 3"]).expect("renders");
        assert!(rendered.contains("Überblick – § 3"));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn render_json_pretty_renders_empty_array_compactly() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(render_json_pretty(&empty).expect("renders"), "[]");
    }

    #[test]
    fn write_text_creates_parents_and_appends_newline() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("out.json");

        let rendered = render_json_pretty(&json!({ "k": "v" })).expect("renders");
        write_text(&path, &rendered).expect("writes");

        let written = fs::read_to_string(&path).expect("reads back");
        assert_eq!(written, "{\n    \"k\": \"v\"\n}\n");
    }
}
