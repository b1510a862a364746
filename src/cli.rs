use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use doctree::Dialect;

#[derive(Parser, Debug)]
#[command(
    name = "doctree",
    version,
    about = "Split extracted document text into chapter/section/article trees"
)]
pub struct Cli {
    #[command(flatten)]
    pub parse: ParseArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// PDF (via pdftotext) or plain-text file to parse.
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub dialect: DialectArg,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum DialectArg {
    /// Chapter → Article
    #[value(alias = "1", alias = "articles")]
    A,
    /// SECTION → Chapter → Article
    #[value(alias = "2", alias = "sections")]
    B,
    /// Roman chapter → numbered section → dotted subsection
    #[value(alias = "3", alias = "outline")]
    C,
}

impl DialectArg {
    pub fn dialect(self) -> Dialect {
        match self {
            Self::A => Dialect::Articles,
            Self::B => Dialect::Sections,
            Self::C => Dialect::Outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_dialect(selector: &str) -> Option<Dialect> {
        let cli = Cli::try_parse_from(["doctree", "doc.pdf", "--dialect", selector]).ok()?;
        Some(cli.parse.dialect.dialect())
    }

    #[test]
    fn dialect_accepts_letters_numbers_and_names() {
        assert_eq!(parse_dialect("a"), Some(Dialect::Articles));
        assert_eq!(parse_dialect("2"), Some(Dialect::Sections));
        assert_eq!(parse_dialect("outline"), Some(Dialect::Outline));
    }

    #[test]
    fn unsupported_dialect_is_rejected_by_the_parser() {
        assert_eq!(parse_dialect("4"), None);
        assert_eq!(parse_dialect("d"), None);
    }

    #[test]
    fn parse_requires_a_dialect() {
        assert!(Cli::try_parse_from(["doctree", "doc.pdf"]).is_err());
    }

    #[test]
    fn only_document_dialect_and_output_are_accepted() {
        let cli = Cli::try_parse_from(["doctree", "doc.pdf", "--dialect", "c", "--output", "t.json"])
            .expect("valid invocation");
        assert_eq!(cli.parse.input, PathBuf::from("doc.pdf"));
        assert_eq!(cli.parse.output, Some(PathBuf::from("t.json")));

        assert!(
            Cli::try_parse_from([
                "doctree",
                "doc.pdf",
                "--dialect",
                "c",
                "--manifest-path",
                "m.json",
            ])
            .is_err()
        );
    }
}
