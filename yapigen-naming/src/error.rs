use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for yapigen-naming operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("当前目录下没有package.json文件{}", root.display())]
    #[diagnostic(
        code(yapigen::missing_package_json),
        help("run yapigen from the project root or pass --root <DIR>")
    )]
    MissingPackageJson { root: PathBuf },

    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(yapigen::parse_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        // serde_json reports line 0 when the error has no position
        let span = (source.line() > 0).then(|| {
            SourceSpan::new(
                SourceOffset::from_location(src, source.line(), source.column()),
                0,
            )
        });
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_package_json_message() {
        let err = Error::MissingPackageJson {
            root: PathBuf::from("/work/app"),
        };
        assert_eq!(err.to_string(), "当前目录下没有package.json文件/work/app");
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "{\n  \"name\": \n}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse(source, src, "package.json");
        assert_eq!(err.to_string(), "failed to parse package.json");
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            _ => panic!("expected parse error"),
        }
    }
}
