use quick_xml::events::attributes::AttrError;
use std::{num::ParseIntError, path::PathBuf, str::Utf8Error};
use thiserror::Error;

pub type ClinvarResult<T> = std::result::Result<T, ClinvarError>;

#[derive(Debug, Error)]
pub enum ClinvarError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    #[error(transparent)]
    XmlAttribute(#[from] AttrError),
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
    #[error("VCF column header line (#CHROM POS ID REF ALT QUAL FILTER INFO) not found")]
    MissingColumnHeader,
    #[error("Unexpected VCF column at position {index}: expected '{expected}', found '{found}'")]
    UnexpectedColumn {
        index: usize,
        expected: &'static str,
        found: String,
    },
    #[error("VCF line {line}: expected {expected} tab-separated fields, found {found}")]
    TruncatedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unexpected end of XML inside <{tag}> element")]
    UnexpectedXmlEof { tag: String },
}

impl ClinvarError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[macro_export]
macro_rules! clinvar_error {
    ($($arg:tt)*) => {
        $crate::error::ClinvarError::message(format!($($arg)*))
    };
}
