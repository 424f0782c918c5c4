use std::fmt;

/// Which of the two seek-bar labels a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Elapsed,
    Remaining,
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelKind::Elapsed => f.write_str("elapsed"),
            LabelKind::Remaining => f.write_str("remaining"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SeekError {
    #[error("Seek bar container not found: {selector}")]
    ContainerNotFound { selector: String },
    #[error("The {label} label was not found: {selector}")]
    LabelNotFound { label: LabelKind, selector: String },
    #[error("Invalid {field}: {}", .raw.as_deref().unwrap_or("<missing>"))]
    InvalidNumber {
        field: &'static str,
        raw: Option<String>,
    },
}
