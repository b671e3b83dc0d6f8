//! Errors that can occur while reconstructing values from text.
//!
//! Parse failures are ordinary data problems and are always reported as
//! `Result`s. Descriptor construction bugs are not errors: they panic from
//! [`crate::invariants`].

/// A recoverable failure to read a value of some descriptor from text.
///
/// Errors are propagated unchanged through `Map` and `Fix` wrappers, so the
/// variant always describes the innermost failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text is not a valid lexical form for the primitive.
    #[error("invalid {kind} literal {text:?}")]
    InvalidLiteral { kind: &'static str, text: String },

    /// The text is well formed but does not fit the primitive's range.
    #[error("{kind} literal {text:?} is out of range")]
    OutOfRange { kind: &'static str, text: String },

    /// The structural input could not be tokenized at all.
    #[error("malformed input: {message}")]
    Syntax { message: String },

    /// The structural input has the wrong shape for the descriptor.
    #[error("expected {expected}, found {found}")]
    Mismatch { expected: String, found: String },

    #[error("missing field `{field}` in record `{record}`")]
    MissingField { record: String, field: String },

    #[error("unknown field `{field}` in record `{record}`")]
    UnknownField { record: String, field: String },

    #[error("unknown case `{case}` in variant `{variant}`")]
    UnknownCase { variant: String, case: String },

    /// No decoder is able to build values of this shape.
    #[error("cannot decode {shape} from text")]
    Unsupported { shape: String },

    /// Free-form failure, typically reported by a custom parse function.
    #[error("{0}")]
    Message(String),
}

impl ParseError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub fn invalid_literal(kind: &'static str, text: &str) -> Self {
        Self::InvalidLiteral {
            kind,
            text: text.to_owned(),
        }
    }

    pub fn out_of_range(kind: &'static str, text: &str) -> Self {
        Self::OutOfRange {
            kind,
            text: text.to_owned(),
        }
    }

    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}
