use std::num::ParseFloatError;

use thiserror::Error;

/// Error returned when parsing a `Complex` from its `Display` form fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseComplexError {
    #[error("cannot parse complex number from empty string")]
    Empty,

    #[error("missing imaginary unit `i` after the imaginary part")]
    MissingImaginaryUnit,

    #[error("invalid real part: {0}")]
    InvalidReal(#[source] ParseFloatError),

    #[error("invalid imaginary part: {0}")]
    InvalidImaginary(#[source] ParseFloatError),
}

/// Which half of a complex number a reader was working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Real,
    Imaginary,
}

impl std::fmt::Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Part::Real => "real",
            Part::Imaginary => "imaginary",
        })
    }
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended before the {part} part")]
    UnexpectedEof { part: Part },

    #[error("invalid {part} part {token:?}: {source}")]
    InvalidNumber {
        part: Part,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
