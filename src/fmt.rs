//! `Display` and `FromStr` for [`Complex`], using the `re±imi` notation.

use std::fmt;
use std::str::FromStr;

use crate::complex::Complex;
use crate::error::ParseComplexError;

// Width can only be applied to the whole number through an intermediate `String`.
fn fmt_complex(f: &mut fmt::Formatter<'_>, complex: fmt::Arguments<'_>) -> fmt::Result {
    if let Some(width) = f.width() {
        let s = complex.to_string();
        match f.align() {
            None | Some(fmt::Alignment::Right) => write!(f, "{s:>width$}"),
            Some(fmt::Alignment::Center) => write!(f, "{s:^width$}"),
            Some(fmt::Alignment::Left) => write!(f, "{s:<width$}"),
        }
    } else {
        f.write_fmt(complex)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re(), self.im());
        // `{:+}` never signs a NaN
        let sign = if im.is_nan() { "+" } else { "" };
        match f.precision() {
            Some(prec) => fmt_complex(f, format_args!("{re:.prec$}{sign}{im:+.prec$}i")),
            None => fmt_complex(f, format_args!("{re}{sign}{im:+}i")),
        }
    }
}

/// Byte offset of the sign that starts the imaginary part, skipping a leading
/// sign and exponent signs.
fn split_point(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'))
}

fn parse_imaginary(s: &str) -> Result<f64, ParseComplexError> {
    match s {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => s.parse().map_err(ParseComplexError::InvalidImaginary),
    }
}

/// Accepts `a+bi`, `a-bi`, a bare real `a` and a bare imaginary `bi`.
/// The coefficient of a lone `i` may be left out, as in `3-i`.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseComplexError::Empty);
        }

        let Some(body) = s.strip_suffix('i') else {
            if split_point(s).is_some() {
                return Err(ParseComplexError::MissingImaginaryUnit);
            }
            let re = s.parse().map_err(ParseComplexError::InvalidReal)?;
            return Ok(Complex::real(re));
        };

        match split_point(body) {
            Some(at) => {
                let (re, im) = body.split_at(at);
                let re = re.parse().map_err(ParseComplexError::InvalidReal)?;
                Ok(Complex::new(re, parse_imaginary(im)?))
            }
            None => Ok(Complex::imag(parse_imaginary(body)?)),
        }
    }
}
