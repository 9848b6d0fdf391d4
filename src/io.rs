//! Stream input and output of complex numbers as two whitespace-separated reals.
//!
//! [`write_complex`] emits `re im` on its own line and [`read_complex`] reads
//! any two whitespace-separated reals back, so written values are recovered
//! exactly.

use std::io::{self, BufRead, Write};

use crate::complex::Complex;
use crate::error::{Part, ReadError};

/// Reads the next whitespace-delimited token.
///
/// Leading whitespace is consumed, the delimiter after the token is not.
/// Returns `None` at end of input.
fn next_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut complete = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(b);
            }
            used += 1;
        }
        reader.consume(used);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn parse_part(token: String, part: Part) -> Result<f64, ReadError> {
    match token.parse() {
        Ok(value) => Ok(value),
        Err(source) => {
            log::debug!("rejected {part} part {token:?}: {source}");
            Err(ReadError::InvalidNumber {
                part,
                token,
                source,
            })
        }
    }
}

fn read_part<R: BufRead + ?Sized>(reader: &mut R, part: Part) -> Result<f64, ReadError> {
    match next_token(reader)? {
        Some(token) => parse_part(token, part),
        None => Err(ReadError::UnexpectedEof { part }),
    }
}

/// Reads a real part and then an imaginary part from `reader`.
pub fn read_complex<R: BufRead + ?Sized>(reader: &mut R) -> Result<Complex, ReadError> {
    let re = read_part(reader, Part::Real)?;
    let im = read_part(reader, Part::Imaginary)?;
    log::trace!("read complex ({re}, {im})");
    Ok(Complex::new(re, im))
}

/// Writes `z` as `re im` followed by a newline.
pub fn write_complex<W: Write + ?Sized>(writer: &mut W, z: Complex) -> io::Result<()> {
    writeln!(writer, "{} {}", z.re(), z.im())
}

impl Complex {
    /// Reads a new value into `self`. On error `self` keeps its old value.
    pub fn read_from<R: BufRead + ?Sized>(
        &mut self,
        reader: &mut R,
    ) -> Result<&mut Self, ReadError> {
        *self = read_complex(reader)?;
        Ok(self)
    }

    pub fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> io::Result<()> {
        write_complex(writer, self)
    }
}

/// Iterator over the complex numbers in a text stream.
///
/// Ends at a clean end of input. After the first error the reader is in a
/// failed state and yields nothing more.
pub struct ComplexReader<R> {
    reader: R,
    failed: bool,
}

impl<R: BufRead> ComplexReader<R> {
    pub fn new(reader: R) -> Self {
        ComplexReader {
            reader,
            failed: false,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_next(&mut self) -> Result<Option<Complex>, ReadError> {
        let Some(token) = next_token(&mut self.reader)? else {
            return Ok(None);
        };
        let re = parse_part(token, Part::Real)?;
        let im = read_part(&mut self.reader, Part::Imaginary)?;
        Ok(Some(Complex::new(re, im)))
    }
}

impl<R: BufRead> Iterator for ComplexReader<R> {
    type Item = Result<Complex, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_next() {
            Ok(value) => value.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
