use core::fmt::Display;
use core::str::FromStr;
use crate::error::ParseError;

// Text round-trip support.
//
// Every engine and distribution prints as a bracketed record such as
// `[lcg64_shift (18145460002477866997 1) (42)]` or `[normal (0.0 1.0)]`
// and reads back exactly what it prints. Delimiters are mandatory and
// single spaces separate fields; only leading whitespace before a record
// is skipped.

/// Characters that terminate a number token.
#[inline] fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '(' | ')' | '[' | ']')
}

/// A cursor over text input.
#[derive(Clone, Debug)]
pub struct TextReader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TextReader<'a> {
    pub fn new(input: &'a str) -> Self {
        TextReader { input, pos: 0 }
    }

    /// Byte offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos ..]
    }

    fn expected(&self, what: &str) -> ParseError {
        ParseError::Expected { expected: what.to_string(), offset: self.pos }
    }

    /// Skips spaces, tabs and newlines.
    pub fn ignore_spaces(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches([' ', '\t', '\n', '\r']);
        self.pos += rest.len() - trimmed.len();
    }

    /// Consumes exactly the character `c`.
    pub fn delim(&mut self, c: char) -> Result<(), ParseError> {
        match self.rest().chars().next() {
            Some(x) if x == c => {
                self.pos += c.len_utf8();
                Ok(())
            }
            _ => Err(self.expected(&c.to_string())),
        }
    }

    /// Consumes exactly the string `s`.
    pub fn delim_str(&mut self, s: &str) -> Result<(), ParseError> {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            Ok(())
        } else {
            Err(self.expected(s))
        }
    }

    /// Reads a token that runs up to the next delimiter.
    pub fn token(&mut self) -> Result<&'a str, ParseError> {
        let rest = self.rest();
        let len = rest.find(is_delimiter).unwrap_or(rest.len());
        if len == 0 {
            return Err(self.expected("token"));
        }
        self.pos += len;
        Ok(&rest[.. len])
    }

    /// Reads a decimal number of any parseable type.
    pub fn number<T: FromStr>(&mut self) -> Result<T, ParseError> {
        let offset = self.pos;
        let token = self.token()?;
        token.parse::<T>().map_err(|_| ParseError::Number { token: token.to_string(), offset })
    }

    /// Requires that nothing but whitespace remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        self.ignore_spaces();
        if self.pos == self.input.len() { Ok(()) } else { Err(ParseError::Trailing(self.pos)) }
    }
}

/// Symmetric text form of engines and distributions.
/// Printing goes through `Display`; reading goes through `read_text`.
pub trait TextIo: Sized + Display {
    /// Reads one record, skipping leading whitespace.
    fn read_text(reader: &mut TextReader<'_>) -> Result<Self, ParseError>;

    /// Canonical printable form.
    fn to_text(&self) -> String {
        self.to_string()
    }

    /// Parses a complete string holding exactly one record.
    fn from_text(s: &str) -> Result<Self, ParseError> {
        let mut reader = TextReader::new(s);
        let result = Self::read_text(&mut reader).and_then(|value| reader.finish().map(|_| value));
        if let Err(error) = &result {
            tracing::debug!(%error, "text parse failed");
        }
        result
    }

    /// Reads a record into `self`. On failure neither `self`
    /// nor the reader position changes.
    fn read_into(&mut self, reader: &mut TextReader<'_>) -> Result<(), ParseError> {
        let start = reader.clone();
        match Self::read_text(reader) {
            Ok(value) => {
                *self = value;
                Ok(())
            }
            Err(error) => {
                tracing::debug!(%error, "text parse failed");
                *reader = start;
                Err(error)
            }
        }
    }
}

/// Formats a float so that parsing it back yields the same bits.
#[inline]
pub(crate) fn float_text(x: f64) -> String {
    format!("{:?}", x)
}

/// Reads `(` v1 ` ` v2 ... `)` of a fixed length.
pub(crate) fn read_tuple<T: FromStr, const N: usize>(reader: &mut TextReader<'_>) -> Result<[T; N], ParseError>
where T: Copy + Default {
    let mut values = [T::default(); N];
    reader.delim('(')?;
    for (i, value) in values.iter_mut().enumerate() {
        if i > 0 { reader.delim(' ')?; }
        *value = reader.number()?;
    }
    reader.delim(')')?;
    Ok(values)
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        let mut reader = TextReader::new("  [mrg5s (1 2 3)]x");
        reader.ignore_spaces();
        reader.delim('[').unwrap();
        assert_eq!(reader.token().unwrap(), "mrg5s");
        reader.delim(' ').unwrap();
        let t: [i64; 3] = read_tuple(&mut reader).unwrap();
        assert_eq!(t, [1, 2, 3]);
        reader.delim(']').unwrap();
        assert_eq!(reader.finish(), Err(ParseError::Trailing(17)));

        // Delimiters are exact: two spaces do not match one.
        let mut reader = TextReader::new("(1  2)");
        assert!(read_tuple::<u32, 2>(&mut reader).is_err());

        let mut reader = TextReader::new("(1 x)");
        match read_tuple::<u32, 2>(&mut reader) {
            Err(ParseError::Number { token, offset }) => {
                assert_eq!(token, "x");
                assert_eq!(offset, 3);
            }
            other => panic!("unexpected {:?}", other),
        }

        for x in [0.0, 1.0, 0.37, -2.5e-300, 1.0e20, f64::MIN_POSITIVE, 0.1 + 0.2, f64::INFINITY] {
            let s = float_text(x);
            assert_eq!(s.parse::<f64>().unwrap().to_bits(), x.to_bits());
        }
        assert_eq!(float_text(0.0), "0.0");
        assert_eq!(float_text(0.37), "0.37");
    }
}
