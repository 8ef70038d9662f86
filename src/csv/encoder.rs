//! Line encoding, the inverse of the tokenizer

use super::tokenizer::{DELIM, QUOTE};

/// CSV encoder producing lines the [`LineTokenizer`](super::LineTokenizer) reads back unchanged
///
/// Fields are joined with [`DELIM`]. A field containing the delimiter or the
/// quote character is wrapped in quotes and its quotes are doubled. Both
/// control characters are ASCII, so they are written as single bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvEncoder;

impl CsvEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode entire row into buffer
    pub fn encode_row(&self, fields: &[&str], buffer: &mut Vec<u8>) {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                buffer.push(DELIM as u8);
            }
            self.encode_field(field, buffer);
        }
    }

    /// Encode a row into a freshly allocated line (no line terminator)
    pub fn encode_line<S: AsRef<str>>(&self, fields: &[S]) -> String {
        let mut line = String::new();
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                line.push(DELIM);
            }
            let field = field.as_ref();
            if self.needs_quoting(field) {
                line.push(QUOTE);
                for ch in field.chars() {
                    if ch == QUOTE {
                        line.push(QUOTE);
                    }
                    line.push(ch);
                }
                line.push(QUOTE);
            } else {
                line.push_str(field);
            }
        }
        line
    }

    /// Encode single field with proper quoting/escaping
    fn encode_field(&self, field: &str, buffer: &mut Vec<u8>) {
        if self.needs_quoting(field) {
            buffer.push(QUOTE as u8);
            for byte in field.bytes() {
                if byte == QUOTE as u8 {
                    // Escape quotes by doubling: " -> ""
                    buffer.push(QUOTE as u8);
                }
                buffer.push(byte);
            }
            buffer.push(QUOTE as u8);
        } else {
            buffer.extend_from_slice(field.as_bytes());
        }
    }

    /// Check if field requires quoting
    fn needs_quoting(&self, field: &str) -> bool {
        field.contains([DELIM, QUOTE])
    }

    /// Check if a field can be written on a single line
    pub fn fits_on_line(field: &str) -> bool {
        !field.contains(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::tokenize;

    fn encode(fields: &[&str]) -> String {
        let mut buffer = Vec::new();
        CsvEncoder::new().encode_row(fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(encode(&["a", "b", "c"]), "a;b;c");
    }

    #[test]
    fn test_quoted_fields() {
        assert_eq!(encode(&["a;b", "c"]), r#""a;b";c"#);
    }

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(encode(&[r#"Say "Hello""#, "world"]), r#""Say ""Hello""";world"#);
    }

    #[test]
    fn test_comma_is_ordinary() {
        assert_eq!(encode(&["a,b", "c"]), "a,b;c");
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(encode(&["a", "", "c"]), "a;;c");
        assert_eq!(encode(&["", "", ""]), ";;");
    }

    #[test]
    fn test_encode_line_matches_encode_row() {
        let row = ["Jörg; Reik", r#"Pe"ter"#, "", "plain"];
        assert_eq!(CsvEncoder::new().encode_line(&row), encode(&row));
    }

    #[test]
    fn test_tokenizer_reads_encoded_line() {
        let row = ["Jörg; Reik", r#"Pe"ter"#, "", r#"""#, "plain"];
        let line = CsvEncoder::new().encode_line(&row);
        assert_eq!(tokenize(&line), row);
    }

    #[test]
    fn test_fits_on_line() {
        assert!(CsvEncoder::fits_on_line("a;b"));
        assert!(!CsvEncoder::fits_on_line("Line 1\nLine 2"));
        assert!(!CsvEncoder::fits_on_line("a\rb"));
    }
}
