//! # csvline
//!
//! Lenient tokenizer for single lines of `;`-separated, `"`-quoted text.
//!
//! The core is [`LineTokenizer`], a four-state automaton that never fails:
//! malformed lines (stray quotes, text after a closing quote, unterminated
//! quoted fields) still produce a best-effort list of fields, and every line,
//! even an empty one, yields at least one field.
//!
//! Around the core sit thin collaborators:
//!
//! - [`CsvReader`] splits a file or any buffered source into lines and
//!   tokenizes each one
//! - [`CsvWriter`] and [`CsvEncoder`] produce lines the tokenizer reads back
//! - [`csv::tokenize_lines`] (and `par_tokenize_lines` with the `parallel`
//!   feature) for batches of independent lines
//!
//! ## Quick Start
//!
//! ```
//! use csvline::LineTokenizer;
//!
//! let tokenizer = LineTokenizer::new();
//! assert_eq!(tokenizer.tokenize("Jörg;Reik"), vec!["Jörg", "Reik"]);
//! assert_eq!(tokenizer.tokenize(r#""say ""hi"";x""#), vec![r#"say "hi";x"#]);
//! assert_eq!(tokenizer.tokenize(r#"Pe"ter"#), vec![r#"Pe"ter"#]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ParseState`]
//! - `parallel`: rayon-backed `csv::par_tokenize_lines`

pub mod csv;
pub mod csv_reader;
pub mod csv_writer;
pub mod error;

pub use csv::{CsvEncoder, LineTokenizer, ParseState, ScanOutcome, DELIM, QUOTE};
pub use csv_reader::CsvReader;
pub use csv_writer::CsvWriter;
pub use error::{CsvLineError, Result};
