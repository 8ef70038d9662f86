//! Line tokenizing and encoding for `;`-separated, `"`-quoted text

mod batch;
mod encoder;
mod tokenizer;

#[cfg(feature = "parallel")]
pub use batch::par_tokenize_lines;
pub use batch::tokenize_lines;
pub use encoder::CsvEncoder;
pub use tokenizer::{tokenize, LineTokenizer, ParseState, ScanOutcome, DELIM, QUOTE};
