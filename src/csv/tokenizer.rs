//! Lenient line tokenizer driven by a four-state automaton
//!
//! Each character is classified as [`QUOTE`], [`DELIM`] or anything else, and
//! the pair `(state, class)` selects exactly one transition. Every state is a
//! valid final state, so malformed lines still produce fields.

/// Field separator. Fixed; not configurable.
pub const DELIM: char = ';';

/// Quote character. A doubled quote inside a quoted field is a literal quote.
pub const QUOTE: char = '"';

/// Where the automaton is within the current field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseState {
    /// At the start of a field, nothing consumed yet
    #[default]
    Base,
    /// Inside a plain field; quotes are ordinary characters here
    Unquoted,
    /// Inside a quoted region; delimiters are ordinary characters here
    InQuotes,
    /// Just saw a quote that may close the quoted region
    AfterQuotes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Quote,
    Delim,
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        match ch {
            QUOTE => CharClass::Quote,
            DELIM => CharClass::Delim,
            _ => CharClass::Other,
        }
    }
}

/// Fields of one line plus the state the automaton finished in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Completed fields, left to right. Never empty.
    pub fields: Vec<String>,
    /// State after the last character
    pub final_state: ParseState,
}

impl ScanOutcome {
    /// True when the line ended inside a quoted region that was never closed
    pub fn ended_in_quotes(&self) -> bool {
        self.final_state == ParseState::InQuotes
    }
}

/// Accumulators for a single scan
struct Scan {
    state: ParseState,
    token: String,
    fields: Vec<String>,
}

impl Scan {
    fn with_capacity(len: usize) -> Self {
        Self {
            state: ParseState::Base,
            token: String::with_capacity(len),
            fields: Vec::new(),
        }
    }

    /// Copy the token into the result and reset it, keeping its capacity
    fn emit(&mut self) {
        self.fields.push(self.token.clone());
        self.token.clear();
        self.state = ParseState::Base;
    }

    fn step(&mut self, ch: char) {
        use CharClass::*;
        use ParseState::*;

        match (self.state, CharClass::of(ch)) {
            (Base, Quote) => self.state = InQuotes,
            (Base, Delim) => self.emit(),
            (Base, Other) => {
                self.token.push(ch);
                self.state = Unquoted;
            }

            (Unquoted, Delim) => self.emit(),
            (Unquoted, Quote | Other) => self.token.push(ch),

            (InQuotes, Quote) => self.state = AfterQuotes,
            (InQuotes, Delim | Other) => self.token.push(ch),

            // Doubled quote: literal quote, still quoted
            (AfterQuotes, Quote) => {
                self.token.push(QUOTE);
                self.state = InQuotes;
            }
            (AfterQuotes, Delim) => self.emit(),
            // Text right after a closing quote: keep the quote and continue unquoted
            (AfterQuotes, Other) => {
                self.token.push(QUOTE);
                self.token.push(ch);
                self.state = Unquoted;
            }
        }
    }

    fn finish(mut self) -> ScanOutcome {
        let final_state = self.state;
        self.fields.push(self.token);
        ScanOutcome {
            fields: self.fields,
            final_state,
        }
    }
}

/// Splits one line of `;`-separated, optionally `"`-quoted text into fields
///
/// Tokenizing never fails. Malformed input is resolved by the automaton's
/// recovery rules:
///
/// - a quote inside an unquoted field is kept literally (`Pe"ter` → `Pe"ter`)
/// - text right after a closing quote continues the field and keeps the quote
///   (`"Pe"ter` → `Pe"ter`)
/// - an unterminated quoted field yields its content at end of line
///
/// The tokenizer holds no state between calls and can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use csvline::LineTokenizer;
///
/// let tokenizer = LineTokenizer::new();
/// assert_eq!(tokenizer.tokenize("Jörg;Reik"), vec!["Jörg", "Reik"]);
/// assert_eq!(tokenizer.tokenize(r#""Jörg; Reik""#), vec!["Jörg; Reik"]);
/// assert_eq!(tokenizer.tokenize(""), vec![""]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTokenizer;

impl LineTokenizer {
    /// Create a tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a line into its fields. The result always has at least one field.
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.scan(line).fields
    }

    /// Tokenize a line and report the state the automaton ended in
    ///
    /// Useful for callers that want to apply their own validation, e.g. to
    /// flag rows ending inside an unterminated quoted field.
    ///
    /// ```
    /// use csvline::{LineTokenizer, ParseState};
    ///
    /// let outcome = LineTokenizer::new().scan(r#"a;"open"#);
    /// assert_eq!(outcome.fields, vec!["a", "open"]);
    /// assert_eq!(outcome.final_state, ParseState::InQuotes);
    /// assert!(outcome.ended_in_quotes());
    /// ```
    pub fn scan(&self, line: &str) -> ScanOutcome {
        let mut scan = Scan::with_capacity(line.len());
        for ch in line.chars() {
            scan.step(ch);
        }
        scan.finish()
    }
}

/// Tokenize a line with the default tokenizer
pub fn tokenize(line: &str) -> Vec<String> {
    LineTokenizer::new().tokenize(line)
}
