//! Line-by-line CSV reading on top of the tokenizer

use crate::csv::LineTokenizer;
use crate::error::{CsvLineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// CSV reader that feeds one line at a time to the [`LineTokenizer`]
///
/// Reads rows lazily using an iterator pattern; memory usage is one line.
/// Quoted fields cannot span lines: every physical line is one row.
/// Malformed rows never produce errors, only I/O failures do.
///
/// # Examples
///
/// ```no_run
/// use csvline::csv_reader::CsvReader;
///
/// let mut reader = CsvReader::open("data.csv").unwrap();
///
/// for row_result in reader.rows() {
///     let row = row_result.unwrap();
///     println!("{:?}", row);
/// }
/// ```
///
/// # With Headers
///
/// ```
/// use csvline::csv_reader::CsvReader;
///
/// let data = "ID;Name\n1;Alice\n2;\"Bob; Jr.\"\n";
/// let mut reader = CsvReader::from_reader(data.as_bytes()).has_header(true);
///
/// let rows: Vec<Vec<String>> = reader.rows().collect::<Result<_, _>>().unwrap();
/// assert_eq!(rows, vec![vec!["1", "Alice"], vec!["2", "Bob; Jr."]]);
/// assert_eq!(reader.headers(), Some(&["ID".to_string(), "Name".to_string()][..]));
/// ```
pub struct CsvReader<R> {
    source: R,
    line_buffer: String,
    row_count: u64,
    tokenizer: LineTokenizer,

    has_header: bool,
    headers: Vec<String>,
}

impl CsvReader<BufReader<File>> {
    /// Open a CSV file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let reader = CsvReader::open("data.csv").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::open(path_ref)
            .map_err(|e| CsvLineError::ReadError(format!("Failed to open CSV file: {}", e)))?;
        debug!(path = %path_ref.display(), "Opened CSV file");
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> CsvReader<R> {
    /// Read from any buffered source
    pub fn from_reader(source: R) -> Self {
        CsvReader {
            source,
            line_buffer: String::with_capacity(1024),
            row_count: 0,
            tokenizer: LineTokenizer::new(),
            has_header: false,
            headers: Vec::new(),
        }
    }

    /// Indicate that the first row contains headers (builder pattern)
    ///
    /// When set to `true`, the first row will be stored and accessible via `headers()`.
    /// The iterator will skip the header row.
    pub fn has_header(mut self, has: bool) -> Self {
        self.has_header = has;
        self
    }

    /// Get header row if available
    ///
    /// Returns `Some(&[String])` once the header row has been read, `None` otherwise.
    pub fn headers(&self) -> Option<&[String]> {
        if self.has_header && !self.headers.is_empty() {
            Some(&self.headers)
        } else {
            None
        }
    }

    /// Read a single row
    ///
    /// Returns `Ok(None)` when EOF is reached. An empty line is a row with
    /// one empty field.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let mut reader = CsvReader::from_reader("a;b\n\n".as_bytes());
    /// assert_eq!(reader.read_row().unwrap(), Some(vec!["a".to_string(), "b".to_string()]));
    /// assert_eq!(reader.read_row().unwrap(), Some(vec![String::new()]));
    /// assert_eq!(reader.read_row().unwrap(), None);
    /// ```
    pub fn read_row(&mut self) -> Result<Option<Vec<String>>> {
        self.line_buffer.clear();

        let bytes_read = self
            .source
            .read_line(&mut self.line_buffer)
            .map_err(|e| {
                CsvLineError::ReadError(format!(
                    "Failed to read line {}: {}",
                    self.row_count + 1,
                    e
                ))
            })?;

        if bytes_read == 0 {
            return Ok(None); // EOF
        }

        // Remove trailing newline
        if self.line_buffer.ends_with('\n') {
            self.line_buffer.pop();
            if self.line_buffer.ends_with('\r') {
                self.line_buffer.pop();
            }
        }

        let outcome = self.tokenizer.scan(&self.line_buffer);
        self.row_count += 1;

        if outcome.ended_in_quotes() {
            debug!(
                row = self.row_count,
                "Row ends inside an unterminated quoted field"
            );
        }

        if self.has_header && self.row_count == 1 {
            debug!(columns = outcome.fields.len(), "Captured header row");
            self.headers = outcome.fields.clone();
        }

        Ok(Some(outcome.fields))
    }

    /// Get iterator over rows
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use csvline::csv_reader::CsvReader;
    ///
    /// let mut reader = CsvReader::open("data.csv").unwrap();
    ///
    /// for row_result in reader.rows() {
    ///     let row = row_result.unwrap();
    ///     println!("{:?}", row);
    /// }
    /// ```
    pub fn rows(&mut self) -> CsvRowIterator<'_, R> {
        CsvRowIterator { reader: self }
    }

    /// Get the number of rows read so far, header included
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Unwrap the underlying source
    pub fn into_inner(self) -> R {
        self.source
    }
}

/// Iterator over CSV rows
pub struct CsvRowIterator<'a, R> {
    reader: &'a mut CsvReader<R>,
}

impl<R: BufRead> Iterator for CsvRowIterator<'_, R> {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_row() {
            Ok(Some(row)) => {
                // Skip header if has_header is true and this is the first row
                if self.reader.has_header && self.reader.row_count == 1 {
                    self.reader.read_row().transpose()
                } else {
                    Some(Ok(row))
                }
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
