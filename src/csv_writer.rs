//! Line-by-line CSV writing, readable back by the tokenizer

use crate::csv::CsvEncoder;
use crate::error::{CsvLineError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// CSV writer streaming one encoded line per row
///
/// Rows are encoded with [`CsvEncoder`] and terminated with `\n`, so every
/// row written can be read back with [`CsvReader`](crate::csv_reader::CsvReader).
/// Fields containing `\n` or `\r` are rejected: a row must fit on one line.
///
/// # Examples
///
/// ```no_run
/// use csvline::csv_writer::CsvWriter;
///
/// let mut writer = CsvWriter::new("output.csv").unwrap();
/// writer.write_row(["Name", "Age", "City"]).unwrap();
/// writer.write_row(["Alice", "30", "NYC"]).unwrap();
/// writer.save().unwrap();
/// ```
pub struct CsvWriter<W: Write> {
    sink: W,
    row_count: u64,
    buffer: Vec<u8>,
    encoder: CsvEncoder,
    line_ending: &'static [u8],
}

impl CsvWriter<BufWriter<File>> {
    /// Create a new CSV file, truncating an existing one
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let file = File::create(path_ref)
            .map_err(|e| CsvLineError::WriteError(format!("Failed to create CSV file: {}", e)))?;
        debug!(path = %path_ref.display(), "Created CSV file");
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write to any sink
    pub fn from_writer(sink: W) -> Self {
        CsvWriter {
            sink,
            row_count: 0,
            buffer: Vec::with_capacity(4096),
            encoder: CsvEncoder::new(),
            line_ending: b"\n",
        }
    }

    /// Write a row of strings
    ///
    /// # Examples
    ///
    /// ```
    /// use csvline::csv_writer::CsvWriter;
    ///
    /// let mut writer = CsvWriter::from_writer(Vec::new());
    /// writer.write_row(["Jörg; Reik", "plain"]).unwrap();
    /// assert_eq!(writer.into_inner().unwrap(), b"\"J\xc3\xb6rg; Reik\";plain\n");
    /// ```
    pub fn write_row<I, S>(&mut self, data: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = data.into_iter().collect();
        let refs: Vec<&str> = fields.iter().map(|s| s.as_ref()).collect();

        if let Some(pos) = refs.iter().position(|f| !CsvEncoder::fits_on_line(f)) {
            return Err(CsvLineError::WriteError(format!(
                "Field {} of row {} contains a line break",
                pos + 1,
                self.row_count + 1
            )));
        }

        // Reuse buffer
        self.buffer.clear();
        self.encoder.encode_row(&refs, &mut self.buffer);
        self.buffer.extend_from_slice(self.line_ending);

        self.sink
            .write_all(&self.buffer)
            .map_err(|e| CsvLineError::WriteError(format!("Failed to write row: {}", e)))?;

        self.row_count += 1;
        Ok(())
    }

    /// Write multiple rows at once
    ///
    /// Stops at the first row that cannot be written.
    pub fn write_rows_batch<I, R, S>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row_data in rows {
            self.write_row(row_data)?;
        }
        Ok(())
    }

    /// Get the number of rows written
    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Flush and return the underlying sink
    pub fn into_inner(mut self) -> Result<W> {
        self.sink
            .flush()
            .map_err(|e| CsvLineError::WriteError(format!("Failed to flush: {}", e)))?;
        Ok(self.sink)
    }

    /// Flush all buffered rows and close the writer
    ///
    /// This must be called to surface flush errors; dropping the writer
    /// discards them.
    pub fn save(self) -> Result<()> {
        let rows = self.row_count;
        self.into_inner()?;
        debug!(rows, "Saved CSV output");
        Ok(())
    }
}
