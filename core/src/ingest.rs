//! Training record ingestion
//!
//! Reads whitespace-delimited text, one example per line: the first
//! token is the illness, the remaining tokens are its present symptoms.
//!
//! ```text
//! influenza cough fever
//! cold      cough
//! healthy
//! ```

use crate::error::Result;
use crate::types::Record;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses records from a reader, skipping blank lines
///
/// # Example
///
/// ```
/// use diagtree_core::parse_records;
///
/// let text = "influenza cough fever\n\ncold cough\nhealthy\n";
/// let records = parse_records(text.as_bytes()).unwrap();
///
/// assert_eq!(records.len(), 3);
/// assert_eq!(records[0].illness(), "influenza");
/// assert!(records[0].has("fever"));
/// assert!(records[2].symptoms().is_empty());
/// ```
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        if let Some(illness) = tokens.next() {
            records.push(Record::new(illness, tokens));
        }
    }

    Ok(records)
}

/// Reads records from a text file
///
/// # Errors
///
/// Returns [`DiagnoserError::IoError`](crate::DiagnoserError::IoError) if
/// the file cannot be opened or read.
pub fn parse_data<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let file = File::open(path.as_ref())?;
    parse_records(BufReader::new(file))
}
