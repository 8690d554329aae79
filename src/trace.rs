//! Trace reader - streams page identifiers from a text source.
//!
//! A trace is a sequence of whitespace-separated decimal integers, one page
//! access each, laid out across any number of lines. Reading stops at end
//! of input or at the first token that does not start with an integer; a
//! token such as `12abc` yields `12` and then ends the trace. Input is read
//! as raw bytes, so a non-UTF-8 token is just another malformed token.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;

use crate::common::{Error, PageId, Result};

/// Iterator over the page accesses of a trace.
///
/// Yields `Err` once if the underlying reader fails, then stops. After the
/// trace ends (cleanly or not) the iterator keeps returning `None`.
///
/// # Example
/// ```
/// use pagesim::{PageId, TraceReader};
///
/// let trace = TraceReader::new("1 2\n3 x 4".as_bytes());
/// let pages: Vec<PageId> = trace.map(|p| p.unwrap()).collect();
/// assert_eq!(pages, vec![PageId::new(1), PageId::new(2), PageId::new(3)]);
/// ```
pub struct TraceReader<R> {
    reader: R,
    line: Vec<u8>,
    line_no: usize,
    pending: VecDeque<PageId>,
    done: bool,
}

impl TraceReader<BufReader<File>> {
    /// Open a trace file.
    ///
    /// # Errors
    /// Returns `Error::TraceOpen` if the file cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wrap any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            line_no: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    /// Parse the current line into `pending`, stopping at a bad token.
    fn parse_line(&mut self) {
        let tokens = self
            .line
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let (number, rest) = split_integer_prefix(token);
            // The prefix is ASCII sign and digits, so it is always valid UTF-8.
            match std::str::from_utf8(number).map(str::parse::<i32>) {
                Ok(Ok(id)) => self.pending.push_back(PageId::new(id)),
                _ => {
                    warn!(
                        "trace line {}: stopping at non-numeric token {:?}",
                        self.line_no,
                        String::from_utf8_lossy(token)
                    );
                    self.done = true;
                    return;
                }
            }
            if !rest.is_empty() {
                warn!(
                    "trace line {}: stopping at trailing {:?} after {}",
                    self.line_no,
                    String::from_utf8_lossy(rest),
                    String::from_utf8_lossy(number)
                );
                self.done = true;
                return;
            }
        }
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<PageId>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(page_id) = self.pending.pop_front() {
                return Some(Ok(page_id));
            }
            if self.done {
                return None;
            }

            self.line.clear();
            match self.reader.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    self.line_no += 1;
                    self.parse_line();
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

/// Split `token` into an optional sign plus leading digits, and the rest.
fn split_integer_prefix(token: &[u8]) -> (&[u8], &[u8]) {
    let sign = usize::from(matches!(token.first(), Some(b'+') | Some(b'-')));
    let digits = token[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    let end = if digits == 0 { 0 } else { sign + digits };
    token.split_at(end)
}
