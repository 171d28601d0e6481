//! Record file reader
//!
//! Streams fixed-size frames out of a store file and rebuilds the store.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{BrigadeError, Result};
use crate::store::Store;

use super::{FixedRecord, FrameNotes};

/// Outcome of loading one store file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadStats {
    /// Records decoded and placed in the store
    pub records_loaded: u64,

    /// Records holding a code no variant claims; loaded and kept as-is
    pub unrecognized_codes: u64,

    /// Records whose text was not valid UTF-8 and was decoded lossily
    pub lossy_text: u64,

    /// Whether the file ended with fewer bytes than one record
    pub partial_tail: bool,
}

/// Iterator over the records of a store file, in file order.
///
/// Every full frame yields a record. Stops at end of file, at a short
/// trailing frame, or at the first read error; none of these is reported as
/// an error.
pub struct RecordReader<R, Rd> {
    reader: Rd,
    frame: Vec<u8>,
    stats: LoadStats,
    done: bool,
    _record: PhantomData<R>,
}

impl<R: FixedRecord, Rd: Read> RecordReader<R, Rd> {
    pub fn new(reader: Rd) -> Self {
        Self {
            reader,
            frame: vec![0u8; R::SIZE],
            stats: LoadStats::default(),
            done: false,
            _record: PhantomData,
        }
    }

    /// Counters for what has been read so far
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}

impl<R: FixedRecord, Rd: Read> Iterator for RecordReader<R, Rd> {
    type Item = R;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match fill(&mut self.reader, &mut self.frame) {
            Ok(n) if n == R::SIZE => {
                let mut notes = FrameNotes::default();
                let record = R::decode(&self.frame, &mut notes);
                let id = record.id();
                self.stats.records_loaded += 1;
                if notes.unrecognized_code {
                    warn!(kind = R::KIND, id, "record holds an unknown code; kept as-is");
                    self.stats.unrecognized_codes += 1;
                }
                if notes.lossy_text {
                    warn!(kind = R::KIND, id, "record text is not UTF-8; decoded lossily");
                    self.stats.lossy_text += 1;
                }
                return Some(record);
            }
            Ok(0) => {}
            Ok(n) => {
                warn!(kind = R::KIND, bytes = n, "ignoring partial trailing record");
                self.stats.partial_tail = true;
            }
            Err(e) => {
                warn!(kind = R::KIND, error = %e, "read failed; treating as end of file");
            }
        }
        self.done = true;
        None
    }
}

/// Read until `buf` is full or the source is exhausted; returns bytes read
fn fill<Rd: Read>(reader: &mut Rd, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Load a store from `path`.
///
/// A missing file yields an empty store with its sequence at 0. A file that
/// exists but cannot be opened is `PersistenceUnavailable`.
pub fn load<R: FixedRecord>(path: &Path) -> Result<(Store<R>, LoadStats)> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(kind = R::KIND, path = %path.display(), "no store file; starting empty");
            return Ok((Store::new(), LoadStats::default()));
        }
        Err(source) => {
            return Err(BrigadeError::PersistenceUnavailable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut reader = RecordReader::<R, _>::new(BufReader::new(file));
    let records: Vec<R> = reader.by_ref().collect();
    let stats = reader.stats().clone();
    let store = Store::from_file_order(records);

    info!(
        kind = R::KIND,
        records = stats.records_loaded,
        unrecognized = stats.unrecognized_codes,
        lossy_text = stats.lossy_text,
        last_id = store.last_id(),
        "store loaded"
    );
    Ok((store, stats))
}
