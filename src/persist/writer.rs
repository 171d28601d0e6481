//! Record file writer

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytes::BytesMut;
use tracing::info;

use crate::error::{BrigadeError, Result};
use crate::store::Store;

use super::FixedRecord;

/// Overwrite `path` with every record of `store`, in store order.
///
/// Inactive records are written too. Returns the number of records written.
pub fn save<R: FixedRecord>(path: &Path, store: &Store<R>) -> Result<usize> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| BrigadeError::PersistenceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let mut writer = BufWriter::new(file);
    let mut frame = BytesMut::with_capacity(R::SIZE);
    let mut written = 0;

    for record in store.iter() {
        frame.clear();
        record.encode(&mut frame);
        debug_assert_eq!(frame.len(), R::SIZE);
        writer.write_all(&frame)?;
        written += 1;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BrigadeError::Io(e.into_error()))?;
    file.sync_all()?;

    info!(kind = R::KIND, records = written, path = %path.display(), "store saved");
    Ok(written)
}
