//! Persistence Module
//!
//! One flat file per store, holding fixed-size records back to back.
//!
//! ## Responsibilities
//! - Save: truncate the file and write every record in store order,
//!   inactive ones included
//! - Load: read whole records until end of file and rebuild the store in
//!   reverse file order, resuming the id sequence from the highest id seen
//! - Treat a short trailing record or a failed read as end of file
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Record 1 (R::SIZE bytes)               │
//! ├────────────────────────────────────────┤
//! │ Record 2 (R::SIZE bytes)               │
//! ├────────────────────────────────────────┤
//! │ ...                                    │
//! └────────────────────────────────────────┘
//! ```
//! No header, count or checksum. Integers are 32-bit in host byte order and
//! strings are 100-byte NUL-padded fields, so files only move between hosts
//! of the same endianness.
//!
//! | Record       | Layout                                                    | Size |
//! |--------------|-----------------------------------------------------------|------|
//! | Firefighter  | id, name, specialty, status, interventions, response time | 216  |
//! | Equipment    | id, designation, type, status                             | 208  |
//! | Occurrence   | id, location, reported, ended, type, priority, status     | 156  |
//! | Intervention | id, occurrence, start, end, status, firefighter           | 56   |
//!
//! A timestamp is five integers: day, month, year, hour, minute.
//!
//! ## Damaged frames
//! Every full frame loads. A status, type or priority code no variant claims
//! is kept as `Unrecognized(code)` and written back unchanged, so the record
//! keeps its id and survives the next save.
//!
//! Text is held as `String`. A field that is not valid UTF-8 (e.g. Latin-1
//! from an older writer) is decoded with U+FFFD replacements, so its bytes
//! change on the next save. Both cases are counted in [`LoadStats`] and logged.

mod layout;
mod reader;
mod writer;

pub use layout::{FixedRecord, FrameNotes, MAX_TEXT_BYTES, TEXT_CAPACITY, TIMESTAMP_SIZE};
pub use reader::{load, LoadStats, RecordReader};
pub use writer::save;
