//! Fixed record layouts
//!
//! Field-by-field encoding of each entity into its on-disk frame.

use std::borrow::Cow;

use bytes::{Buf, BufMut, BytesMut};

use crate::model::{
    Equipment, EquipmentStatus, Firefighter, FirefighterStatus, Intervention, InterventionStatus,
    Occurrence, OccurrenceKind, OccurrenceStatus, Priority, StoredCode, Timestamp,
};
use crate::store::{clip, Record};

/// Width of every string field, terminator included
pub const TEXT_CAPACITY: usize = 100;

/// Longest string a field can hold (one byte is kept for the NUL)
pub const MAX_TEXT_BYTES: usize = TEXT_CAPACITY - 1;

const INT_SIZE: usize = 4;

/// Five integers: day, month, year, hour, minute
pub const TIMESTAMP_SIZE: usize = 5 * INT_SIZE;

/// A record with a fixed-size binary frame
pub trait FixedRecord: Record + Sized {
    /// Bytes per record on disk
    const SIZE: usize;

    /// Append exactly `SIZE` bytes to `buf`
    fn encode(&self, buf: &mut BytesMut);

    /// Decode one frame; `frame` is exactly `SIZE` bytes long.
    ///
    /// Any full frame decodes. Anomalies are flagged in `notes`.
    fn decode(frame: &[u8], notes: &mut FrameNotes) -> Self;
}

/// Anomalies met while decoding one frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameNotes {
    /// A code field held a value no variant claims (kept as `Unrecognized`)
    pub unrecognized_code: bool,

    /// A text field was not valid UTF-8 and was decoded lossily
    pub lossy_text: bool,
}

// =============================================================================
// Field Helpers
// =============================================================================

fn put_text(buf: &mut BytesMut, text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(MAX_TEXT_BYTES);
    buf.put_slice(&bytes[..len]);
    buf.put_bytes(0, TEXT_CAPACITY - len);
}

fn get_text(frame: &mut &[u8], notes: &mut FrameNotes) -> String {
    let field = &frame[..TEXT_CAPACITY];
    let end = field.iter().position(|&b| b == 0).unwrap_or(TEXT_CAPACITY);
    let text = match String::from_utf8_lossy(&field[..end]) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            notes.lossy_text = true;
            // Replacement characters are wider than the bytes they stand for
            clip(&text, MAX_TEXT_BYTES)
        }
    };
    frame.advance(TEXT_CAPACITY);
    text
}

fn put_timestamp(buf: &mut BytesMut, ts: &Timestamp) {
    buf.put_i32_ne(ts.day);
    buf.put_i32_ne(ts.month);
    buf.put_i32_ne(ts.year);
    buf.put_i32_ne(ts.hour);
    buf.put_i32_ne(ts.minute);
}

fn get_timestamp(frame: &mut &[u8]) -> Timestamp {
    let day = frame.get_i32_ne();
    let month = frame.get_i32_ne();
    let year = frame.get_i32_ne();
    let hour = frame.get_i32_ne();
    let minute = frame.get_i32_ne();
    Timestamp::new(year, month, day, hour, minute)
}

fn get_code<T: StoredCode>(frame: &mut &[u8], notes: &mut FrameNotes) -> T {
    let value = T::from_stored(frame.get_i32_ne());
    if !value.is_recognized() {
        notes.unrecognized_code = true;
    }
    value
}

// =============================================================================
// Layouts
// =============================================================================

impl FixedRecord for Firefighter {
    const SIZE: usize = INT_SIZE + 2 * TEXT_CAPACITY + 3 * INT_SIZE;

    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32_ne(self.id);
        put_text(buf, &self.name);
        put_text(buf, &self.specialty);
        buf.put_i32_ne(self.status.code());
        buf.put_i32_ne(self.total_interventions);
        buf.put_i32_ne(self.total_response_time);
    }

    fn decode(mut frame: &[u8], notes: &mut FrameNotes) -> Self {
        debug_assert_eq!(frame.len(), Self::SIZE);
        let id = frame.get_u32_ne();
        let name = get_text(&mut frame, notes);
        let specialty = get_text(&mut frame, notes);
        let status = get_code::<FirefighterStatus>(&mut frame, notes);
        Self {
            id,
            name,
            specialty,
            status,
            total_interventions: frame.get_i32_ne(),
            total_response_time: frame.get_i32_ne(),
        }
    }
}

impl FixedRecord for Equipment {
    const SIZE: usize = INT_SIZE + 2 * TEXT_CAPACITY + INT_SIZE;

    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32_ne(self.id);
        put_text(buf, &self.designation);
        put_text(buf, &self.kind);
        buf.put_i32_ne(self.status.code());
    }

    fn decode(mut frame: &[u8], notes: &mut FrameNotes) -> Self {
        debug_assert_eq!(frame.len(), Self::SIZE);
        let id = frame.get_u32_ne();
        let designation = get_text(&mut frame, notes);
        let kind = get_text(&mut frame, notes);
        let status = get_code::<EquipmentStatus>(&mut frame, notes);
        Self {
            id,
            designation,
            kind,
            status,
        }
    }
}

impl FixedRecord for Occurrence {
    const SIZE: usize = INT_SIZE + TEXT_CAPACITY + 2 * TIMESTAMP_SIZE + 3 * INT_SIZE;

    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32_ne(self.id);
        put_text(buf, &self.location);
        put_timestamp(buf, &self.reported_at);
        put_timestamp(buf, &self.ended_at);
        buf.put_i32_ne(self.kind.code());
        buf.put_i32_ne(self.priority.code());
        buf.put_i32_ne(self.status.code());
    }

    fn decode(mut frame: &[u8], notes: &mut FrameNotes) -> Self {
        debug_assert_eq!(frame.len(), Self::SIZE);
        let id = frame.get_u32_ne();
        let location = get_text(&mut frame, notes);
        let reported_at = get_timestamp(&mut frame);
        let ended_at = get_timestamp(&mut frame);
        let kind = get_code::<OccurrenceKind>(&mut frame, notes);
        let priority = get_code::<Priority>(&mut frame, notes);
        let status = get_code::<OccurrenceStatus>(&mut frame, notes);
        Self {
            id,
            location,
            reported_at,
            ended_at,
            kind,
            priority,
            status,
        }
    }
}

impl FixedRecord for Intervention {
    const SIZE: usize = 2 * INT_SIZE + 2 * TIMESTAMP_SIZE + 2 * INT_SIZE;

    fn encode(&self, buf: &mut BytesMut) {
        buf.put_u32_ne(self.id);
        buf.put_u32_ne(self.occurrence_id);
        put_timestamp(buf, &self.started_at);
        put_timestamp(buf, &self.ended_at);
        buf.put_i32_ne(self.status.code());
        buf.put_u32_ne(self.firefighter_id);
    }

    fn decode(mut frame: &[u8], notes: &mut FrameNotes) -> Self {
        debug_assert_eq!(frame.len(), Self::SIZE);
        let id = frame.get_u32_ne();
        let occurrence_id = frame.get_u32_ne();
        let started_at = get_timestamp(&mut frame);
        let ended_at = get_timestamp(&mut frame);
        let status = get_code::<InterventionStatus>(&mut frame, notes);
        Self {
            id,
            occurrence_id,
            started_at,
            ended_at,
            status,
            firefighter_id: frame.get_u32_ne(),
        }
    }
}
