//! Occurrence store operations

use crate::error::Result;
use crate::model::{Occurrence, OccurrenceKind, OccurrenceStatus, Priority, RecordId, Timestamp};
use crate::persist::MAX_TEXT_BYTES;

use super::{clip, Store};

impl Store<Occurrence> {
    /// Register an occurrence as `Reported`, not yet ended
    pub fn create(
        &mut self,
        location: &str,
        kind: OccurrenceKind,
        priority: Priority,
        reported_at: Timestamp,
    ) -> Result<RecordId> {
        self.insert_with(|id| Occurrence {
            id,
            location: clip(location, MAX_TEXT_BYTES),
            reported_at,
            ended_at: Timestamp::UNSET,
            kind,
            priority,
            status: OccurrenceStatus::Reported,
        })
    }

    /// Change the status of an active occurrence.
    ///
    /// `ended_at` is recorded only when moving to `Resolved`; otherwise it is
    /// ignored and the previous end time stays as it was.
    pub fn update_status(
        &mut self,
        id: RecordId,
        status: OccurrenceStatus,
        ended_at: Option<Timestamp>,
    ) -> Result<()> {
        self.update_active(id, |occurrence| {
            occurrence.status = status;
            if status == OccurrenceStatus::Resolved {
                if let Some(ended_at) = ended_at {
                    occurrence.ended_at = ended_at;
                }
            }
        })
    }
}
