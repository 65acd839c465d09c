use std::fmt;
use std::sync::Arc;

use storage::repository::{CursorRecord, CursorRepository};
use vocab_core::Clock;
use vocab_core::model::{AudioRef, Catalog, CatalogEntry, EntryIndex};

use crate::error::BrowseError;

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Owned view of the entry under the cursor, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSnapshot {
    pub position: EntryIndex,
    pub total: usize,
    pub entry: CatalogEntry,
}

impl BrowseSnapshot {
    /// One-based progress label, `"{n} / {total}"`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.position.value() + 1, self.total)
    }

    /// Audio reference of the entry, `None` when it has none.
    #[must_use]
    pub fn audio(&self) -> Option<&AudioRef> {
        self.entry.audio()
    }
}

//
// ─── BROWSE SERVICE ────────────────────────────────────────────────────────────
//

/// Steps through the catalog one entry at a time ("flashcard" mode).
///
/// The cursor position survives restarts via the single persisted slot; every
/// navigation writes the new position before returning.
pub struct BrowseService {
    catalog: Arc<Catalog>,
    cursor: Arc<dyn CursorRepository>,
    clock: Clock,
    position: EntryIndex,
}

impl BrowseService {
    /// Build the service, restoring the cursor from the persisted slot.
    ///
    /// The stored value is recovered, never trusted: absent or non-numeric
    /// content restarts at the first entry, out-of-range values clamp to the
    /// nearest bound.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::EmptyCatalog` when the catalog has no entries
    /// and `BrowseError::Storage` when the slot cannot be read.
    pub async fn load(
        catalog: Arc<Catalog>,
        cursor: Arc<dyn CursorRepository>,
        clock: Clock,
    ) -> Result<Self, BrowseError> {
        if catalog.is_empty() {
            return Err(BrowseError::EmptyCatalog);
        }

        let record = cursor.load_cursor().await?;
        let position = restore_position(record.as_ref(), catalog.len());

        Ok(Self {
            catalog,
            cursor,
            clock,
            position,
        })
    }

    #[must_use]
    pub fn position(&self) -> EntryIndex {
        self.position
    }

    /// Snapshot of the entry under the cursor. Pure query, no persistence.
    #[must_use]
    pub fn current(&self) -> BrowseSnapshot {
        self.snapshot()
    }

    /// Step to the next entry, wrapping past the last one, and persist.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Storage` when the slot write fails; the
    /// in-memory cursor still reflects the move, so the next successful
    /// navigation re-persists it.
    pub async fn next(&mut self) -> Result<BrowseSnapshot, BrowseError> {
        let len = self.catalog.len();
        self.position = EntryIndex::new((self.position.value() + 1) % len);
        self.persist().await?;
        Ok(self.snapshot())
    }

    /// Step to the previous entry, wrapping before the first one, and persist.
    ///
    /// # Errors
    ///
    /// Returns `BrowseError::Storage` when the slot write fails; the
    /// in-memory cursor still reflects the move.
    pub async fn previous(&mut self) -> Result<BrowseSnapshot, BrowseError> {
        let len = self.catalog.len();
        self.position = EntryIndex::new((self.position.value() + len - 1) % len);
        self.persist().await?;
        Ok(self.snapshot())
    }

    async fn persist(&self) -> Result<(), BrowseError> {
        let record = CursorRecord::from_position(self.position, self.clock.now());
        self.cursor.save_cursor(&record).await?;
        Ok(())
    }

    fn snapshot(&self) -> BrowseSnapshot {
        // The constructor rejects empty catalogs and navigation is modular,
        // so the cursor always points at a real entry.
        let entry = self.catalog.entries()[self.position.value()].clone();
        BrowseSnapshot {
            position: self.position,
            total: self.catalog.len(),
            entry,
        }
    }
}

impl fmt::Debug for BrowseService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowseService")
            .field("total", &self.catalog.len())
            .field("position", &self.position)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}

//
// ─── CURSOR RESTORE ────────────────────────────────────────────────────────────
//

/// Recovery policy for the persisted cursor text.
///
/// Absent or non-numeric values restart at 0; numeric values are clamped
/// into `0..len`. Values too large for `i64` follow their sign.
fn restore_position(record: Option<&CursorRecord>, len: usize) -> EntryIndex {
    let Some(record) = record else {
        log::debug!("no saved cursor, starting at the first entry");
        return EntryIndex::new(0);
    };

    let raw = record.position.trim();
    match raw.parse::<i64>() {
        Ok(value) if value < 0 => {
            log::warn!("saved cursor {value} is negative, clamping to 0");
            EntryIndex::new(0)
        }
        Ok(value) => {
            let index = usize::try_from(value).unwrap_or(usize::MAX);
            if index < len {
                EntryIndex::new(index)
            } else {
                log::warn!(
                    "saved cursor {value} is past the last entry, clamping to {}",
                    len - 1
                );
                EntryIndex::new(len - 1)
            }
        }
        Err(_) => clamp_unparseable(raw, len),
    }
}

/// Handles cursor text that does not fit `i64`: all-digit strings overflowed
/// upward and clamp to the end, minus-prefixed ones to 0, anything else is
/// non-numeric and restarts at 0.
fn clamp_unparseable(raw: &str, len: usize) -> EntryIndex {
    let all_digits = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    let negative_digits = raw
        .strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));

    if all_digits {
        log::warn!(
            "saved cursor {raw} is past the last entry, clamping to {}",
            len - 1
        );
        EntryIndex::new(len - 1)
    } else if negative_digits {
        log::warn!("saved cursor {raw} is negative, clamping to 0");
        EntryIndex::new(0)
    } else {
        log::warn!("saved cursor {raw:?} is not a number, starting at the first entry");
        EntryIndex::new(0)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_core::model::EntryDraft;
    use vocab_core::time::fixed_now;

    fn record(position: &str) -> CursorRecord {
        CursorRecord::new(position, fixed_now())
    }

    #[test]
    fn restore_defaults_to_zero_when_absent() {
        assert_eq!(restore_position(None, 5), EntryIndex::new(0));
    }

    #[test]
    fn restore_keeps_in_range_value() {
        assert_eq!(restore_position(Some(&record("3")), 5), EntryIndex::new(3));
    }

    #[test]
    fn restore_clamps_negative_to_zero() {
        assert_eq!(restore_position(Some(&record("-5")), 5), EntryIndex::new(0));
    }

    #[test]
    fn restore_clamps_past_end_to_last_entry() {
        assert_eq!(restore_position(Some(&record("10")), 5), EntryIndex::new(4));
        assert_eq!(restore_position(Some(&record("5")), 5), EntryIndex::new(4));
    }

    #[test]
    fn restore_defaults_non_numeric_to_zero() {
        assert_eq!(
            restore_position(Some(&record("three")), 5),
            EntryIndex::new(0)
        );
        assert_eq!(restore_position(Some(&record("")), 5), EntryIndex::new(0));
    }

    #[test]
    fn restore_follows_sign_on_overflow() {
        let too_large = "99999999999999999999999999";
        assert_eq!(
            restore_position(Some(&record(too_large)), 5),
            EntryIndex::new(4)
        );

        let too_small = "-99999999999999999999999999";
        assert_eq!(
            restore_position(Some(&record(too_small)), 5),
            EntryIndex::new(0)
        );
    }

    #[test]
    fn restore_trims_whitespace() {
        assert_eq!(restore_position(Some(&record(" 2 ")), 5), EntryIndex::new(2));
    }

    #[test]
    fn progress_label_is_one_based() {
        let entry = EntryDraft::new("你好", "ngi ho").validate().unwrap();
        let snapshot = BrowseSnapshot {
            position: EntryIndex::new(0),
            total: 39,
            entry,
        };
        assert_eq!(snapshot.progress_label(), "1 / 39");
    }
}
