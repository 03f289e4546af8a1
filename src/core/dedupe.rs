//! Merge records that share a msgid.

use indexmap::IndexMap;

use crate::core::StringRecord;
use crate::issues::PluralConflictIssue;

/// Deduplicated records plus the plural conflicts found while merging.
#[derive(Debug, Default)]
pub struct Deduped {
    pub records: Vec<StringRecord>,
    pub conflicts: Vec<PluralConflictIssue>,
}

/// Merge records sharing the same `msgid`, in first-seen order.
///
/// Locations of later records are appended to the first record's list.
/// The first record's `msgid_plural` always wins; every later record that
/// disagrees produces a [`PluralConflictIssue`] pointing at its first location.
pub fn dedupe_records(records: Vec<StringRecord>) -> Deduped {
    let mut seen: IndexMap<String, StringRecord> = IndexMap::new();
    let mut conflicts = Vec::new();

    for record in records {
        match seen.get_mut(&record.msgid) {
            Some(existing) => {
                if existing.msgid_plural != record.msgid_plural
                    && let Some(location) = record.locations.first()
                {
                    conflicts.push(PluralConflictIssue {
                        location: location.clone(),
                        msgid: record.msgid.clone(),
                        kept: existing.msgid_plural.clone(),
                        conflicting: record.msgid_plural.clone(),
                    });
                }
                existing.locations.extend(record.locations);
            }
            None => {
                seen.insert(record.msgid.clone(), record);
            }
        }
    }

    Deduped {
        records: seen.into_values().collect(),
        conflicts,
    }
}
