use std::collections::BTreeMap;

use derive_more::Constructor;
use serde_json::{json, Map, Value};

use crate::request::{RequestBody, Serialize};
use crate::types::{SequenceNumber, VBucketId, VBucketUuid};

/// Request body field carrying the scan vector.
pub const SCAN_VECTOR: &str = "scan_vector";

/// A single mutation point: the sequence number observed in a vbucket,
/// guarded by the vbucket UUID current at observation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct ScanVectorEntry {
    pub sequence_number: SequenceNumber,
    pub vbucket_uuid: VBucketUuid,
}

impl ScanVectorEntry {
    /// Body form of the entry. The guard is rendered as a decimal string.
    fn to_value(self) -> Value {
        json!({
            "value": self.sequence_number,
            "guard": self.vbucket_uuid.to_string(),
        })
    }
}

/// Per-vbucket mutation points pinning a query to `at_plus` consistency.
///
/// Entries are keyed by vbucket id; the encoded form uses the id rendered
/// as a decimal string. Keys are kept ordered so repeated encodes of the
/// same request are identical.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanVector {
    entries: BTreeMap<VBucketId, ScanVectorEntry>,
}

impl ScanVector {
    pub fn new() -> Self {
        Default::default()
    }

    /// Records a mutation point for `vbucket_id`. An existing entry for the
    /// same vbucket is overwritten, never duplicated.
    pub fn insert(&mut self, vbucket_id: VBucketId, entry: ScanVectorEntry) {
        self.entries.insert(vbucket_id, entry);
    }

    pub fn get(&self, vbucket_id: VBucketId) -> Option<&ScanVectorEntry> {
        self.entries.get(&vbucket_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VBucketId, &ScanVectorEntry)> {
        self.entries.iter()
    }
}

impl Serialize for ScanVector {
    fn serialize(&self, body: &mut RequestBody) {
        let entries = self
            .entries
            .iter()
            .map(|(vbucket_id, entry)| (vbucket_id.to_string(), entry.to_value()))
            .collect::<Map<String, Value>>();

        body.insert(SCAN_VECTOR.into(), Value::Object(entries));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_overwrites_same_vbucket() {
        let mut scan_vector = ScanVector::new();
        scan_vector.insert(42, ScanVectorEntry::new(3, 3004));
        scan_vector.insert(42, ScanVectorEntry::new(4, 3004));

        assert_eq!(scan_vector.len(), 1);
        assert_eq!(scan_vector.get(42), Some(&ScanVectorEntry::new(4, 3004)));
    }

    #[test]
    fn test_distinct_vbuckets_accumulate() {
        let mut scan_vector = ScanVector::new();
        scan_vector.insert(42, ScanVectorEntry::new(3, 3004));
        scan_vector.insert(91, ScanVectorEntry::new(23, 7779));

        assert_eq!(scan_vector.len(), 2);
    }

    #[test]
    fn test_serialize_renders_guard_as_string() {
        let mut scan_vector = ScanVector::new();
        scan_vector.insert(42, ScanVectorEntry::new(3, 3004));

        let body = scan_vector.serialize_to_body();
        assert_eq!(
            body[SCAN_VECTOR],
            json!({"42": {"value": 3, "guard": "3004"}})
        );
    }
}
