use derive_more::Constructor;
use fxhash::FxHashMap;
use tracing::debug;

use n1ql_protocol::query::QueryParams;
use n1ql_protocol::types::{SequenceNumber, VBucketId, VBucketUuid};

/// A mutation point observed on a vbucket, as carried by a mutation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct MutationToken {
    pub vbucket_id: VBucketId,
    pub vbucket_uuid: VBucketUuid,
    pub sequence_number: SequenceNumber,
}

/// The set of mutations a query must observe, at most one token per
/// vbucket. When two tokens for the same vbucket are added, the one with
/// the higher sequence number is kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationState {
    tokens: FxHashMap<VBucketId, MutationToken>,
}

impl MutationState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a token. A token not newer than the one already recorded for
    /// its vbucket is ignored.
    pub fn add_token(&mut self, token: MutationToken) {
        match self.tokens.get(&token.vbucket_id) {
            Some(existing) if existing.sequence_number >= token.sequence_number => {
                debug!(vbucket_id = token.vbucket_id, "Ignoring stale mutation token.");
            }
            _ => {
                self.tokens.insert(token.vbucket_id, token);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &MutationToken> {
        self.tokens.values()
    }

    /// Translates the tokens into scan-vector entries on `params`, pinning
    /// it to `at_plus` consistency.
    pub fn apply(&self, params: &mut QueryParams) {
        for token in self.tokens.values() {
            params.add_scan_vector_entry(
                token.vbucket_id,
                token.vbucket_uuid,
                token.sequence_number,
            );
        }
    }
}

impl Extend<MutationToken> for MutationState {
    fn extend<I: IntoIterator<Item = MutationToken>>(&mut self, iter: I) {
        for token in iter {
            self.add_token(token);
        }
    }
}
