//! Domain-level aliases shared across the protocol implementation.

/// Identifier of a vbucket, the partition unit data is sharded by.
pub type VBucketId = u16;

/// Current UUID of a vbucket. Changes when the vbucket moves on failover,
/// invalidating sequence numbers observed under the previous UUID.
pub type VBucketUuid = u64;

/// Sequence number of a mutation within a vbucket.
pub type SequenceNumber = u64;

/// Number of vbuckets in a default cluster configuration.
pub const VBUCKET_COUNT: u16 = 1024;
