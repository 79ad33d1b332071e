//! Versioned buffer snapshots
//!
//! The banked experience must survive the host's save/load cycle. The
//! record is a little-endian u32 version tag followed by exactly
//! `SKILL_COUNT` little-endian f32 accumulators, copied verbatim, so a
//! round trip is bit-exact. Unknown versions and wrong lengths are
//! treated as an absent record: the buffer is never partially
//! populated.

use tracing::{info, warn};

use crate::buffer::ExperienceBuffer;
use crate::core::types::SKILL_COUNT;

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

const TAG_LEN: usize = 4;
const PAYLOAD_LEN: usize = SKILL_COUNT * 4;

/// What happened when a snapshot was offered to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// Record decoded and applied.
    Applied,
    /// Version tag did not match; buffer untouched.
    VersionMismatch { found: u32 },
    /// Record too short to even carry a version tag; buffer untouched.
    Truncated,
    /// Payload length does not match the skill table; buffer untouched.
    LengthMismatch { found: usize },
}

/// Serialize the buffer into a version-1 snapshot record.
pub fn write_snapshot(buffer: &ExperienceBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(TAG_LEN + PAYLOAD_LEN);
    bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
    for value in buffer.raw_points() {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Decode a snapshot record into the buffer.
///
/// Any malformed record leaves the buffer exactly as it was; the
/// outcome says why. Callers treat every outcome as success (the
/// record is simply absent), which is why this does not return a
/// `Result`.
pub fn read_snapshot(buffer: &mut ExperienceBuffer, bytes: &[u8]) -> SnapshotOutcome {
    if bytes.len() < TAG_LEN {
        warn!(len = bytes.len(), "snapshot record truncated");
        return SnapshotOutcome::Truncated;
    }

    let (tag, payload) = bytes.split_at(TAG_LEN);
    let version = u32::from_le_bytes([tag[0], tag[1], tag[2], tag[3]]);

    if version != SNAPSHOT_VERSION {
        warn!(
            found = version,
            expected = SNAPSHOT_VERSION,
            "snapshot version mismatch, record ignored"
        );
        return SnapshotOutcome::VersionMismatch { found: version };
    }

    if payload.len() != PAYLOAD_LEN {
        warn!(
            found = payload.len(),
            expected = PAYLOAD_LEN,
            "snapshot payload length mismatch, record ignored"
        );
        return SnapshotOutcome::LengthMismatch {
            found: payload.len(),
        };
    }

    let mut points = [0.0f32; SKILL_COUNT];
    for (i, chunk) in payload.chunks_exact(4).enumerate() {
        points[i] = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    buffer.set_raw_points(points);
    info!("snapshot applied");
    SnapshotOutcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SkillId;

    #[test]
    fn test_round_trip_is_bit_exact() {
        let mut buf = ExperienceBuffer::new();
        buf.add_experience(SkillId::Melee, 123.456);
        buf.add_experience(SkillId::Enchanting, 0.1 + 0.2);
        buf.add_experience(SkillId::Sneak, -7.5);

        let bytes = write_snapshot(&buf);
        assert_eq!(bytes.len(), TAG_LEN + PAYLOAD_LEN);

        let mut restored = ExperienceBuffer::new();
        assert_eq!(read_snapshot(&mut restored, &bytes), SnapshotOutcome::Applied);

        for skill in SkillId::ALL {
            assert_eq!(
                buf.experience(skill).to_bits(),
                restored.experience(skill).to_bits()
            );
        }
    }

    #[test]
    fn test_version_mismatch_leaves_buffer_untouched() {
        let mut donor = ExperienceBuffer::new();
        donor.add_experience(SkillId::Melee, 42.0);
        let mut bytes = write_snapshot(&donor);
        bytes[0..4].copy_from_slice(&2u32.to_le_bytes());

        let mut buf = ExperienceBuffer::new();
        assert_eq!(
            read_snapshot(&mut buf, &bytes),
            SnapshotOutcome::VersionMismatch { found: 2 }
        );
        for skill in SkillId::ALL {
            assert_eq!(buf.experience(skill), 0.0);
        }
    }

    #[test]
    fn test_short_record_is_rejected() {
        let mut buf = ExperienceBuffer::new();
        assert_eq!(read_snapshot(&mut buf, &[1, 0]), SnapshotOutcome::Truncated);
        assert_eq!(read_snapshot(&mut buf, &[]), SnapshotOutcome::Truncated);
    }

    #[test]
    fn test_wrong_payload_length_is_rejected() {
        let donor = ExperienceBuffer::new();
        let mut bytes = write_snapshot(&donor);
        bytes.pop();

        let mut buf = ExperienceBuffer::new();
        buf.add_experience(SkillId::Lore, 9.0);
        let outcome = read_snapshot(&mut buf, &bytes);
        assert_eq!(
            outcome,
            SnapshotOutcome::LengthMismatch {
                found: PAYLOAD_LEN - 1
            }
        );
        // Pre-existing state survives a bad record
        assert_eq!(buf.experience(SkillId::Lore), 9.0);
    }
}
