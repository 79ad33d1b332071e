//! Session lifecycle and the script-facing capability surface
//!
//! A session owns the settings and the buffer for one play-through.
//! Scripts address skills by display name; unknown names are silent
//! no-ops so a typo in game content can never take the session down.

use std::path::Path;

use tracing::info;

use crate::buffer::policy::FlushPolicy;
use crate::buffer::ExperienceBuffer;
use crate::core::config::RestSettings;
use crate::core::error::Result;
use crate::core::types::SkillId;
use crate::host::SkillHost;
use crate::persist::{read_snapshot, write_snapshot, SnapshotOutcome};

/// One play-through's worth of banked experience state.
pub struct Session {
    pub settings: RestSettings,
    buffer: ExperienceBuffer,
}

impl Session {
    pub fn new(settings: RestSettings) -> Self {
        Self {
            settings,
            buffer: ExperienceBuffer::new(),
        }
    }

    pub fn with_policy(settings: RestSettings, policy: Box<dyn FlushPolicy + Send>) -> Self {
        Self {
            settings,
            buffer: ExperienceBuffer::with_policy(policy),
        }
    }

    pub fn buffer(&self) -> &ExperienceBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut ExperienceBuffer {
        &mut self.buffer
    }

    // === lifecycle ===

    /// Full reset on host session teardown. Everything banked is
    /// discarded regardless of any pending snapshot, and the flush
    /// policy's per-play-through tracking goes with it.
    pub fn revert(&mut self) {
        self.buffer.revert();
        info!("session reverted, buffer zeroed");
    }

    /// Serialize the buffer for the host's save record.
    pub fn save_snapshot(&self) -> Vec<u8> {
        write_snapshot(&self.buffer)
    }

    /// Restore the buffer from a save record. Malformed records leave
    /// the buffer as it was.
    pub fn load_snapshot(&mut self, bytes: &[u8]) -> SnapshotOutcome {
        read_snapshot(&mut self.buffer, bytes)
    }

    /// Write the snapshot record to a file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.save_snapshot())?;
        Ok(())
    }

    /// Read a snapshot record from a file and apply it.
    pub fn load_from_file(&mut self, path: &Path) -> Result<SnapshotOutcome> {
        let bytes = std::fs::read(path)?;
        Ok(self.load_snapshot(&bytes))
    }

    // === script capability surface ===

    /// Banked points for a named skill; 0.0 for unknown names.
    pub fn buffered_points(&self, skill_name: &str) -> f32 {
        match SkillId::from_name(skill_name) {
            Some(skill) => self.buffer.experience(skill),
            None => 0.0,
        }
    }

    /// Release banked experience for every skill after a rest event.
    /// The scale factor is derived from settings; the buffer itself
    /// never sees rest duration or the interruption flag.
    pub fn flush_rested(&mut self, host: &mut dyn SkillHost, days_rested: f32, interrupted: bool) {
        let scale = self.settings.flush_scale(days_rested, interrupted);
        self.buffer.flush_experience(scale, host);
    }

    /// Per-skill variant of `flush_rested`. Unknown names are no-ops.
    pub fn flush_rested_by_skill(
        &mut self,
        host: &mut dyn SkillHost,
        skill_name: &str,
        days_rested: f32,
        interrupted: bool,
    ) {
        if let Some(skill) = SkillId::from_name(skill_name) {
            let scale = self.settings.flush_scale(days_rested, interrupted);
            self.buffer.flush_experience_by_skill(skill, scale, host);
        }
    }

    /// Scale the whole buffer.
    pub fn multiply(&mut self, factor: f32) {
        self.buffer.mult_experience(factor);
    }

    /// Scale one named skill's accumulator. Unknown names are no-ops.
    pub fn multiply_by_skill(&mut self, skill_name: &str, factor: f32) {
        if let Some(skill) = SkillId::from_name(skill_name) {
            self.buffer.mult_experience_by_skill(skill, factor);
        }
    }

    /// Discard everything banked.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Discard one named skill's banked points. Unknown names are
    /// no-ops.
    pub fn clear_by_skill(&mut self, skill_name: &str) {
        if let Some(skill) = SkillId::from_name(skill_name) {
            self.buffer.clear_by_skill(skill);
        }
    }
}
