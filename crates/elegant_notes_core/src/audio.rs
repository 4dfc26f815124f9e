//! Keystroke audio-cue port and throttle.
//!
//! # Responsibility
//! - Define the single-capability playback port injected into the store.
//! - Rate-limit cue playback so fast typing does not overlap sounds.
//!
//! # Invariants
//! - Playback is fire-and-forget: it never blocks or fails a mutation.
//! - At most one cue per [`SOUND_THROTTLE_MS`] of wall-clock time.

/// Minimum wall-clock gap between two audio cues.
pub const SOUND_THROTTLE_MS: i64 = 50;

/// Playback capability implemented by the presentation layer.
pub trait AudioCue {
    /// Plays one short cue. Implementations must not block or panic.
    fn play(&self);
}

/// No-op cue for headless use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudioCue;

impl AudioCue for NullAudioCue {
    fn play(&self) {}
}

/// Wall-clock rate limiter for cue playback.
///
/// Not a lock: two timestamps compared on the single mutation thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoundThrottle {
    last_played_ms: i64,
}

impl SoundThrottle {
    /// Returns `true` and records the play when enough time has passed
    /// since the previous accepted play.
    pub fn try_acquire(&mut self, now_ms: i64) -> bool {
        if now_ms - self.last_played_ms < SOUND_THROTTLE_MS {
            return false;
        }
        self.last_played_ms = now_ms;
        true
    }
}
