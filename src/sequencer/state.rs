use crate::foundation::core::{FrameGrid, FrameKey, NormalizedRect};
use crate::sequencer::speeds::FrameSpeeds;

/// Loop and rate policy for one animated sheet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackPolicy {
    /// Wrap back to the start when the last frame is passed. When false,
    /// playback freezes on the last frame instead.
    pub looping: bool,
    /// When looping, never revisit frame 0 after the first pass; each wrap
    /// restarts at frame 1.
    pub skip_first_frame_on_loop: bool,
    /// Global advance rate in frames per second. Negative values are treated
    /// as 0 (no reverse playback).
    pub base_speed: f64,
}

impl Default for PlaybackPolicy {
    fn default() -> Self {
        Self {
            looping: true,
            skip_first_frame_on_loop: false,
            base_speed: 4.0,
        }
    }
}

/// Tick-driven state machine mapping elapsed host time to sprite-sheet frames.
///
/// One sequencer owns the playback state of one animated graphic. The host
/// calls [`FrameSequencer::advance`] once per update tick and draws whatever
/// [`FrameSequencer::current_rect`] returns; instances are independent and
/// fully deterministic for a given configuration and delta sequence.
///
/// A sequencer built over an invalid grid degrades instead of failing: it logs
/// one warning per reset, always reports frame 0, and never advances.
#[derive(Clone, Debug)]
pub struct FrameSequencer {
    grid: FrameGrid,
    policy: PlaybackPolicy,
    speeds: FrameSpeeds,
    frame_time: f64,
    frame_width: f64,
    frame_height: f64,
    enabled: bool,
}

impl FrameSequencer {
    /// Build a sequencer with a uniform speed table.
    pub fn new(grid: FrameGrid, policy: PlaybackPolicy) -> Self {
        Self::with_speeds(grid, policy, FrameSpeeds::uniform(grid.frames))
    }

    /// Build a sequencer with an explicit speed table.
    ///
    /// The table is re-synced to the grid's frame count.
    pub fn with_speeds(grid: FrameGrid, policy: PlaybackPolicy, mut speeds: FrameSpeeds) -> Self {
        speeds.sync(grid.frames);
        let mut seq = Self {
            grid,
            policy,
            speeds,
            frame_time: 0.0,
            frame_width: 1.0,
            frame_height: 1.0,
            enabled: false,
        };
        seq.reset();
        seq
    }

    /// Advance playback by `delta_secs` of host time.
    ///
    /// The fractional frame position grows by
    /// `delta * base_speed * multiplier(current frame)`. Negative deltas are
    /// treated as 0 and a zero delta advances nothing (see
    /// [`crate::sanitize_delta`] for hosts that want a nominal substitute).
    /// After advancing, a non-looping sequencer at or past the last frame
    /// clamps there; a looping one past the end wraps to frame 1 when
    /// skip-first is set (and more than one frame exists), else to frame 0.
    pub fn advance(&mut self, delta_secs: f64) {
        if !self.enabled {
            return;
        }
        let frames = f64::from(self.grid.frames);
        let last = frames - 1.0;
        if !self.policy.looping && self.frame_time >= last {
            // Frozen on the final frame.
            self.frame_time = last;
            return;
        }

        let delta = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };
        let rate = self.policy.base_speed.max(0.0) * self.speeds.multiplier(self.current_frame());
        self.frame_time += delta * rate;

        if !self.policy.looping {
            if self.frame_time >= last {
                self.frame_time = last;
            }
        } else if self.frame_time >= frames {
            self.frame_time = if self.policy.skip_first_frame_on_loop && self.grid.frames > 1 {
                1.0
            } else {
                0.0
            };
        }
    }

    /// Index of the frame currently showing.
    pub fn current_frame(&self) -> u32 {
        if !self.enabled {
            return 0;
        }
        let floored = self.frame_time.floor().max(0.0) as u32;
        floored.min(self.grid.frames - 1)
    }

    /// Fractional frame position accumulated so far.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Whether the configuration allowed playback to start.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Rectangle of the frame currently showing.
    pub fn current_rect(&self) -> NormalizedRect {
        if !self.enabled {
            return self.fallback_rect();
        }
        self.grid.cell_rect(self.current_frame())
    }

    /// Rectangle for a caller-supplied frame index, for pre-cached lookups.
    ///
    /// Negative indices delegate to the live frame; indices past the end map
    /// to frame 0. Never panics.
    pub fn rect_for_frame(&self, index: i64) -> NormalizedRect {
        if index < 0 {
            return self.current_rect();
        }
        if !self.enabled {
            return self.fallback_rect();
        }
        let index = if index >= i64::from(self.grid.frames) {
            0
        } else {
            index as u32
        };
        self.grid.cell_rect(index)
    }

    /// Rectangle of frame 0.
    pub fn first_frame_rect(&self) -> NormalizedRect {
        if !self.enabled {
            return self.fallback_rect();
        }
        self.grid.cell_rect(0)
    }

    /// Cache key for the frame currently showing.
    pub fn frame_key(&self, texture: u64) -> FrameKey {
        FrameKey {
            texture,
            frame: self.current_frame(),
        }
    }

    /// The configured grid.
    pub fn grid(&self) -> FrameGrid {
        self.grid
    }

    /// The configured policy.
    pub fn policy(&self) -> PlaybackPolicy {
        self.policy
    }

    /// Borrow the per-frame speed table.
    pub fn speeds(&self) -> &FrameSpeeds {
        &self.speeds
    }

    /// Mutably borrow the per-frame speed table.
    pub fn speeds_mut(&mut self) -> &mut FrameSpeeds {
        &mut self.speeds
    }

    /// Swap the grid, re-sync the speed table, and restart playback.
    pub fn set_grid(&mut self, grid: FrameGrid) {
        self.grid = grid;
        self.speeds.sync(grid.frames);
        self.reset();
    }

    /// Replace the policy flags and restart playback.
    pub fn set_policy(&mut self, policy: PlaybackPolicy) {
        self.policy = policy;
        self.reset();
    }

    /// Restart playback from frame 0, recomputing cell geometry.
    ///
    /// This is also the deactivation hook: hosts call it when the animated
    /// element stops being active so the next activation starts on the first
    /// frame. An invalid grid disables the sequencer until reconfigured.
    pub fn reset(&mut self) {
        self.frame_time = 0.0;
        if self.grid.is_valid() {
            self.frame_width = self.grid.frame_width();
            self.frame_height = self.grid.frame_height();
            self.enabled = true;
        } else {
            tracing::warn!(
                frames = self.grid.frames,
                rows = self.grid.rows,
                cols = self.grid.cols,
                "invalid frame grid; sequencer disabled until reconfigured"
            );
            self.enabled = false;
        }
    }

    // First-frame rectangle from the last known-good cell geometry; the full
    // texture before any valid reset.
    fn fallback_rect(&self) -> NormalizedRect {
        NormalizedRect {
            x: 0.0,
            y: 1.0 - self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/state.rs"]
mod tests;
