use crate::foundation::core::{FrameGrid, Vec2};
use crate::sequencer::speeds::FrameSpeeds;
use crate::sequencer::state::{FrameSequencer, PlaybackPolicy};

/// Default on-screen display scale for menu graphics.
pub const DEFAULT_GRAPHIC_SIZE: f64 = 0.015;

/// Serializable configuration for one animated menu or cursor graphic.
///
/// Pure data: runtime playback state lives in the [`FrameSequencer`] built by
/// [`IconGraphic::sequencer`]. The texture itself stays with the host; this
/// only describes how its frames are packed and played.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconGraphic {
    /// Whether the texture holds multiple animation frames.
    pub animated: bool,
    /// Frame packing, when animated.
    pub grid: FrameGrid,
    /// Loop and rate flags.
    pub policy: PlaybackPolicy,
    /// Per-frame relative speed multipliers.
    pub speeds: FrameSpeeds,
    /// On-screen display scale.
    pub size: f64,
    /// Hot-point offset from the drawn rectangle, in frame-size units.
    pub click_offset: Vec2,
}

impl IconGraphic {
    /// A static single-frame graphic.
    pub fn still() -> Self {
        Self {
            animated: false,
            grid: FrameGrid::single(),
            policy: PlaybackPolicy::default(),
            speeds: FrameSpeeds::default(),
            size: DEFAULT_GRAPHIC_SIZE,
            click_offset: Vec2::ZERO,
        }
    }

    /// An animated graphic over `grid`, with a uniform speed table.
    pub fn animated(grid: FrameGrid) -> Self {
        Self {
            animated: true,
            grid,
            speeds: FrameSpeeds::uniform(grid.frames),
            ..Self::still()
        }
    }

    /// Build the runtime sequencer for this configuration.
    ///
    /// A non-animated graphic sequences as a single still frame.
    pub fn sequencer(&self) -> FrameSequencer {
        if self.animated {
            FrameSequencer::with_speeds(self.grid, self.policy, self.speeds.clone())
        } else {
            FrameSequencer::new(FrameGrid::single(), self.policy)
        }
    }

    /// Copy every field from `other`, re-syncing the speed table to the grid.
    pub fn copy_from(&mut self, other: &IconGraphic) {
        *self = other.clone();
        self.speeds.sync(self.grid.frames);
    }
}

impl Default for IconGraphic {
    fn default() -> Self {
        Self::still()
    }
}
