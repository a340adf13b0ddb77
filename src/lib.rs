//! Framesheet is a deterministic sprite-sheet frame sequencing engine.
//!
//! Framesheet v0.2 turns host-supplied clock deltas into animation frame indices and
//! normalized texture rectangles for grid-packed sprite sheets (animated cursors, icons,
//! menu graphics).
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `FrameGrid + PlaybackPolicy + FrameSpeeds -> FrameSequencer`
//! 2. **Advance**: once per host tick, `FrameSequencer::advance(delta_secs)`
//! 3. **Query**: `FrameSequencer::current_rect() -> NormalizedRect` (which slice to draw)
//! 4. **Cache** (optional, host-side): sliced frames keyed by [`FrameKey`]
//!
//! The key design constraints in v0.2:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical configuration and delta sequences produce
//!   bit-for-bit identical frame times and rectangles.
//! - **Never fail the frame loop**: the tick path degrades to a visible static frame on
//!   bad configuration instead of returning errors or panicking.
//! - **No pixels**: rectangle coordinates are normalized `[0, 1]`; all texture sampling
//!   and drawing stay with the host renderer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod icon;
mod sequencer;

pub use foundation::core::{FrameGrid, FrameKey, NormalizedRect, Point, Rect, Vec2};
pub use foundation::error::{FramesheetError, FramesheetResult};
pub use icon::catalog::IconCatalog;
pub use icon::cursor::{CursorIcon, DEFAULT_CURSOR_SIZE, IconId};
pub use icon::graphic::{DEFAULT_GRAPHIC_SIZE, IconGraphic};
pub use sequencer::clock::{NOMINAL_TICK_SECS, sanitize_delta};
pub use sequencer::speeds::FrameSpeeds;
pub use sequencer::state::{FrameSequencer, PlaybackPolicy};
