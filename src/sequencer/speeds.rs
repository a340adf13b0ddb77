use crate::foundation::error::{FramesheetError, FramesheetResult};

/// Per-frame relative speed multipliers.
///
/// Entry `i` scales the advance rate while frame `i` is showing. Frames
/// without an entry advance at 1.0.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSpeeds {
    multipliers: Vec<f64>,
}

impl FrameSpeeds {
    /// A table of `frames` entries, all 1.0.
    pub fn uniform(frames: u32) -> Self {
        Self {
            multipliers: vec![1.0; frames as usize],
        }
    }

    /// Build a table from explicit multipliers.
    pub fn from_multipliers(multipliers: Vec<f64>) -> FramesheetResult<Self> {
        if multipliers.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(FramesheetError::validation(
                "frame speed multipliers must be finite and >= 0",
            ));
        }
        Ok(Self { multipliers })
    }

    /// Resize to `frames` entries, preserving existing values by index.
    ///
    /// Newly added entries default to 1.0.
    pub fn sync(&mut self, frames: u32) {
        self.multipliers.resize(frames as usize, 1.0);
    }

    /// Multiplier for `frame`; out-of-range reads are 1.0.
    pub fn multiplier(&self, frame: u32) -> f64 {
        self.multipliers.get(frame as usize).copied().unwrap_or(1.0)
    }

    /// Set the multiplier for an existing entry.
    pub fn set(&mut self, frame: u32, multiplier: f64) -> FramesheetResult<()> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(FramesheetError::validation(
                "frame speed multipliers must be finite and >= 0",
            ));
        }
        match self.multipliers.get_mut(frame as usize) {
            Some(slot) => {
                *slot = multiplier;
                Ok(())
            }
            None => Err(FramesheetError::validation(format!(
                "frame {frame} out of range for a {}-entry speed table",
                self.multipliers.len()
            ))),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }

    /// All multipliers in frame order.
    pub fn as_slice(&self) -> &[f64] {
        &self.multipliers
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequencer/speeds.rs"]
mod tests;
