use crate::icon::graphic::IconGraphic;

/// Default on-screen display scale for cursor icons, larger than the
/// [`crate::DEFAULT_GRAPHIC_SIZE`] used for menu graphics.
pub const DEFAULT_CURSOR_SIZE: f64 = 0.04;

/// Identifier of one cursor icon within a catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct IconId(pub u32);

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A data container for one interaction cursor icon.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorIcon {
    /// Unique identifier within the owning catalog.
    pub id: IconId,
    /// Display name.
    pub label: String,
    /// Leave this icon out of interaction cycling.
    pub dont_cycle: bool,
    /// The graphic drawn for this icon.
    pub graphic: IconGraphic,
}

impl CursorIcon {
    /// Build an icon with the default label and cursor display scale.
    pub fn new(id: IconId) -> Self {
        let mut graphic = IconGraphic::still();
        graphic.size = DEFAULT_CURSOR_SIZE;
        Self {
            id,
            label: format!("Icon {}", id.0 + 1),
            dont_cycle: false,
            graphic,
        }
    }

    /// Input-button identifier used to quick-select this icon.
    ///
    /// Spaces are stripped from the label so the result is usable as an
    /// input-manager key; an empty label falls back to the id.
    pub fn button_name(&self) -> String {
        if self.label.is_empty() {
            format!("Icon_{}", self.id)
        } else {
            format!("Icon_{}", self.label.replace(' ', ""))
        }
    }

    /// Copy identity, flags, and graphic from `other`.
    pub fn copy_from(&mut self, other: &CursorIcon) {
        self.id = other.id;
        self.label = other.label.clone();
        self.dont_cycle = other.dont_cycle;
        self.graphic.copy_from(&other.graphic);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/cursor.rs"]
mod tests;
