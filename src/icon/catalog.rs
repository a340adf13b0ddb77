use crate::foundation::error::{FramesheetError, FramesheetResult};
use crate::icon::cursor::{CursorIcon, IconId};

/// Ordered collection of interaction cursor icons.
///
/// Ids are unique within a catalog; insertion order is display order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IconCatalog {
    icons: Vec<CursorIcon>,
}

impl IconCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Icons in display order.
    pub fn icons(&self) -> &[CursorIcon] {
        &self.icons
    }

    /// Number of icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Whether the catalog holds no icons.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Add an icon, rejecting duplicate ids.
    pub fn add(&mut self, icon: CursorIcon) -> FramesheetResult<()> {
        if self.get(icon.id).is_some() {
            return Err(FramesheetError::validation(format!(
                "icon id {} already taken",
                icon.id
            )));
        }
        self.icons.push(icon);
        Ok(())
    }

    /// Add a fresh icon under the smallest id not already taken.
    pub fn add_with_unique_id(&mut self) -> IconId {
        let id = self.next_free_id();
        self.icons.push(CursorIcon::new(id));
        id
    }

    fn next_free_id(&self) -> IconId {
        let mut taken: Vec<u32> = self.icons.iter().map(|icon| icon.id.0).collect();
        taken.sort_unstable();
        let mut candidate = 0u32;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        IconId(candidate)
    }

    /// Look up an icon by id.
    pub fn get(&self, id: IconId) -> Option<&CursorIcon> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// Mutably look up an icon by id.
    pub fn get_mut(&mut self, id: IconId) -> Option<&mut CursorIcon> {
        self.icons.iter_mut().find(|icon| icon.id == id)
    }

    /// Look up an icon by display label.
    pub fn by_label(&self, label: &str) -> Option<&CursorIcon> {
        self.icons.iter().find(|icon| icon.label == label)
    }

    /// Remove an icon by id; true when something was removed.
    pub fn remove(&mut self, id: IconId) -> bool {
        let before = self.icons.len();
        self.icons.retain(|icon| icon.id != id);
        self.icons.len() != before
    }

    /// Serialize the catalog to pretty JSON.
    pub fn to_json(&self) -> FramesheetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FramesheetError::serde(e.to_string()))
    }

    /// Parse a catalog from JSON, re-validating id uniqueness.
    #[tracing::instrument(skip(json))]
    pub fn from_json(json: &str) -> FramesheetResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| FramesheetError::serde(e.to_string()))?;
        for (i, icon) in catalog.icons.iter().enumerate() {
            if catalog.icons[..i].iter().any(|other| other.id == icon.id) {
                return Err(FramesheetError::validation(format!(
                    "icon id {} already taken",
                    icon.id
                )));
            }
        }
        Ok(catalog)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/catalog.rs"]
mod tests;
