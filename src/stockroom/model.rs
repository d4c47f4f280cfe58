use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};

/// One inventory record as persisted by the collection backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Filename inside the photo directory. Never leaves the process.
    #[serde(default)]
    pub photo: Option<String>,
}

impl Item {
    pub fn new(id: u64, fields: NewItem, photo: Option<String>) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            photo,
        }
    }
}

/// Validated input for `register`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
}

impl NewItem {
    pub fn new(name: Option<String>, description: Option<String>) -> Result<Self> {
        let name = match name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(InventoryError::validation("name is required")),
        };
        Ok(Self {
            name,
            description: description.unwrap_or_default(),
        })
    }
}

/// Partial update. Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemChanges {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(InventoryError::validation("name cannot be empty"));
            }
        }
        Ok(())
    }

    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}

/// Public projection of an [`Item`]: the raw filename is replaced by the
/// path the photo is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub photo: Option<String>,
}

impl ItemView {
    pub fn from_item(item: &Item, include_photo: bool) -> Self {
        let photo = match &item.photo {
            Some(_) if include_photo => Some(photo_path(item.id)),
            _ => None,
        };
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            photo,
        }
    }
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        ItemView::from_item(item, true)
    }
}

pub fn photo_path(id: u64) -> String {
    format!("/inventory/{}/photo", id)
}

/// Parse an item id as received from a client.
pub fn parse_id(raw: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| InventoryError::validation(format!("invalid item id: {:?}", raw)))
}
