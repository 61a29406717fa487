//! Component schema metadata.
//!
//! Static descriptions of the reusable content components registered with
//! the CMS. They serialize to the CMS's `schema.json` layout; validating
//! content against them is the CMS's job, not ours.

use indexmap::IndexMap;
use serde::Serialize;
use crate::{ComponentUid, MediaKind};

/// A single component definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    /// Registry key (`category.name`); not part of the schema body
    #[serde(skip)]
    pub uid: ComponentUid,
    /// Database table backing the component
    pub collection_name: String,
    /// Admin panel presentation
    pub info: ComponentInfo,
    /// Component options (always empty for the built-in components)
    pub options: IndexMap<String, serde_json::Value>,
    /// Field name to attribute definition, in display order
    pub attributes: IndexMap<String, Attribute>,
}

/// Admin panel presentation of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInfo {
    /// Human-readable name
    pub display_name: String,
    /// Icon identifier
    pub icon: String,
}

/// Field kinds used by the built-in components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Attribute {
    /// Upload field
    Media {
        /// Whether more than one file may be attached
        multiple: bool,
        /// Accepted media kinds
        #[serde(rename = "allowedTypes")]
        allowed_types: Vec<MediaKind>,
    },
    /// Rich-text blocks field
    Blocks,
}

impl ComponentSchema {
    fn new(uid: ComponentUid, collection_name: &str, display_name: &str, icon: &str) -> Self {
        Self {
            uid,
            collection_name: collection_name.to_string(),
            info: ComponentInfo {
                display_name: display_name.to_string(),
                icon: icon.to_string(),
            },
            options: IndexMap::new(),
            attributes: IndexMap::new(),
        }
    }

    fn with_attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_string(), attribute);
        self
    }
}

/// The components shipped with the CMS install, in registration order.
pub fn builtin_components() -> Vec<ComponentSchema> {
    vec![
        ComponentSchema::new(
            ComponentUid("images.single-image".to_string()),
            "components_images_single_images",
            "Single Image",
            "picture",
        )
        .with_attribute(
            "Image",
            Attribute::Media {
                multiple: false,
                allowed_types: MediaKind::ALL.to_vec(),
            },
        ),
        ComponentSchema::new(
            ComponentUid("text.text".to_string()),
            "components_text_texts",
            "Text",
            "file",
        )
        .with_attribute("Text", Attribute::Blocks),
    ]
}
