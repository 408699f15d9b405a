//! Component instances, their typed settings and capability tags.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// One placed occurrence of a component on a page, after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    /// Unique within its page.
    pub id: String,
    /// Registry key this instance was validated against.
    pub component_key: String,
    pub title: String,
    pub settings: ComponentSettings,
    /// Render sequence among siblings, ascending.
    pub order: i64,
    pub is_visible: bool,
}

/// Validated settings, one variant per built-in component plus an escape hatch for
/// components declared through a manifest.
///
/// Serialized untagged: the owning [`ComponentInstance::component_key`] already names
/// the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentSettings {
    Header(HeaderSettings),
    Hero(HeroSettings),
    RichText(RichTextSettings),
    Gallery(GallerySettings),
    Footer(FooterSettings),
    Custom(Map<String, Value>),
}

impl ComponentSettings {
    /// Short name of the variant, used in logs and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Header(_) => "header",
            Self::Hero(_) => "hero",
            Self::RichText(_) => "rich-text",
            Self::Gallery(_) => "gallery",
            Self::Footer(_) => "footer",
            Self::Custom(_) => "custom",
        }
    }
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self::Custom(Map::new())
    }
}

macro_rules! settings_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ComponentSettings {
                fn from(settings: $ty) -> Self {
                    Self::$variant(settings)
                }
            }
        )*
    };
}

settings_from! {
    Header => HeaderSettings,
    Hero => HeroSettings,
    RichText => RichTextSettings,
    Gallery => GallerySettings,
    Footer => FooterSettings,
    Custom => Map<String, Value>,
}

/// A navigation or call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderSettings {
    pub logo: Option<String>,
    pub sticky: bool,
    pub menu: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroSettings {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub background_image: Option<String>,
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Markdown,
    Html,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RichTextSettings {
    pub content: String,
    #[serde(default)]
    pub format: TextFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GallerySettings {
    pub images: Vec<GalleryImage>,
    pub columns: u8,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self { images: Vec::new(), columns: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterSettings {
    pub copyright: Option<String>,
    pub links: Vec<Link>,
}

/// Feature tags a component declares, kept sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.0.insert(tag.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
