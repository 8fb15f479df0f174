use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Filter value that matches every item.
pub const ALL_FILTER: &str = "all";
pub const DEFAULT_NOUN: &str = "Item";

/// Where configuration lives: the project's `.vitrine/` or the user-wide
/// data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The category a collection is currently narrowed to.
///
/// `"all"` (and the empty string, which is what a control without a filter
/// value yields) parse to [`FilterSelection::All`]; anything else is taken
/// verbatim as a tag. No validation happens: an unknown tag is a valid
/// selection that simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Tag(String),
}

impl FilterSelection {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_FILTER {
            FilterSelection::All
        } else {
            FilterSelection::Tag(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL_FILTER,
            FilterSelection::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterSelection::All)
    }
}

impl From<&str> for FilterSelection {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for FilterSelection {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single entry of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    // Either `["floral", "woody"]` or the page-attribute form `"floral woody"`
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    pub fn new<I, T>(id: impl Into<String>, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            tags: normalize_tags(tags.into_iter().map(Into::into)),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Number of items carrying a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// An ordered collection of items plus the noun used to talk about them
/// ("Show 4 More Fragrances").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default = "default_noun")]
    pub noun: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

fn default_noun() -> String {
    DEFAULT_NOUN.to_string()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            noun: default_noun(),
            items: Vec::new(),
        }
    }
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            noun: default_noun(),
            items,
        }
    }

    pub fn with_noun(mut self, noun: impl Into<String>) -> Self {
        self.noun = noun.into();
        self
    }

    /// Distinct tags in the order they first appear, with their item counts.
    pub fn tag_counts(&self) -> Vec<TagCount> {
        let mut counts: Vec<TagCount> = Vec::new();
        for tag in self.items.iter().flat_map(|item| item.tags.iter()) {
            match counts.iter_mut().find(|c| &c.tag == tag) {
                Some(existing) => existing.count += 1,
                None => counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                }),
            }
        }
        counts
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    Joined(String),
    List(Vec<String>),
}

fn deserialize_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let tags = match TagsRepr::deserialize(deserializer)? {
        TagsRepr::Joined(joined) => normalize_tags(joined.split_whitespace().map(str::to_string)),
        TagsRepr::List(list) => normalize_tags(list),
    };
    Ok(tags)
}

/// Trims, drops empties and removes duplicates, keeping first-seen order.
fn normalize_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}
