use serde::{Deserialize, Serialize};

/// A reference to another resource, by name and URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// A reference to a resource that has no name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    pub url: String,
}

/// One page of a resource listing.
///
/// `count` is the total across all pages; `next` and `previous` are absolute
/// URLs, absent at the ends of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedApiResource>,
}

impl NamedApiResourceList {
    /// Returns `true` if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A localized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub description: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerboseEffect {
    pub effect: String,
    pub short_effect: String,
    pub language: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionGroupFlavorText {
    pub text: String,
    pub language: NamedApiResource,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationGameIndex {
    pub game_index: i64,
    pub generation: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineVersionDetail {
    pub machine: ApiResource,
    pub version_group: NamedApiResource,
}
