use super::common::{Name, NamedApiResource};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// A berry: a small fruit that restores HP or cures status when eaten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Berry {
    pub id: i64,
    pub name: String,
    /// Hours for the tree to grow one stage.
    pub growth_time: i64,
    pub max_harvest: i64,
    pub natural_gift_power: i64,
    /// Size in millimeters.
    pub size: i64,
    pub smoothness: i64,
    pub soil_dryness: i64,
    pub firmness: NamedApiResource,
    pub flavors: Vec<BerryFlavorMap>,
    pub item: NamedApiResource,
    pub natural_gift_type: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavorMap {
    pub potency: i64,
    pub flavor: NamedApiResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFirmness {
    pub id: i64,
    pub name: String,
    pub berries: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BerryFlavor {
    pub id: i64,
    pub name: String,
    pub berries: Vec<FlavorBerryMap>,
    pub contest_type: NamedApiResource,
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorBerryMap {
    pub potency: i64,
    pub berry: NamedApiResource,
}

impl Resource for Berry {
    const KIND: &'static str = "berry";
}

impl Resource for BerryFirmness {
    const KIND: &'static str = "berry-firmness";
}

impl Resource for BerryFlavor {
    const KIND: &'static str = "berry-flavor";
}
