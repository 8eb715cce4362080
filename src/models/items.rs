use super::common::{
    ApiResource, Description, Effect, GenerationGameIndex, MachineVersionDetail, Name,
    NamedApiResource, VerboseEffect, VersionGroupFlavorText,
};
use crate::resource::Resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub cost: i64,
    /// `None` when the item cannot be flung.
    pub fling_power: Option<i64>,
    pub fling_effect: Option<NamedApiResource>,
    pub attributes: Vec<NamedApiResource>,
    pub category: NamedApiResource,
    pub effect_entries: Vec<VerboseEffect>,
    pub flavor_text_entries: Vec<VersionGroupFlavorText>,
    pub game_indices: Vec<GenerationGameIndex>,
    pub names: Vec<Name>,
    pub sprites: ItemSprites,
    pub held_by_pokemon: Vec<ItemHolderPokemon>,
    pub baby_trigger_for: Option<ApiResource>,
    pub machines: Vec<MachineVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSprites {
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemon {
    pub pokemon: NamedApiResource,
    pub version_details: Vec<ItemHolderPokemonVersionDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemHolderPokemonVersionDetail {
    pub rarity: i64,
    pub version: NamedApiResource,
}

/// A trait shared by a set of items, e.g. "countable" or "holdable".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub descriptions: Vec<Description>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: i64,
    pub name: String,
    pub items: Vec<NamedApiResource>,
    pub names: Vec<Name>,
    pub pocket: NamedApiResource,
}

/// What happens when an item is used with the move Fling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlingEffect {
    pub id: i64,
    pub name: String,
    pub effect_entries: Vec<Effect>,
    pub items: Vec<NamedApiResource>,
}

/// A bag pocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPocket {
    pub id: i64,
    pub name: String,
    pub categories: Vec<NamedApiResource>,
    pub names: Vec<Name>,
}

impl Resource for Item {
    const KIND: &'static str = "item";
}

impl Resource for ItemAttribute {
    const KIND: &'static str = "item-attribute";
}

impl Resource for ItemCategory {
    const KIND: &'static str = "item-category";
}

impl Resource for ItemFlingEffect {
    const KIND: &'static str = "item-fling-effect";
}

impl Resource for ItemPocket {
    const KIND: &'static str = "item-pocket";
}
