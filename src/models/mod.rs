//! Typed shapes of PokéAPI responses.
//!
//! Field names follow the JSON exactly. Unknown fields are ignored; a missing
//! required field fails decoding. Fields the service may send as `null` are
//! `Option`s.

mod berries;
mod common;
mod items;

pub use berries::{Berry, BerryFirmness, BerryFlavor, BerryFlavorMap, FlavorBerryMap};
pub use common::{
    ApiResource, Description, Effect, GenerationGameIndex, MachineVersionDetail, Name,
    NamedApiResource, NamedApiResourceList, VerboseEffect, VersionGroupFlavorText,
};
pub use items::{
    Item, ItemAttribute, ItemCategory, ItemFlingEffect, ItemHolderPokemon,
    ItemHolderPokemonVersionDetail, ItemPocket, ItemSprites,
};
