//! Numeric ids of well-known resources, as assigned by PokéAPI.
//!
//! These are static lookup tables: `berries::CHERI` is the id that
//! `/berry/cheri` resolves to.

pub mod berries {
    pub const CHERI: i64 = 1;
    pub const CHESTO: i64 = 2;
    pub const PECHA: i64 = 3;
    pub const RAWST: i64 = 4;
    pub const ASPEAR: i64 = 5;
    pub const LEPPA: i64 = 6;
    pub const ORAN: i64 = 7;
    pub const PERSIM: i64 = 8;
    pub const LUM: i64 = 9;
    pub const SITRUS: i64 = 10;
}

pub mod berry_firmnesses {
    pub const VERY_SOFT: i64 = 1;
    pub const SOFT: i64 = 2;
    pub const HARD: i64 = 3;
    pub const VERY_HARD: i64 = 4;
    pub const SUPER_HARD: i64 = 5;
}

pub mod berry_flavors {
    pub const SPICY: i64 = 1;
    pub const DRY: i64 = 2;
    pub const SWEET: i64 = 3;
    pub const BITTER: i64 = 4;
    pub const SOUR: i64 = 5;
}

pub mod items {
    pub const MASTER_BALL: i64 = 1;
    pub const ULTRA_BALL: i64 = 2;
    pub const GREAT_BALL: i64 = 3;
    pub const POKE_BALL: i64 = 4;
}

pub mod item_attributes {
    pub const COUNTABLE: i64 = 1;
    pub const CONSUMABLE: i64 = 2;
    pub const USABLE_OVERWORLD: i64 = 3;
    pub const USABLE_IN_BATTLE: i64 = 4;
    pub const HOLDABLE: i64 = 5;
    pub const HOLDABLE_PASSIVE: i64 = 6;
    pub const HOLDABLE_ACTIVE: i64 = 7;
    pub const UNDERGROUND: i64 = 8;
}

pub mod item_categories {
    pub const STAT_BOOSTS: i64 = 1;
    pub const EFFORT_DROP: i64 = 2;
    pub const MEDICINE: i64 = 3;
    pub const OTHER: i64 = 4;
    pub const IN_A_PINCH: i64 = 5;
    pub const PICKY_HEALING: i64 = 6;
    pub const TYPE_PROTECTION: i64 = 7;
    pub const BAKING_ONLY: i64 = 8;
    pub const COLLECTIBLES: i64 = 9;
    pub const EVOLUTION: i64 = 10;
    pub const SPELUNKING: i64 = 11;
    pub const HELD_ITEMS: i64 = 12;
    pub const CHOICE: i64 = 13;
}

pub mod item_fling_effects {
    pub const BADLY_POISON: i64 = 1;
    pub const BURN: i64 = 2;
    pub const BERRY_EFFECT: i64 = 3;
    pub const HERB_EFFECT: i64 = 4;
    pub const PARALYZE: i64 = 5;
    pub const POISON: i64 = 6;
    pub const FLINCH: i64 = 7;
}

pub mod item_pockets {
    pub const MISC: i64 = 1;
    pub const MEDICINE: i64 = 2;
    pub const POKEBALLS: i64 = 3;
    pub const MACHINES: i64 = 4;
    pub const BERRIES: i64 = 5;
    pub const MAIL: i64 = 6;
    pub const BATTLE: i64 = 7;
    pub const KEY: i64 = 8;
}
