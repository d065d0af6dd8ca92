// src/domain/listing.rs

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const SQFT_MIN: u32 = 1000;
pub const SQFT_MAX: u32 = 5000;
pub const PRICE_MIN: u64 = 200_000;
pub const PRICE_MAX: u64 = 1_500_000;
pub const ROOMS_MIN: u32 = 1;
pub const ROOMS_MAX: u32 = 6;
pub const BATHS_MIN: u32 = 1;
pub const BATHS_MAX: u32 = 5;

/// The fixed amenity vocabulary. Anything outside this set is rejected
/// at the command boundary, never silently treated as absent.
pub const AMENITY_TYPES: [&str; 5] = ["yard", "garage", "pool", "patio", "fireplace"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lighting {
    Low,
    Medium,
    High,
}

impl fmt::Display for Lighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lighting::Low => write!(f, "low"),
            Lighting::Medium => write!(f, "medium"),
            Lighting::High => write!(f, "high"),
        }
    }
}

/// One synthetic property entry. Immutable once generated; the store
/// only ever replaces listings wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub square_footage: u32,
    pub lighting: Lighting,
    pub price: u64,
    pub rooms: u32,
    pub bathrooms: u32,
    /// Latitude, then longitude, in degrees.
    pub location: [f64; 2],
    pub description: String,
    // The on-disk key is spelled "ammenities".
    #[serde(rename = "ammenities")]
    pub amenities: BTreeMap<String, bool>,
}

const OPENERS: [&str; 8] = [
    "Charming",
    "Spacious",
    "Sun-filled",
    "Newly renovated",
    "Cozy",
    "Modern",
    "Classic",
    "Well-kept",
];

const STYLES: [&str; 7] = [
    "bungalow",
    "townhouse",
    "craftsman",
    "ranch home",
    "colonial",
    "cottage",
    "split-level",
];

const CLOSERS: [&str; 6] = [
    "close to downtown",
    "on a quiet street",
    "with mountain views",
    "near good schools",
    "steps from the park",
    "in a walkable neighborhood",
];

fn random_description(rng: &mut impl Rng) -> String {
    let opener = OPENERS[rng.gen_range(0..OPENERS.len())];
    let style = STYLES[rng.gen_range(0..STYLES.len())];
    let closer = CLOSERS[rng.gen_range(0..CLOSERS.len())];
    format!("{opener} {style} {closer}.")
}

impl Listing {
    /// Draws one listing with every field inside its documented range.
    /// Takes the RNG as a parameter so tests can seed it.
    pub fn random(rng: &mut impl Rng) -> Self {
        let amenities = AMENITY_TYPES
            .iter()
            .map(|name| (name.to_string(), rng.gen_bool(0.5)))
            .collect();

        Listing {
            square_footage: rng.gen_range(SQFT_MIN..=SQFT_MAX),
            lighting: match rng.gen_range(0..3) {
                0 => Lighting::Low,
                1 => Lighting::Medium,
                _ => Lighting::High,
            },
            price: rng.gen_range(PRICE_MIN..=PRICE_MAX),
            rooms: rng.gen_range(ROOMS_MIN..=ROOMS_MAX),
            bathrooms: rng.gen_range(BATHS_MIN..=BATHS_MAX),
            location: [rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0)],
            description: random_description(rng),
            amenities,
        }
    }
}
