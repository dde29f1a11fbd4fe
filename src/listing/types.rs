//! Vocabularies used by listings

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of room offered by a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Shared,
    Master,
    Studio,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Single,
        RoomType::Shared,
        RoomType::Master,
        RoomType::Studio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "Single",
            RoomType::Shared => "Shared",
            RoomType::Master => "Master",
            RoomType::Studio => "Studio",
        }
    }
}

/// Whether the room can currently be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Available,
    #[serde(rename = "Not Available", alias = "NotAvailable")]
    NotAvailable,
}

impl Availability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::NotAvailable => "Not Available",
        }
    }
}

/// Lifestyle preference tags.
///
/// Declaration order is the canonical display order; sets of preferences
/// serialize in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Lifestyle {
    #[serde(rename = "Non-smoker")]
    NonSmoker,
    Smoker,
    #[serde(rename = "Pet-friendly")]
    PetFriendly,
    #[serde(rename = "No pets")]
    NoPets,
    #[serde(rename = "Night owl")]
    NightOwl,
    #[serde(rename = "Early bird")]
    EarlyBird,
    Quiet,
    Social,
    Vegetarian,
    Vegan,
}

impl Lifestyle {
    pub const ALL: [Lifestyle; 10] = [
        Lifestyle::NonSmoker,
        Lifestyle::Smoker,
        Lifestyle::PetFriendly,
        Lifestyle::NoPets,
        Lifestyle::NightOwl,
        Lifestyle::EarlyBird,
        Lifestyle::Quiet,
        Lifestyle::Social,
        Lifestyle::Vegetarian,
        Lifestyle::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lifestyle::NonSmoker => "Non-smoker",
            Lifestyle::Smoker => "Smoker",
            Lifestyle::PetFriendly => "Pet-friendly",
            Lifestyle::NoPets => "No pets",
            Lifestyle::NightOwl => "Night owl",
            Lifestyle::EarlyBird => "Early bird",
            Lifestyle::Quiet => "Quiet",
            Lifestyle::Social => "Social",
            Lifestyle::Vegetarian => "Vegetarian",
            Lifestyle::Vegan => "Vegan",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::validation(format!("unknown {}: {}", $what, s)))
            }
        }
    };
}

impl Availability {
    pub const ALL: [Availability; 2] = [Availability::Available, Availability::NotAvailable];
}

display_and_parse!(RoomType, "room type");
display_and_parse!(Availability, "availability");
display_and_parse!(Lifestyle, "lifestyle preference");

/// Accepts a missing or `null` preference list as the empty set
pub(crate) fn preferences_or_empty<'de, D>(deserializer: D) -> Result<BTreeSet<Lifestyle>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<Lifestyle>>::deserialize(deserializer)?.unwrap_or_default())
}
