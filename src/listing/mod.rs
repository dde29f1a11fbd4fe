//! Listing records and the typed payloads sent to the store

mod types;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::session::User;

pub use types::*;
use types::preferences_or_empty;

/// How many preferences a browse row shows before collapsing the rest
pub const PREFERENCE_PREVIEW_LEN: usize = 2;

/// A persisted roommate listing as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Assigned by the store at creation
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub title: String,

    pub location: String,

    /// Monthly rent
    pub rent: f64,

    #[serde(rename = "roomType")]
    pub room_type: RoomType,

    #[serde(
        rename = "lifestylePreferences",
        alias = "preferences",
        default,
        deserialize_with = "preferences_or_empty"
    )]
    pub lifestyle_preferences: BTreeSet<Lifestyle>,

    pub description: String,

    /// Only shown once the viewer has liked the listing
    pub contact: String,

    pub availability: Availability,

    #[serde(rename = "userEmail", alias = "ownerEmail")]
    pub owner_email: String,

    #[serde(rename = "userName", alias = "ownerName", default)]
    pub owner_name: String,

    #[serde(rename = "likeCount", default)]
    pub like_count: u64,
}

impl Listing {
    /// Whether the user with this email created the listing
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email == email
    }

    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// The first few preferences plus the number left out
    pub fn preference_preview(&self) -> (Vec<Lifestyle>, usize) {
        let shown: Vec<Lifestyle> = self
            .lifestyle_preferences
            .iter()
            .copied()
            .take(PREFERENCE_PREVIEW_LEN)
            .collect();
        let hidden = self.lifestyle_preferences.len() - shown.len();
        (shown, hidden)
    }

    /// Overwrite the mutable fields with those of `payload`.
    ///
    /// Id, owner and like count are left untouched.
    pub fn apply(&mut self, payload: &ListingPayload) {
        self.title = payload.title.clone();
        self.location = payload.location.clone();
        self.rent = payload.rent;
        self.room_type = payload.room_type;
        self.lifestyle_preferences = payload.lifestyle_preferences.clone();
        self.description = payload.description.clone();
        self.contact = payload.contact.clone();
        self.availability = payload.availability;
    }
}

/// Fields submitted when creating or editing a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPayload {
    pub title: String,

    pub location: String,

    pub rent: f64,

    #[serde(rename = "roomType")]
    pub room_type: RoomType,

    #[serde(
        rename = "lifestylePreferences",
        default,
        deserialize_with = "preferences_or_empty"
    )]
    pub lifestyle_preferences: BTreeSet<Lifestyle>,

    pub description: String,

    pub contact: String,

    pub availability: Availability,

    #[serde(rename = "userEmail")]
    pub owner_email: String,

    #[serde(rename = "userName")]
    pub owner_name: String,
}

impl ListingPayload {
    /// Start a payload owned by `owner`, with no preferences and available
    pub fn new(owner: &User, title: &str, location: &str, rent: f64, room_type: RoomType) -> Self {
        Self {
            title: title.to_string(),
            location: location.to_string(),
            rent,
            room_type,
            lifestyle_preferences: BTreeSet::new(),
            description: String::new(),
            contact: String::new(),
            availability: Availability::Available,
            owner_email: owner.email.clone(),
            owner_name: owner.display_name.clone(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, value: &str) -> Self {
        self.description = value.to_string();
        self
    }

    /// Set the contact details
    pub fn with_contact(mut self, value: &str) -> Self {
        self.contact = value.to_string();
        self
    }

    /// Set the availability
    pub fn with_availability(mut self, value: Availability) -> Self {
        self.availability = value;
        self
    }

    /// Add a lifestyle preference
    pub fn with_preference(mut self, value: Lifestyle) -> Self {
        self.lifestyle_preferences.insert(value);
        self
    }

    /// Pre-fill an edit form from an existing listing
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            title: listing.title.clone(),
            location: listing.location.clone(),
            rent: listing.rent,
            room_type: listing.room_type,
            lifestyle_preferences: listing.lifestyle_preferences.clone(),
            description: listing.description.clone(),
            contact: listing.contact.clone(),
            availability: listing.availability,
            owner_email: listing.owner_email.clone(),
            owner_name: listing.owner_name.clone(),
        }
    }

    /// Reject payloads the store would refuse, before anything is sent
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("location", &self.location),
            ("description", &self.description),
            ("contact", &self.contact),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::validation(format!("{} must not be empty", field)));
            }
        }

        if !self.rent.is_finite() || self.rent < 0.0 {
            return Err(Error::validation("rent must be a non-negative amount"));
        }

        if !self.owner_email.contains('@') {
            return Err(Error::validation(format!(
                "owner email {:?} is not an email address",
                self.owner_email
            )));
        }

        Ok(())
    }
}

/// Body of `POST /listings`
#[derive(Debug, Serialize)]
pub(crate) struct NewListing<'a> {
    #[serde(flatten)]
    pub payload: &'a ListingPayload,

    #[serde(rename = "likeCount")]
    pub like_count: u64,
}

/// Body of `PATCH /listings/{id}/like`
#[derive(Debug, Serialize)]
pub(crate) struct LikeRequest<'a> {
    #[serde(rename = "likerEmail")]
    pub liker_email: &'a str,
}
