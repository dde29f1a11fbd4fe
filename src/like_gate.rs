//! Per-session guard allowing a single like per listing
//!
//! Gates live in memory only. A new session (page reload) starts with every
//! listing `Unliked`, even ones the user already liked on the server, since
//! the store only keeps a counter and not who liked what.

use std::collections::HashSet;

use crate::error::Result;
use crate::listing::Listing;
use crate::session::{require_user, User};

/// State of the gate for one listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Unliked,
    Liked,
}

#[derive(Debug, Default, Clone)]
pub struct LikeGate {
    liked: HashSet<String>,
}

impl LikeGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, listing_id: &str) -> LikeState {
        if self.liked.contains(listing_id) {
            LikeState::Liked
        } else {
            LikeState::Unliked
        }
    }

    pub fn is_liked(&self, listing_id: &str) -> bool {
        self.state(listing_id) == LikeState::Liked
    }

    /// Decide whether a like may be sent.
    ///
    /// Fails with `AuthRequired` when nobody is signed in. `Liked` means the
    /// like was already sent in this session and must not be sent again.
    pub fn check(&self, listing_id: &str, user: Option<&User>) -> Result<LikeState> {
        require_user(user)?;
        Ok(self.state(listing_id))
    }

    /// Move the gate to `Liked`. Returns false if it already was.
    pub fn mark_liked(&mut self, listing_id: &str) -> bool {
        self.liked.insert(listing_id.to_string())
    }

    /// The contact details of `listing`, once it has been liked
    pub fn reveal_contact<'a>(&self, listing: &'a Listing) -> Option<&'a str> {
        if self.is_liked(&listing.id) {
            Some(listing.contact.as_str())
        } else {
            None
        }
    }

    /// Number of listings liked in this session
    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }

    /// Start a new session: every gate goes back to `Unliked`
    pub fn reset(&mut self) {
        self.liked.clear();
    }
}
