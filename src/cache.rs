//! Local listing cache backing a view
//!
//! Mutations are applied optimistically and rolled back if the store
//! refuses them. Rollback also happens when the pending future is dropped,
//! so abandoning an operation (e.g. leaving the view) leaves the cache as it
//! was. Operations take `&mut self`, so at most one mutation is in flight per
//! cache.

use log::{info, warn};

use crate::error::{Error, Result};
use crate::filter::select_owned;
use crate::gateway::ListingGateway;
use crate::like_gate::{LikeGate, LikeState};
use crate::listing::{Listing, ListingPayload};
use crate::session::{require_user, User};

/// What to put back if an optimistic edit is abandoned
enum Undo {
    Restore { index: usize, previous: Listing },
    Reinsert { index: usize, removed: Listing },
}

/// Reverts an optimistic edit unless committed
struct Rollback<'a> {
    listings: &'a mut Vec<Listing>,
    undo: Option<Undo>,
}

impl<'a> Rollback<'a> {
    fn new(listings: &'a mut Vec<Listing>, undo: Undo) -> Self {
        Self {
            listings,
            undo: Some(undo),
        }
    }

    fn commit(mut self) {
        self.undo = None;
    }
}

impl Drop for Rollback<'_> {
    fn drop(&mut self) {
        match self.undo.take() {
            Some(Undo::Restore { index, previous }) => {
                warn!("Rolling back edit of listing {}", previous.id);
                if let Some(slot) = self.listings.get_mut(index) {
                    *slot = previous;
                }
            }
            Some(Undo::Reinsert { index, removed }) => {
                warn!("Rolling back removal of listing {}", removed.id);
                let index = index.min(self.listings.len());
                self.listings.insert(index, removed);
            }
            None => {}
        }
    }
}

/// Listings of the current view plus the session's like gates
pub struct ListingCache<G: ListingGateway> {
    gateway: G,
    listings: Vec<Listing>,
    likes: LikeGate,
}

impl<G: ListingGateway> ListingCache<G> {
    /// Create an empty cache; call [`load`](Self::load) to seed it
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            listings: Vec::new(),
            likes: LikeGate::new(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.listings.iter().position(|listing| listing.id == id)
    }

    /// Listings created by `user`, in cache order
    pub fn owned_by(&self, user: &User) -> Vec<&Listing> {
        select_owned(&self.listings, &user.email)
    }

    pub fn like_gate(&self) -> &LikeGate {
        &self.likes
    }

    pub fn like_state(&self, id: &str) -> LikeState {
        self.likes.state(id)
    }

    /// Contact details of a cached listing, revealed only after liking it
    pub fn contact(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(|listing| self.likes.reveal_contact(listing))
    }

    /// Forget every like made in this session, as a page reload would
    pub fn reset_session(&mut self) {
        self.likes.reset();
    }

    /// Replace the cache with every listing in the store.
    ///
    /// On failure the previous contents are kept.
    pub async fn load(&mut self) -> Result<()> {
        let listings = self.gateway.fetch_all().await?;
        info!("Loaded {} listings", listings.len());
        self.listings = listings;
        Ok(())
    }

    /// Replace the cache with the featured listings.
    ///
    /// On failure the previous contents are kept.
    pub async fn load_featured(&mut self) -> Result<()> {
        let listings = self.gateway.fetch_featured().await?;
        info!("Loaded {} featured listings", listings.len());
        self.listings = listings;
        Ok(())
    }

    /// Fetch one listing and store it, in place if already cached
    pub async fn refresh(&mut self, id: &str) -> Result<Listing> {
        let listing = self.gateway.fetch_one(id).await?;
        match self.position(id) {
            Some(index) => self.listings[index] = listing.clone(),
            None => self.listings.push(listing.clone()),
        }
        Ok(listing)
    }

    /// Create a listing owned by `user` and append it to the cache
    pub async fn add(&mut self, user: Option<&User>, mut payload: ListingPayload) -> Result<Listing> {
        let user = require_user(user)?;
        payload.owner_email = user.email.clone();
        payload.owner_name = user.display_name.clone();
        payload.validate()?;

        let created = self.gateway.create(&payload).await?;
        info!("Created listing {}", created.id);
        self.listings.push(created.clone());
        Ok(created)
    }

    /// Update listing `id`, keeping its position in the cache.
    ///
    /// The owner fields of `payload` are replaced by those of the cached
    /// listing, or of the stored one when `id` is not cached.
    pub async fn replace(
        &mut self,
        user: Option<&User>,
        id: &str,
        mut payload: ListingPayload,
    ) -> Result<Listing> {
        require_user(user)?;

        let index = match self.position(id) {
            Some(index) => index,
            None => {
                let current = self.gateway.fetch_one(id).await?;
                payload.owner_email = current.owner_email;
                payload.owner_name = current.owner_name;
                payload.validate()?;
                let mut updated = self.gateway.update(id, &payload).await?;
                updated.owner_email = payload.owner_email;
                updated.owner_name = payload.owner_name;
                warn!("Updated listing {} which is not in the cache", id);
                return Ok(updated);
            }
        };

        let Self { gateway, listings, .. } = self;

        payload.owner_email = listings[index].owner_email.clone();
        payload.owner_name = listings[index].owner_name.clone();
        payload.validate()?;

        let previous = listings[index].clone();
        let pending = Rollback::new(listings, Undo::Restore { index, previous });
        pending.listings[index].apply(&payload);

        let mut updated = gateway.update(id, &payload).await?;
        updated.owner_email = payload.owner_email;
        updated.owner_name = payload.owner_name;
        pending.listings[index] = updated.clone();
        pending.commit();
        Ok(updated)
    }

    /// Delete listing `id`.
    ///
    /// An id missing from both the cache and the store counts as removed.
    /// A cached listing stays cached when the store reports it missing.
    pub async fn remove(&mut self, user: Option<&User>, id: &str) -> Result<()> {
        require_user(user)?;

        let index = match self.position(id) {
            Some(index) => index,
            None => {
                warn!("Removing listing {} which is not in the cache", id);
                return match self.gateway.delete(id).await {
                    Ok(()) | Err(Error::NotFound(_)) => Ok(()),
                    Err(e) => Err(e),
                };
            }
        };

        let Self { gateway, listings, .. } = self;

        let removed = listings.remove(index);
        let pending = Rollback::new(listings, Undo::Reinsert { index, removed });

        gateway.delete(id).await?;
        pending.commit();
        info!("Removed listing {}", id);
        Ok(())
    }

    /// Like listing `id` once per session.
    ///
    /// A second call in the same session sends nothing and reports `Liked`.
    /// On success the cached like count goes up by exactly one.
    pub async fn increment_like(&mut self, user: Option<&User>, id: &str) -> Result<LikeState> {
        if self.likes.check(id, user)? == LikeState::Liked {
            return Ok(LikeState::Liked);
        }
        let user = require_user(user)?;

        let Self { gateway, listings, likes } = self;

        match listings.iter().position(|listing| listing.id == id) {
            Some(index) => {
                let previous = listings[index].clone();
                let pending = Rollback::new(listings, Undo::Restore { index, previous });
                pending.listings[index].like_count += 1;

                gateway.like(id, &user.email).await?;
                pending.commit();
            }
            None => {
                gateway.like(id, &user.email).await?;
                warn!("Liked listing {} which is not in the cache", id);
            }
        }

        likes.mark_liked(id);
        Ok(LikeState::Liked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{Availability, Lifestyle, RoomType};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory store with switchable failures
    #[derive(Default)]
    struct MemoryGateway {
        store: Mutex<Vec<Listing>>,
        next_id: AtomicUsize,
        calls: AtomicUsize,
        fail_with_status: Mutex<Option<u16>>,
        hang_updates: AtomicBool,
        last_update: Mutex<Option<ListingPayload>>,
    }

    impl MemoryGateway {
        fn with(listings: Vec<Listing>) -> Self {
            let gateway = Self::default();
            *gateway.store.lock().unwrap() = listings;
            gateway
        }

        fn fail(&self, status: Option<u16>) {
            *self.fail_with_status.lock().unwrap() = status;
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn stored(&self, id: &str) -> Option<Listing> {
            self.store.lock().unwrap().iter().find(|l| l.id == id).cloned()
        }

        fn enter(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match *self.fail_with_status.lock().unwrap() {
                Some(code) => Err(Error::from_status(
                    reqwest::StatusCode::from_u16(code).unwrap(),
                    "injected".to_string(),
                )),
                None => Ok(()),
            }
        }

        fn find(&self, id: &str) -> Result<Listing> {
            self.stored(id).ok_or_else(|| Error::not_found(id))
        }
    }

    #[async_trait]
    impl ListingGateway for MemoryGateway {
        async fn fetch_all(&self) -> Result<Vec<Listing>> {
            self.enter()?;
            Ok(self.store.lock().unwrap().clone())
        }

        async fn fetch_featured(&self) -> Result<Vec<Listing>> {
            self.enter()?;
            Ok(self.store.lock().unwrap().iter().take(1).cloned().collect())
        }

        async fn fetch_one(&self, id: &str) -> Result<Listing> {
            self.enter()?;
            self.find(id)
        }

        async fn create(&self, payload: &ListingPayload) -> Result<Listing> {
            self.enter()?;
            let id = format!("m{}", self.next_id.fetch_add(1, Ordering::SeqCst));
            let listing = listing_from(&id, payload, 0);
            self.store.lock().unwrap().push(listing.clone());
            Ok(listing)
        }

        async fn update(&self, id: &str, payload: &ListingPayload) -> Result<Listing> {
            if self.hang_updates.load(Ordering::SeqCst) {
                std::future::pending::<()>().await;
            }
            self.enter()?;
            *self.last_update.lock().unwrap() = Some(payload.clone());
            let mut store = self.store.lock().unwrap();
            let listing = store
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| Error::not_found(id))?;
            listing.apply(payload);
            Ok(listing.clone())
        }

        async fn delete(&self, id: &str) -> Result<()> {
            self.enter()?;
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|l| l.id != id);
            if store.len() == before {
                return Err(Error::not_found(id));
            }
            Ok(())
        }

        async fn like(&self, id: &str, _liker_email: &str) -> Result<Listing> {
            self.enter()?;
            let mut store = self.store.lock().unwrap();
            let listing = store
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| Error::not_found(id))?;
            listing.like_count += 1;
            Ok(listing.clone())
        }
    }

    fn listing_from(id: &str, payload: &ListingPayload, like_count: u64) -> Listing {
        Listing {
            id: id.to_string(),
            title: payload.title.clone(),
            location: payload.location.clone(),
            rent: payload.rent,
            room_type: payload.room_type,
            lifestyle_preferences: payload.lifestyle_preferences.clone(),
            description: payload.description.clone(),
            contact: payload.contact.clone(),
            availability: payload.availability,
            owner_email: payload.owner_email.clone(),
            owner_name: payload.owner_name.clone(),
            like_count,
        }
    }

    fn ana() -> User {
        User::new("ana@example.com", "Ana")
    }

    fn bo() -> User {
        User::new("bo@example.com", "Bo")
    }

    fn payload(owner: &User, title: &str) -> ListingPayload {
        ListingPayload::new(owner, title, "Brooklyn, NYC", 950.0, RoomType::Single)
            .with_description("Sunny room")
            .with_contact("555-0100")
    }

    fn seeded() -> MemoryGateway {
        MemoryGateway::with(vec![
            listing_from("a", &payload(&ana(), "A"), 0),
            listing_from("b", &payload(&bo(), "B"), 2),
            listing_from("c", &payload(&ana(), "C"), 1),
        ])
    }

    #[tokio::test]
    async fn test_load_replaces_and_keeps_on_failure() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        assert_eq!(cache.len(), 3);

        cache.gateway().fail(Some(503));
        let result = cache.load().await;
        assert!(matches!(result, Err(Error::Server { .. })));
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_first_load_failure_leaves_cache_empty() {
        let gateway = seeded();
        gateway.fail(Some(500));
        let mut cache = ListingCache::new(gateway);
        assert!(cache.load().await.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_load_featured() {
        let mut cache = ListingCache::new(seeded());
        cache.load_featured().await.unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.listings()[0].id, "a");
    }

    #[tokio::test]
    async fn test_add_appends_with_store_id() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();

        let created = cache
            .add(Some(&bo()), payload(&ana(), "New").with_preference(Lifestyle::Vegan))
            .await
            .unwrap();

        assert_eq!(created.like_count, 0);
        assert_eq!(created.owner_email, "bo@example.com");
        assert_eq!(cache.listings().last().unwrap(), &created);
        assert_eq!(cache.gateway().stored(&created.id).unwrap(), created);
    }

    #[tokio::test]
    async fn test_add_requires_user_and_valid_payload() {
        let mut cache = ListingCache::new(seeded());

        let result = cache.add(None, payload(&ana(), "New")).await;
        assert!(matches!(result, Err(Error::AuthRequired)));

        let result = cache.add(Some(&ana()), payload(&ana(), "")).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(cache.gateway().calls(), 0);
    }

    #[tokio::test]
    async fn test_add_failure_leaves_cache_unchanged() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        cache.gateway().fail(Some(422));

        let result = cache.add(Some(&ana()), payload(&ana(), "New")).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_in_place_keeps_owner() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();

        let edit = payload(&bo(), "Renamed").with_availability(Availability::NotAvailable);
        let updated = cache.replace(Some(&ana()), "c", edit).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.owner_email, "ana@example.com");
        let ids: Vec<&str> = cache.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(cache.get("c").unwrap().title, "Renamed");
        assert_eq!(cache.get("c").unwrap().availability, Availability::NotAvailable);
        assert_eq!(cache.gateway().stored("c").unwrap().owner_email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_replace_failure_rolls_back() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        let before = cache.get("a").unwrap().clone();

        cache.gateway().fail(Some(500));
        let result = cache.replace(Some(&ana()), "a", payload(&ana(), "Nope")).await;

        assert!(matches!(result, Err(Error::Server { .. })));
        assert_eq!(cache.get("a").unwrap(), &before);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_leaves_cache_alone() {
        let gateway = seeded();
        gateway
            .store
            .lock()
            .unwrap()
            .push(listing_from("z", &payload(&bo(), "Z"), 0));
        let mut cache = ListingCache::new(gateway);
        cache.load().await.unwrap();
        cache.listings.retain(|l| l.id != "z");

        let updated = cache.replace(Some(&bo()), "z", payload(&bo(), "Z2")).await.unwrap();
        assert_eq!(updated.title, "Z2");
        assert!(cache.get("z").is_none());
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_keeps_stored_owner() {
        let mut cache = ListingCache::new(seeded());

        let updated = cache.replace(Some(&bo()), "a", payload(&bo(), "Taken")).await.unwrap();

        let sent = cache.gateway().last_update.lock().unwrap().clone().unwrap();
        assert_eq!(sent.owner_email, "ana@example.com");
        assert_eq!(sent.owner_name, "Ana");
        assert_eq!(updated.owner_email, "ana@example.com");
        assert_eq!(cache.gateway().stored("a").unwrap().title, "Taken");
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_replace_unknown_id_missing_from_store() {
        let mut cache = ListingCache::new(seeded());

        let result = cache.replace(Some(&ana()), "nope", payload(&ana(), "X")).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(cache.gateway().last_update.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();

        cache.remove(Some(&ana()), "b").await.unwrap();
        assert!(cache.get("b").is_none());

        // already gone locally and remotely
        cache.remove(Some(&ana()), "b").await.unwrap();

        cache.load().await.unwrap();
        assert!(cache.get("b").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_failure_restores_position() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        cache.gateway().fail(Some(502));

        assert!(cache.remove(Some(&ana()), "b").await.is_err());
        let ids: Vec<&str> = cache.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_remove_cached_listing_missing_from_store() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        cache.gateway().store.lock().unwrap().retain(|l| l.id != "b");

        let result = cache.remove(Some(&ana()), "b").await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        let ids: Vec<&str> = cache.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_remove_requires_user() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        assert!(matches!(cache.remove(None, "a").await, Err(Error::AuthRequired)));
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_like_once_per_session() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        let calls = cache.gateway().calls();

        assert_eq!(cache.contact("b"), None);
        let state = cache.increment_like(Some(&ana()), "b").await.unwrap();
        assert_eq!(state, LikeState::Liked);
        assert_eq!(cache.get("b").unwrap().like_count, 3);
        assert_eq!(cache.contact("b"), Some("555-0100"));
        assert_eq!(cache.gateway().calls(), calls + 1);

        let state = cache.increment_like(Some(&ana()), "b").await.unwrap();
        assert_eq!(state, LikeState::Liked);
        assert_eq!(cache.get("b").unwrap().like_count, 3);
        assert_eq!(cache.gateway().calls(), calls + 1);
    }

    #[tokio::test]
    async fn test_like_requires_user() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        let calls = cache.gateway().calls();

        let result = cache.increment_like(None, "b").await;
        assert!(matches!(result, Err(Error::AuthRequired)));
        assert_eq!(cache.get("b").unwrap().like_count, 2);
        assert_eq!(cache.like_state("b"), LikeState::Unliked);
        assert_eq!(cache.gateway().calls(), calls);
    }

    #[tokio::test]
    async fn test_like_failure_rolls_back_and_stays_unliked() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();
        cache.gateway().fail(Some(500));

        assert!(cache.increment_like(Some(&ana()), "b").await.is_err());
        assert_eq!(cache.get("b").unwrap().like_count, 2);
        assert_eq!(cache.like_state("b"), LikeState::Unliked);

        cache.gateway().fail(None);
        cache.increment_like(Some(&ana()), "b").await.unwrap();
        assert_eq!(cache.get("b").unwrap().like_count, 3);
    }

    #[tokio::test]
    async fn test_like_uncached_listing_marks_gate_only() {
        let mut cache = ListingCache::new(seeded());
        cache.refresh("a").await.unwrap();
        let before = cache.listings().to_vec();
        let calls = cache.gateway().calls();

        let state = cache.increment_like(Some(&ana()), "b").await.unwrap();

        assert_eq!(state, LikeState::Liked);
        assert_eq!(cache.like_state("b"), LikeState::Liked);
        assert_eq!(cache.gateway().stored("b").unwrap().like_count, 3);
        assert_eq!(cache.gateway().calls(), calls + 1);
        assert_eq!(cache.listings(), before.as_slice());
        assert!(cache.get("b").is_none());
    }

    #[tokio::test]
    async fn test_reset_session_allows_liking_again() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();

        cache.increment_like(Some(&bo()), "a").await.unwrap();
        cache.reset_session();
        assert_eq!(cache.like_state("a"), LikeState::Unliked);
        assert_eq!(cache.contact("a"), None);

        cache.increment_like(Some(&bo()), "a").await.unwrap();
        assert_eq!(cache.get("a").unwrap().like_count, 2);
    }

    #[tokio::test]
    async fn test_owned_by() {
        let mut cache = ListingCache::new(seeded());
        cache.load().await.unwrap();

        let mine: Vec<&str> = cache.owned_by(&ana()).iter().map(|l| l.id.as_str()).collect();
        assert_eq!(mine, vec!["a", "c"]);
        assert_eq!(cache.owned_by(&bo()).len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_upserts() {
        let gateway = seeded();
        let mut cache = ListingCache::new(gateway);

        let listing = cache.refresh("b").await.unwrap();
        assert_eq!(cache.listings(), &[listing]);

        cache.gateway().store.lock().unwrap()[1].title = "Changed".to_string();
        cache.refresh("b").await.unwrap();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b").unwrap().title, "Changed");

        assert!(matches!(cache.refresh("nope").await, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_abandoned_replace_rolls_back() {
        let user = ana();
        let mut cache = ListingCache::new(seeded());
        tokio_test::block_on(cache.load()).unwrap();
        let before = cache.get("a").unwrap().clone();
        cache.gateway().hang_updates.store(true, Ordering::SeqCst);

        {
            let mut task = tokio_test::task::spawn(cache.replace(
                Some(&user),
                "a",
                payload(&user, "Edited"),
            ));
            assert!(task.poll().is_pending());
        }

        assert_eq!(cache.get("a").unwrap(), &before);
    }

    #[test]
    fn test_dropped_edit_rolls_back() {
        let original = listing_from("a", &payload(&ana(), "A"), 0);
        let mut listings = vec![original.clone()];

        {
            let pending = Rollback::new(
                &mut listings,
                Undo::Restore { index: 0, previous: original.clone() },
            );
            pending.listings[0].like_count = 99;
        }
        assert_eq!(listings[0], original);

        let removed = listings.remove(0);
        {
            let _pending = Rollback::new(&mut listings, Undo::Reinsert { index: 0, removed });
        }
        assert_eq!(listings, vec![original]);
    }
}
