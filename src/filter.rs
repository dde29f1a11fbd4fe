//! Ownership filtering

use crate::listing::Listing;

/// Listings created by the user with `owner_email`, in their original order.
///
/// Recomputed from scratch on every call.
pub fn select_owned<'a, I>(listings: I, owner_email: &str) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .filter(|listing| listing.is_owned_by(owner_email))
        .collect()
}
