//! Feedbin API endpoint groups.

mod entries;
mod feeds;
mod starred_entries;
mod subscriptions;
mod tags;
mod unread_entries;

pub use entries::{EntriesApi, EntryQuery, MAX_ENTRY_IDS_PER_QUERY, MAX_PER_PAGE};
pub use feeds::FeedsApi;
pub use starred_entries::StarredEntriesApi;
pub use subscriptions::SubscriptionsApi;
pub use tags::{TaggingsApi, TagsApi};
pub use unread_entries::UnreadEntriesApi;

use crate::error::{FeedbinError, FeedbinResult};

/// Feedbin rejects bulk state changes above this many ids.
pub const MAX_ENTRY_IDS_PER_REQUEST: usize = 1000;

/// Validate an id list for a bulk unread/starred change.
pub(crate) fn check_bulk_ids(ids: &[u64]) -> FeedbinResult<()> {
    if ids.is_empty() {
        return Err(FeedbinError::InvalidInput(
            "at least one entry id is required".to_string(),
        ));
    }
    if ids.len() > MAX_ENTRY_IDS_PER_REQUEST {
        return Err(FeedbinError::InvalidInput(format!(
            "at most {} entry ids per request, got {}",
            MAX_ENTRY_IDS_PER_REQUEST,
            ids.len()
        )));
    }
    Ok(())
}
