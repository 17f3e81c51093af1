use std::collections::BTreeMap;

use crate::models::Activity;
use crate::store::ActivityStore;

/// Full catalog keyed by activity name, exactly as the listing endpoint
/// serves it.
pub async fn list_activities(store: &ActivityStore) -> BTreeMap<String, Activity> {
    store.snapshot().await
}
