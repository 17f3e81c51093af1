use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::ActivityStore;

pub async fn activities_handler(
    State(store): State<ActivityStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&store).await)
}
