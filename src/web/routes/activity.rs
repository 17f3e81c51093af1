use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::services::signup_service;
use crate::store::{ActivityStore, SignupError};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match signup_service::signup_for_activity(&store, &activity_name, &query.email).await {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            let status = match e {
                SignupError::ActivityNotFound => StatusCode::NOT_FOUND,
                SignupError::AlreadySignedUp => StatusCode::BAD_REQUEST,
            };
            Err((status, Json(json!({ "detail": e.to_string() }))))
        }
    }
}
