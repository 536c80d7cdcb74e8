use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::warn;

use crate::models::{ErrorBody, MessageResponse, SignupParams};
use crate::registry::{ActivityRegistry, RegistryError};
use crate::services::activities_service;

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorBody>)> {
    activities_service::signup(&registry, &activity_name, &params.email)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %params.email, "signup failed: {}", e);
            error_response(e)
        })
}

pub async fn remove_participant_handler(
    Path((activity_name, email)): Path<(String, String)>,
    State(registry): State<Arc<ActivityRegistry>>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorBody>)> {
    activities_service::remove_participant(&registry, &activity_name, &email)
        .await
        .map(Json)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %email, "remove failed: {}", e);
            error_response(e)
        })
}

fn error_response(err: RegistryError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        RegistryError::ActivityNotFound | RegistryError::ParticipantNotFound => {
            StatusCode::NOT_FOUND
        }
        RegistryError::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorBody {
            detail: err.to_string(),
        }),
    )
}
