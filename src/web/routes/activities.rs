use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::Activity;
use crate::registry::ActivityRegistry;
use crate::services::activities_service;

pub async fn list_activities_handler(
    State(registry): State<Arc<ActivityRegistry>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&registry).await)
}
