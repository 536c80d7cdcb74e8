use std::collections::BTreeMap;

use crate::models::{Activity, MessageResponse};
use crate::registry::{ActivityRegistry, RegistryError};

/// Full registry contents for the listing endpoint.
pub async fn list_activities(registry: &ActivityRegistry) -> BTreeMap<String, Activity> {
    registry.snapshot().await
}

pub async fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, RegistryError> {
    registry.signup(activity_name, email).await?;
    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub async fn remove_participant(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, RegistryError> {
    registry.remove_participant(activity_name, email).await?;
    Ok(MessageResponse {
        message: format!("Removed {} from {}", email, activity_name),
    })
}
