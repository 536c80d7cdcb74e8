use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the registry key and is
/// not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Informational capacity. Signup does not check it.
    pub max_participants: u32,
    /// Emails in signup order, unique within one activity.
    pub participants: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
