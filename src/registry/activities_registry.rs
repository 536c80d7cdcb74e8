use std::collections::BTreeMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { email: String, activity: String },
}

/// In-memory activity state for the lifetime of the process. Nothing is
/// persisted; a restart starts over from the seed set.
///
/// The write lock spans the whole check-then-mutate section of signup and
/// removal, so two requests racing on the same activity cannot interleave
/// between the membership check and the write.
pub struct ActivityRegistry {
    inner: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new() -> Self {
        Self::from_entries(BTreeMap::new())
    }

    /// Registry pre-loaded with the Mergington High School offerings.
    pub fn with_seed() -> Self {
        Self::from_entries(seed_activities())
    }

    pub fn from_entries(entries: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: RwLock::new(entries),
        }
    }

    /// Clone of the current state, keyed by activity name.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Appends `email` to the activity's participant list.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadySignedUp {
                email: email.to_string(),
                activity: activity_name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes one occurrence of `email` from the activity's participant list.
    pub async fn remove_participant(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<(), RegistryError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(RegistryError::ActivityNotFound)?;

        let pos = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(RegistryError::ParticipantNotFound)?;
        activity.participants.remove(pos);
        Ok(())
    }

    /// Replaces the whole state. Only test harnesses need this.
    pub async fn reset(&self, entries: BTreeMap<String, Activity>) {
        *self.inner.write().await = entries;
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed offering set loaded at startup.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();
    activities.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 3:00 PM - 4:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );
    activities
}
