use tracing::info;

use crate::database::activities_repo::{Activities, ActivityDirectory};
use crate::error::ActivityError;

pub async fn list_activities(directory: &ActivityDirectory) -> Activities {
    directory.snapshot().await
}

/// Enrolls `email` in `activity_name` and returns the confirmation message.
///
/// Capacity is not checked: `max_participants` is informational.
pub async fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut activities = directory.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(ActivityError::NotFound)?;

    if activity.is_enrolled(email) {
        return Err(ActivityError::AlreadySignedUp);
    }

    activity.participants.push(email.to_string());
    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub async fn remove_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let mut activities = directory.write().await;
    let activity = activities
        .get_mut(activity_name)
        .ok_or(ActivityError::NotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(ActivityError::ParticipantNotFound);
    };

    activity.participants.remove(pos);
    info!(activity = %activity_name, email = %email, "participant removed");
    Ok(format!("Removed {} from {}", email, activity_name))
}
