use crate::store::{ActivityStore, SignupError};

/// Registers `email` for the named activity and returns the confirmation
/// message shown to the student.
pub async fn signup_for_activity(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, SignupError> {
    store.signup(activity_name, email).await?;
    tracing::info!(activity = %activity_name, email = %email, "signup accepted");
    Ok(format!("Signed up {} for {}", email, activity_name))
}
