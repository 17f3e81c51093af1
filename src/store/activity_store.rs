use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;
use crate::store::seed;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadySignedUp,
}

/// Shared in-memory activity store. Cloning is cheap; every clone sees the
/// same underlying state. Handed to handlers through axum `State` so nothing
/// reaches for a global.
#[derive(Clone)]
pub struct ActivityStore {
    inner: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Store preloaded with the school's activity catalog.
    pub fn with_default_activities() -> Self {
        Self::new(seed::default_activities())
    }

    /// Clone of the full current state, keyed by activity name.
    pub async fn snapshot(&self) -> BTreeMap<String, Activity> {
        self.inner.read().await.clone()
    }

    /// Adds `email` to the activity's roster. The existence and duplicate
    /// checks and the append all happen under one write guard, so two
    /// concurrent signups for the same student cannot both get through.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.inner.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadySignedUp);
        }

        // TODO: reject signups beyond max_participants once the front office
        // decides whether overflow should be waitlisted or turned away.
        activity.participants.push(email.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_respects_capacity_and_has_display_fields() {
        let activities = seed::default_activities();
        assert!(!activities.is_empty());
        for (name, activity) in &activities {
            assert!(activity.max_participants > 0, "{name} has no capacity");
            assert!(
                activity.participants.len() <= activity.max_participants,
                "{name} is seeded over capacity"
            );
            assert!(!activity.description.is_empty(), "{name} has no description");
            assert!(!activity.schedule.is_empty(), "{name} has no schedule");
        }
    }

    #[test]
    fn seed_has_no_duplicate_participants() {
        for (name, activity) in seed::default_activities() {
            let mut emails = activity.participants.clone();
            emails.sort();
            emails.dedup();
            assert_eq!(
                emails.len(),
                activity.participants.len(),
                "{name} has a duplicate seed participant"
            );
        }
    }

    #[tokio::test]
    async fn signup_appends_exactly_once() {
        let store = ActivityStore::with_default_activities();
        store
            .signup("Basketball", "newstudent@mergington.edu")
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        let roster = &snapshot["Basketball"].participants;
        let count = roster
            .iter()
            .filter(|p| *p == "newstudent@mergington.edu")
            .count();
        assert_eq!(count, 1);
        assert_eq!(roster.last().map(String::as_str), Some("newstudent@mergington.edu"));
    }

    #[tokio::test]
    async fn duplicate_signup_is_rejected() {
        let store = ActivityStore::with_default_activities();
        let before = store.snapshot().await["Basketball"].participants.len();

        let err = store
            .signup("Basketball", "liam@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::AlreadySignedUp);

        let after = store.snapshot().await["Basketball"].participants.len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn unknown_activity_is_rejected() {
        let store = ActivityStore::with_default_activities();
        let err = store
            .signup("Underwater Basket Weaving", "student@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(err, SignupError::ActivityNotFound);
    }

    #[tokio::test]
    async fn same_email_can_join_multiple_activities() {
        let store = ActivityStore::with_default_activities();
        store
            .signup("Basketball", "versatile@mergington.edu")
            .await
            .unwrap();
        store
            .signup("Soccer", "versatile@mergington.edu")
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        assert!(snapshot["Basketball"]
            .participants
            .contains(&"versatile@mergington.edu".to_string()));
        assert!(snapshot["Soccer"]
            .participants
            .contains(&"versatile@mergington.edu".to_string()));
    }

    #[tokio::test]
    async fn concurrent_duplicate_signups_let_only_one_through() {
        let store = ActivityStore::with_default_activities();
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.signup("Chess Club", "raced@mergington.edu").await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);

        let snapshot = store.snapshot().await;
        let count = snapshot["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "raced@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
