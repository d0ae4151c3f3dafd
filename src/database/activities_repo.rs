use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::Activity;

pub type Activities = BTreeMap<String, Activity>;

/// In-memory activity directory, keyed by activity name.
///
/// Cheap to clone; every clone shares the same map. Mutations go through
/// [`ActivityDirectory::write`] so a membership check and the write that
/// follows it happen under one lock.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    inner: Arc<RwLock<Activities>>,
}

impl ActivityDirectory {
    pub fn new(activities: Activities) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// Directory loaded with the school's fixed activity list.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Activities> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Activities> {
        self.inner.write().await
    }

    pub async fn snapshot(&self) -> Activities {
        self.read().await.clone()
    }
}

pub fn seed_activities() -> Activities {
    let rows = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Soccer Club",
            Activity::new(
                "Train together and play friendly soccer matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            Activity::new(
                "Explore painting, drawing and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct and produce the school plays",
                "Thursdays, 3:30 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Math Club",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build public speaking skills and compete in debate tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ];

    rows.into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_nine_activities() {
        let activities = seed_activities();
        assert_eq!(activities.len(), 9);
        for name in ["Basketball Team", "Soccer Club", "Chess Club"] {
            assert!(activities.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn seed_chess_club() {
        let activities = seed_activities();
        let chess = &activities["Chess Club"];
        assert_eq!(chess.max_participants, 12);
        assert_eq!(chess.participants.len(), 2);
        assert!(chess.is_enrolled("michael@mergington.edu"));
    }

    #[test]
    fn seed_participants_are_unique() {
        for (name, activity) in seed_activities() {
            let mut emails = activity.participants.clone();
            emails.sort();
            emails.dedup();
            assert_eq!(emails.len(), activity.participants.len(), "duplicates in {name}");
        }
    }

    #[tokio::test]
    async fn clones_share_state() {
        let directory = ActivityDirectory::seeded();
        let other = directory.clone();

        other
            .write()
            .await
            .get_mut("Math Club")
            .unwrap()
            .participants
            .push("new@mergington.edu".to_string());

        let snapshot = directory.snapshot().await;
        assert!(snapshot["Math Club"].is_enrolled("new@mergington.edu"));
    }
}
