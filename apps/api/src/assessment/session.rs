use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{PersonaType, UserProfile};

/// One respondent's in-flight assessment. Discarded with the process —
/// there is deliberately no persistence behind this.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub persona: PersonaType,
    pub profile: UserProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory session store. Cloning shares the underlying map.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, name: String, persona: PersonaType) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            persona,
            profile: UserProfile::new(name),
            created_at: now,
            updated_at: now,
        };

        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Applies a profile transition and returns the updated session. The
    /// update function consumes the old profile and returns the next one,
    /// so step handlers stay free of in-place mutation.
    pub fn update_profile(
        &self,
        id: Uuid,
        update: impl FnOnce(UserProfile) -> UserProfile,
    ) -> Result<Session, AppError> {
        let mut sessions = self.inner.write().expect("session store lock poisoned");
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        session.profile = update(std::mem::take(&mut session.profile));
        session.updated_at = Utc::now();
        Ok(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Stage;
    use std::collections::BTreeMap;

    #[test]
    fn test_create_then_get_round_trips() {
        let store = SessionStore::new();
        let created = store.create("Ada".to_string(), PersonaType::Individual);
        let fetched = store.get(created.id).unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.profile.name, "Ada");
        assert!(fetched.profile.completed_stages.is_empty());
    }

    #[test]
    fn test_unknown_session_is_not_found() {
        let store = SessionStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_profile_applies_transition() {
        let store = SessionStore::new();
        let session = store.create("Ada".to_string(), PersonaType::Coach);

        let updated = store
            .update_profile(session.id, |profile| {
                profile.with_skills(BTreeMap::from([("Teamwork".to_string(), 4)]))
            })
            .unwrap();

        assert!(updated.profile.stage_complete(Stage::Skills));
        assert_eq!(updated.profile.name, "Ada");
        assert!(updated.updated_at >= session.updated_at);
    }
}
