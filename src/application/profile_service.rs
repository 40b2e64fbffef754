use std::sync::{Mutex, MutexGuard};

use crate::domain::errors::DomainError;
use crate::domain::profile::{NewProfile, Profile, ProfilePatch};

#[derive(Debug, Default)]
pub struct ProfileService {
    profiles: Mutex<Vec<Profile>>,
}

impl ProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a validated profile. Ids are `count + 1` at the time of creation.
    pub fn create(&self, profile: NewProfile) -> Result<Profile, DomainError> {
        profile.validate()?;
        let mut profiles = self.lock()?;

        let created = Profile {
            id: profiles.len() as u64 + 1,
            name: profile.name,
            email: profile.email,
            image: profile.image,
        };
        profiles.push(created.clone());

        log::info!("profile {} created", created.id);
        Ok(created)
    }

    pub fn update(&self, id: u64, patch: ProfilePatch) -> Result<Profile, DomainError> {
        let mut profiles = self.lock()?;
        let profile = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::ProfileNotFound(id))?;
        patch.validate()?;
        patch.apply(profile);

        log::info!("profile {} updated", id);
        Ok(profile.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Profile>>, DomainError> {
        self.profiles
            .lock()
            .map_err(|e| DomainError::Internal(format!("profile lock poisoned: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> NewProfile {
        NewProfile {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            image: None,
        }
    }

    #[test]
    fn ids_follow_profile_count() {
        let svc = ProfileService::new();
        assert_eq!(svc.create(draft("Alice")).expect("create failed").id, 1);
        assert_eq!(svc.create(draft("Bobby")).expect("create failed").id, 2);
    }

    #[test]
    fn invalid_profile_is_not_stored() {
        let svc = ProfileService::new();
        assert!(svc.create(draft("Al")).is_err());
        assert_eq!(svc.create(draft("Alice")).expect("create failed").id, 1);
    }

    #[test]
    fn update_unknown_profile_fails() {
        let svc = ProfileService::new();
        assert_eq!(
            svc.update(3, ProfilePatch::default()).unwrap_err(),
            DomainError::ProfileNotFound(3)
        );
    }

    #[test]
    fn update_changes_only_given_fields() {
        let svc = ProfileService::new();
        svc.create(draft("Alice")).expect("create failed");

        let updated = svc
            .update(
                1,
                ProfilePatch {
                    name: Some("Alicia".to_string()),
                    ..Default::default()
                },
            )
            .expect("update failed");

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alice@example.com");
    }

    #[test]
    fn rejected_update_leaves_profile_unchanged() {
        let svc = ProfileService::new();
        svc.create(draft("Alice")).expect("create failed");

        let patch = ProfilePatch {
            name: Some("Bobby".to_string()),
            email: Some("not-an-email".to_string()),
            image: None,
        };
        assert!(svc.update(1, patch).is_err());

        let same = svc.update(1, ProfilePatch::default()).expect("update failed");
        assert_eq!(same.name, "Alice");
    }
}
