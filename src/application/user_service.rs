use std::sync::Mutex;

use crate::domain::errors::DomainError;
use crate::domain::user::User;

#[derive(Debug, Default)]
pub struct UserService {
    users: Mutex<Vec<User>>,
}

impl UserService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `user` and returns every registered user, newest last.
    pub fn register(&self, user: User) -> Result<Vec<User>, DomainError> {
        let mut users = self
            .users
            .lock()
            .map_err(|e| DomainError::Internal(format!("user lock poisoned: {}", e)))?;
        users.push(user);
        log::info!("user registered, {} total", users.len());
        Ok(users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Address;

    fn user(name: &str) -> User {
        User {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                zip: "12345".to_string(),
            },
        }
    }

    #[test]
    fn register_returns_all_users() {
        let svc = UserService::new();
        svc.register(user("ann")).expect("register failed");
        let all = svc.register(user("bob")).expect("register failed");

        assert_eq!(all.len(), 2);
        assert_eq!(all[1].name, "bob");
    }
}
