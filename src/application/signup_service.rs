use std::sync::Mutex;

use crate::domain::account::Account;
use crate::domain::errors::DomainError;

const SEED: &[(&str, &str)] = &[("user1", "John"), ("user2", "Mary")];

/// Username registry. Seeded with two accounts so duplicate signups can be
/// exercised out of the box.
#[derive(Debug)]
pub struct SignupService {
    accounts: Mutex<Vec<Account>>,
}

impl Default for SignupService {
    fn default() -> Self {
        Self::seeded()
    }
}

impl SignupService {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED.iter()
                .map(|&(username, name)| Account {
                    username: username.to_string(),
                    name: Some(name.to_string()),
                })
                .collect(),
        )
    }

    pub fn sign_up(&self, username: &str, password: &str) -> Result<Account, DomainError> {
        if username.is_empty() {
            return Err(DomainError::InvalidInput("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(DomainError::InvalidInput("password must not be empty".to_string()));
        }

        let mut accounts = self
            .accounts
            .lock()
            .map_err(|e| DomainError::Internal(format!("account lock poisoned: {}", e)))?;
        if accounts.iter().any(|a| a.username == username) {
            log::warn!("signup rejected, username {} already taken", username);
            return Err(DomainError::UsernameTaken(username.to_string()));
        }

        let account = Account {
            username: username.to_string(),
            name: None,
        };
        accounts.push(account.clone());

        log::info!("account {} signed up", username);
        Ok(account)
    }
}
