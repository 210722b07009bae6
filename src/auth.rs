use std::{collections::HashMap, sync::Mutex, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;

const LOGIN_DELAY: Duration = Duration::from_millis(700);
const SIGNUP_DELAY: Duration = Duration::from_millis(900);

#[derive(Debug, Error)]
pub enum AuthError {
    // Deliberately vague: does not say whether the email or password was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("could not create account")]
    AccountCreationFailed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AuthSession {
    pub user: Option<AuthUser>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Process-wide sign-in state. Every page reads it; only login, signup and
/// logout write it.
pub struct SessionStore {
    data: Mutex<AuthSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(AuthSession::default()),
        }
    }

    pub fn read(&self) -> AuthSession {
        self.data.lock().expect("session mutex poisoned").clone()
    }

    pub fn sign_in(&self, user: AuthUser) {
        let mut guard = self.data.lock().expect("session mutex poisoned");
        guard.user = Some(user);
    }

    /// Logout. Synchronous and always succeeds.
    pub fn clear(&self) {
        let mut guard = self.data.lock().expect("session mutex poisoned");
        guard.user = None;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

struct Account {
    name: String,
    password: String,
}

/// Mock external auth provider with an in-memory account table and a fixed
/// per-call delay.
pub struct AuthService {
    accounts: Mutex<HashMap<String, Account>>,
    simulate_latency: bool,
}

impl AuthService {
    pub fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(
            "demo@example.com".to_string(),
            Account {
                name: "Demo User".to_string(),
                password: "password123".to_string(),
            },
        );
        Self {
            accounts: Mutex::new(accounts),
            simulate_latency: true,
        }
    }

    pub fn without_latency(mut self) -> Self {
        self.simulate_latency = false;
        self
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        self.delay(LOGIN_DELAY).await;

        let accounts = self.accounts.lock().expect("accounts mutex poisoned");
        match accounts.get(email) {
            Some(account) if account.password == password => Ok(AuthUser {
                name: account.name.clone(),
                email: email.to_string(),
            }),
            _ => {
                tracing::debug!(email, "login rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, AuthError> {
        self.delay(SIGNUP_DELAY).await;

        let mut accounts = self.accounts.lock().expect("accounts mutex poisoned");
        if accounts.contains_key(email) {
            tracing::debug!(email, "signup rejected, email already registered");
            return Err(AuthError::AccountCreationFailed);
        }
        accounts.insert(
            email.to_string(),
            Account {
                name: name.to_string(),
                password: password.to_string(),
            },
        );
        Ok(AuthUser {
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().expect("accounts mutex poisoned").len()
    }

    async fn delay(&self, duration: Duration) {
        if self.simulate_latency {
            sleep(duration).await;
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn login_accepts_seeded_account() {
        let service = AuthService::new().without_latency();
        let user = service.login("demo@example.com", "password123").await.unwrap();
        assert_eq!(user.name, "Demo User");
    }

    #[tokio::test]
    async fn login_failure_does_not_name_the_cause() {
        let service = AuthService::new().without_latency();

        let unknown = service.login("nobody@example.com", "whatever").await;
        let wrong = service.login("demo@example.com", "wrong").await;

        // Unknown email and wrong password are indistinguishable.
        assert_eq!(
            unknown.unwrap_err().to_string(),
            wrong.unwrap_err().to_string()
        );
    }

    #[tokio::test]
    async fn signup_registers_and_rejects_duplicates() {
        let service = AuthService::new().without_latency();

        let user = service
            .signup("Ada", "ada@example.com", "hunter22")
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert!(service.login("ada@example.com", "hunter22").await.is_ok());

        let err = service
            .signup("Ada Again", "ada@example.com", "other")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::AccountCreationFailed));
    }

    #[test]
    fn session_starts_unauthenticated_and_logout_resets() {
        let store = SessionStore::new();
        assert!(!store.read().is_authenticated());

        store.sign_in(AuthUser {
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        });
        assert!(store.read().is_authenticated());

        store.clear();
        assert!(!store.read().is_authenticated());
        assert_eq!(store.read().user, None);
    }
}
