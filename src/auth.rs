//! Mock authentication: signup, login and social login return a user record
//! without any real credential verification or session handling. Fully
//! decoupled from the data layer; a user id is only the soft key a roommate
//! profile hangs off.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

#[derive(Clone, Default)]
pub struct AuthService {
    // Keyed by email. Passwords are accepted and discarded.
    users: Arc<Mutex<HashMap<String, User>>>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_up(&self, name: &str, email: &str, _password: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().expect("user map poisoned");
        if users.contains_key(email) {
            return Err(AppError::BadRequest(format!(
                "An account already exists for {}",
                email
            )));
        }
        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        };
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }

    pub fn log_in(&self, email: &str, _password: &str) -> Result<User, AppError> {
        let users = self.users.lock().expect("user map poisoned");
        users.get(email).cloned().ok_or(AppError::Unauthorized)
    }

    /// Simulated provider popup: always succeeds with a provider-branded user.
    pub fn social_login(&self, provider: &str) -> Result<User, AppError> {
        let email = format!("{}.student@example.com", provider.to_lowercase());
        let mut users = self.users.lock().expect("user map poisoned");
        let user = users.entry(email.clone()).or_insert_with(|| User {
            id: format!("user-{}", Uuid::new_v4()),
            name: Some(format!("{} Student", provider)),
            email: Some(email),
        });
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_then_log_in_returns_the_same_user() {
        let auth = AuthService::new();
        let created = auth
            .sign_up("Sarah", "sarah@example.com", "hunter2")
            .expect("sign up");
        assert!(created.id.starts_with("user-"));

        let logged_in = auth.log_in("sarah@example.com", "hunter2").expect("log in");
        assert_eq!(logged_in, created);
    }

    #[test]
    fn test_log_in_unknown_email_is_unauthorized() {
        let auth = AuthService::new();
        let err = auth
            .log_in("nobody@example.com", "pw")
            .expect_err("unknown email must fail");
        assert!(matches!(err, AppError::Unauthorized));
    }

    #[test]
    fn test_duplicate_sign_up_is_rejected() {
        let auth = AuthService::new();
        auth.sign_up("John", "john@example.com", "pw").expect("first");
        let err = auth
            .sign_up("John", "john@example.com", "pw")
            .expect_err("duplicate must fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_social_login_is_stable_per_provider() {
        let auth = AuthService::new();
        let first = auth.social_login("Google").expect("first");
        let second = auth.social_login("Google").expect("second");
        assert_eq!(first, second);
    }
}
