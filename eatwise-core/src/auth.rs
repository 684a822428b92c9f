//! In-memory account roster and session state.
//!
//! This is a demo credential store, not a security boundary: passwords
//! are plaintext, nothing is persisted, and a reload loses the session.

use crate::profile::{Profile, ProfilePatch};
use crate::role::Role;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no account exists for this email")]
    AccountNotFound,
    #[error("incorrect password")]
    InvalidPassword,
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("all fields are required")]
    MissingField,
}

/// A roster entry. Email is the case-insensitive unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Account {
    #[must_use]
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// Who is currently logged in. At most one per application instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Account> for SessionIdentity {
    fn from(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role,
        }
    }
}

fn demo_fixtures() -> Vec<Account> {
    vec![
        Account::new(
            "Rajesh Kumar",
            "rajesh.kumar@example.com",
            "user123",
            Role::EndUser,
        ),
        Account::new(
            "Priya Sharma",
            "priya.partner@example.com",
            "partner123",
            Role::Partner,
        ),
        Account::new(
            "Sanjay Mehta",
            "sanjay.policy@example.com",
            "policy123",
            Role::PolicyMaker,
        ),
    ]
}

/// Roster plus current session, the whole authentication surface of the
/// app. Mutations are synchronous; lookups are linear scans over the
/// demo-sized roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthStore {
    accounts: Vec<Account>,
    session: Option<SessionIdentity>,
    profile: Option<Profile>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self {
            accounts: demo_fixtures(),
            session: None,
            profile: None,
        }
    }
}

impl AuthStore {
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    #[must_use]
    pub const fn session(&self) -> Option<&SessionIdentity> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn establish(&mut self, account_index: usize) -> SessionIdentity {
        let identity = SessionIdentity::from(&self.accounts[account_index]);
        self.profile = Some(Profile::seeded(&identity.name, &identity.email));
        self.session = Some(identity.clone());
        log::info!("session established for {}", identity.email);
        identity
    }

    /// Authenticate against the roster.
    ///
    /// # Errors
    /// `AccountNotFound` when no account matches the email
    /// (case-insensitively), `InvalidPassword` when the password differs.
    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionIdentity, AuthError> {
        let index = self
            .accounts
            .iter()
            .position(|a| a.email.eq_ignore_ascii_case(email))
            .ok_or(AuthError::AccountNotFound)?;
        if self.accounts[index].password != password {
            return Err(AuthError::InvalidPassword);
        }
        Ok(self.establish(index))
    }

    /// Register a new account and log it in.
    ///
    /// # Errors
    /// `MissingField` when name, email, or password is empty after
    /// trimming; `DuplicateEmail` when the email already exists in the
    /// roster, compared case-insensitively. The roster is unchanged on
    /// error.
    pub fn register(&mut self, account: Account) -> Result<SessionIdentity, AuthError> {
        let name = account.name.trim();
        let email = account.email.trim();
        if name.is_empty() || email.is_empty() || account.password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if self
            .accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(email))
        {
            return Err(AuthError::DuplicateEmail);
        }
        self.accounts.insert(
            0,
            Account {
                name: name.to_string(),
                email: email.to_string(),
                ..account
            },
        );
        Ok(self.establish(0))
    }

    /// Clear session identity and profile. Safe to call when already
    /// logged out.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            log::info!("session cleared");
        }
        self.profile = None;
    }

    /// Shallow-merge a patch into the editable profile. A no-op while
    /// logged out.
    pub fn update_profile(&mut self, patch: ProfilePatch) {
        if let Some(profile) = self.profile.as_mut() {
            profile.apply(patch);
        }
    }

    /// Reset the roster to the demo fixtures, discarding any accounts
    /// registered since startup. The current session is left untouched.
    pub fn seed_demo_users(&mut self) {
        self.accounts = demo_fixtures();
    }
}

#[cfg(test)]
mod tests {
    use super::{Account, AuthError, AuthStore};
    use crate::profile::ProfilePatch;
    use crate::role::Role;

    #[test]
    fn login_with_unknown_email_fails() {
        let mut store = AuthStore::default();
        let err = store.login("nobody@example.com", "pw").unwrap_err();
        assert_eq!(err, AuthError::AccountNotFound);
        assert!(store.session().is_none());
    }

    #[test]
    fn login_with_wrong_password_leaves_session_unset() {
        let mut store = AuthStore::default();
        let err = store
            .login("rajesh.kumar@example.com", "wrong")
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidPassword);
        assert!(store.session().is_none());
        assert!(store.profile().is_none());
    }

    #[test]
    fn login_sets_identity_and_seeds_profile() {
        let mut store = AuthStore::default();
        let identity = store
            .login("RAJESH.KUMAR@example.com", "user123")
            .expect("demo login should succeed");
        assert_eq!(identity.name, "Rajesh Kumar");
        assert_eq!(identity.email, "rajesh.kumar@example.com");
        assert_eq!(identity.role, Role::EndUser);
        let profile = store.profile().expect("profile seeded");
        assert_eq!(profile.name, "Rajesh Kumar");
        assert_eq!(profile.email, "rajesh.kumar@example.com");
    }

    #[test]
    fn register_rejects_missing_fields() {
        let mut store = AuthStore::default();
        let before = store.accounts().len();
        let err = store
            .register(Account::new("  ", "a@x.com", "pw", Role::EndUser))
            .unwrap_err();
        assert_eq!(err, AuthError::MissingField);
        assert_eq!(store.accounts().len(), before);
    }

    #[test]
    fn register_then_duplicate_email_case_insensitive() {
        let mut store = AuthStore::default();
        let identity = store
            .register(Account::new("Asha", "asha@x.com", "pw123", Role::EndUser))
            .expect("first registration succeeds");
        assert_eq!(identity.name, "Asha");
        assert_eq!(identity.email, "asha@x.com");
        assert_eq!(identity.role, Role::EndUser);

        let before = store.accounts().to_vec();
        let err = store
            .register(Account::new("Asha", "ASHA@X.COM", "pw123", Role::EndUser))
            .unwrap_err();
        assert_eq!(err, AuthError::DuplicateEmail);
        assert_eq!(store.accounts(), before.as_slice());
    }

    #[test]
    fn register_prepends_to_roster() {
        let mut store = AuthStore::default();
        store
            .register(Account::new("New", "new@x.com", "pw", Role::Partner))
            .unwrap();
        assert_eq!(store.accounts()[0].email, "new@x.com");
    }

    #[test]
    fn logout_is_idempotent() {
        let mut store = AuthStore::default();
        store.login("rajesh.kumar@example.com", "user123").unwrap();
        store.logout();
        assert!(store.session().is_none());
        assert!(store.profile().is_none());
        store.logout();
        assert!(store.session().is_none());
    }

    #[test]
    fn profile_edit_may_diverge_from_session_email() {
        let mut store = AuthStore::default();
        store.login("rajesh.kumar@example.com", "user123").unwrap();
        store.update_profile(ProfilePatch {
            email: Some("elsewhere@x.com".into()),
            ..ProfilePatch::default()
        });
        assert_eq!(store.profile().unwrap().email, "elsewhere@x.com");
        assert_eq!(
            store.session().unwrap().email,
            "rajesh.kumar@example.com"
        );
    }

    #[test]
    fn seed_demo_users_discards_registrations() {
        let mut store = AuthStore::default();
        store
            .register(Account::new("Temp", "temp@x.com", "pw", Role::EndUser))
            .unwrap();
        store.seed_demo_users();
        assert_eq!(store.accounts().len(), 3);
        assert!(
            store
                .accounts()
                .iter()
                .all(|a| !a.email.eq_ignore_ascii_case("temp@x.com"))
        );
    }
}
