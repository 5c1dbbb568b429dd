use tracing::debug;

use stockroom_auth::User;
use stockroom_store::{Clock, DomainStore};

use crate::error::FormError;
use crate::input::is_valid_email;

/// The login screen.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate, then ask the store. A store miss becomes
    /// [`FormError::InvalidCredentials`].
    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<User, FormError> {
        self.validate()
            .inspect_err(|e| debug!(error = %e, "login form rejected"))?;
        store
            .login(&self.email, &self.password)
            .ok_or(FormError::InvalidCredentials)
    }
}

impl core::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{CompanyId, RoleId};

    #[test]
    fn blank_fields_rejected_before_store() {
        let mut store = DomainStore::new();
        let sub = store.subscribe();
        assert_eq!(
            LoginForm::new("", "pw").submit(&mut store),
            Err(FormError::MissingFields)
        );
        assert!(sub.drain().is_empty());
    }

    #[test]
    fn malformed_email_rejected() {
        assert_eq!(LoginForm::new("ana", "pw").validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn miss_becomes_invalid_credentials() {
        let mut store = DomainStore::new();
        store.create_user("Ana", "ana@x.com", "pw", CompanyId::new(1), RoleId::new(1));
        assert_eq!(
            LoginForm::new("ana@x.com", "nope").submit(&mut store),
            Err(FormError::InvalidCredentials)
        );
        let user = LoginForm::new("ana@x.com", "pw").submit(&mut store).unwrap();
        assert_eq!(store.authenticated_user(), Some(&user));
    }
}
