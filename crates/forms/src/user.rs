use tracing::debug;

use stockroom_auth::User;
use stockroom_core::{CompanyId, RoleId};
use stockroom_store::{Clock, DomainStore};

use crate::error::{FormError, FormWarning, Submitted};
use crate::input::is_valid_email;
use crate::selection::{default_company, default_role, offered_company, offered_role};

/// The "new user" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub company_id: Option<CompanyId>,
    pub role_id: Option<RoleId>,
}

/// A user form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub company_id: CompanyId,
    pub role_id: RoleId,
}

impl UserForm {
    /// Empty text fields with the first company and first role preselected.
    pub fn with_defaults<C: Clock>(store: &DomainStore<C>) -> Self {
        Self {
            company_id: default_company(store),
            role_id: default_role(store),
            ..Self::default()
        }
    }

    pub fn validate<C: Clock>(&self, store: &DomainStore<C>) -> Result<ValidUser, FormError> {
        let (Some(company_id), Some(role_id)) = (self.company_id, self.role_id) else {
            return Err(FormError::MissingFields);
        };
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(ValidUser {
            company_id: offered_company(store, company_id)?,
            role_id: offered_role(store, role_id)?,
        })
    }

    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<Submitted<User>, FormError> {
        let valid = self
            .validate(store)
            .inspect_err(|e| debug!(error = %e, "user form rejected"))?;

        let mut warnings = Vec::new();
        if store.users().iter().any(|u| u.email() == self.email) {
            warnings.push(FormWarning::DuplicateEmail(self.email.clone()));
        }

        let user = store.create_user(
            self.name.clone(),
            self.email.clone(),
            self.password.clone(),
            valid.company_id,
            valid.role_id,
        );
        Ok(Submitted {
            entity: user,
            warnings,
        })
    }
}
