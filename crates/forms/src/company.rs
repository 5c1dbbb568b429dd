use tracing::debug;

use stockroom_companies::Company;
use stockroom_store::{Clock, DomainStore};

use crate::error::{FormError, FormWarning, Submitted};

/// The "new company" screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub name: String,
    pub tax_id: String,
}

impl CompanyForm {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.tax_id.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    pub fn submit<C: Clock>(&self, store: &mut DomainStore<C>) -> Result<Submitted<Company>, FormError> {
        self.validate().inspect_err(|e| debug!(error = %e, "company form rejected"))?;

        let mut warnings = Vec::new();
        if store.companies().iter().any(|c| c.tax_id() == self.tax_id) {
            warnings.push(FormWarning::DuplicateTaxId(self.tax_id.clone()));
        }

        let company = store.create_company(self.name.clone(), self.tax_id.clone());
        Ok(Submitted {
            entity: company,
            warnings,
        })
    }
}
