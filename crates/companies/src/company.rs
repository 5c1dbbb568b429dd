use serde::{Deserialize, Serialize};

use stockroom_core::{CompanyId, Entity};

/// A business registered in the store.
///
/// Neither the name nor the tax id is unique: two companies may share both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    tax_id: String,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tax_id: tax_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> CompanyId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_and_tax_id_as_given() {
        let company = Company::new(CompanyId::new(3), "Acme S.A.", "0990000000001");
        assert_eq!(company.id(), CompanyId::new(3));
        assert_eq!(company.name(), "Acme S.A.");
        assert_eq!(company.tax_id(), "0990000000001");
    }

    #[test]
    fn identical_fields_with_different_ids_are_different_companies() {
        let a = Company::new(CompanyId::new(1), "Acme", "RUC1");
        let b = Company::new(CompanyId::new(2), "Acme", "RUC1");
        assert_ne!(a, b);
        assert_eq!(a.tax_id(), b.tax_id());
    }

    #[test]
    fn serializes_flat_with_numeric_id() {
        let json = serde_json::to_value(Company::new(CompanyId::new(7), "Acme", "RUC1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "name": "Acme", "tax_id": "RUC1" })
        );
    }
}
