//! User entity.

use serde::Serialize;

use stockroom_core::{CompanyId, Entity, RoleId, UserId};

/// A person who can log in.
///
/// `company_id` and `role_id` are plain references: nothing checks that they
/// name an existing company or role.
///
/// The password is kept as plaintext (login is an exact string comparison).
/// It is never serialized and is redacted from `Debug` output. Users are
/// serialize-only: JSON output cannot be read back into a `User`, since it
/// would come back without a password.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    company_id: CompanyId,
    role_id: RoleId,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        company_id: CompanyId,
        role_id: RoleId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            company_id,
            role_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn role_id(&self) -> RoleId {
        self.role_id
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl core::fmt::Debug for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("company_id", &self.company_id)
            .field("role_id", &self.role_id)
            .finish()
    }
}
