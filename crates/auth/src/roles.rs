use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, RoleId};

/// A permission label assigned to users.
///
/// Roles are opaque names at this layer; nothing in the store attaches
/// permissions to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: Cow<'static, str>,
}

impl Role {
    pub const fn predefined(id: u64, name: &'static str) -> Self {
        Self {
            id: RoleId::new(id),
            name: Cow::Borrowed(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Role {
    type Id = RoleId;

    fn id(&self) -> RoleId {
        self.id
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

static PREDEFINED: [Role; 3] = [
    Role::predefined(1, "Admin"),
    Role::predefined(2, "Mesero"),
    Role::predefined(3, "Cocinero"),
];

/// The fixed set of roles available for the process lifetime.
///
/// There is no way to add, rename, or remove a role: the catalog only hands
/// out shared views of the three predefined entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: &'static [Role; 3],
}

impl RoleCatalog {
    pub fn predefined() -> Self {
        Self { roles: &PREDEFINED }
    }

    pub fn all(&self) -> &'static [Role] {
        self.roles
    }

    pub fn get(&self, id: RoleId) -> Option<&'static Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// The role a new user form starts with.
    pub fn first(&self) -> &'static Role {
        &self.roles[0]
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::predefined()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_three_roles() {
        let catalog = RoleCatalog::predefined();
        let ids: Vec<u64> = catalog.all().iter().map(|r| r.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn catalog_names_are_stable() {
        let catalog = RoleCatalog::predefined();
        let names: Vec<&str> = catalog.all().iter().map(Role::name).collect();
        assert_eq!(names, vec!["Admin", "Mesero", "Cocinero"]);
    }

    #[test]
    fn get_unknown_role_returns_none() {
        let catalog = RoleCatalog::predefined();
        assert!(catalog.get(RoleId::new(4)).is_none());
        assert_eq!(catalog.get(RoleId::new(2)).map(Role::name), Some("Mesero"));
    }

    #[test]
    fn first_role_is_admin() {
        assert_eq!(RoleCatalog::default().first().name(), "Admin");
    }
}
