use crate::User;

/// A login attempt: email + password, compared verbatim.
///
/// Matching is case-sensitive on both fields and does no normalization
/// (no trimming, no lowercasing of the email).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self { email, password }
    }

    pub fn matches(&self, user: &User) -> bool {
        user.email() == self.email && user.password() == self.password
    }

    /// First user (in the given order) whose credentials match.
    ///
    /// Several users may share an email/password pair; the earliest wins.
    pub fn find_in<'u, I>(&self, users: I) -> Option<&'u User>
    where
        I: IntoIterator<Item = &'u User>,
    {
        users.into_iter().find(|u| self.matches(u))
    }
}

impl core::fmt::Debug for Credentials<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{CompanyId, RoleId, UserId};

    fn user(id: u64, email: &str, password: &str) -> User {
        User::new(
            UserId::new(id),
            format!("user-{id}"),
            email,
            password,
            CompanyId::new(1),
            RoleId::new(1),
        )
    }

    #[test]
    fn exact_match_required() {
        let u = user(1, "ana@x.com", "pw");
        assert!(Credentials::new("ana@x.com", "pw").matches(&u));
        assert!(!Credentials::new("ana@x.com", "wrong").matches(&u));
        assert!(!Credentials::new("other@x.com", "pw").matches(&u));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let u = user(1, "ana@x.com", "pw");
        assert!(!Credentials::new("ANA@x.com", "pw").matches(&u));
        assert!(!Credentials::new("ana@x.com", "PW").matches(&u));
    }

    #[test]
    fn duplicate_pairs_resolve_to_first() {
        let users = vec![user(1, "a@x.com", "pw"), user(2, "a@x.com", "pw")];
        let found = Credentials::new("a@x.com", "pw").find_in(&users).unwrap();
        assert_eq!(found.name(), "user-1");
    }

    #[test]
    fn empty_collection_finds_nothing() {
        let users: Vec<User> = Vec::new();
        assert!(Credentials::new("a@x.com", "pw").find_in(&users).is_none());
    }
}
