//! Append-only entity collection.

use stockroom_core::{Entity, IdSequence};

/// An ordered, append-only list of entities with store-assigned ids.
///
/// Ids come from a private [`IdSequence`], so they are strictly increasing in
/// insertion order. That ordering is what lets [`Collection::get`] binary
/// search instead of scanning.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    ids: IdSequence,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ids: IdSequence::new(),
        }
    }
}

impl<T> Collection<T>
where
    T: Entity,
    T::Id: From<u64> + Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh id, build the entity with it, and append it.
    pub fn append_with(&mut self, build: impl FnOnce(T::Id) -> T) -> &T {
        let id: T::Id = self.ids.next();
        let entity = build(id);
        debug_assert_eq!(entity.id(), id, "entity must keep the allocated id");
        self.items.push(entity);
        &self.items[self.items.len() - 1]
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items
            .binary_search_by(|item| item.id().cmp(&id))
            .ok()
            .map(|idx| &self.items[idx])
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_companies::Company;
    use stockroom_core::CompanyId;

    #[test]
    fn append_assigns_increasing_ids() {
        let mut companies = Collection::<Company>::new();
        let a = companies.append_with(|id| Company::new(id, "Acme", "RUC1")).id();
        let b = companies.append_with(|id| Company::new(id, "Acme", "RUC1")).id();
        assert_eq!(a, CompanyId::new(1));
        assert_eq!(b, CompanyId::new(2));
        assert_eq!(companies.len(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let mut companies = Collection::<Company>::new();
        for name in ["a", "b", "c"] {
            companies.append_with(|id| Company::new(id, name, "x"));
        }
        assert_eq!(companies.get(CompanyId::new(2)).map(Company::name), Some("b"));
        assert!(companies.get(CompanyId::new(4)).is_none());
        assert!(!companies.contains(CompanyId::new(0)));
    }
}
