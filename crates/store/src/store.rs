//! The in-memory domain store.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use stockroom_auth::{Credentials, Role, RoleCatalog, User};
use stockroom_companies::Company;
use stockroom_core::{CompanyId, Entity, Money, ProductId, Quantity, RoleId, UserId};
use stockroom_events::{EventBus, InMemoryEventBus, Subscription};
use stockroom_inventory::Movement;
use stockroom_products::{Price, Product};

use crate::clock::{Clock, SystemClock};
use crate::collection::Collection;
use crate::events::StoreEvent;
use crate::snapshot::StoreSnapshot;

/// Sole source of truth for companies, users, roles, products, movements and
/// prices, plus the currently authenticated user.
///
/// # Invariants
/// - Ids are unique within each collection (per-collection counters from 1).
/// - Collections are append-only: nothing is updated or removed.
/// - Roles are the three predefined entries of [`RoleCatalog`].
/// - The authenticated user, when set, names an existing user.
///
/// The store never validates input and never checks references between
/// entities: a product may name a company id that does not exist. Callers that
/// want validation run it before calling in (see the forms crate).
///
/// Mutators take `&mut self` and run to completion; there is no interior
/// locking. Construct one store at process start and pass it to whoever
/// drives the UI.
#[derive(Debug)]
pub struct DomainStore<C = SystemClock> {
    companies: Collection<Company>,
    users: Collection<User>,
    roles: RoleCatalog,
    products: Collection<Product>,
    movements: Collection<Movement>,
    prices: Collection<Price>,
    authenticated: Option<UserId>,
    bus: InMemoryEventBus<StoreEvent>,
    clock: C,
}

impl DomainStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DomainStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DomainStore<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            companies: Collection::new(),
            users: Collection::new(),
            roles: RoleCatalog::predefined(),
            products: Collection::new(),
            movements: Collection::new(),
            prices: Collection::new(),
            authenticated: None,
            bus: InMemoryEventBus::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────

    /// Append a company. Duplicate names and tax ids are accepted.
    pub fn create_company(&mut self, name: impl Into<String>, tax_id: impl Into<String>) -> Company {
        let (name, tax_id) = (name.into(), tax_id.into());
        let company = self
            .companies
            .append_with(|id| Company::new(id, name, tax_id))
            .clone();
        debug!(company_id = %company.id(), "company created");

        self.publish(StoreEvent::CompanyCreated {
            company: company.clone(),
            occurred_at: self.clock.now(),
        });
        company
    }

    /// Append a user. Emails are not unique; references are not checked.
    pub fn create_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        company_id: CompanyId,
        role_id: RoleId,
    ) -> User {
        let (name, email, password) = (name.into(), email.into(), password.into());
        let user = self
            .users
            .append_with(|id| User::new(id, name, email, password, company_id, role_id))
            .clone();
        debug!(user_id = %user.id(), %company_id, %role_id, "user created");

        self.publish(StoreEvent::UserCreated {
            user: user.clone(),
            occurred_at: self.clock.now(),
        });
        user
    }

    /// Append a product for `company_id` (not checked to exist).
    pub fn create_product(
        &mut self,
        name: impl Into<String>,
        company_id: CompanyId,
        base_cost: Money,
    ) -> Product {
        let name = name.into();
        let product = self
            .products
            .append_with(|id| Product::new(id, name, company_id, base_cost))
            .clone();
        debug!(product_id = %product.id(), %company_id, "product created");

        self.publish(StoreEvent::ProductCreated {
            product: product.clone(),
            occurred_at: self.clock.now(),
        });
        product
    }

    /// Record inbound stock for `product_id`, stamped with the store clock.
    pub fn record_movement(&mut self, product_id: ProductId, quantity: Quantity) -> Movement {
        let recorded_at = self.clock.now();
        let movement = self
            .movements
            .append_with(|id| Movement::inbound(id, product_id, quantity, recorded_at))
            .clone();
        debug!(movement_id = %movement.id(), %product_id, %quantity, "movement recorded");

        self.publish(StoreEvent::MovementRecorded {
            movement: movement.clone(),
            occurred_at: recorded_at,
        });
        movement
    }

    /// Append a price. The effective date is taken as given, past dates included.
    pub fn create_price(
        &mut self,
        product_id: ProductId,
        sale_price: Money,
        effective_date: NaiveDate,
    ) -> Price {
        let price = self
            .prices
            .append_with(|id| Price::new(id, product_id, sale_price, effective_date))
            .clone();
        debug!(price_id = %price.id(), %product_id, %effective_date, "price created");

        self.publish(StoreEvent::PriceCreated {
            price: price.clone(),
            occurred_at: self.clock.now(),
        });
        price
    }

    /// Force or clear the authenticated user without going through login.
    ///
    /// An id that names no user clears the session instead, so the
    /// authenticated user always refers to an existing record.
    pub fn set_authenticated_user(&mut self, user_id: Option<UserId>) {
        let next = match user_id {
            Some(id) if self.users.contains(id) => Some(id),
            Some(id) => {
                warn!(user_id = %id, "cannot authenticate unknown user; clearing session");
                None
            }
            None => None,
        };
        self.change_session(next);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────────────────

    /// Find the first user (lowest id) whose email and password both match
    /// exactly, and make it the authenticated user.
    ///
    /// A miss returns `None` and leaves the current session untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Option<User> {
        let credentials = Credentials::new(email, password);
        let Some(user) = credentials.find_in(&self.users).cloned() else {
            warn!("login failed: no matching user");
            return None;
        };

        info!(user_id = %user.id(), "login succeeded");
        self.change_session(Some(user.id()));
        Some(user)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read views
    // ─────────────────────────────────────────────────────────────────────

    pub fn companies(&self) -> &[Company] {
        self.companies.as_slice()
    }

    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    pub fn roles(&self) -> &[Role] {
        self.roles.all()
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn movements(&self) -> &[Movement] {
        self.movements.as_slice()
    }

    pub fn prices(&self) -> &[Price] {
        self.prices.as_slice()
    }

    pub fn authenticated_user(&self) -> Option<&User> {
        self.authenticated.and_then(|id| self.users.get(id))
    }

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(id)
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn role(&self, id: RoleId) -> Option<&Role> {
        self.roles.get(id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Products referencing `company_id`, in creation order.
    pub fn products_for_company(&self, company_id: CompanyId) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(move |p| p.belongs_to(company_id))
    }

    /// Movements referencing `product_id`, in creation order.
    pub fn movements_for_product(&self, product_id: ProductId) -> impl Iterator<Item = &Movement> {
        self.movements
            .iter()
            .filter(move |m| m.product_id() == product_id)
    }

    /// Prices referencing `product_id`, in creation order.
    pub fn prices_for_product(&self, product_id: ProductId) -> impl Iterator<Item = &Price> {
        self.prices
            .iter()
            .filter(move |p| p.product_id() == product_id)
    }

    /// Units on hand: the sum of all inbound movements for `product_id`.
    pub fn stock_on_hand(&self, product_id: ProductId) -> Quantity {
        stockroom_inventory::stock_on_hand(&self.movements, product_id)
    }

    /// The sale price in force for `product_id` on `day`, if any.
    pub fn effective_price(&self, product_id: ProductId, day: NaiveDate) -> Option<&Price> {
        stockroom_products::latest_effective(self.prices_for_product(product_id), day)
    }

    /// Detached, serializable copy of the whole store.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            companies: self.companies.as_slice().to_vec(),
            users: self.users.as_slice().to_vec(),
            roles: self.roles.all().to_vec(),
            products: self.products.as_slice().to_vec(),
            movements: self.movements.as_slice().to_vec(),
            prices: self.prices.as_slice().to_vec(),
            authenticated_user: self.authenticated,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────

    /// Receive a [`StoreEvent`] for every change applied from now on.
    pub fn subscribe(&self) -> Subscription<StoreEvent> {
        self.bus.subscribe()
    }

    fn change_session(&mut self, next: Option<UserId>) {
        if self.authenticated == next {
            return;
        }
        self.authenticated = next;
        debug!(user_id = ?next, "session changed");

        self.publish(StoreEvent::SessionChanged {
            user_id: next,
            occurred_at: self.clock.now(),
        });
    }

    fn publish(&self, event: StoreEvent) {
        if let Err(e) = self.bus.publish(event) {
            warn!(error = ?e, "failed to publish store event");
        }
    }
}
