//! Executes console commands against one store.

use std::io::{self, Write};

use rust_decimal::Decimal;
use tracing::{debug, info};

use stockroom_auth::RoleCatalog;
use stockroom_core::{Entity, Money};
use stockroom_forms::{
    CompanyForm, FormWarning, LoginForm, MovementForm, PriceForm, ProductForm, UserForm,
};
use stockroom_store::{Clock, DomainStore, SystemClock};

use crate::command::{self, Command, HELP};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<C: Clock = SystemClock> {
    store: DomainStore<C>,
}

impl Shell<SystemClock> {
    pub fn new() -> Self {
        Self::with_store(DomainStore::new())
    }
}

impl Default for Shell<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Shell<C> {
    pub fn with_store(store: DomainStore<C>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DomainStore<C> {
        &self.store
    }

    /// One company, one admin user and one product.
    pub fn seed_demo(&mut self) {
        let company = self.store.create_company("Demo Company", "0000000000001");
        let admin = RoleCatalog::predefined().first().id();
        self.store
            .create_user("Admin", "admin@demo.local", "admin", company.id(), admin);
        self.store.create_product(
            "Sample product",
            company.id(),
            Money::from_decimal(Decimal::new(100, 2)),
        );
        info!(company_id = %company.id(), "demo data seeded");
    }

    /// Parse and run one input line. Parse and form errors are printed, never returned.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        match command::parse(line) {
            Ok(cmd) => self.execute(cmd, out),
            Err(command::ParseError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, cmd: Command, out: &mut impl Write) -> io::Result<Flow> {
        debug!(command = cmd.name(), "executing");
        match cmd {
            Command::AddCompany { name, tax_id } => {
                match CompanyForm::new(name, tax_id).submit(&mut self.store) {
                    Ok(done) => {
                        writeln!(out, "company {} created", done.entity.id())?;
                        print_warnings(out, &done.warnings)?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::ListCompanies => {
                for company in self.store.companies() {
                    writeln!(out, "{}\t{}\t{}", company.id(), company.name(), company.tax_id())?;
                }
            }
            Command::AddUser {
                name,
                email,
                password,
                company_id,
                role_id,
            } => {
                let defaults = UserForm::with_defaults(&self.store);
                let form = UserForm {
                    name,
                    email,
                    password,
                    company_id: company_id.or(defaults.company_id),
                    role_id: role_id.or(defaults.role_id),
                };
                match form.submit(&mut self.store) {
                    Ok(done) => {
                        writeln!(out, "user {} created", done.entity.id())?;
                        print_warnings(out, &done.warnings)?;
                    }
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::ListUsers => {
                for user in self.store.users() {
                    let role = self
                        .store
                        .role(user.role_id())
                        .map(|r| r.name().to_string())
                        .unwrap_or_else(|| format!("role {}", user.role_id()));
                    writeln!(
                        out,
                        "{}\t{}\t{}\tcompany {}\t{}",
                        user.id(),
                        user.name(),
                        user.email(),
                        user.company_id(),
                        role
                    )?;
                }
            }
            Command::ListRoles => {
                for role in self.store.roles() {
                    writeln!(out, "{}\t{}", role.id(), role.name())?;
                }
            }
            Command::Login { email, password } => {
                match LoginForm::new(email, password).submit(&mut self.store) {
                    Ok(user) => writeln!(out, "welcome, {}", user.name())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::Logout => {
                self.store.set_authenticated_user(None);
                writeln!(out, "logged out")?;
            }
            Command::WhoAmI => match self.store.authenticated_user() {
                Some(user) => {
                    let role = self.store.role(user.role_id()).map(|r| r.name()).unwrap_or("?");
                    writeln!(out, "{} <{}> ({role})", user.name(), user.email())?;
                }
                None => writeln!(out, "not logged in")?,
            },
            Command::AddProduct {
                company_id,
                base_cost,
                name,
            } => {
                let form = ProductForm {
                    name,
                    company_id: Some(company_id),
                    base_cost,
                };
                match form.submit(&mut self.store) {
                    Ok(done) => writeln!(out, "product {} created", done.entity.id())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::ListProducts { company_id } => {
                let products: Vec<_> = match company_id {
                    Some(id) => self.store.products_for_company(id).collect(),
                    None => self.store.products().iter().collect(),
                };
                for product in products {
                    writeln!(
                        out,
                        "{}\tcompany {}\t{}\t{}",
                        product.id(),
                        product.company_id(),
                        product.name(),
                        product.base_cost()
                    )?;
                }
            }
            Command::AddMovement {
                company_id,
                product_id,
                quantity,
            } => {
                let form = MovementForm {
                    company_id: Some(company_id),
                    product_id: Some(product_id),
                    quantity,
                };
                match form.submit(&mut self.store) {
                    Ok(done) => writeln!(
                        out,
                        "movement {} recorded; stock on hand {}",
                        done.entity.id(),
                        self.store.stock_on_hand(product_id)
                    )?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::ListMovements { product_id } => {
                let movements: Vec<_> = match product_id {
                    Some(id) => self.store.movements_for_product(id).collect(),
                    None => self.store.movements().iter().collect(),
                };
                for movement in movements {
                    writeln!(
                        out,
                        "{}\tproduct {}\t{}\t{}\t{}",
                        movement.id(),
                        movement.product_id(),
                        movement.kind(),
                        movement.quantity(),
                        movement.recorded_at().format("%Y-%m-%d %H:%M:%S")
                    )?;
                }
            }
            Command::AddPrice {
                company_id,
                product_id,
                sale_price,
                effective_date,
            } => {
                let form = PriceForm {
                    company_id: Some(company_id),
                    product_id: Some(product_id),
                    sale_price,
                    effective_date,
                };
                match form.submit(&mut self.store) {
                    Ok(done) => writeln!(out, "price {} created", done.entity.id())?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Command::ListPrices { product_id } => {
                let prices: Vec<_> = match product_id {
                    Some(id) => self.store.prices_for_product(id).collect(),
                    None => self.store.prices().iter().collect(),
                };
                for price in prices {
                    writeln!(
                        out,
                        "{}\tproduct {}\t{}\tfrom {}",
                        price.id(),
                        price.product_id(),
                        price.sale_price(),
                        price.effective_date()
                    )?;
                }
            }
            Command::Stock { product_id } => {
                let Some(product) = self.store.product(product_id) else {
                    writeln!(out, "error: no product {product_id}")?;
                    return Ok(Flow::Continue);
                };
                writeln!(
                    out,
                    "{}: {} on hand",
                    product.name(),
                    self.store.stock_on_hand(product_id)
                )?;
                let today = self.store.clock().today();
                match self.store.effective_price(product_id, today) {
                    Some(price) => writeln!(out, "price today: {}", price.sale_price())?,
                    None => writeln!(out, "no price in effect today")?,
                }
            }
            Command::Dump => match self.store.snapshot().to_json_pretty() {
                Ok(json) => writeln!(out, "{json}")?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

fn print_warnings(out: &mut impl Write, warnings: &[FormWarning]) -> io::Result<()> {
    for warning in warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}
