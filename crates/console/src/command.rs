//! Console command grammar.

use std::str::FromStr;

use thiserror::Error;

use stockroom_core::{CompanyId, ProductId, RoleId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty line")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid {field} `{value}`")]
    InvalidId { field: &'static str, value: String },
}

/// One parsed console line. Amount and date fields stay raw text; the forms
/// validate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddCompany {
        name: String,
        tax_id: String,
    },
    ListCompanies,
    AddUser {
        name: String,
        email: String,
        password: String,
        company_id: Option<CompanyId>,
        role_id: Option<RoleId>,
    },
    ListUsers,
    ListRoles,
    Login {
        email: String,
        password: String,
    },
    Logout,
    WhoAmI,
    AddProduct {
        company_id: CompanyId,
        base_cost: String,
        name: String,
    },
    ListProducts {
        company_id: Option<CompanyId>,
    },
    AddMovement {
        company_id: CompanyId,
        product_id: ProductId,
        quantity: String,
    },
    ListMovements {
        product_id: Option<ProductId>,
    },
    AddPrice {
        company_id: CompanyId,
        product_id: ProductId,
        sale_price: String,
        effective_date: String,
    },
    ListPrices {
        product_id: Option<ProductId>,
    },
    Stock {
        product_id: ProductId,
    },
    Dump,
    Help,
    Quit,
}

impl Command {
    /// Short label for logs; never includes field values.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddCompany { .. } => "company add",
            Command::ListCompanies => "company list",
            Command::AddUser { .. } => "user add",
            Command::ListUsers => "user list",
            Command::ListRoles => "roles",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::WhoAmI => "whoami",
            Command::AddProduct { .. } => "product add",
            Command::ListProducts { .. } => "product list",
            Command::AddMovement { .. } => "movement add",
            Command::ListMovements { .. } => "movement list",
            Command::AddPrice { .. } => "price add",
            Command::ListPrices { .. } => "price list",
            Command::Stock { .. } => "stock",
            Command::Dump => "dump",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

pub const HELP: &str = "\
company add <tax_id> <name...>
company list
user add <email> <password> <company_id|-> <role_id|-> <name...>
user list
roles
login <email> <password>
logout
whoami
product add <company_id> <cost> <name...>
product list [company_id]
movement add <company_id> <product_id> <quantity>
movement list [product_id]
price add <company_id> <product_id> <price> <YYYY-MM-DD>
price list [product_id]
stock <product_id>
dump
help
quit";

const COMPANY_ADD: &str = "company add <tax_id> <name...>";
const USER_ADD: &str = "user add <email> <password> <company_id|-> <role_id|-> <name...>";
const LOGIN: &str = "login <email> <password>";
const PRODUCT_ADD: &str = "product add <company_id> <cost> <name...>";
const PRODUCT_LIST: &str = "product list [company_id]";
const MOVEMENT_ADD: &str = "movement add <company_id> <product_id> <quantity>";
const MOVEMENT_LIST: &str = "movement list [product_id]";
const PRICE_ADD: &str = "price add <company_id> <product_id> <price> <YYYY-MM-DD>";
const PRICE_LIST: &str = "price list [product_id]";
const STOCK: &str = "stock <product_id>";

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Err(ParseError::Empty);
    };

    match (head, rest) {
        ("company", ["add", tax_id, name @ ..]) if !name.is_empty() => Ok(Command::AddCompany {
            name: name.join(" "),
            tax_id: tax_id.to_string(),
        }),
        ("company", ["add", ..]) => Err(ParseError::Usage(COMPANY_ADD)),
        ("company", ["list"]) => Ok(Command::ListCompanies),

        ("user", ["add", email, password, company_id, role_id, name @ ..]) if !name.is_empty() => {
            Ok(Command::AddUser {
                name: name.join(" "),
                email: email.to_string(),
                password: password.to_string(),
                company_id: pick("company id", company_id)?,
                role_id: pick("role id", role_id)?,
            })
        }
        ("user", ["add", ..]) => Err(ParseError::Usage(USER_ADD)),
        ("user", ["list"]) => Ok(Command::ListUsers),
        ("roles", []) => Ok(Command::ListRoles),

        ("login", [email, password]) => Ok(Command::Login {
            email: email.to_string(),
            password: password.to_string(),
        }),
        ("login", _) => Err(ParseError::Usage(LOGIN)),
        ("logout", []) => Ok(Command::Logout),
        ("whoami", []) => Ok(Command::WhoAmI),

        ("product", ["add", company_id, cost, name @ ..]) if !name.is_empty() => {
            Ok(Command::AddProduct {
                company_id: id("company id", company_id)?,
                base_cost: cost.to_string(),
                name: name.join(" "),
            })
        }
        ("product", ["add", ..]) => Err(ParseError::Usage(PRODUCT_ADD)),
        ("product", ["list", filter @ ..]) => match filter {
            [] => Ok(Command::ListProducts { company_id: None }),
            [company_id] => Ok(Command::ListProducts {
                company_id: Some(id("company id", company_id)?),
            }),
            _ => Err(ParseError::Usage(PRODUCT_LIST)),
        },

        ("movement", ["add", company_id, product_id, quantity]) => Ok(Command::AddMovement {
            company_id: id("company id", company_id)?,
            product_id: id("product id", product_id)?,
            quantity: quantity.to_string(),
        }),
        ("movement", ["add", ..]) => Err(ParseError::Usage(MOVEMENT_ADD)),
        ("movement", ["list", filter @ ..]) => match filter {
            [] => Ok(Command::ListMovements { product_id: None }),
            [product_id] => Ok(Command::ListMovements {
                product_id: Some(id("product id", product_id)?),
            }),
            _ => Err(ParseError::Usage(MOVEMENT_LIST)),
        },

        ("price", ["add", company_id, product_id, price, date]) => Ok(Command::AddPrice {
            company_id: id("company id", company_id)?,
            product_id: id("product id", product_id)?,
            sale_price: price.to_string(),
            effective_date: date.to_string(),
        }),
        ("price", ["add", ..]) => Err(ParseError::Usage(PRICE_ADD)),
        ("price", ["list", filter @ ..]) => match filter {
            [] => Ok(Command::ListPrices { product_id: None }),
            [product_id] => Ok(Command::ListPrices {
                product_id: Some(id("product id", product_id)?),
            }),
            _ => Err(ParseError::Usage(PRICE_LIST)),
        },

        ("stock", [product_id]) => Ok(Command::Stock {
            product_id: id("product id", product_id)?,
        }),
        ("stock", _) => Err(ParseError::Usage(STOCK)),

        ("dump", []) => Ok(Command::Dump),
        ("help", _) => Ok(Command::Help),
        ("quit" | "exit", []) => Ok(Command::Quit),

        _ => Err(ParseError::Unknown(line.trim().to_string())),
    }
}

/// `-` keeps the form's default selection.
fn pick<T: FromStr>(field: &'static str, value: &str) -> Result<Option<T>, ParseError> {
    match value {
        "-" => Ok(None),
        _ => id(field, value).map(Some),
    }
}

fn id<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidId {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   \t"), Err(ParseError::Empty));
    }

    #[test]
    fn company_name_takes_the_rest_of_the_line() {
        assert_eq!(
            parse("company add RUC1 Acme"),
            Ok(Command::AddCompany {
                name: "Acme".into(),
                tax_id: "RUC1".into()
            })
        );
        assert_eq!(
            parse("company add 0000000000001 Demo   Company"),
            Ok(Command::AddCompany {
                name: "Demo Company".into(),
                tax_id: "0000000000001".into()
            })
        );
        assert_eq!(parse("company list"), Ok(Command::ListCompanies));
        assert_eq!(parse("company add RUC1"), Err(ParseError::Usage(COMPANY_ADD)));
    }

    #[test]
    fn user_add_with_default_and_explicit_picks() {
        assert_eq!(
            parse("user add ana@x.com pw - - Ana Lopez"),
            Ok(Command::AddUser {
                name: "Ana Lopez".into(),
                email: "ana@x.com".into(),
                password: "pw".into(),
                company_id: None,
                role_id: None,
            })
        );
        assert_eq!(
            parse("user add ana@x.com pw 2 3 Ana"),
            Ok(Command::AddUser {
                name: "Ana".into(),
                email: "ana@x.com".into(),
                password: "pw".into(),
                company_id: Some(CompanyId::new(2)),
                role_id: Some(RoleId::new(3)),
            })
        );
        assert_eq!(
            parse("user add ana@x.com pw - x Ana"),
            Err(ParseError::InvalidId {
                field: "role id",
                value: "x".into()
            })
        );
        assert_eq!(
            parse("user add ana@x.com pw - -"),
            Err(ParseError::Usage(USER_ADD))
        );
    }

    #[test]
    fn session_commands() {
        assert_eq!(
            parse("login ana@x.com pw"),
            Ok(Command::Login {
                email: "ana@x.com".into(),
                password: "pw".into()
            })
        );
        assert_eq!(parse("login ana@x.com"), Err(ParseError::Usage(LOGIN)));
        assert_eq!(parse("logout"), Ok(Command::Logout));
        assert_eq!(parse("whoami"), Ok(Command::WhoAmI));
        assert_eq!(parse("roles"), Ok(Command::ListRoles));
        assert_eq!(parse("user list"), Ok(Command::ListUsers));
    }

    #[test]
    fn product_name_takes_the_rest_of_the_line() {
        assert_eq!(
            parse("product add 1 10.50 Big  Red Widget"),
            Ok(Command::AddProduct {
                company_id: CompanyId::new(1),
                base_cost: "10.50".into(),
                name: "Big Red Widget".into(),
            })
        );
        assert_eq!(parse("product add 1 10.50"), Err(ParseError::Usage(PRODUCT_ADD)));
    }

    #[test]
    fn list_filters_are_optional() {
        assert_eq!(
            parse("product list"),
            Ok(Command::ListProducts { company_id: None })
        );
        assert_eq!(
            parse("product list 4"),
            Ok(Command::ListProducts {
                company_id: Some(CompanyId::new(4))
            })
        );
        assert_eq!(
            parse("movement list 2"),
            Ok(Command::ListMovements {
                product_id: Some(ProductId::new(2))
            })
        );
        assert_eq!(parse("price list"), Ok(Command::ListPrices { product_id: None }));
        assert_eq!(parse("price list 1 2"), Err(ParseError::Usage(PRICE_LIST)));
    }

    #[test]
    fn movement_and_price_add() {
        assert_eq!(
            parse("movement add 1 2 12"),
            Ok(Command::AddMovement {
                company_id: CompanyId::new(1),
                product_id: ProductId::new(2),
                quantity: "12".into(),
            })
        );
        assert_eq!(
            parse("price add 1 2 15.50 2026-10-18"),
            Ok(Command::AddPrice {
                company_id: CompanyId::new(1),
                product_id: ProductId::new(2),
                sale_price: "15.50".into(),
                effective_date: "2026-10-18".into(),
            })
        );
        assert_eq!(parse("price add 1 2 15.50"), Err(ParseError::Usage(PRICE_ADD)));
    }

    #[test]
    fn bad_ids_name_the_field() {
        assert_eq!(
            parse("stock abc"),
            Err(ParseError::InvalidId {
                field: "product id",
                value: "abc".into()
            })
        );
        assert_eq!(
            parse("movement add x 2 1"),
            Err(ParseError::InvalidId {
                field: "company id",
                value: "x".into()
            })
        );
    }

    #[test]
    fn misc_commands() {
        assert_eq!(parse("stock 3"), Ok(Command::Stock { product_id: ProductId::new(3) }));
        assert_eq!(parse("dump"), Ok(Command::Dump));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("exit"), Ok(Command::Quit));
        assert_eq!(
            parse("frobnicate now"),
            Err(ParseError::Unknown("frobnicate now".into()))
        );
    }
}
