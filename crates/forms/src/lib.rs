//! `stockroom-forms` — the checks a screen runs before touching the store.
//!
//! The store accepts anything. These forms hold raw field text and picker
//! selections, reject what the screens would reject, and call the matching
//! store mutator once the input is acceptable.

pub mod company;
pub mod error;
pub mod input;
pub mod login;
pub mod movement;
pub mod price;
pub mod product;
pub mod selection;
pub mod user;

pub use company::CompanyForm;
pub use error::{FormError, FormWarning, Submitted};
pub use input::{is_valid_email, sanitize_decimal_input};
pub use login::LoginForm;
pub use movement::MovementForm;
pub use price::{PriceForm, ValidPrice};
pub use product::{ProductForm, ValidProduct};
pub use selection::{default_company, default_role};
pub use user::{UserForm, ValidUser};
