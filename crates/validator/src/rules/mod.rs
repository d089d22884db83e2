//! Built-in rule library
//!
//! Every rule is a factory returning a [`RuleStep`](crate::foundation::RuleStep).
//! Checks and transforms stop doing work once an earlier step failed;
//! [`default_value`] is built on the `customize` path and always runs.
//!
//! - **Presence**: [`required`]
//! - **Character classes**: [`has_letter`], [`has_lower`], [`has_upper`],
//!   [`has_number`], [`has_symbol`], [`is_alphanumeric`], [`is_number`]
//! - **Content**: [`has_string`], [`has_prefix`], [`has_suffix`],
//!   [`enum_string`], [`is_mail`], [`is_url`], [`regex`]
//! - **Length**: [`min_length`], [`max_length`], [`length_range`]
//! - **Numeric**: [`min_int`], [`max_int`], [`min_float`], [`max_float`]
//! - **Transforms**: [`trim`], [`lowercase`], [`uppercase`], [`default_value`]
//! - **Passwords**: [`PasswordPolicy`]

mod chars;
mod content;
mod length;
mod numeric;
mod password;
mod presence;
mod transform;

pub use chars::{has_letter, has_lower, has_number, has_symbol, has_upper, is_alphanumeric, is_number};
pub use content::{enum_string, has_prefix, has_string, has_suffix, is_mail, is_url, regex};
pub use length::{length_range, max_length, min_length};
pub use numeric::{max_float, max_int, min_float, min_int};
pub use password::PasswordPolicy;
pub use presence::required;
pub(crate) use presence::REQUIRED_STEP;
pub use transform::{default_value, lowercase, trim, uppercase};
