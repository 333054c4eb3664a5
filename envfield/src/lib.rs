//! Bind environment variables to typed configuration fields
//!
//! `envfield` fills the fields of a configuration struct from environment
//! variables. Field names are resolved automatically: a member named
//! `databaseURL` matches `databaseURL`, `DATABASEURL`, `databaseurl`,
//! `database_url`, `DATABASE_URL`, tried in that order.
//!
//! # Features
//!
//! - **Implicit names**: Derived from the struct member, with snake_case and case variants
//! - **Explicit names**: Resolved as soon as the field is created
//! - **Prefixes**: `APP` and `APP_` both turn `port` into `APP_port`
//! - **Default values**: Used when a variable is missing or cannot be parsed
//! - **Optional fields**: `Option<T>` with a `None` default resolves to `None` instead of failing
//! - **Declarative**: Field table generated with `#[derive(EnvConfig)]`
//!
//! # Value Parsing
//!
//! - Strings: taken as is
//! - Booleans: `1`/`true` and `0`/`false`, ignoring case
//! - Integers: every primitive width, signed and unsigned; overflow does not parse
//! - Your own types: implement [`FromEnvValue`]
//!
//! # Example
//!
//! ```rust
//! use envfield::{EnvConfig, EnvField};
//!
//! #[derive(EnvConfig)]
//! #[env(prefix = "MYAPP")]
//! struct Config {
//!     // Explicit: read when the struct is built
//!     port: EnvField<u16>,
//!
//!     // Implicit: MYAPP_databaseURL, ..., MYAPP_DATABASE_URL
//!     #[allow(non_snake_case)]
//!     databaseURL: EnvField<String>,
//!
//!     // Implicit with fallback
//!     workers: EnvField<u8>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
//! let mut config = Config {
//!     port: EnvField::named_or("MYAPP_PORT", 8080),
//!     databaseURL: EnvField::implicit(),
//!     workers: EnvField::implicit_or(4),
//! };
//! config.load_env()?;
//!
//! assert_eq!(*config.port.get()?, 8080);
//! assert_eq!(config.databaseURL.get()?, "postgres://localhost/db");
//! assert_eq!(*config.workers.get()?, 4);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(prefix = "PREFIX")]`
//!
//! Struct-level prefix used by [`EnvConfig::load_env`]. [`load`] takes the
//! prefix as an argument instead.
//!
//! ## `#[env(rename = "name")]`
//!
//! Look up a member under another logical name. The snake_case form and
//! case variants of that name are still tried.
//!
//! ```rust
//! # use envfield::{EnvConfig, EnvField};
//! #[derive(EnvConfig)]
//! struct Config {
//!     // Load from redisUrl, ..., REDIS_URL
//!     #[env(rename = "redisUrl")]
//!     cache: EnvField<String>,
//! }
//! ```
//!
//! ## `#[env(skip)]`
//!
//! Leave an `EnvField` member out of load passes.
//!
//! # Errors
//!
//! An explicit field without a default that cannot be resolved returns
//! [`EnvError::MissingRequired`]. It marks a broken startup precondition:
//! handle it by ending the program, not by carrying on.
//!
//! A load pass stops at the first implicit field it cannot resolve and
//! returns [`EnvError::MissingOrUnparsable`] with the names it tried.

pub mod case;
pub mod keys;

mod error;
mod field;
mod loader;
mod source;
mod value;

pub use envfield_derive::EnvConfig;
pub use error::EnvError;
pub use field::{AnyEnvField, EnvField};
pub use loader::{load, load_from, logical_name, EnvConfig, FieldSlot};
pub use source::{Environment, ProcessEnv};
pub use value::{DisplayEnvValue, FromEnvValue};
