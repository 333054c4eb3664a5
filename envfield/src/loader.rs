//! Load passes over configuration structs

use crate::error::EnvError;
use crate::field::AnyEnvField;
use crate::keys::candidate_keys;
use crate::source::{Environment, ProcessEnv};

/// A bindable member of a configuration struct.
pub struct FieldSlot<'a> {
    /// Member identifier, as declared
    pub name: &'static str,
    /// The member's field
    pub field: &'a mut dyn AnyEnvField,
}

impl<'a> FieldSlot<'a> {
    /// Create a slot for the member `name`.
    pub fn new(name: &'static str, field: &'a mut dyn AnyEnvField) -> Self {
        Self { name, field }
    }
}

/// A configuration struct whose implicit fields can be loaded.
///
/// Usually implemented with `#[derive(EnvConfig)]`, which lists every
/// `EnvField` member. A manual implementation lists the members itself:
///
/// ```rust
/// use envfield::{EnvConfig, EnvField, FieldSlot};
///
/// struct Config {
///     log_level: EnvField<String>,
///     workers: EnvField<u8>,
/// }
///
/// impl EnvConfig for Config {
///     fn fields(&mut self) -> Vec<FieldSlot<'_>> {
///         vec![
///             FieldSlot::new("log_level", &mut self.log_level),
///             FieldSlot::new("workers", &mut self.workers),
///         ]
///     }
/// }
/// ```
pub trait EnvConfig {
    /// Prefix used by [`load_env`](Self::load_env).
    const PREFIX: Option<&'static str> = None;

    /// The struct's fields in declaration order.
    fn fields(&mut self) -> Vec<FieldSlot<'_>>;

    /// Load every implicit field using [`Self::PREFIX`].
    ///
    /// # Errors
    ///
    /// See [`load`].
    fn load_env(&mut self) -> Result<(), EnvError>
    where
        Self: Sized,
    {
        load(self, Self::PREFIX)
    }
}

/// Resolve every implicit field of `config` from the process environment.
///
/// Each field is looked up by its member name and its snake_case form, both
/// prefixed with `prefix` (a missing trailing `_` is added). Explicit and
/// already resolved fields are left alone.
///
/// # Errors
///
/// Stops at the first field that cannot be resolved and returns its
/// [`EnvError::MissingOrUnparsable`]. Fields after it are not attempted.
pub fn load<C: EnvConfig>(config: &mut C, prefix: Option<&str>) -> Result<(), EnvError> {
    load_from(config, prefix, &ProcessEnv)
}

/// Like [`load`], reading from `env`.
pub fn load_from<C: EnvConfig>(
    config: &mut C,
    prefix: Option<&str>,
    env: &dyn Environment,
) -> Result<(), EnvError> {
    let slots = config.fields();
    tracing::debug!(prefix = ?prefix, fields = slots.len(), "loading configuration");

    for FieldSlot { name, field } in slots {
        if !field.is_unbound() {
            continue;
        }

        let names = candidate_keys(logical_name(name), prefix);
        if let Err(err) = field.resolve(&names, env) {
            tracing::debug!(
                field = name,
                type_name = field.type_name(),
                "field could not be resolved"
            );
            return Err(err);
        }
    }

    Ok(())
}

/// Name used for lookups: the member identifier without a raw identifier
/// marker or leading underscores.
pub fn logical_name(member: &str) -> &str {
    let name = member.strip_prefix("r#").unwrap_or(member);
    match name.trim_start_matches('_') {
        "" => name,
        trimmed => trimmed,
    }
}
