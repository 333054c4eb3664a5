//! Typed configuration slots bound to environment variables

use std::env::VarError;
use std::fmt;

use crate::error::EnvError;
use crate::keys::expand_cases;
use crate::source::{lookup_first, Environment, ProcessEnv};
use crate::value::{DisplayEnvValue, FromEnvValue};

#[derive(Debug, Clone)]
enum State<T> {
    /// Implicit field waiting for a load pass to supply candidate names
    Unbound { default: Option<T> },
    Resolved(T),
    Failed(EnvError),
}

/// A configuration value bound to an environment variable.
///
/// A field is created in one of two ways:
///
/// - **Explicit** ([`named`](Self::named), [`named_or`](Self::named_or)):
///   the variable name is known up front and the field resolves immediately.
/// - **Implicit** ([`implicit`](Self::implicit), [`implicit_or`](Self::implicit_or)):
///   the name is derived from the struct member by [`load`](crate::load),
///   which resolves every implicit field of a configuration struct.
///
/// Names are matched as given, uppercased and lowercased, in that order.
/// A value that is missing or fails to parse falls back to the default.
/// Without a default the field fails, optional types included; give
/// `Option<T>` fields `None` as their default (or use
/// [`named_optional`](Self::named_optional)) to make them resolve to `None`.
///
/// # Example
///
/// ```rust
/// use envfield::EnvField;
///
/// # fn main() -> Result<(), envfield::EnvError> {
/// # std::env::set_var("DOC_PORT", "3000");
/// let port: EnvField<u16> = EnvField::named_or("doc_port", 8080);
/// assert_eq!(*port.get()?, 3000);
///
/// let workers: EnvField<u8> = EnvField::named_or("DOC_WORKERS", 4);
/// assert_eq!(*workers.get()?, 4);
///
/// let token: EnvField<Option<String>> = EnvField::named_optional("DOC_TOKEN");
/// assert_eq!(*token.get()?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EnvField<T> {
    state: State<T>,
}

impl<T: FromEnvValue> EnvField<T> {
    /// Implicit field with no default, resolved later by a load pass.
    pub fn implicit() -> Self {
        Self {
            state: State::Unbound { default: None },
        }
    }

    /// Implicit field falling back to `default`, resolved later by a load pass.
    pub fn implicit_or(default: T) -> Self {
        Self {
            state: State::Unbound {
                default: Some(default),
            },
        }
    }

    /// Explicit field read from the process environment.
    ///
    /// # Errors
    ///
    /// [`EnvError::MissingRequired`] when the variable is missing or cannot
    /// be parsed. This is meant to stop the program at startup; see
    /// [`EnvError::is_fatal`].
    pub fn named(name: &str) -> Result<Self, EnvError> {
        Self::named_from(name, &ProcessEnv)
    }

    /// Explicit field read from `env`. See [`named`](Self::named).
    pub fn named_from(name: &str, env: &dyn Environment) -> Result<Self, EnvError> {
        let names = [name.to_string()];
        match fetch(&names, env) {
            Some(value) => Ok(Self {
                state: State::Resolved(value),
            }),
            None => Err(EnvError::missing_required(name, T::type_name())),
        }
    }

    /// Explicit field read from the process environment, falling back to
    /// `default`. Never fails.
    pub fn named_or(name: &str, default: T) -> Self {
        Self::named_or_from(name, default, &ProcessEnv)
    }

    /// Explicit field read from `env`, falling back to `default`.
    pub fn named_or_from(name: &str, default: T, env: &dyn Environment) -> Self {
        let names = [name.to_string()];
        Self {
            state: State::Resolved(fetch_or(&names, default, env)),
        }
    }

    /// Resolve an implicit field against `names`, tried in order.
    ///
    /// Fields are never re-resolved: on a resolved field this is a no-op and
    /// on a failed field it returns the original error again.
    ///
    /// # Errors
    ///
    /// [`EnvError::MissingOrUnparsable`] when no name yields a usable value
    /// and no default is configured.
    pub fn resolve(&mut self, names: &[String], env: &dyn Environment) -> Result<(), EnvError> {
        let default = match &mut self.state {
            State::Resolved(_) => return Ok(()),
            State::Failed(err) => return Err(err.clone()),
            State::Unbound { default } => default.take(),
        };

        let value = match default {
            Some(default) => Some(fetch_or(names, default, env)),
            None => fetch(names, env),
        };

        match value {
            Some(value) => {
                self.state = State::Resolved(value);
                Ok(())
            }
            None => {
                let err = EnvError::missing_or_unparsable(names, T::type_name());
                self.state = State::Failed(err.clone());
                Err(err)
            }
        }
    }
}

impl<T: FromEnvValue> EnvField<Option<T>> {
    /// Explicit optional field read from the process environment.
    ///
    /// Resolves to `None` when the variable is missing or cannot be parsed.
    /// Same as `named_or(name, None)`.
    pub fn named_optional(name: &str) -> Self {
        Self::named_or(name, None)
    }

    /// Explicit optional field read from `env`. See
    /// [`named_optional`](Self::named_optional).
    pub fn named_optional_from(name: &str, env: &dyn Environment) -> Self {
        Self::named_or_from(name, None, env)
    }
}

impl<T> EnvField<T> {
    /// The resolved value.
    ///
    /// # Errors
    ///
    /// - [`EnvError::Unresolved`] if this is an implicit field that no load
    ///   pass has resolved yet
    /// - The resolution error if resolving failed
    pub fn get(&self) -> Result<&T, EnvError> {
        match &self.state {
            State::Resolved(value) => Ok(value),
            State::Unbound { .. } => Err(EnvError::Unresolved),
            State::Failed(err) => Err(err.clone()),
        }
    }

    /// Consume the field and return its value. Fails like [`get`](Self::get).
    pub fn into_inner(self) -> Result<T, EnvError> {
        match self.state {
            State::Resolved(value) => Ok(value),
            State::Unbound { .. } => Err(EnvError::Unresolved),
            State::Failed(err) => Err(err),
        }
    }

    /// Whether the field holds a value.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, State::Resolved(_))
    }

    /// Whether the field still waits for a load pass.
    pub fn is_unbound(&self) -> bool {
        matches!(self.state, State::Unbound { .. })
    }
}

impl<T: FromEnvValue> Default for EnvField<T> {
    fn default() -> Self {
        Self::implicit()
    }
}

impl<T: DisplayEnvValue> fmt::Display for EnvField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Unbound { .. } => write!(f, "EnvField: Uninitialized"),
            State::Resolved(value) => {
                write!(f, "EnvField: ")?;
                value.fmt_env_value(f)
            }
            State::Failed(err) => write!(f, "EnvField: {}", err),
        }
    }
}

/// Type-erased view of an [`EnvField`], used by load passes.
pub trait AnyEnvField {
    /// Whether the field waits for a load pass.
    fn is_unbound(&self) -> bool;

    /// Name of the field's value type.
    fn type_name(&self) -> &'static str;

    /// Resolve the field against `names`. See [`EnvField::resolve`].
    fn resolve(&mut self, names: &[String], env: &dyn Environment) -> Result<(), EnvError>;
}

impl<T: FromEnvValue> AnyEnvField for EnvField<T> {
    fn is_unbound(&self) -> bool {
        EnvField::is_unbound(self)
    }

    fn type_name(&self) -> &'static str {
        T::type_name()
    }

    fn resolve(&mut self, names: &[String], env: &dyn Environment) -> Result<(), EnvError> {
        EnvField::resolve(self, names, env)
    }
}

/// Look up `names` (with case variants) and coerce the first match.
///
/// `None` when no name is present or the value cannot be used.
fn fetch<T: FromEnvValue>(names: &[String], env: &dyn Environment) -> Option<T> {
    let searched = expand_cases(names);
    let (key, found) = lookup_first(env, &searched)?;

    match found {
        Ok(raw) => match T::from_env_value(&raw) {
            Some(value) => {
                tracing::debug!(key = %key, type_name = T::type_name(), "resolved from environment");
                Some(value)
            }
            None => {
                tracing::warn!(
                    key = %key,
                    type_name = T::type_name(),
                    "environment value could not be parsed"
                );
                None
            }
        },
        Err(VarError::NotUnicode(_)) => {
            tracing::warn!(key = %key, "environment value is not valid unicode");
            None
        }
        Err(VarError::NotPresent) => None,
    }
}

/// Like [`fetch`], falling back to `default`.
fn fetch_or<T: FromEnvValue>(names: &[String], default: T, env: &dyn Environment) -> T {
    fetch(names, env).unwrap_or_else(|| {
        tracing::debug!(names = ?names, "using default value");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn map_env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_named_exact() {
        let env = map_env(&[("ENVCONFIG_STRING_UPPERCASE", "bar")]);
        let field: EnvField<String> =
            EnvField::named_or_from("ENVCONFIG_STRING_UPPERCASE", "foobar".to_string(), &env);
        assert_eq!(field.get().unwrap(), "bar");
    }

    #[test]
    fn test_named_matches_other_case() {
        let env = map_env(&[("ENVCONFIG_STRING", "foo"), ("envconfig_integer", "2")]);

        let string: EnvField<String> = EnvField::named_from("envconfig_string", &env).unwrap();
        assert_eq!(string.get().unwrap(), "foo");

        let integer: EnvField<i64> = EnvField::named_from("ENVCONFIG_INTEGER", &env).unwrap();
        assert_eq!(*integer.get().unwrap(), 2);
    }

    #[test]
    fn test_named_default_when_missing() {
        let env = map_env(&[]);
        let field: EnvField<i32> = EnvField::named_or_from("envconfig_missing", 3, &env);
        assert_eq!(*field.get().unwrap(), 3);
    }

    #[test]
    fn test_named_default_when_unparsable() {
        let env = map_env(&[("envconfig_integer", "two")]);
        let field: EnvField<i32> = EnvField::named_or_from("envconfig_integer", 2, &env);
        assert_eq!(*field.get().unwrap(), 2);
    }

    #[test]
    fn test_named_required_missing_is_fatal() {
        let env = map_env(&[]);
        let err = EnvField::<i32>::named_from("envconfig_missing", &env).unwrap_err();
        assert_eq!(
            err,
            EnvError::MissingRequired {
                name: "envconfig_missing".to_string(),
                type_name: "i32",
            }
        );
        assert!(err.is_fatal());
    }

    #[test]
    fn test_named_required_unparsable_is_fatal() {
        let env = map_env(&[("PORT", "http")]);
        let err = EnvField::<u16>::named_from("PORT", &env).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_named_optional() {
        let env = map_env(&[("envconfig_string", "foo")]);

        let present: EnvField<Option<String>> =
            EnvField::named_from("envconfig_string", &env).unwrap();
        assert_eq!(present.get().unwrap().as_deref(), Some("foo"));

        let missing: EnvField<Option<i32>> =
            EnvField::named_optional_from("envconfig_missing", &env);
        assert_eq!(*missing.get().unwrap(), None);

        let unparsable: EnvField<Option<i32>> =
            EnvField::named_optional_from("envconfig_string", &env);
        assert_eq!(*unparsable.get().unwrap(), None);

        // Without a None fallback an optional field is required too
        let err = EnvField::<Option<i32>>::named_from("envconfig_missing", &env).unwrap_err();
        assert!(err.is_fatal());

        let fallback: EnvField<Option<i32>> =
            EnvField::named_or_from("envconfig_missing", Some(3), &env);
        assert_eq!(*fallback.get().unwrap(), Some(3));
    }

    #[test]
    fn test_empty_value_is_present() {
        let env = map_env(&[("EMPTY", "")]);
        let field: EnvField<String> = EnvField::named_or_from("EMPTY", "default".to_string(), &env);
        assert_eq!(field.get().unwrap(), "");
    }

    #[test]
    fn test_implicit_unread_is_usage_error() {
        let field: EnvField<String> = EnvField::implicit();
        assert!(field.is_unbound());
        assert_eq!(field.get(), Err(EnvError::Unresolved));
        assert_eq!(field.to_string(), "EnvField: Uninitialized");
    }

    #[test]
    fn test_resolve_tries_names_in_order() {
        let env = map_env(&[("camel_case", "bar"), ("CAMELCASE", "upper")]);
        let mut field: EnvField<String> = EnvField::implicit();
        field
            .resolve(&names(&["camelCase", "camel_case"]), &env)
            .unwrap();
        assert_eq!(field.get().unwrap(), "upper");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let env = map_env(&[]);
        let mut field = EnvField::implicit_or(3u8);
        field.resolve(&names(&["missing"]), &env).unwrap();
        assert_eq!(field.into_inner().unwrap(), 3);
    }

    #[test]
    fn test_resolve_failure_is_recorded() {
        let env = map_env(&[("count", "many")]);
        let mut field: EnvField<u32> = EnvField::implicit();
        let err = field.resolve(&names(&["count"]), &env).unwrap_err();
        assert_eq!(
            err,
            EnvError::MissingOrUnparsable {
                names: names(&["count"]),
                type_name: "u32",
            }
        );
        assert!(!err.is_fatal());
        assert_eq!(field.get(), Err(err.clone()));

        // Later passes do not retry
        let env = map_env(&[("count", "7")]);
        assert_eq!(field.resolve(&names(&["count"]), &env), Err(err));
    }

    #[test]
    fn test_resolved_is_never_re_resolved() {
        let mut field: EnvField<String> = EnvField::implicit();
        field
            .resolve(&names(&["name"]), &map_env(&[("name", "first")]))
            .unwrap();
        field
            .resolve(&names(&["name"]), &map_env(&[("name", "second")]))
            .unwrap();
        assert_eq!(field.get().unwrap(), "first");
    }

    #[test]
    fn test_display() {
        let env = map_env(&[("N", "5")]);
        let field: EnvField<u8> = EnvField::named_from("N", &env).unwrap();
        assert_eq!(field.to_string(), "EnvField: 5");

        let string: EnvField<String> = EnvField::named_or_from("S", "foo".to_string(), &env);
        assert_eq!(string.to_string(), "EnvField: foo");

        let present: EnvField<Option<u8>> = EnvField::named_or_from("M", Some(3), &env);
        assert_eq!(present.to_string(), "EnvField: 3");

        let absent: EnvField<Option<u8>> = EnvField::named_optional_from("M", &env);
        assert_eq!(absent.to_string(), "EnvField: nil");
    }

    #[test]
    fn test_implicit_optional_without_default_fails() {
        let env = map_env(&[]);
        let mut field: EnvField<Option<i32>> = EnvField::implicit();
        let err = field.resolve(&names(&["missing"]), &env).unwrap_err();
        assert_eq!(
            err,
            EnvError::MissingOrUnparsable {
                names: names(&["missing"]),
                type_name: "core::option::Option<i32>",
            }
        );

        let mut field: EnvField<Option<i32>> = EnvField::implicit_or(None);
        field.resolve(&names(&["missing"]), &env).unwrap();
        assert_eq!(*field.get().unwrap(), None);
    }

    struct NotUnicodeEnv;

    impl Environment for NotUnicodeEnv {
        fn get(&self, key: &str) -> Result<String, VarError> {
            match key {
                "NAME" => Err(VarError::NotUnicode("caf\u{fffd}".into())),
                "name" => Ok("lowercase".to_string()),
                _ => Err(VarError::NotPresent),
            }
        }
    }

    #[test]
    fn test_not_unicode_value_is_not_altered() {
        let field: EnvField<String> = EnvField::named_or_from("NAME", "default".to_string(), &NotUnicodeEnv);
        assert_eq!(field.get().unwrap(), "default");

        // The first present key wins even when its value is unusable
        let err = EnvField::<String>::named_from("NAME", &NotUnicodeEnv).unwrap_err();
        assert!(err.is_fatal());

        let mut field: EnvField<String> = EnvField::implicit();
        let err = field.resolve(&names(&["NAME"]), &NotUnicodeEnv).unwrap_err();
        assert!(matches!(err, EnvError::MissingOrUnparsable { .. }));
    }

    #[test]
    fn test_default_is_implicit() {
        let field: EnvField<bool> = EnvField::default();
        assert!(field.is_unbound());
        assert!(!field.is_resolved());
    }
}
