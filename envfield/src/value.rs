//! Coercion of raw environment strings into typed values

use std::fmt;

/// A type that can be built from an environment variable value.
///
/// Implemented for `String`, `bool`, every primitive integer type and
/// `Option<T>`. Implement it for your own types to bind them with
/// [`EnvField`](crate::EnvField).
///
/// # Example
///
/// ```rust
/// use envfield::FromEnvValue;
///
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl FromEnvValue for Level {
///     fn from_env_value(raw: &str) -> Option<Self> {
///         match raw {
///             "low" => Some(Level::Low),
///             "high" => Some(Level::High),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Level::from_env_value("high"), Some(Level::High));
/// assert_eq!(Level::from_env_value("medium"), None);
/// ```
pub trait FromEnvValue: Sized {
    /// Parse a raw value. `None` means the value could not be parsed.
    fn from_env_value(raw: &str) -> Option<Self>;

    /// Type name reported in errors.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl FromEnvValue for String {
    fn from_env_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromEnvValue for bool {
    /// `1` and `true` are true, `0` and `false` are false, ignoring case.
    fn from_env_value(raw: &str) -> Option<Self> {
        if raw == "1" || raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw == "0" || raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

macro_rules! impl_from_env_value_for_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                fn from_env_value(raw: &str) -> Option<Self> {
                    raw.parse::<$ty>().ok()
                }
            }
        )*
    };
}

impl_from_env_value_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Parsing an optional value parses the wrapped type. A miss is not turned
/// into `None` here: the field has to be given `None` as its fallback (see
/// [`EnvField::named_optional`](crate::EnvField::named_optional)).
///
/// Nesting is flattened. A parsed value is wrapped all the way down, so an
/// `Option<Option<T>>` field is either `None` or `Some(Some(value))`.
impl<T: FromEnvValue> FromEnvValue for Option<T> {
    fn from_env_value(raw: &str) -> Option<Self> {
        T::from_env_value(raw).map(Some)
    }
}

/// Text rendering of a resolved value, used by `EnvField`'s `Display`.
///
/// Plain values render as their `Display` text and an absent optional
/// renders as `nil`.
pub trait DisplayEnvValue {
    /// Write the value.
    fn fmt_env_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! impl_display_env_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DisplayEnvValue for $ty {
                fn fmt_env_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_display_env_value!(
    String, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: DisplayEnvValue> DisplayEnvValue for Option<T> {
    fn fmt_env_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_env_value(f),
            None => write!(f, "nil"),
        }
    }
}
