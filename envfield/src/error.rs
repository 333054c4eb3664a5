//! Error types for environment field resolution

/// Errors that can occur when binding environment variables to fields.
///
/// This error type covers three failure scenarios:
/// - A load pass found no usable value for an implicitly named field
/// - A field was read before any load pass resolved it
/// - An explicitly named field without a default could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// No candidate name matched, or the matched value could not be coerced,
    /// and no default covers the field.
    ///
    /// Raised by [`load`](crate::load) for implicitly named fields. The caller
    /// decides whether to abort startup or retry with a different environment.
    #[error(
        "Missing or unparsable environment variable. Attempted names: [{}]. Wanted type: {type_name}.",
        .names.join(",")
    )]
    MissingOrUnparsable {
        /// Base names that were tried, in lookup order (before case expansion)
        names: Vec<String>,
        /// Name of the type the value had to be coerced into
        type_name: &'static str,
    },

    /// An implicitly named field was read before a load pass resolved it.
    ///
    /// This is a programming error, not a data error.
    #[error(
        "Environment fields with no explicit name must be resolved with envfield::load() on their containing struct before being read"
    )]
    Unresolved,

    /// An explicitly named field with no default could not be resolved.
    ///
    /// This is an unrecoverable startup precondition. It is intended to end
    /// the program when unhandled; see [`EnvError::is_fatal`].
    #[error(
        "Environment variable '{name}' is missing or could not be converted to the wanted type '{type_name}'"
    )]
    MissingRequired {
        /// The explicit name given at construction
        name: String,
        /// Name of the type the value had to be coerced into
        type_name: &'static str,
    },
}

impl EnvError {
    /// Create a missing-or-unparsable error for a load pass
    pub(crate) fn missing_or_unparsable(names: &[String], type_name: &'static str) -> Self {
        Self::MissingOrUnparsable {
            names: names.to_vec(),
            type_name,
        }
    }

    /// Create an error for an explicitly named field that could not be resolved
    pub(crate) fn missing_required(name: impl Into<String>, type_name: &'static str) -> Self {
        Self::MissingRequired {
            name: name.into(),
            type_name,
        }
    }

    /// Whether the error is an unrecoverable startup precondition.
    ///
    /// Callers are expected to stop the program when this returns `true`
    /// instead of continuing with partial configuration.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingRequired { .. })
    }
}
