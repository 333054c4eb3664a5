//! Read-only sources of environment variables

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};

/// A read-only key/value table to resolve fields against.
///
/// Only presence of a key matters: a key set to an empty string is found.
pub trait Environment {
    /// Value of `key`, with the same contract as [`std::env::var`]:
    /// [`VarError::NotPresent`] for a missing key and
    /// [`VarError::NotUnicode`] for a present value that is not valid Unicode.
    fn get(&self, key: &str) -> Result<String, VarError>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Result<String, VarError> {
        env::var(key)
    }
}

impl Environment for HashMap<String, String> {
    fn get(&self, key: &str) -> Result<String, VarError> {
        HashMap::get(self, key).cloned().ok_or(VarError::NotPresent)
    }
}

impl Environment for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Result<String, VarError> {
        BTreeMap::get(self, key).cloned().ok_or(VarError::NotPresent)
    }
}

/// Look up the first present key among `names`.
///
/// Returns the key with its value, or with the [`VarError::NotUnicode`]
/// error when the key is present but its value is not valid Unicode.
pub(crate) fn lookup_first(
    env: &dyn Environment,
    names: &[String],
) -> Option<(String, Result<String, VarError>)> {
    names.iter().find_map(|name| match env.get(name) {
        Err(VarError::NotPresent) => None,
        found => Some((name.clone(), found)),
    })
}
