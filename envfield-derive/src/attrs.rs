//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from the
//! struct and its fields during macro expansion.

use syn::{Attribute, Field, LitStr};

/// Parsed struct-level `#[env(...)]` attributes.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix used by `EnvConfig::load_env`.
    pub prefix: Option<String>,
}

impl StructAttrs {
    /// Extract and parse `#[env(...)]` attributes from the struct.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("env")) {
            attr.parse_nested_meta(|meta| {
                // prefix = "..."
                if meta.path.is_ident("prefix") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.prefix = Some(lit.value());
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(parsed)
    }
}

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Logical name override.
    ///
    /// If `None`, the member identifier is used.
    pub rename: Option<String>,

    /// Leave the member out of load passes.
    pub skip: bool,

    /// Whether any `#[env(...)]` attribute was present.
    pub present: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("env")) {
            attrs.present = true;

            attr.parse_nested_meta(|meta| {
                // rename = "..."
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "rename must not be empty"));
                    }
                    attrs.rename = Some(lit.value());
                    return Ok(());
                }

                // skip
                if meta.path.is_ident("skip") {
                    attrs.skip = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `rename` or `skip`"))
            })?;
        }

        Ok(attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, DeriveInput};

    #[test]
    fn test_parse_rename_attribute() {
        let field: Field = parse_quote! {
            #[env(rename = "redisUrl")]
            pub cache: EnvField<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.rename, Some("redisUrl".to_string()));
        assert!(!attrs.skip);
        assert!(attrs.present);
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub field_name: EnvField<u16>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
    }

    #[test]
    fn test_no_attributes() {
        let field: Field = parse_quote! {
            #[allow(non_snake_case)]
            pub databaseURL: EnvField<String>
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.rename, None);
        assert!(!attrs.skip);
        assert!(!attrs.present);
    }

    #[test]
    fn test_unknown_field_attribute_is_error() {
        let field: Field = parse_quote! {
            #[env(name = "PORT")]
            pub port: EnvField<u16>
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported env attribute"));
    }

    #[test]
    fn test_empty_rename_is_error() {
        let field: Field = parse_quote! {
            #[env(rename = "")]
            pub port: EnvField<u16>
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let input: DeriveInput = parse_quote! {
            #[env(prefix = "MYAPP")]
            struct Config {}
        };

        let attrs = StructAttrs::from_attrs(&input.attrs).unwrap();
        assert_eq!(attrs.prefix, Some("MYAPP".to_string()));
    }

    #[test]
    fn test_unknown_struct_attribute_is_error() {
        let input: DeriveInput = parse_quote! {
            #[env(rename_all = "snake_case")]
            struct Config {}
        };

        assert!(StructAttrs::from_attrs(&input.attrs).is_err());
    }
}
