//! Derive macro implementation for envfield

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// Whether the type's last path segment is `EnvField`
fn is_env_field(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(seg) = type_path.path.segments.last() {
            return seg.ident == "EnvField";
        }
    }
    false
}

/// `EnvConfig` derive macro
///
/// Implements `envfield::EnvConfig` by listing every `EnvField` member in
/// declaration order. Members of other types are ignored.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX")]`: Prefix used by `load_env()`
///
/// **Field-level** (on `EnvField` members):
/// - `#[env(rename = "name")]`: Logical name used instead of the member name
/// - `#[env(skip)]`: Leave the member out of load passes
///
/// # Example
///
/// See the `envfield` crate documentation for usage examples.
#[proc_macro_derive(EnvConfig, attributes(env))]
pub fn derive_env_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_attrs(&input.attrs)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "EnvConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "EnvConfig only supports structs",
            ));
        }
    };

    let mut slots = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::from_field(field)?;

        if !is_env_field(&field.ty) {
            if attrs.present {
                return Err(syn::Error::new_spanned(
                    field_name,
                    "env attributes only apply to EnvField members",
                ));
            }
            continue;
        }

        if attrs.skip {
            continue;
        }

        let logical_name = attrs.rename.unwrap_or_else(|| field_name.to_string());
        slots.push(quote! {
            ::envfield::FieldSlot::new(#logical_name, &mut self.#field_name)
        });
    }

    let prefix = match struct_attrs.prefix {
        Some(prefix) => quote! { ::core::option::Option::Some(#prefix) },
        None => quote! { ::core::option::Option::None },
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envfield::EnvConfig for #struct_name #ty_generics #where_clause {
            const PREFIX: ::core::option::Option<&'static str> = #prefix;

            fn fields(&mut self) -> ::std::vec::Vec<::envfield::FieldSlot<'_>> {
                ::std::vec![#(#slots),*]
            }
        }
    })
}
