//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod fields;

use fields::BoundField;

/// `Configuration` derive macro
///
/// Implements `envbind::Configuration` and `envbind::Bind` for a struct with
/// named fields, so it can be bound directly or nested inside another
/// configuration.
///
/// Every public field is registered in declaration order under the key
/// `PREFIX_FIELD`. Private fields are skipped. Field types must implement
/// `envbind::Bind`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Configuration)]
pub fn derive_configuration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Struct name
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Extract fields
    let fields: Vec<BoundField> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().filter_map(BoundField::from_field).collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return syn::Error::new_spanned(
                    fields,
                    "Configuration only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        Data::Enum(data) => {
            return syn::Error::new_spanned(
                data.enum_token,
                "Configuration can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
        Data::Union(data) => {
            return syn::Error::new_spanned(
                data.union_token,
                "Configuration can only be derived for structs",
            )
            .to_compile_error()
            .into();
        }
    };

    // One registration per bound field
    let registrations = fields.iter().map(|field| {
        let ident = field.ident;
        let name = &field.name;

        quote! {
            ::envbind::Bind::bind(
                &mut self.#ident,
                &::envbind::field_key(prefix, #name),
                source,
            )?;
        }
    });

    let expanded = quote! {
        impl #impl_generics ::envbind::Configuration for #struct_name #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn bind_fields(
                &mut self,
                prefix: &str,
                source: &dyn ::envbind::Source,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                #(#registrations)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::envbind::Bind for #struct_name #ty_generics #where_clause {
            fn bind(
                &mut self,
                key: &str,
                source: &dyn ::envbind::Source,
            ) -> ::core::result::Result<(), ::envbind::BindError> {
                ::envbind::Configuration::bind_fields(self, key, source)
            }

            fn configuration_mut(
                &mut self,
            ) -> ::core::option::Option<&mut dyn ::envbind::Configuration> {
                ::core::option::Option::Some(self as &mut dyn ::envbind::Configuration)
            }
        }
    };

    TokenStream::from(expanded)
}
