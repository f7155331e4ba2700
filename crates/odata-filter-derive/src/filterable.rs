use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromField, FromMeta, ast::Data, util::Ignored};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Error};

///
/// RenameRule
///
/// Protocol property naming applied to field identifiers that carry no
/// explicit rename. OData surfaces conventionally use PascalCase, which is
/// also the default.
///

#[derive(Clone, Copy, Default)]
enum RenameRule {
    #[default]
    Pascal,
    Camel,
    Snake,
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

impl RenameRule {
    fn apply(self, ident: &str) -> String {
        match self {
            Self::Pascal => ident.to_case(Case::Pascal),
            Self::Camel => ident.to_case(Case::Camel),
            Self::Snake => ident.to_case(Case::Snake),
        }
    }
}

///
/// FilterableInput
///

#[derive(FromDeriveInput)]
#[darling(attributes(filter), supports(struct_named))]
struct FilterableInput {
    ident: syn::Ident,
    vis: syn::Visibility,
    generics: syn::Generics,
    data: Data<Ignored, FilterableField>,
    #[darling(default)]
    rename_all: Option<RenameRule>,
}

///
/// FilterableField
///

#[derive(FromField)]
#[darling(attributes(filter))]
struct FilterableField {
    ident: Option<syn::Ident>,
    ty: syn::Type,
    #[darling(default)]
    rename: Option<String>,
}

// derive_filterable
pub fn derive_filterable(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let parsed = match FilterableInput::from_derive_input(&input) {
        Ok(parsed) => parsed,
        Err(err) => return err.write_errors(),
    };

    if !parsed.generics.params.is_empty() {
        let err = Error::new_spanned(
            &parsed.generics,
            "Filterable cannot be derived for generic structs",
        );
        return err.to_compile_error();
    }

    let fields = parsed
        .data
        .take_struct()
        .expect("struct_named input")
        .fields;

    let rule = parsed.rename_all.unwrap_or_default();
    let mut properties: Vec<(syn::Ident, syn::Type, String)> = Vec::with_capacity(fields.len());

    for field in fields {
        let field_ident = field.ident.clone().expect("named field");
        let property = field
            .rename
            .clone()
            .unwrap_or_else(|| rule.apply(&field_ident.to_string()));

        if properties.iter().any(|(_, _, existing)| *existing == property) {
            let err = Error::new_spanned(
                &field_ident,
                format!("duplicate filter property name '{property}'"),
            );
            return err.to_compile_error();
        }

        properties.push((field_ident, field.ty, property));
    }

    let ident = &parsed.ident;
    let vis = &parsed.vis;
    let proxy_ident = format_ident!("{ident}Filter");

    let proxy_fields = properties.iter().map(|(field_ident, ty, _)| {
        quote! {
            pub #field_ident: <#ty as ::odata_filter::schema::Filterable>::Field,
        }
    });

    let property_names = properties.iter().map(|(_, _, property)| property);

    let bind_fields = properties.iter().map(|(field_ident, _, property)| {
        quote! {
            #field_ident: ::odata_filter::schema::FilterField::bind(
                &::odata_filter::schema::join(path, #property),
            ),
        }
    });

    quote! {
        #vis struct #proxy_ident {
            #(#proxy_fields)*
        }

        impl ::odata_filter::schema::FilterField for #proxy_ident {
            fn property_keys() -> &'static [&'static str] {
                &[#(#property_names),*]
            }

            fn bind(path: &str) -> Self {
                Self {
                    #(#bind_fields)*
                }
            }
        }

        impl ::odata_filter::schema::Filterable for #ident {
            type Field = #proxy_ident;
        }
    }
}
