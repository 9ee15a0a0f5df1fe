use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr};

/// Struct-level `#[record(...)]` settings.
struct RecordArgs {
    collection: String,
    endpoint: Option<String>,
    prefix: Option<String>,
    validate: Option<syn::Path>,
}

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let args = match extract_args(&input) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let id_field = match extract_id_field(&input) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };
    let id_ident = &id_field.ident;
    let id_ty = &id_field.ty;

    let collection = &args.collection;
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| default_endpoint(&args.collection));
    let prefix = args.prefix.unwrap_or_else(|| singular(&endpoint));

    let validate = args.validate.map(|path| {
        quote! {
            fn validate(&self) -> ::std::result::Result<(), ::std::string::String> {
                Self::#path(self)
            }
        }
    });

    let expanded = quote! {
        impl ::shopvault::Record for #name {
            type Id = #id_ty;

            const COLLECTION: &'static str = #collection;
            const ENDPOINT: &'static str = #endpoint;
            const ID_PREFIX: &'static str = #prefix;

            fn id(&self) -> &Self::Id {
                &self.#id_ident
            }

            fn set_id(&mut self, id: Self::Id) {
                self.#id_ident = id;
            }

            #validate
        }
    };

    TokenStream::from(expanded)
}

fn extract_args(input: &DeriveInput) -> syn::Result<RecordArgs> {
    let mut collection = None;
    let mut endpoint = None;
    let mut prefix = None;
    let mut validate = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
            } else if meta.path.is_ident("endpoint") {
                let value: LitStr = meta.value()?.parse()?;
                endpoint = Some(value.value());
            } else if meta.path.is_ident("prefix") {
                let value: LitStr = meta.value()?.parse()?;
                prefix = Some(value.value());
            } else if meta.path.is_ident("validate") {
                let value: LitStr = meta.value()?.parse()?;
                validate = Some(value.parse()?);
            } else {
                return Err(meta.error("expected `collection`, `endpoint`, `prefix` or `validate`"));
            }
            Ok(())
        })?;
    }

    // Default: snake_case struct name + "s"
    let collection =
        collection.unwrap_or_else(|| format!("{}s", to_snake_case(&input.ident.to_string())));

    Ok(RecordArgs {
        collection,
        endpoint,
        prefix,
        validate,
    })
}

fn extract_id_field(input: &DeriveInput) -> syn::Result<&Field> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive only supports structs",
        ));
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Record derive requires named fields",
        ));
    };

    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            let mut is_id = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("id") {
                    is_id = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `id`"))
                }
            })?;
            if is_id {
                return Ok(field);
            }
        }
    }

    // Default: look for a field named "id"
    fields
        .named
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == "id"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Record derive: no field marked with #[record(id)] and no field named `id`",
            )
        })
}

/// `mv_products` -> `products`
fn default_endpoint(collection: &str) -> String {
    collection
        .strip_prefix("mv_")
        .unwrap_or(collection)
        .replace('_', "-")
}

/// `routes` -> `route`
fn singular(endpoint: &str) -> String {
    endpoint.strip_suffix('s').unwrap_or(endpoint).to_string()
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
