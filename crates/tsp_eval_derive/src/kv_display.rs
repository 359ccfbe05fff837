use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

/// Generates a `Display` impl rendering one aligned `key = value` line per field.
///
/// `#[kv(fmt = "...")]` picks how a field is rendered: `display` (default),
/// `len`, `path` or `debug`. `#[kv(name = "...")]` renames the key.
pub fn derive_kv_display_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let struct_ident = input.ident.clone();

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(input.span(), "KvDisplay can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &data_struct.fields else {
        return syn::Error::new(input.span(), "KvDisplay requires named fields")
            .to_compile_error()
            .into();
    };

    let mut keys = Vec::new();
    let mut vals = Vec::new();

    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let mut key = field_ident.to_string();
        let mut fmt_mode = String::from("display");

        for attr in &field.attrs {
            if !attr.path().is_ident("kv") {
                continue;
            }
            let parse_result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    key = lit.value();
                    return Ok(());
                }
                if meta.path.is_ident("fmt") {
                    let lit: LitStr = meta.value()?.parse()?;
                    fmt_mode = lit.value();
                    return Ok(());
                }
                Err(meta.error("unsupported kv attribute; expected name/fmt"))
            });
            if let Err(err) = parse_result {
                return err.to_compile_error().into();
            }
        }

        keys.push(key);
        vals.push(match fmt_mode.as_str() {
            "display" => quote! { &self.#field_ident },
            "len" => quote! { &self.#field_ident.len() },
            "path" => quote! { &self.#field_ident.display() },
            "debug" => quote! { &format!("{:?}", self.#field_ident) },
            other => {
                return syn::Error::new(field.span(), format!("unsupported kv fmt mode: {other}"))
                    .to_compile_error()
                    .into();
            }
        });
    }

    let format_lit = LitStr::new(&kv_format_string(&keys), Span::call_site());

    let expanded = quote! {
        impl std::fmt::Display for #struct_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, #format_lit, #(#vals),*)
            }
        }
    };

    TokenStream::from(expanded)
}

fn kv_format_string(keys: &[String]) -> String {
    let longest = keys.iter().map(String::len).max().unwrap_or(0);
    let lines: Vec<String> = keys
        .iter()
        .map(|key| format!("\t{key:<longest$} = {{}}"))
        .collect();
    format!("\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::kv_format_string;

    #[test]
    fn kv_format_string_aligns_keys() {
        let keys = vec!["strict".to_string(), "log_level".to_string()];
        assert_eq!(
            kv_format_string(&keys),
            "\n\tstrict    = {}\n\tlog_level = {}"
        );
    }

    #[test]
    fn kv_format_string_is_a_bare_newline_without_keys() {
        assert_eq!(kv_format_string(&[]), "\n");
    }
}
