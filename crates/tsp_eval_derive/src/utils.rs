use quote::quote;
use syn::{Path, Type};

pub fn build_cli_parse_expr(ty: &Type, parse_with: Option<&Path>) -> proc_macro2::TokenStream {
    if let Some(parse_with) = parse_with {
        quote! { #parse_with(&raw)? }
    } else {
        quote! {
            raw.parse::<#ty>()
                .map_err(|e| crate::Error::invalid_input(format!(
                    "Invalid value for --{name}: {raw} ({e})"
                )))?
        }
    }
}

/// Expression turning `raw: String` into a `bool` for `--flag=<bool>`.
pub fn build_flag_parse_expr() -> proc_macro2::TokenStream {
    quote! {
        match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                return Err(crate::Error::invalid_input(format!(
                    "Invalid boolean for --{name}: {raw} (expected true/false)"
                )));
            }
        }
    }
}

pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (idx, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx != 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{build_cli_parse_expr, build_flag_parse_expr, to_kebab_case};

    #[test]
    fn to_kebab_case_inserts_dashes_before_ascii_uppercase() {
        assert_eq!(to_kebab_case("LogFormat"), "log-format");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("X"), "x");
    }

    #[test]
    fn build_cli_parse_expr_prefers_custom_parser() {
        let ty: syn::Type = parse_quote!(LogLevel);
        let path: syn::Path = parse_quote!(LogLevel::parse);

        let custom = build_cli_parse_expr(&ty, Some(&path)).to_string();
        assert!(custom.starts_with("LogLevel :: parse"));

        let fallback = build_cli_parse_expr(&ty, None).to_string();
        assert!(fallback.contains("parse :: < LogLevel >"));
    }

    #[test]
    fn build_flag_parse_expr_lists_accepted_spellings() {
        let expr = build_flag_parse_expr().to_string();
        assert!(expr.contains("\"true\""));
        assert!(expr.contains("\"off\""));
        assert!(expr.contains("Invalid boolean"));
    }
}
