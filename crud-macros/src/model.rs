use crate::utils::{take_field_flags, to_pascal_case};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use std::collections::HashMap;
use syn::spanned::Spanned;
use syn::{
    FieldsNamed, Ident, Item, Result as SynResult, Token, parse::Parse, parse::ParseStream,
};
use syn::parse_macro_input;

/// #[model] 宏实现
/// 为具名字段结构体生成字段选择器枚举，替代按字段路径的反射式查找
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ModelAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[model] only on struct")
                .to_compile_error()
                .into();
        }
    };

    let st_span = st.span();
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st_span, "#[model] only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let selectors = match collect_selectors(fields_named) {
        Ok(selectors) => selectors,
        Err(err) => return err.to_compile_error().into(),
    };

    let ident = &st.ident;
    let vis = &st.vis;
    let field_enum = cfg
        .field_ident
        .unwrap_or_else(|| format_ident!("{}Field", ident));
    let variants: Vec<&Ident> = selectors.iter().map(|(v, _)| v).collect();
    let names: Vec<&str> = selectors.iter().map(|(_, n)| n.as_str()).collect();
    let doc = format!("`{}` 的字段选择器", ident);

    let generics = st.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #st

        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #vis enum #field_enum {
            #(#variants),*
        }

        impl #field_enum {
            /// 按声明顺序列出全部字段
            pub const ALL: &'static [Self] = &[#(Self::#variants),*];

            /// 字段在结构体中的名称
            pub const fn name(&self) -> &'static str {
                match *self {
                    #(Self::#variants => #names),*
                }
            }
        }

        impl ::std::fmt::Display for #field_enum {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl #impl_generics ::crud_domain::validation::Model for #ident #ty_generics #where_clause {
            type Field = #field_enum;
        }
    };

    TokenStream::from(expanded)
}

/// 收集 (变体名, 字段名)，同时剥离字段上的 #[model(...)] 标记
/// 两个字段映射到同一变体名（如 `foo_bar` 与 `foo__bar`）时在后者处报错
fn collect_selectors(fields_named: &mut FieldsNamed) -> SynResult<Vec<(Ident, String)>> {
    let mut selectors: Vec<(Ident, String)> = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();
    for field in fields_named.named.iter_mut() {
        let flags = take_field_flags(&mut field.attrs, "model")?;
        let mut skip = false;
        for flag in flags {
            if flag == "skip" {
                skip = true;
            } else {
                return Err(syn::Error::new(
                    flag.span(),
                    "unknown field flag; expected 'skip'",
                ));
            }
        }
        if skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.to_string().trim_start_matches("r#").to_string();
        let variant_name = to_pascal_case(&name);
        if let Some(previous) = seen.get(&variant_name) {
            return Err(syn::Error::new(
                ident.span(),
                format!(
                    "field `{}` maps to selector `{}`, already used by field `{}`",
                    name, variant_name, previous
                ),
            ));
        }
        seen.insert(variant_name.clone(), name.clone());
        let variant = format_ident!("{}", variant_name, span = ident.span());
        selectors.push((variant, name));
    }
    Ok(selectors)
}

// 解析 model 宏键值参数：field = <Ident>
struct ModelAttrConfig {
    field_ident: Option<Ident>,
}

impl Parse for ModelAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        if input.is_empty() {
            return Ok(Self { field_ident: None });
        }

        let key: Ident = input.parse()?;
        if key != "field" {
            return Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'field'",
            ));
        }
        let _eq: Token![=] = input.parse()?;
        let field_ident: Ident = input.parse()?;
        let _trailing: Option<Token![,]> = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after 'field = <Ident>'"));
        }

        Ok(Self {
            field_ident: Some(field_ident),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_follow_field_order_and_skip() {
        let mut fields: FieldsNamed = syn::parse_quote!({
            postal_code: String,
            #[model(skip)]
            cached: u8,
            r#type: String,
        });
        let selectors = collect_selectors(&mut fields).unwrap();
        let pairs: Vec<(String, String)> = selectors
            .into_iter()
            .map(|(v, n)| (v.to_string(), n))
            .collect();
        assert_eq!(
            pairs,
            [
                ("PostalCode".to_string(), "postal_code".to_string()),
                ("Type".to_string(), "type".to_string())
            ]
        );
        assert!(fields.named.iter().all(|f| f.attrs.is_empty()));
    }

    #[test]
    fn colliding_selectors_are_rejected() {
        let mut fields: FieldsNamed = syn::parse_quote!({
            foo_bar: u8,
            foo__bar: u8,
        });
        let err = collect_selectors(&mut fields).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`foo__bar`"));
        assert!(message.contains("`FooBar`"));
        assert!(message.contains("`foo_bar`"));
    }
}
