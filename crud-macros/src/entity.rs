use crate::utils::{ensure_leading_fields, field_is, take_field_flags};
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Ident, Item, Result as SynResult, Token, Type, parse::Parse, parse::ParseStream};
use syn::parse_macro_input;

/// #[entity] 宏实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EntityAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[entity] only on struct")
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段
    let st_span = st.span();
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st_span, "#[entity] only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let key_type = cfg.key_ty.unwrap_or_else(|| syn::parse_quote! { i64 });
    let id_type: Type = syn::parse_quote! { ::crud_domain::identity::Identity<#key_type> };
    ensure_leading_fields(fields_named, &[("id", &id_type)]);

    // 逐字段生成等价比较，同时剥离字段上的 #[entity(...)] 标记
    let mut comparisons = Vec::new();
    for field in fields_named.named.iter_mut() {
        let flags = match take_field_flags(&mut field.attrs, "entity") {
            Ok(flags) => flags,
            Err(err) => return err.to_compile_error().into(),
        };
        let mut by_id = field_is(field, "id");
        for flag in flags {
            if flag == "id_equivalent" {
                by_id = true;
            } else {
                return syn::Error::new(flag.span(), "unknown field flag; expected 'id_equivalent'")
                    .to_compile_error()
                    .into();
            }
        }

        let Some(name) = field.ident.as_ref() else {
            continue;
        };
        if by_id {
            comparisons.push(quote! {
                ::crud_domain::id_equivalence::IdEquivalent::id_equivalent(&self.#name, &other.#name)
            });
        } else {
            comparisons.push(quote! { self.#name == other.#name });
        }
    }

    let ident = &st.ident;
    let generics = st.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        #st

        impl #impl_generics ::crud_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Key = #key_type;

            fn identity(&self) -> &::crud_domain::identity::Identity<Self::Key> {
                &self.id
            }

            fn with_identity(self, identity: ::crud_domain::identity::Identity<Self::Key>) -> Self {
                Self {
                    id: identity,
                    ..self
                }
            }
        }

        impl #impl_generics ::crud_domain::id_equivalence::IdEquivalent for #ident #ty_generics #where_clause {
            fn id_equivalent(&self, other: &Self) -> bool {
                true #(&& #comparisons)*
            }
        }
    };

    TokenStream::from(expanded)
}

// 解析 entity 宏键值参数：key = <Type>
struct EntityAttrConfig {
    key_ty: Option<Type>,
}

impl Parse for EntityAttrConfig {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let mut key_ty: Option<Type> = None;

        if input.is_empty() {
            return Ok(Self { key_ty });
        }

        let pairs: Punctuated<KvType, Token![,]> =
            Punctuated::<KvType, Token![,]>::parse_terminated(input)?;

        for kv in pairs.into_iter() {
            let key = kv.key.to_string();
            match key.as_str() {
                "key" => {
                    if key_ty.is_some() {
                        return Err(syn::Error::new(
                            kv.key.span(),
                            "duplicate key 'key' in attribute",
                        ));
                    }
                    key_ty = Some(kv.ty);
                }
                _ => {
                    return Err(syn::Error::new(
                        kv.key.span(),
                        "unknown key in attribute; expected 'key'",
                    ));
                }
            }
        }

        Ok(Self { key_ty })
    }
}

struct KvType {
    key: Ident,
    #[allow(dead_code)]
    eq: Token![=],
    ty: Type,
}

impl Parse for KvType {
    fn parse(input: ParseStream) -> SynResult<Self> {
        let key: Ident = input.parse()?;
        let eq: Token![=] = input.parse()?;
        let ty: Type = input.parse()?;
        Ok(Self { key, eq, ty })
    }
}
