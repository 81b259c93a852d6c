use syn::{Attribute, Field, FieldsNamed, Token, Type, punctuated::Punctuated};

/// 确保具名字段结构体包含所需字段，并把它们按给定顺序放在最前
/// - 若字段已存在则复用原定义（保留其属性与可见性）；否则以给定类型新建
/// - 其余字段保持原有相对顺序
pub(crate) fn ensure_leading_fields(fields_named: &mut FieldsNamed, required: &[(&str, &Type)]) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required.iter() {
        if let Some(existing) = old_named.iter().find(|f| field_is(f, name)) {
            new_named.push(existing.clone());
        } else {
            let ident = syn::Ident::new(name, proc_macro2::Span::call_site());
            let field: Field = syn::parse_quote! { #ident: #ty };
            new_named.push(field);
        }
    }

    for f in old_named.into_iter() {
        let is_required = required.iter().any(|(n, _)| field_is(&f, n));
        if !is_required {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}

pub(crate) fn field_is(field: &Field, name: &str) -> bool {
    field.ident.as_ref().map(|i| i == name).unwrap_or(false)
}

/// 取出字段上的 `#[<attr_name>(flag)]` 标记并从字段属性中移除
/// 返回出现过的标记名；未知标记交给调用方报错
pub(crate) fn take_field_flags(
    attrs: &mut Vec<Attribute>,
    attr_name: &str,
) -> syn::Result<Vec<syn::Ident>> {
    let mut flags = Vec::new();
    let mut retained = Vec::with_capacity(attrs.len());
    for attr in attrs.drain(..) {
        if attr.path().is_ident(attr_name) {
            attr.parse_nested_meta(|meta| {
                match meta.path.get_ident() {
                    Some(ident) => flags.push(ident.clone()),
                    None => return Err(meta.error("expected a bare flag")),
                }
                Ok(())
            })?;
        } else {
            retained.push(attr);
        }
    }
    *attrs = retained;
    Ok(flags)
}

// snake_case -> PascalCase（`updated_at` -> `UpdatedAt`），去掉原始标识符前缀 `r#`
pub(crate) fn to_pascal_case(name: &str) -> String {
    name.trim_start_matches("r#")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(to_pascal_case("id"), "Id");
        assert_eq!(to_pascal_case("updated_at"), "UpdatedAt");
        assert_eq!(to_pascal_case("r#type"), "Type");
        assert_eq!(to_pascal_case("_private__field"), "PrivateField");
    }

    #[test]
    fn leading_fields_are_inserted_or_moved() {
        let ty: Type = syn::parse_quote!(u64);

        let mut fields: FieldsNamed = syn::parse_quote!({ name: String });
        ensure_leading_fields(&mut fields, &[("id", &ty)]);
        let names: Vec<String> = fields
            .named
            .iter()
            .map(|f| f.ident.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(names, ["id", "name"]);

        let mut fields: FieldsNamed = syn::parse_quote!({ name: String, id: i32 });
        ensure_leading_fields(&mut fields, &[("id", &ty)]);
        let first = fields.named.first().unwrap();
        assert!(field_is(first, "id"));
        let first_ty = &first.ty;
        assert_eq!(quote::quote!(#first_ty).to_string(), "i32");
    }

    #[test]
    fn field_flags_are_stripped() {
        let mut field: Field = syn::parse_quote! {
            #[model(skip)]
            #[serde(default)]
            updated_at: u64
        };
        let flags = take_field_flags(&mut field.attrs, "model").unwrap();
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0], "skip");
        assert_eq!(field.attrs.len(), 1);
    }
}
