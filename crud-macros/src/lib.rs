//! crud-domain 的过程宏
//!
//! - `#[entity(key = T)]`：为记录追加 `id: Identity<T>` 字段并实现 `Entity` 与 `IdEquivalent`；
//! - `#[model]`：为记录生成封闭的字段选择器枚举并实现 `Model`，作为校验作用域的映射键。
use proc_macro::TokenStream;

mod entity;
mod model;
mod utils;

/// 实体宏
/// - 追加字段：`id: ::crud_domain::identity::Identity<Key>`（若缺失）并置于字段最前
/// - 自动实现 `::crud_domain::entity::Entity`（`identity/with_identity`）
/// - 自动实现 `::crud_domain::id_equivalence::IdEquivalent`：
///   `id` 按标识等价比较，其余字段按 `==` 比较；
///   标注 `#[entity(id_equivalent)]` 的字段改用 `IdEquivalent` 比较（用于嵌套记录或标识列表）
/// - 支持参数：`#[entity(key = KeyType)]`，默认 `i64`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 模型宏
/// - 生成字段选择器枚举（默认名为 `<Struct>Field`，可用 `#[model(field = Name)]` 指定），
///   每个具名字段对应一个 PascalCase 变体
/// - 标注 `#[model(skip)]` 的字段不生成变体
/// - 自动实现 `::crud_domain::validation::Model`
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model::expand(attr, item)
}
