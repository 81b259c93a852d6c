use std::{fmt::Debug, hash::Hash};

/// 可校验的模型
///
/// `Field` 是该模型的字段选择器：一个封闭、可枚举的类型（通常是由 `#[model]`
/// 宏生成的无数据枚举），用作校验状态的映射键。
pub trait Model: Sized + 'static {
    type Field: Copy + Eq + Hash + Ord + Debug + Send + Sync + 'static;
}

/// 校验前的规范化（如去除首尾空白、统一换行符）
pub trait Normalize {
    fn prepare_for_validation(&mut self);
}
