//! 分域校验（validation）
//!
//! 以声明式规则集对模型进行校验，并按作用域（整个模型或单个字段）累积错误：
//! - `model`：模型与字段选择器（`Model`），以及校验前的规范化钩子（`Normalize`）；
//! - `scope`：校验作用域（`ValidationScope`）；
//! - `result`：单个作用域的校验结果（`ValidationResult`）；
//! - `rule`/`field`：规则与字段规则构建器（`ModelValidator`、`FieldProxy`）；
//! - `validate`：按声明顺序组合的规则集（`Validate`、`ValidationBuilder`）；
//! - `state`：作用域到结果的映射及校验入口（`ValidationState`）。
//!
//! 校验失败只是记录下来的错误文本，不会以错误值或 panic 的形式向上传播；
//! 是否继续（例如保存）完全由调用方依据 `all_valid` 决定。
//!
mod field;
mod model;
mod result;
mod rule;
mod scope;
mod state;
mod validate;

pub use field::{FieldProxy, field};
pub use model::{Model, Normalize};
pub use result::ValidationResult;
pub use rule::{ModelValidator, Validity};
pub use scope::ValidationScope;
pub use state::ValidationState;
pub use validate::{Validate, ValidationBuilder};
