use serde::{Deserialize, Serialize};

/// 单个作用域的校验结果
///
/// 错误按追加顺序保存；`is_valid` 由错误列表是否为空推导，不单独存储。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<String>,
}

impl ValidationResult {
    /// 通过校验的结果（无错误）
    pub const VALID: Self = Self::new();

    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// 首个错误，用于界面展示
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// 清空错误，回到通过状态
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(Into::into).collect(),
        }
    }
}
