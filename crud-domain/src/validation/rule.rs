use std::{fmt, sync::Arc};

use super::{model::Model, scope::ValidationScope, validate::Validate};

/// 单条规则的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

type Check<M> = Arc<dyn Fn(&M) -> Validity + Send + Sync>;

/// 绑定到某个作用域的判定函数
///
/// 判定函数须为纯函数：只读取传入的模型快照，不做 I/O。
/// 通过 [`otherwise`](Self::otherwise) 附加错误信息后即成为可组合的 `Validate`。
pub struct ModelValidator<M: Model> {
    scope: ValidationScope<M>,
    check: Check<M>,
}

impl<M: Model> ModelValidator<M> {
    pub fn new<F, V>(scope: ValidationScope<M>, check: F) -> Self
    where
        F: Fn(&M) -> V + Send + Sync + 'static,
        V: Into<Validity>,
    {
        Self {
            scope,
            check: Arc::new(move |model| check(model).into()),
        }
    }

    /// 绑定到整个模型的规则（例如跨字段约束）
    pub fn model<F, V>(check: F) -> Self
    where
        F: Fn(&M) -> V + Send + Sync + 'static,
        V: Into<Validity>,
    {
        Self::new(ValidationScope::WholeModel, check)
    }

    /// 绑定到单个字段的规则
    pub fn field<F, V>(field: M::Field, check: F) -> Self
    where
        F: Fn(&M) -> V + Send + Sync + 'static,
        V: Into<Validity>,
    {
        Self::new(ValidationScope::Field(field), check)
    }

    pub fn scope(&self) -> ValidationScope<M> {
        self.scope
    }

    pub fn check(&self, model: &M) -> Validity {
        (self.check)(model)
    }

    /// 判定失败时向所属作用域追加 `message`
    pub fn otherwise(self, message: impl Into<String>) -> Validate<M> {
        Validate::single(self, message.into())
    }
}

impl<M: Model> Clone for ModelValidator<M> {
    fn clone(&self) -> Self {
        Self {
            scope: self.scope,
            check: Arc::clone(&self.check),
        }
    }
}

impl<M: Model> fmt::Debug for ModelValidator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelValidator")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}
