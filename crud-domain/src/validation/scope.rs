use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::model::Model;

/// 校验作用域：整个模型或模型的某个字段
///
/// 两个 `Field` 作用域当且仅当选择同一字段时相等。
pub enum ValidationScope<M: Model> {
    WholeModel,
    Field(M::Field),
}

impl<M: Model> ValidationScope<M> {
    pub fn whole_model() -> Self {
        Self::WholeModel
    }

    pub fn field(field: M::Field) -> Self {
        Self::Field(field)
    }

    pub fn is_whole_model(&self) -> bool {
        matches!(self, Self::WholeModel)
    }

    pub fn as_field(&self) -> Option<M::Field> {
        match self {
            Self::Field(field) => Some(*field),
            Self::WholeModel => None,
        }
    }

    /// 以 `self` 为本次校验的目标作用域时，绑定到 `rule_scope` 的规则是否执行
    ///
    /// 整体校验执行全部规则；单字段校验只执行该字段的规则以及绑定到整个模型的规则。
    pub fn covers(&self, rule_scope: &Self) -> bool {
        self.is_whole_model() || rule_scope.is_whole_model() || self == rule_scope
    }
}

impl<M: Model> Clone for ValidationScope<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Model> Copy for ValidationScope<M> {}

impl<M: Model> PartialEq for ValidationScope<M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::WholeModel, Self::WholeModel) => true,
            (Self::Field(lhs), Self::Field(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<M: Model> Eq for ValidationScope<M> {}

impl<M: Model> Hash for ValidationScope<M> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::WholeModel => 0_u8.hash(state),
            Self::Field(field) => {
                1_u8.hash(state);
                field.hash(state);
            }
        }
    }
}

// 整体作用域排在所有字段之前，字段之间按字段选择器的顺序
impl<M: Model> Ord for ValidationScope<M> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::WholeModel, Self::WholeModel) => Ordering::Equal,
            (Self::WholeModel, Self::Field(_)) => Ordering::Less,
            (Self::Field(_), Self::WholeModel) => Ordering::Greater,
            (Self::Field(lhs), Self::Field(rhs)) => lhs.cmp(rhs),
        }
    }
}

impl<M: Model> PartialOrd for ValidationScope<M> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: Model> fmt::Debug for ValidationScope<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeModel => write!(f, "WholeModel"),
            Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
        }
    }
}
