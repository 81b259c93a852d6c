use std::fmt;

use super::{
    model::Model, rule::ModelValidator, scope::ValidationScope, state::ValidationState,
};

struct Rule<M: Model> {
    validator: ModelValidator<M>,
    message: String,
}

impl<M: Model> Clone for Rule<M> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            message: self.message.clone(),
        }
    }
}

/// 规则集：按声明顺序排列、彼此独立的规则
///
/// 组合只是顺序拼接；同一作用域的多条失败规则按声明顺序追加错误，
/// 因此 `first_error` 总是最先声明的那条失败规则。
///
/// ```
/// use crud_domain::validation::{Model, ModelValidator, ValidationScope, ValidationState, Validate};
///
/// struct Pin(String);
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// enum PinField { Code }
///
/// impl Model for Pin {
///     type Field = PinField;
/// }
///
/// let rules: Validate<Pin> = [
///     ModelValidator::field(PinField::Code, |p: &Pin| p.0.len() == 4).otherwise("four digits"),
///     ModelValidator::field(PinField::Code, |p: &Pin| p.0.chars().all(|c| c.is_ascii_digit()))
///         .otherwise("digits only"),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut state = ValidationState::new();
/// state.validate(&Pin("12a".into()), ValidationScope::WholeModel, &rules);
/// assert_eq!(state.field(PinField::Code).errors(), ["four digits", "digits only"]);
/// ```
pub struct Validate<M: Model> {
    rules: Vec<Rule<M>>,
}

impl<M: Model> Validate<M> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn builder() -> ValidationBuilder<M> {
        ValidationBuilder::new()
    }

    pub(crate) fn single(validator: ModelValidator<M>, message: String) -> Self {
        Self {
            rules: vec![Rule { validator, message }],
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 在末尾追加另一组规则
    pub fn and(mut self, other: Validate<M>) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn push(&mut self, other: Validate<M>) {
        self.rules.extend(other.rules);
    }

    /// 按声明顺序执行 `requested` 覆盖到的规则，把失败信息追加到各规则自己的作用域
    ///
    /// 不负责清理旧结果；清理由 `ValidationState::validate` 完成。
    pub(crate) fn apply(
        &self,
        model: &M,
        requested: &ValidationScope<M>,
        state: &mut ValidationState<M>,
    ) {
        for rule in &self.rules {
            let rule_scope = rule.validator.scope();
            if !requested.covers(&rule_scope) {
                continue;
            }
            if !rule.validator.check(model).is_valid() {
                tracing::trace!(scope = ?rule_scope, message = %rule.message, "rule failed");
                state.scope_mut(rule_scope).push_error(rule.message.clone());
            }
        }
    }
}

impl<M: Model> Default for Validate<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Clone for Validate<M> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<M: Model> fmt::Debug for Validate<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.rules
                    .iter()
                    .map(|rule| (rule.validator.scope(), rule.message.as_str())),
            )
            .finish()
    }
}

impl<M: Model> FromIterator<Validate<M>> for Validate<M> {
    fn from_iter<I: IntoIterator<Item = Validate<M>>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<M: Model> Extend<Validate<M>> for Validate<M> {
    fn extend<I: IntoIterator<Item = Validate<M>>>(&mut self, iter: I) {
        for validate in iter {
            self.push(validate);
        }
    }
}

/// 以顺序列表方式声明规则集
///
/// ```ignore
/// let rules = Validate::builder()
///     .rule(name.is_not_empty().otherwise("Name should not be empty."))
///     .rule(name.min_len(4).otherwise("Name should contain at least 4 characters."))
///     .build();
/// ```
pub struct ValidationBuilder<M: Model> {
    validate: Validate<M>,
}

impl<M: Model> ValidationBuilder<M> {
    pub fn new() -> Self {
        Self {
            validate: Validate::new(),
        }
    }

    pub fn rule(mut self, validate: Validate<M>) -> Self {
        self.validate.push(validate);
        self
    }

    /// 判定失败时附加 `message` 的单条规则
    pub fn check(self, validator: ModelValidator<M>, message: impl Into<String>) -> Self {
        self.rule(validator.otherwise(message))
    }

    pub fn build(self) -> Validate<M> {
        self.validate
    }
}

impl<M: Model> Default for ValidationBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}
