use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
};

use super::{
    model::Model, result::ValidationResult, scope::ValidationScope, validate::Validate,
};

static VALID: ValidationResult = ValidationResult::VALID;

/// 作用域到校验结果的映射
///
/// 键按需创建：缺失的作用域等同于通过。每个作用域只有两种状态——
/// 通过（无错误）与不通过（至少一条错误）；状态只经由 [`validate`](Self::validate) 改变。
pub struct ValidationState<M: Model> {
    results: HashMap<ValidationScope<M>, ValidationResult>,
}

impl<M: Model> ValidationState<M> {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
        }
    }

    /// 读取作用域的结果；未记录的作用域返回通过的结果
    pub fn get(&self, scope: &ValidationScope<M>) -> &ValidationResult {
        self.results.get(scope).unwrap_or(&VALID)
    }

    pub fn field(&self, field: M::Field) -> &ValidationResult {
        self.get(&ValidationScope::Field(field))
    }

    pub fn whole_model(&self) -> &ValidationResult {
        self.get(&ValidationScope::WholeModel)
    }

    /// 可写访问；作用域不存在时插入一个通过的结果
    pub fn scope_mut(&mut self, scope: ValidationScope<M>) -> &mut ValidationResult {
        self.results.entry(scope).or_default()
    }

    /// 所有已记录结果均通过
    pub fn all_valid(&self) -> bool {
        self.results.values().all(ValidationResult::is_valid)
    }

    /// 执行一次校验
    ///
    /// 1. `scope` 为整个模型时清空全部结果；为某字段时只清空该字段的结果；
    /// 2. 按声明顺序执行 `scope` 覆盖到的规则，失败信息追加到规则自身的作用域。
    pub fn validate(&mut self, model: &M, scope: ValidationScope<M>, rules: &Validate<M>) {
        match scope {
            ValidationScope::WholeModel => {
                self.results.values_mut().for_each(ValidationResult::clear);
            }
            ValidationScope::Field(_) => {
                if let Some(result) = self.results.get_mut(&scope) {
                    result.clear();
                }
            }
        }

        rules.apply(model, &scope, self);

        tracing::debug!(
            scope = ?scope,
            rules = rules.len(),
            invalid = self.results.values().filter(|r| !r.is_valid()).count(),
            "validation pass finished"
        );
    }

    pub fn validate_model(&mut self, model: &M, rules: &Validate<M>) {
        self.validate(model, ValidationScope::WholeModel, rules);
    }

    pub fn validate_field(&mut self, model: &M, field: M::Field, rules: &Validate<M>) {
        self.validate(model, ValidationScope::Field(field), rules);
    }

    /// 当前不通过的作用域（整体作用域在前，字段按选择器顺序）
    pub fn invalid_scopes(&self) -> Vec<ValidationScope<M>> {
        let mut scopes: Vec<_> = self
            .results
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(scope, _)| *scope)
            .collect();
        scopes.sort();
        scopes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ValidationScope<M>, &ValidationResult)> {
        self.results.iter()
    }

    /// 丢弃全部结果
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl<M: Model> Default for ValidationState<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Clone for ValidationState<M> {
    fn clone(&self) -> Self {
        Self {
            results: self.results.clone(),
        }
    }
}

impl<M: Model> PartialEq for ValidationState<M> {
    fn eq(&self, other: &Self) -> bool {
        self.results == other.results
    }
}

impl<M: Model> Eq for ValidationState<M> {}

impl<M: Model> fmt::Debug for ValidationState<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.results.iter().collect();
        entries.sort_by(|(lhs, _), (rhs, _)| lhs.cmp(rhs));
        f.debug_map().entries(entries).finish()
    }
}

impl<M: Model> Index<ValidationScope<M>> for ValidationState<M> {
    type Output = ValidationResult;

    fn index(&self, scope: ValidationScope<M>) -> &Self::Output {
        self.get(&scope)
    }
}

impl<M: Model> IndexMut<ValidationScope<M>> for ValidationState<M> {
    fn index_mut(&mut self, scope: ValidationScope<M>) -> &mut Self::Output {
        self.scope_mut(scope)
    }
}
