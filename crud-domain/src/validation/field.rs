use std::sync::Arc;

use super::{model::Model, rule::ModelValidator, scope::ValidationScope};

type Accessor<M, V> = Arc<dyn Fn(&M) -> &V + Send + Sync>;

/// 字段规则构建器：字段选择器 + 读取字段值的访问器
///
/// 每个基础判定都产出一条绑定到该字段作用域的 `ModelValidator`。
pub struct FieldProxy<M: Model, V: ?Sized> {
    field: M::Field,
    get: Accessor<M, V>,
}

/// 构造字段规则构建器
///
/// ```
/// use crud_domain::validation::{Model, ValidationScope, ValidationState, Validate, field};
///
/// struct Tag {
///     label: String,
/// }
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// enum TagField {
///     Label,
/// }
///
/// impl Model for Tag {
///     type Field = TagField;
/// }
///
/// let label = field(TagField::Label, |t: &Tag| t.label.as_str());
/// let rules: Validate<Tag> = label.does_not_contain(" ").otherwise("No spaces.");
///
/// let mut state = ValidationState::new();
/// state.validate(&Tag { label: "a b".into() }, ValidationScope::WholeModel, &rules);
/// assert_eq!(state.field(TagField::Label).first_error(), Some("No spaces."));
/// ```
pub fn field<M, V, A>(field: M::Field, accessor: A) -> FieldProxy<M, V>
where
    M: Model,
    V: ?Sized + 'static,
    A: Fn(&M) -> &V + Send + Sync + 'static,
{
    FieldProxy::new(field, accessor)
}

impl<M: Model, V: ?Sized + 'static> FieldProxy<M, V> {
    pub fn new<A>(field: M::Field, accessor: A) -> Self
    where
        A: Fn(&M) -> &V + Send + Sync + 'static,
    {
        Self {
            field,
            get: Arc::new(accessor),
        }
    }

    pub fn field(&self) -> M::Field {
        self.field
    }

    pub fn scope(&self) -> ValidationScope<M> {
        ValidationScope::Field(self.field)
    }

    /// 任意判定：`predicate` 返回 `true` 表示通过
    pub fn satisfies<P>(&self, predicate: P) -> ModelValidator<M>
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        let get = Arc::clone(&self.get);
        ModelValidator::field(self.field, move |model: &M| predicate(get(model)))
    }
}

impl<M: Model> FieldProxy<M, str> {
    /// 字符串非空
    pub fn is_not_empty(&self) -> ModelValidator<M> {
        self.satisfies(|value| !value.is_empty())
    }

    /// 长度（按 Unicode 标量值计）不小于 `minimum`
    pub fn min_len(&self, minimum: usize) -> ModelValidator<M> {
        self.satisfies(move |value| value.chars().count() >= minimum)
    }

    /// 长度（按 Unicode 标量值计）不大于 `maximum`
    pub fn max_len(&self, maximum: usize) -> ModelValidator<M> {
        self.satisfies(move |value| value.chars().count() <= maximum)
    }

    pub fn contains(&self, substring: impl Into<String>) -> ModelValidator<M> {
        let substring = substring.into();
        self.satisfies(move |value| value.contains(substring.as_str()))
    }

    pub fn does_not_contain(&self, substring: impl Into<String>) -> ModelValidator<M> {
        let substring = substring.into();
        self.satisfies(move |value| !value.contains(substring.as_str()))
    }
}

impl<M: Model, V: ?Sized> Clone for FieldProxy<M, V> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            get: Arc::clone(&self.get),
        }
    }
}
