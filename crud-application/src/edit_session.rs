use crate::error::AppError;
use crud_domain::{
    entity::{Entity, Touch},
    repository::Repository,
    validation::{Model, Normalize, ValidationScope, ValidationState, Validate},
};

/// 单条记录的编辑会话
///
/// 持有编辑前的快照与当前工作副本，以及工作副本的校验状态：
/// - 字段失焦时调用 [`validate_field`](Self::validate_field) 只刷新该字段的错误；
/// - 保存前调用整体校验，全部通过才交给仓储；
/// - 保存成功后以仓储返回的记录（携带新分配的持久标识）替换两份快照。
///
/// 是否“有改动”使用严格相等判断，因此新记录在往返后即便内容相同也不会被视为未改动。
pub struct EditSession<E>
where
    E: Entity + Model,
{
    original: E,
    current: E,
    validations: ValidationState<E>,
}

impl<E> EditSession<E>
where
    E: Entity + Model + Normalize + Touch + PartialEq + 'static,
{
    pub fn new(entity: E) -> Self {
        Self {
            original: entity.clone(),
            current: entity,
            validations: ValidationState::new(),
        }
    }

    pub fn entity(&self) -> &E {
        &self.current
    }

    pub fn entity_mut(&mut self) -> &mut E {
        &mut self.current
    }

    pub fn original(&self) -> &E {
        &self.original
    }

    pub fn validations(&self) -> &ValidationState<E> {
        &self.validations
    }

    /// 工作副本与编辑前快照不同
    pub fn is_dirty(&self) -> bool {
        self.original != self.current
    }

    /// 记录尚未持久化
    pub fn is_new(&self) -> bool {
        self.current.is_new()
    }

    /// 规范化工作副本后，在给定作用域上执行校验
    pub fn validate(&mut self, scope: ValidationScope<E>, rules: &Validate<E>) {
        self.current.prepare_for_validation();
        self.validations.validate(&self.current, scope, rules);
    }

    pub fn validate_field(&mut self, field: E::Field, rules: &Validate<E>) {
        self.validate(ValidationScope::Field(field), rules);
    }

    /// 放弃改动，回到编辑前的快照并清空校验结果
    pub fn revert(&mut self) {
        self.current = self.original.clone();
        self.validations.clear();
    }

    /// 整体校验并保存
    ///
    /// 校验未通过时返回 `AppError::Validation`，不会调用仓储；
    /// 已持久化且未改动的记录直接返回，不产生写入；
    /// 其余情况先调用 [`Touch::touch`] 再写入。
    pub async fn save<R>(&mut self, repo: &R, rules: &Validate<E>) -> Result<E, AppError>
    where
        R: Repository<E> + ?Sized,
    {
        self.validate(ValidationScope::WholeModel, rules);
        if !self.validations.all_valid() {
            let errors: Vec<String> = self
                .validations
                .invalid_scopes()
                .into_iter()
                .flat_map(|scope| self.validations.get(&scope).errors().to_vec())
                .collect();
            tracing::debug!(errors = errors.len(), "save rejected by validation");
            return Err(AppError::Validation { errors });
        }

        if !self.is_new() && !self.is_dirty() {
            return Ok(self.current.clone());
        }

        let mut pending = self.current.clone();
        pending.touch();
        let saved = repo.save(pending).await?;
        tracing::debug!(new = self.is_new(), key = ?saved.key(), "saved");
        self.original = saved.clone();
        self.current = saved.clone();
        Ok(saved)
    }
}
