use async_trait::async_trait;
use crud_domain::{
    entity::Entity,
    error::{DomainError, DomainResult},
    identity::Identity,
    repository::Repository,
};
use dashmap::DashMap;
use std::any::type_name;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// 由自增序号生成持久键（模拟数据库自增主键/默认值）
pub trait KeySequence: Sized {
    fn from_sequence(n: u64) -> Self;
}

impl KeySequence for i64 {
    fn from_sequence(n: u64) -> Self {
        i64::try_from(n).unwrap_or(i64::MAX)
    }
}

impl KeySequence for i32 {
    fn from_sequence(n: u64) -> Self {
        i32::try_from(n).unwrap_or(i32::MAX)
    }
}

impl KeySequence for u64 {
    fn from_sequence(n: u64) -> Self {
        n
    }
}

impl KeySequence for String {
    fn from_sequence(n: u64) -> Self {
        n.to_string()
    }
}

// 随机键，忽略序号
impl KeySequence for Uuid {
    fn from_sequence(_n: u64) -> Self {
        Uuid::new_v4()
    }
}

/// 基于内存的 Repository 实现
/// - 新记录（临时标识）保存时按序号分配持久键，并返回带新标识的记录
/// - 已持久化的记录保存时覆盖原行；原行不存在则返回 `NotFound`
pub struct InMemoryRepository<E>
where
    E: Entity,
{
    rows: DashMap<E::Key, E>,
    sequence: AtomicU64,
}

impl<E> Default for InMemoryRepository<E>
where
    E: Entity,
{
    fn default() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }
}

impl<E> InMemoryRepository<E>
where
    E: Entity,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + 'static,
    E::Key: KeySequence,
{
    async fn save(&self, entity: E) -> DomainResult<E> {
        match entity.key().cloned() {
            None => {
                let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
                let key = E::Key::from_sequence(n);
                let saved = entity.with_identity(Identity::new(Some(key.clone())));
                tracing::debug!(entity = type_name::<E>(), key = ?key, "inserted");
                self.rows.insert(key, saved.clone());
                Ok(saved)
            }
            Some(key) => {
                let Some(mut row) = self.rows.get_mut(&key) else {
                    return Err(DomainError::NotFound {
                        reason: format!("{} {:?}", type_name::<E>(), key),
                    });
                };
                *row = entity.clone();
                tracing::debug!(entity = type_name::<E>(), key = ?key, "updated");
                Ok(entity)
            }
        }
    }

    async fn find(&self, key: &E::Key) -> DomainResult<Option<E>> {
        Ok(self.rows.get(key).map(|row| row.value().clone()))
    }

    async fn fetch_all(&self) -> DomainResult<Vec<E>> {
        let mut all: Vec<E> = self.rows.iter().map(|row| row.value().clone()).collect();
        all.sort_by(|a, b| a.identity().cmp(b.identity()));
        Ok(all)
    }

    async fn delete(&self, key: &E::Key) -> DomainResult<bool> {
        let removed = self.rows.remove(key).is_some();
        tracing::debug!(entity = type_name::<E>(), key = ?key, removed, "delete");
        Ok(removed)
    }
}
