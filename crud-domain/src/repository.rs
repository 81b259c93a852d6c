//! 仓储（Repository）契约
//!
//! 持久化层的最小接口：首次保存时为记录分配持久键并返回更新后的记录，
//! 按持久键查询与删除。具体存储后端由上层提供实现并注入。
//!
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    entity::Entity,
    error::{DomainError, DomainResult},
};

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + 'static,
{
    /// 保存记录：临时标识的记录被插入并分配新键，持久标识的记录被更新
    async fn save(&self, entity: E) -> DomainResult<E>;

    async fn find(&self, key: &E::Key) -> DomainResult<Option<E>>;

    async fn fetch_all(&self) -> DomainResult<Vec<E>>;

    /// 按持久键删除，返回是否确有记录被删除
    async fn delete(&self, key: &E::Key) -> DomainResult<bool>;
}

#[async_trait]
pub trait RepositoryExt<E>: Repository<E>
where
    E: Entity + 'static,
{
    /// 依次保存多条记录，返回保存后的记录（顺序与输入一致）
    async fn save_all<I>(&self, entities: I) -> DomainResult<Vec<E>>
    where
        I: IntoIterator<Item = E> + Send,
        I::IntoIter: Send,
    {
        let mut saved = Vec::new();
        for entity in entities {
            saved.push(self.save(entity).await?);
        }
        Ok(saved)
    }

    /// 删除单条记录；尚未持久化的记录没有可用的存储键，返回 `EphemeralKey`
    async fn delete_entity(&self, entity: &E) -> DomainResult<bool> {
        let Some(key) = entity.key() else {
            return Err(DomainError::EphemeralKey {
                entity: std::any::type_name::<E>(),
            });
        };
        self.delete(key).await
    }

    /// 删除多条记录；跳过尚未持久化的记录，返回实际删除的条数
    async fn delete_all(&self, entities: &[E]) -> DomainResult<usize> {
        let mut deleted = 0;
        for entity in entities {
            let Some(key) = entity.key() else {
                continue;
            };
            if self.delete(key).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }
}

#[async_trait]
impl<E, T> Repository<E> for Arc<T>
where
    E: Entity + 'static,
    T: Repository<E> + ?Sized,
{
    async fn save(&self, entity: E) -> DomainResult<E> {
        (**self).save(entity).await
    }

    async fn find(&self, key: &E::Key) -> DomainResult<Option<E>> {
        (**self).find(key).await
    }

    async fn fetch_all(&self) -> DomainResult<Vec<E>> {
        (**self).fetch_all().await
    }

    async fn delete(&self, key: &E::Key) -> DomainResult<bool> {
        (**self).delete(key).await
    }
}

#[async_trait]
impl<E, T> RepositoryExt<E> for T
where
    E: Entity + 'static,
    T: Repository<E> + ?Sized,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::identity::Identity;
    use crud_macros::entity;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[entity(key = i64)]
    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        text: String,
    }

    #[derive(Default)]
    struct VecRepo {
        rows: Mutex<BTreeMap<i64, Note>>,
    }

    #[async_trait]
    impl Repository<Note> for VecRepo {
        async fn save(&self, entity: Note) -> DomainResult<Note> {
            let mut rows = self.rows.lock().map_err(|e| DomainError::Repository {
                reason: e.to_string(),
            })?;
            let key = match entity.key() {
                Some(key) => *key,
                None => rows.keys().next_back().copied().unwrap_or(0) + 1,
            };
            let saved = entity.with_identity(Identity::new(Some(key)));
            rows.insert(key, saved.clone());
            Ok(saved)
        }

        async fn find(&self, key: &i64) -> DomainResult<Option<Note>> {
            Ok(self.rows.lock().unwrap().get(key).cloned())
        }

        async fn fetch_all(&self) -> DomainResult<Vec<Note>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn delete(&self, key: &i64) -> DomainResult<bool> {
            Ok(self.rows.lock().unwrap().remove(key).is_some())
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: Identity::default(),
            text: text.into(),
        }
    }

    #[tokio::test]
    async fn save_all_assigns_keys_in_order() {
        let repo = Arc::new(VecRepo::default());
        let saved = repo.save_all(vec![note("a"), note("b")]).await.unwrap();
        assert_eq!(saved[0].key(), Some(&1));
        assert_eq!(saved[1].key(), Some(&2));
        assert_eq!(repo.fetch_all().await.unwrap().len(), 2);
        assert_eq!(repo.find(&2).await.unwrap().unwrap().text, "b");
    }

    #[tokio::test]
    async fn delete_all_skips_ephemeral_records() {
        let repo = VecRepo::default();
        let saved = repo.save(note("a")).await.unwrap();
        let deleted = repo.delete_all(&[saved, note("never saved")]).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(repo.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_entity_rejects_ephemeral_identity() {
        let repo = VecRepo::default();
        let saved = repo.save(note("a")).await.unwrap();

        let err = repo.delete_entity(&note("never saved")).await.unwrap_err();
        match err {
            DomainError::EphemeralKey { entity } => assert!(entity.ends_with("Note")),
            other => panic!("unexpected {other:?}"),
        }

        assert!(repo.delete_entity(&saved).await.unwrap());
        assert!(!repo.delete_entity(&saved).await.unwrap());
    }
}
