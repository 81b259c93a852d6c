//! 实体（Entity）基础抽象
//!
//! 为记录提供统一的标识能力。标识只能整体替换：保存成功后，
//! 持久化层返回带有新 `Identity` 的记录，而不是在原记录上修改键值。
//!
use std::{fmt::Debug, hash::Hash};

use crate::identity::Identity;

/// 具备 `Identity` 标识的实体抽象
pub trait Entity: Clone + Send + Sync {
    /// 存储层分配的持久键类型
    type Key: Clone + Eq + Hash + Ord + Debug + Send + Sync + 'static;

    /// 获取实体标识
    fn identity(&self) -> &Identity<Self::Key>;

    /// 以新的标识替换原标识，返回新的实体
    fn with_identity(self, identity: Identity<Self::Key>) -> Self;

    /// 尚未持久化（标识为临时标识）
    fn is_new(&self) -> bool {
        self.identity().is_ephemeral()
    }

    /// 持久键；新记录返回 `None`
    fn key(&self) -> Option<&Self::Key> {
        self.identity().value()
    }
}

/// 持久化前的钩子
///
/// 在校验通过、交给仓储之前调用，用于刷新修改时间等由保存动作决定的字段。
/// 默认不做任何事。
pub trait Touch {
    fn touch(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::Entity;
    use crate::id_equivalence::IdEquivalent;
    use crate::identity::Identity;
    use crud_macros::entity;
    use serde::{Deserialize, Serialize};

    #[entity(key = i64)]
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Something {
        name: String,
    }

    #[test]
    fn new_entity_has_ephemeral_identity() {
        let s = Something {
            id: Identity::default(),
            name: "Bob".into(),
        };
        assert!(s.is_new());
        assert_eq!(s.key(), None);

        let saved = s.clone().with_identity(Identity::new(Some(3)));
        assert!(!saved.is_new());
        assert_eq!(saved.key(), Some(&3));
        assert_eq!(saved.name, "Bob");
        assert!(s.is_new());
    }

    #[test]
    fn records_roundtrip_id_equivalent() {
        let somethings = vec![
            Something {
                id: Identity::default(),
                name: "Bob".into(),
            },
            Something {
                id: Identity::default(),
                name: "Fred".into(),
            },
        ];
        let encoded = serde_json::to_string(&somethings).unwrap();
        let decoded: Vec<Something> = serde_json::from_str(&encoded).unwrap();

        assert_ne!(somethings, decoded);
        assert!(somethings.id_equivalent(&decoded));

        let renamed = vec![
            decoded[0].clone(),
            Something {
                name: "Frederick".into(),
                ..decoded[1].clone()
            },
        ];
        assert!(!somethings.id_equivalent(&renamed));
    }
}
