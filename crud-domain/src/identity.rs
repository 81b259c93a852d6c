//! 实体标识（Identity）
//!
//! 一条记录在被存储层接纳之前只拥有临时标识（`Ephemeral`），保存后由存储层分配
//! 持久标识（`Stored`）。标识本身不可变：保存成功后以新的 `Identity` 整体替换旧值。
//!
//! 注意区分两种比较：
//! - `==`：严格的结构相等，两个不同的临时标识互不相等；
//! - [`IdEquivalent::id_equivalent`](crate::id_equivalence::IdEquivalent)：
//!   任意两个临时标识都视为等价，用于比较序列化往返前后的记录。
//!
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::storage::{StorageScalar, StorageValue};

/// 实体标识：临时（仅内存）或持久（由存储层分配）
///
/// 排序规则：任意临时标识都排在持久标识之前；同类标识按各自载荷比较。
/// 该顺序只用于稳定的遍历与展示，不携带业务含义。
///
/// # 示例
///
/// ```
/// use crud_domain::identity::Identity;
///
/// let new_record = Identity::<i64>::new(None);
/// assert!(new_record.is_ephemeral());
/// assert_eq!(new_record.value(), None);
///
/// let saved = Identity::new(Some(42_i64));
/// assert_eq!(saved.value(), Some(&42));
/// assert!(new_record < saved);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Identity<S> {
    /// 尚未持久化，携带进程内随机生成的令牌
    Ephemeral(Uuid),
    /// 存储层分配的持久键
    Stored(S),
}

impl<S> Identity<S> {
    /// 有持久值时构造 `Stored`，否则构造携带新令牌的 `Ephemeral`
    pub fn new(stored: Option<S>) -> Self {
        match stored {
            Some(value) => Self::Stored(value),
            None => Self::ephemeral(),
        }
    }

    /// 构造新的临时标识（每次调用生成不同的令牌）
    pub fn ephemeral() -> Self {
        Self::Ephemeral(Uuid::new_v4())
    }

    pub fn stored(value: S) -> Self {
        Self::Stored(value)
    }

    /// 持久值的引用；临时标识返回 `None`
    ///
    /// 需要取得所有权时使用 [`into_value`](Self::into_value) 或 [`to_wire`](Self::to_wire)。
    pub fn value(&self) -> Option<&S> {
        match self {
            Self::Stored(value) => Some(value),
            Self::Ephemeral(_) => None,
        }
    }

    /// 消费自身并取出持久值
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Stored(value) => Some(value),
            Self::Ephemeral(_) => None,
        }
    }

    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Ephemeral(_))
    }

    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }

    /// 临时令牌；持久标识返回 `None`
    pub fn token(&self) -> Option<Uuid> {
        match self {
            Self::Ephemeral(token) => Some(*token),
            Self::Stored(_) => None,
        }
    }

    /// 标识等价：两个持久标识按值比较；两个临时标识总是等价；跨类型永不等价
    ///
    /// 与 `==` 不同，此关系忽略临时令牌，因此不能用来替代严格相等。
    pub fn id_equivalent(&self, other: &Self) -> bool
    where
        S: PartialEq,
    {
        match (self, other) {
            (Self::Stored(lhs), Self::Stored(rhs)) => lhs == rhs,
            (Self::Ephemeral(_), Self::Ephemeral(_)) => true,
            _ => false,
        }
    }

    /// 线路表示：持久值或 `None`
    pub fn to_wire(&self) -> Option<S>
    where
        S: Clone,
    {
        self.value().cloned()
    }

    /// 从线路表示还原；`None` 总是得到带新令牌的临时标识
    pub fn from_wire(wire: Option<S>) -> Self {
        Self::new(wire)
    }
}

impl<S: StorageScalar> Identity<S> {
    /// 存储投影：持久值转换为存储层原生表示，临时标识投影为 `StorageValue::Null`
    ///
    /// 仅在插入由数据库分配主键的新记录时使用，不可把临时标识当作真实主键写入。
    pub fn to_storage_value(&self) -> StorageValue {
        match self {
            Self::Stored(value) => value.to_storage_value(),
            Self::Ephemeral(_) => StorageValue::Null,
        }
    }

    /// 从存储值还原；`Null` 或无法转换的值得到新的临时标识
    pub fn from_storage_value(value: &StorageValue) -> Self {
        Self::new(S::from_storage_value(value))
    }
}

impl<S> Default for Identity<S> {
    fn default() -> Self {
        Self::ephemeral()
    }
}

impl<S> From<S> for Identity<S> {
    fn from(value: S) -> Self {
        Self::Stored(value)
    }
}

impl<S: fmt::Display> fmt::Display for Identity<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored(value) => write!(f, "{}", value),
            Self::Ephemeral(token) => write!(f, "ephemeral({})", token),
        }
    }
}

impl<S: Serialize> Serialize for Identity<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Identity<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<S>::deserialize(deserializer).map(Self::from_wire)
    }
}
