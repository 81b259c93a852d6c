//! 存储投影（StorageValue）
//!
//! 与具体数据库驱动无关的存储层原生值表示，以及标量类型与其之间的双向转换。
//! 持久化层通过它写入主键列：持久标识投影为对应标量，临时标识投影为 `Null`。
//!
use uuid::Uuid;

/// 存储层原生值
#[derive(Debug, Clone, PartialEq)]
pub enum StorageValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl StorageValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// 可作为持久键写入存储层的标量
pub trait StorageScalar: Sized {
    fn to_storage_value(&self) -> StorageValue;

    /// 类型不匹配或为 `Null` 时返回 `None`
    fn from_storage_value(value: &StorageValue) -> Option<Self>;
}

impl StorageScalar for i64 {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Integer(*self)
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl StorageScalar for i32 {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Integer(i64::from(*self))
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Integer(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl StorageScalar for u32 {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Integer(i64::from(*self))
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Integer(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl StorageScalar for bool {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Integer(i64::from(*self))
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Integer(v) => Some(*v != 0),
            _ => None,
        }
    }
}

impl StorageScalar for String {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Text(self.clone())
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// Uuid 以带连字符的文本存储；也接受 16 字节的 Blob
impl StorageScalar for Uuid {
    fn to_storage_value(&self) -> StorageValue {
        StorageValue::Text(self.hyphenated().to_string())
    }

    fn from_storage_value(value: &StorageValue) -> Option<Self> {
        match value {
            StorageValue::Text(v) => Uuid::parse_str(v).ok(),
            StorageValue::Blob(bytes) => Uuid::from_slice(bytes).ok(),
            _ => None,
        }
    }
}
