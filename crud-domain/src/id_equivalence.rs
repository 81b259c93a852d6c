//! 标识等价（IdEquivalent）
//!
//! 比较一条记录在序列化/持久化往返前后是否“是同一条”：临时标识在往返后必然换新令牌，
//! 因此不能用 `==` 判断。该关系弱于严格相等，且与 `==` 并存，调用方需显式选择。
//!
use crate::identity::Identity;

/// 标识等价关系
///
/// 记录类型通常由 `#[entity]` 宏实现：`id` 字段按标识等价比较，其余字段按 `==` 比较。
pub trait IdEquivalent {
    fn id_equivalent(&self, other: &Self) -> bool;
}

impl<S: PartialEq> IdEquivalent for Identity<S> {
    fn id_equivalent(&self, other: &Self) -> bool {
        Identity::id_equivalent(self, other)
    }
}

impl<T: IdEquivalent> IdEquivalent for Option<T> {
    fn id_equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(lhs), Some(rhs)) => lhs.id_equivalent(rhs),
            (None, None) => true,
            _ => false,
        }
    }
}

// 序列：长度相同且逐元素等价
impl<T: IdEquivalent> IdEquivalent for [T] {
    fn id_equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(lhs, rhs)| lhs.id_equivalent(rhs))
    }
}

impl<T: IdEquivalent, const N: usize> IdEquivalent for [T; N] {
    fn id_equivalent(&self, other: &Self) -> bool {
        self.as_slice().id_equivalent(other.as_slice())
    }
}

impl<T: IdEquivalent> IdEquivalent for Vec<T> {
    fn id_equivalent(&self, other: &Self) -> bool {
        self.as_slice().id_equivalent(other.as_slice())
    }
}

impl<T: IdEquivalent + ?Sized> IdEquivalent for &T {
    fn id_equivalent(&self, other: &Self) -> bool {
        (**self).id_equivalent(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_of_identities() {
        let ids = vec![Identity::new(Some(7_i64)), Identity::ephemeral()];
        let other = vec![Identity::new(Some(7_i64)), Identity::ephemeral()];
        assert_ne!(ids, other);
        assert!(ids.id_equivalent(&other));

        let shorter = vec![Identity::new(Some(7_i64))];
        assert!(!ids.id_equivalent(&shorter));

        let swapped = vec![Identity::ephemeral(), Identity::new(Some(7_i64))];
        assert!(!ids.id_equivalent(&swapped));

        let empty: Vec<Identity<i64>> = Vec::new();
        assert!(empty.id_equivalent(&Vec::new()));
    }

    #[test]
    fn options_and_arrays() {
        let some_e: Option<Identity<i64>> = Some(Identity::ephemeral());
        assert!(some_e.id_equivalent(&Some(Identity::ephemeral())));
        assert!(!some_e.id_equivalent(&None));
        assert!(None::<Identity<i64>>.id_equivalent(&None));

        let a = [Identity::new(Some(1_i64)), Identity::ephemeral()];
        let b = [Identity::new(Some(1_i64)), Identity::ephemeral()];
        assert!(a.id_equivalent(&b));

        let refs: Vec<&Identity<i64>> = a.iter().collect();
        let other_refs: Vec<&Identity<i64>> = b.iter().collect();
        assert!(refs.id_equivalent(&other_refs));
    }
}
