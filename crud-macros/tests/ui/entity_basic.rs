use crud_domain::entity::Entity;
use crud_domain::id_equivalence::IdEquivalent;
use crud_domain::identity::Identity;
use crud_macros::entity;
use serde::{Deserialize, Serialize};

#[entity]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
}

#[entity(key = uuid::Uuid)]
#[derive(Debug, Clone, PartialEq)]
struct Token {
    // 已存在的 id 字段被复用并移到最前
    label: String,
    id: Identity<uuid::Uuid>,
}

fn main() {
    let p = Person {
        id: Identity::default(),
        name: "Bob".into(),
    };
    assert!(p.is_new());

    let saved = p.clone().with_identity(Identity::new(Some(1_i64)));
    assert_eq!(saved.key(), Some(&1));
    assert!(!saved.id_equivalent(&p));

    let json = serde_json::to_string(&p).unwrap();
    let decoded: Person = serde_json::from_str(&json).unwrap();
    assert_ne!(decoded, p);
    assert!(decoded.id_equivalent(&p));

    let t = Token {
        id: Identity::new(Some(uuid::Uuid::new_v4())),
        label: "a".into(),
    };
    let key: Option<&uuid::Uuid> = t.key();
    assert!(key.is_some());
}
