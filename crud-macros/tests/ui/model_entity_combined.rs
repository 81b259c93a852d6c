use crud_domain::entity::Entity;
use crud_domain::identity::Identity;
use crud_macros::{entity, model};

#[entity(key = i64)]
#[model]
#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    address: String,
}

fn main() {
    // entity 先展开，因此 id 字段也拥有选择器
    assert_eq!(
        PersonField::ALL,
        &[PersonField::Id, PersonField::Name, PersonField::Address]
    );

    let p = Person {
        id: Identity::default(),
        name: String::new(),
        address: String::new(),
    };
    assert!(p.is_new());
}
