use crud_domain::id_equivalence::IdEquivalent;
use crud_domain::identity::Identity;
use crud_macros::entity;

#[entity(key = i64)]
#[derive(Debug, Clone, PartialEq)]
struct Line {
    sku: String,
}

#[entity(key = i64)]
#[derive(Debug, Clone, PartialEq)]
struct Order {
    #[entity(id_equivalent)]
    lines: Vec<Line>,
    #[entity(id_equivalent)]
    customer: Identity<i64>,
}

fn line(sku: &str) -> Line {
    Line {
        id: Identity::default(),
        sku: sku.into(),
    }
}

fn main() {
    let a = Order {
        id: Identity::default(),
        lines: vec![line("x"), line("y")],
        customer: Identity::default(),
    };
    let b = Order {
        id: Identity::default(),
        lines: vec![line("x"), line("y")],
        customer: Identity::default(),
    };
    assert_ne!(a, b);
    assert!(a.id_equivalent(&b));

    let c = Order {
        lines: vec![line("x")],
        ..b.clone()
    };
    assert!(!a.id_equivalent(&c));
}
