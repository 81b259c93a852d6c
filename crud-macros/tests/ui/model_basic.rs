use crud_domain::validation::{Model, ValidationScope, ValidationState, Validate, field};
use crud_macros::model;

#[model]
struct Address {
    street: String,
    postal_code: String,
    #[model(skip)]
    cached_label: Option<String>,
}

#[model(field = Key)]
pub struct Setting {
    pub r#type: String,
}

fn assert_model<M: Model>() {}

fn main() {
    assert_model::<Address>();
    assert_model::<Setting>();

    assert_eq!(AddressField::ALL, &[AddressField::Street, AddressField::PostalCode]);
    assert_eq!(AddressField::PostalCode.name(), "postal_code");
    assert_eq!(AddressField::Street.to_string(), "street");
    assert_eq!(Key::Type.name(), "type");

    let rules: Validate<Address> = field(AddressField::PostalCode, |a: &Address| {
        a.postal_code.as_str()
    })
    .min_len(5)
    .otherwise("Postal code is too short.");

    let address = Address {
        street: "Main".into(),
        postal_code: "123".into(),
        cached_label: None,
    };
    let _ = &address.cached_label;
    let mut state = ValidationState::new();
    state.validate(&address, ValidationScope::WholeModel, &rules);
    assert!(!state.all_valid());
    assert!(state.field(AddressField::Street).is_valid());
}
