use bon::Builder;
use chrono::{DateTime, Utc};
use crud_domain::entity::Touch;
use crud_domain::identity::Identity;
use crud_domain::validation::{FieldProxy, ModelValidator, Normalize, Validate, field};
use crud_macros::{entity, model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gender {
    pub code: &'static str,
    pub name: &'static str,
    pub sort: i64,
}

pub const GENDERS: &[Gender] = &[
    Gender {
        code: "m",
        name: "Male",
        sort: 0,
    },
    Gender {
        code: "f",
        name: "Female",
        sort: 1,
    },
    Gender {
        code: "ns",
        name: "Not Specified",
        sort: 2,
    },
    Gender {
        code: "nb",
        name: "Non-Binary",
        sort: 100,
    },
];

/// 按 `sort` 再按名称排序的性别列表
pub fn sorted_genders(genders: &[Gender]) -> Vec<&Gender> {
    let mut genders: Vec<_> = genders.iter().collect();
    genders.sort_by(|a, b| (a.sort, a.name).cmp(&(b.sort, b.name)));
    genders
}

#[entity(key = i64)]
#[model]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct Person {
    #[builder(default)]
    pub id: Identity<i64>,
    #[builder(into, default)]
    pub name: String,
    #[builder(into, default = "m".to_string())]
    pub gender: String,
    #[builder(into, default)]
    pub address: String,
    #[model(skip)]
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

impl Normalize for Person {
    fn prepare_for_validation(&mut self) {
        self.name = self.name.trim().to_string();
        self.address = self
            .address
            .trim()
            .replace("\r\n", "\n")
            .replace('\r', "\n");
    }
}

impl Touch for Person {
    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn name() -> FieldProxy<Person, str> {
    field(PersonField::Name, |p: &Person| p.name.as_str())
}

fn address() -> FieldProxy<Person, str> {
    field(PersonField::Address, |p: &Person| p.address.as_str())
}

/// 人员记录的校验规则
pub fn person_rules() -> Validate<Person> {
    let validate_name = Validate::builder()
        .check(name().is_not_empty(), "Name should not be empty.")
        .check(name().min_len(4), "Name should contain at least 4 characters.")
        .build();
    let validate_address = Validate::builder()
        .check(address().is_not_empty(), "Address should not be empty.")
        .check(
            address().min_len(20),
            "Address must contain at least 20 characters.",
        )
        .build();
    let validate_gender = ModelValidator::field(PersonField::Gender, |p: &Person| {
        GENDERS.iter().any(|g| g.code == p.gender)
    })
    .otherwise("Gender is not recognised.");

    validate_name.and(validate_address).and(validate_gender)
}
