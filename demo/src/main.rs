mod person;

use crud_application::error::AppError;
use crud_application::{EditSession, InMemoryRepository};
use crud_domain::entity::Entity;
use crud_domain::error::DomainError;
use crud_domain::id_equivalence::IdEquivalent;
use crud_domain::repository::{Repository, RepositoryExt};
use crud_domain::validation::ValidationScope;
use person::{GENDERS, Person, PersonField, person_rules, sorted_genders};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    init_logging();

    let repo = InMemoryRepository::<Person>::new();
    let rules = person_rules();

    // 预置数据
    let people = [
        ("Genghis Khan", "555 5th Street\nQueens NY 10000"),
        ("Flip MacGillicuddy", "103 Whiskey Road\nDublin FL 34222"),
        ("Blob McBlobbins", "947 Skipadoo Alley\nWashing Nuts WA 98001"),
        ("Eric Bloodaxe", "780 Annodomini Avenue\nNorway MA 02108"),
    ]
    .into_iter()
    .map(|(name, address)| Person::builder().name(name).address(address).build());
    let seeded = repo.save_all(people.collect::<Vec<_>>()).await?;
    tracing::info!(count = seeded.len(), "seeded");

    for g in sorted_genders(GENDERS) {
        println!("gender {} = {}", g.code, g.name);
    }

    // 新建记录：先整体校验，再逐字段修正
    let mut session = EditSession::new(Person::builder().build());
    session.validate(ValidationScope::WholeModel, &rules);
    for scope in session.validations().invalid_scopes() {
        println!(
            "{:?}: {:?}",
            scope,
            session.validations().get(&scope).errors()
        );
    }

    session.entity_mut().name = "  Zaphod Beeblebrox ".into();
    session.validate_field(PersonField::Name, &rules);
    println!(
        "name valid: {}, all valid: {}",
        session.validations().field(PersonField::Name).is_valid(),
        session.validations().all_valid()
    );

    match session.save(&repo, &rules).await {
        Err(AppError::Validation { errors }) => println!("save rejected: {:?}", errors),
        other => println!("unexpected: {:?}", other.map(|p| p.id)),
    }

    session.entity_mut().address = "555 Arthur St\r\nDent MI 48001".into();
    let saved = session.save(&repo, &rules).await?;
    println!("saved: id={}, name={}", saved.id, saved.name);

    // 编辑已有记录
    let mut edit = EditSession::new(seeded[0].clone());
    edit.entity_mut().address = "1 Steppe Road\nKarakorum MN 00001".into();
    println!("dirty: {}, new: {}", edit.is_dirty(), edit.is_new());
    let updated = edit.save(&repo, &rules).await?;
    println!("updated: id={}, address={:?}", updated.id, updated.address);

    // JSON 往返：持久记录往返后仍然相等
    let all = repo.fetch_all().await?;
    let json = serde_json::to_string(&all).map_err(DomainError::from)?;
    let decoded: Vec<Person> = serde_json::from_str(&json).map_err(DomainError::from)?;
    println!(
        "roundtrip: equal={}, id_equivalent={}",
        decoded == all,
        decoded.id_equivalent(&all)
    );

    // 删除
    let removed = repo.delete_all(&seeded[1..2]).await?;
    println!("deleted {} record(s)", removed);
    if let Err(err) = repo.delete_entity(&Person::builder().build()).await {
        println!("delete rejected: {}", err);
    }
    repo.delete_entity(&saved).await?;

    let remaining = repo.fetch_all().await?;
    for p in &remaining {
        println!("{} {} [{}]", p.id, p.name, p.key().is_some());
    }
    Ok(())
}
