use serde::Deserialize;
use serde_json::{Value, json};
use v20_client::model::registry::{Registry, TAG_FIELD, tagged_value};

#[derive(Debug, PartialEq, Deserialize)]
struct Deposit {
    amount: String,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Fee {
    amount: String,
    reason: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Movement {
    Deposit(Deposit),
    Fee(Fee),
    Base(Option<String>),
}

fn registry() -> Registry<Movement> {
    Registry::new("movement", |value| {
        Movement::Base(value.get("id").and_then(Value::as_str).map(String::from))
    })
    .register("DEPOSIT", |v| Deposit::deserialize(v).map(Movement::Deposit))
    .register("FEE", |v| Fee::deserialize(v).map(Movement::Fee))
}

#[test]
fn test_registry_metadata() {
    let registry = registry();
    assert_eq!(registry.family(), "movement");
    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert!(registry.contains("FEE"));
    assert!(!registry.contains("fee"));

    let mut tags: Vec<&str> = registry.tags().collect();
    tags.sort_unstable();
    assert_eq!(tags, vec!["DEPOSIT", "FEE"]);
    assert_eq!(
        format!("{registry:?}"),
        r#"Registry { family: "movement", tags: ["DEPOSIT", "FEE"] }"#
    );
}

#[test]
fn test_decode_selects_factory_by_tag() {
    let registry = registry();
    assert_eq!(
        registry.decode(&json!({"type": "DEPOSIT", "amount": "10"})),
        Movement::Deposit(Deposit {
            amount: "10".to_string()
        })
    );
    assert_eq!(
        registry.decode(&json!({"type": "FEE", "amount": "1", "reason": "wire"})),
        Movement::Fee(Fee {
            amount: "1".to_string(),
            reason: Some("wire".to_string())
        })
    );
}

#[test]
fn test_decode_is_total() {
    let registry = registry();
    let inputs = [
        json!({"id": "1"}),
        json!({"id": "2", "type": "WITHDRAWAL"}),
        json!({"id": "3", "type": "DEPOSIT"}),
        json!({"id": "4", "type": 17}),
        json!([1, 2, 3]),
        Value::Null,
    ];
    let decoded: Vec<Movement> = inputs.iter().map(|v| registry.decode(v)).collect();
    assert_eq!(
        decoded,
        vec![
            Movement::Base(Some("1".to_string())),
            Movement::Base(Some("2".to_string())),
            Movement::Base(Some("3".to_string())),
            Movement::Base(Some("4".to_string())),
            Movement::Base(None),
            Movement::Base(None),
        ]
    );
}

#[test]
fn test_known_tag_drops_only_failing_fields() {
    let registry = registry();
    assert_eq!(
        registry.decode(&json!({"type": "FEE", "amount": "1", "reason": 42})),
        Movement::Fee(Fee {
            amount: "1".to_string(),
            reason: None
        })
    );
    // a required field that cannot decode still falls back to the base shape
    assert_eq!(
        registry.decode(&json!({"id": "9", "type": "FEE", "amount": 1, "reason": "wire"})),
        Movement::Base(Some("9".to_string()))
    );
}

#[test]
fn test_valid_field_before_required_one_is_kept() {
    // "reason" sorts before "zone" and only decodes once the required field is present
    #[derive(Debug, PartialEq, Deserialize)]
    struct Transfer {
        reason: Option<String>,
        zone: String,
        amount: Option<u32>,
    }
    let registry: Registry<Option<Transfer>> =
        Registry::new("transfer", |_| None).register("TRANSFER", |v| Transfer::deserialize(v).map(Some));

    assert_eq!(
        registry.decode(&json!({"type": "TRANSFER", "reason": "sweep", "zone": "EU", "amount": "x"})),
        Some(Transfer {
            reason: Some("sweep".to_string()),
            zone: "EU".to_string(),
            amount: None
        })
    );
}

#[test]
fn test_register_replaces_factory() {
    let registry = registry().register("DEPOSIT", |_| Ok(Movement::Base(Some("override".into()))));
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.decode(&json!({"type": "DEPOSIT", "amount": "10"})),
        Movement::Base(Some("override".to_string()))
    );
}

#[test]
fn test_tagged_value_sets_discriminator() {
    assert_eq!(TAG_FIELD, "type");
    assert_eq!(
        tagged_value("FEE", json!({"amount": "1", "type": "OLD"})),
        json!({"amount": "1", "type": "FEE"})
    );
    assert_eq!(tagged_value("FEE", Value::Null), json!({"type": "FEE"}));
    assert_eq!(tagged_value("FEE", json!("x")), json!("x"));
}
