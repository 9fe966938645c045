use serde::Deserialize;
use serde_json::json;
use tradeit_client::presentation::order::{OrderExpiration, OrderType};
use tradeit_client::presentation::serialization::{Enumerated, null_as_default};

#[derive(Debug, Deserialize)]
struct TestStructVec {
    #[serde(default, deserialize_with = "null_as_default")]
    values: Vec<i32>,
}

#[test]
fn known_literal_is_typed() {
    let value: Enumerated<OrderType> = serde_json::from_value(json!("limit")).unwrap();
    assert_eq!(value, Enumerated::Known(OrderType::Limit));
    assert!(value.is_known());
    assert_eq!(value.known(), Some(OrderType::Limit));
}

#[test]
fn unknown_literal_is_kept_verbatim() {
    let value: Enumerated<OrderExpiration> = serde_json::from_value(json!("GTC")).unwrap();
    assert_eq!(value, Enumerated::Unrecognized("GTC".to_string()));
    assert_eq!(value.known(), None);
    assert_eq!(value.as_str(), "GTC");
    assert_eq!(serde_json::to_value(&value).unwrap(), "GTC");
}

#[test]
fn parsing_from_str_matches_deserialization() {
    assert_eq!(
        Enumerated::<OrderType>::from("stop"),
        Enumerated::Known(OrderType::Stop)
    );
    assert_eq!(
        Enumerated::<OrderType>::from(String::from("trailing")).to_string(),
        "trailing"
    );
    assert_eq!(Enumerated::<OrderType>::from(OrderType::Market).to_string(), "market");
}

#[test]
fn null_as_default_handles_null_and_missing() {
    let with_null: TestStructVec = serde_json::from_value(json!({"values": null})).unwrap();
    assert!(with_null.values.is_empty());

    let missing: TestStructVec = serde_json::from_value(json!({})).unwrap();
    assert!(missing.values.is_empty());

    let present: TestStructVec = serde_json::from_value(json!({"values": [1, 2]})).unwrap();
    assert_eq!(present.values, vec![1, 2]);
}
