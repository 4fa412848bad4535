#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use jsontree::{
    element::{JsonArray, JsonElement, JsonObject},
    writer::{JsonTreeWriter, JsonWriter, WriterSettings},
};
use serde::Serialize;

use crate::test_lib::{get_expected_events, write_events};

mod test_lib;

fn assert_serialized<S: Serialize>(s: S, expected_json: &str) {
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(expected_json, json);
}

#[test]
fn serialize_elements() {
    assert_serialized(JsonElement::Null, "null");
    assert_serialized(JsonElement::from(1), "1");
    assert_serialized(JsonElement::from(1.0), "1.0");
    assert_serialized(JsonElement::from("a"), "\"a\"");
    assert_serialized(JsonArray::new(), "[]");
    assert_serialized(JsonObject::new(), "{}");

    let object: JsonObject = vec![("z", 1), ("a", 2)].into_iter().collect();
    // Member order is kept
    assert_serialized(object, r#"{"z":1,"a":2}"#);
}

#[test]
fn serialize_embedded() {
    #[derive(Serialize)]
    struct Envelope<'a> {
        id: u32,
        tags: &'a JsonArray,
        extra: BTreeMap<&'static str, JsonElement>,
    }

    let tags: JsonArray = vec!["x", "y"].into_iter().collect();
    let mut extra = BTreeMap::new();
    extra.insert("flag", JsonElement::from(true));
    extra.insert("none", JsonElement::Null);

    assert_serialized(
        Envelope {
            id: 7,
            tags: &tags,
            extra,
        },
        r#"{"id":7,"tags":["x","y"],"extra":{"flag":true,"none":null}}"#,
    );
}

#[test]
fn serialize_matches_plain_value() -> Result<(), Box<dyn std::error::Error>> {
    let mut json_writer = JsonTreeWriter::new_custom(WriterSettings {
        serialize_null: true,
        ..Default::default()
    });
    write_events(&get_expected_events(), &mut json_writer)?;
    let element = json_writer.finish_document()?;

    assert_eq!(element.to_plain_value(), serde_json::to_value(&element)?);
    assert_eq!(element.to_string(), serde_json::to_string(&element)?);
    Ok(())
}
