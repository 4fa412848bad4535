//! Provides integration with [Serde](https://docs.rs/serde/latest/serde/)
//!
//! With the `serde` feature enabled, [`JsonElement`] and its parts implement
//! [`Serialize`], so element trees can be embedded in any value serialized with Serde:
//! ```toml
//! [dependencies]
//! jsontree = { version = "...", features = ["serde"] }
//! ```
//!
//! # Examples
//! ```
//! # use jsontree::element::*;
//! # use serde::*;
//! #[derive(Serialize)]
//! struct Event {
//!     kind: String,
//!     payload: JsonElement,
//! }
//!
//! let mut payload = JsonObject::new();
//! payload.add_integer("id", 3);
//! payload.add_float("ratio", 0.5);
//!
//! let event = Event {
//!     kind: "update".to_owned(),
//!     payload: payload.into(),
//! };
//! assert_eq!(
//!     r#"{"kind":"update","payload":{"id":3,"ratio":0.5}}"#,
//!     serde_json::to_string(&event)?
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Objects are serialized as maps whose entries keep the member order. Non-finite floating
//! point numbers are passed to the serializer as they are; how they are handled depends on
//! the serializer.

use serde::ser::{Serialize, Serializer};

use crate::element::{JsonArray, JsonElement, JsonObject, JsonPrimitive};

impl Serialize for JsonPrimitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonPrimitive::String(value) => serializer.serialize_str(value),
            JsonPrimitive::Integer(value) => serializer.serialize_i64(*value),
            JsonPrimitive::Float(value) => serializer.serialize_f64(*value),
            JsonPrimitive::Boolean(value) => serializer.serialize_bool(*value),
        }
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self)
    }
}

impl Serialize for JsonElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonElement::Null => serializer.serialize_unit(),
            JsonElement::Primitive(primitive) => primitive.serialize(serializer),
            JsonElement::Array(array) => array.serialize(serializer),
            JsonElement::Object(object) => object.serialize(serializer),
        }
    }
}
