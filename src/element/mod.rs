//! Module for the in-memory JSON element tree
//!
//! [`JsonElement`] is the value type of the tree. It is either `null`, a [`JsonPrimitive`]
//! (string, integer, floating point number or boolean), a [`JsonArray`] or a [`JsonObject`].
//! Containers exclusively own their children, so a tree can neither share nodes nor contain
//! cycles.
//!
//! # Examples
//! ```
//! # use jsontree::element::*;
//! let mut inner = JsonObject::new();
//! inner.add_float("float", 2.0);
//!
//! let mut array = JsonArray::new();
//! array.add_integer(1);
//! array.add(inner);
//!
//! assert_eq!(r#"[1,{"float":2.0}]"#, array.to_string());
//! assert_eq!(2.0, array.get(1)?.as_object()?.get_as_float("float")?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt::{Display, Formatter};

use duplicate::duplicate_item;
use serde_json::{Number, Value};
use thiserror::Error;

use crate::writer::{JsonWriter, WriterError};

mod array;
mod object;

pub use array::JsonArray;
pub use object::JsonObject;

/// Type of a JSON element
///
/// Primitives are distinguished by their tag, so an integer and a floating point
/// number are different types even if they are numerically equal.
#[derive(PartialEq, Eq, Clone, Copy, strum::Display, Debug)]
pub enum ValueType {
    /// JSON `null`
    Null,
    /// JSON array: `[ ... ]`
    Array,
    /// JSON object: `{ ... }`
    Object,
    /// JSON string value, for example `"text in \"quotes\""`
    String,
    /// Integral JSON number, for example `123`
    Integer,
    /// Floating point JSON number, for example `1.5`
    Float,
    /// JSON boolean value, `true` or `false`
    Boolean,
}

/// Error which occurred while accessing the content of a JSON element
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum ElementError {
    /// A [`JsonObject`] has no member with the requested name
    #[error("no member named '{name}'")]
    NotFound {
        /// Name of the requested member
        name: String,
    },
    /// The element has a different type than the one requested
    ///
    /// Accessors never convert between types; for example requesting a float from an
    /// integer element fails with this error.
    #[error("expected JSON value type {expected} but got {actual}")]
    TypeMismatch {
        /// The requested type
        expected: ValueType,
        /// The actual type of the element
        actual: ValueType,
    },
    /// An index of a [`JsonArray`] is not smaller than the array length
    #[error("index {index} is out of range for array of length {len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Length of the array at the time of the request
        len: usize,
    },
}

/// A JSON primitive value
///
/// Holds exactly one scalar. Equality compares the tag first, so `Integer(1)` is not equal
/// to `Float(1.0)`.
#[derive(PartialEq, Clone, Debug)]
pub enum JsonPrimitive {
    /// JSON string value
    String(String),
    /// Integral JSON number
    Integer(i64),
    /// Floating point JSON number
    Float(f64),
    /// JSON boolean value
    Boolean(bool),
}

impl JsonPrimitive {
    /// Gets the type of this primitive
    pub fn value_type(&self) -> ValueType {
        match self {
            JsonPrimitive::String(_) => ValueType::String,
            JsonPrimitive::Integer(_) => ValueType::Integer,
            JsonPrimitive::Float(_) => ValueType::Float,
            JsonPrimitive::Boolean(_) => ValueType::Boolean,
        }
    }

    /// Whether this primitive is a string
    pub fn is_string(&self) -> bool {
        matches!(self, JsonPrimitive::String(_))
    }

    /// Whether this primitive is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, JsonPrimitive::Integer(_))
    }

    /// Whether this primitive is a floating point number
    pub fn is_float(&self) -> bool {
        matches!(self, JsonPrimitive::Float(_))
    }

    /// Whether this primitive is a boolean
    pub fn is_boolean(&self) -> bool {
        matches!(self, JsonPrimitive::Boolean(_))
    }

    fn type_mismatch(&self, expected: ValueType) -> ElementError {
        ElementError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    /// Gets the string value
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this primitive is not a string.
    pub fn as_string(&self) -> Result<&str, ElementError> {
        match self {
            JsonPrimitive::String(value) => Ok(value),
            _ => Err(self.type_mismatch(ValueType::String)),
        }
    }

    /// Gets the integer value
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this primitive is not an integer.
    pub fn as_integer(&self) -> Result<i64, ElementError> {
        match self {
            JsonPrimitive::Integer(value) => Ok(*value),
            _ => Err(self.type_mismatch(ValueType::Integer)),
        }
    }

    /// Gets the floating point value
    ///
    /// Integers are not converted; they fail with a type mismatch like every other
    /// non-float primitive.
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this primitive is not a floating point number.
    pub fn as_float(&self) -> Result<f64, ElementError> {
        match self {
            JsonPrimitive::Float(value) => Ok(*value),
            _ => Err(self.type_mismatch(ValueType::Float)),
        }
    }

    /// Gets the boolean value
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this primitive is not a boolean.
    pub fn as_boolean(&self) -> Result<bool, ElementError> {
        match self {
            JsonPrimitive::Boolean(value) => Ok(*value),
            _ => Err(self.type_mismatch(ValueType::Boolean)),
        }
    }

    /// Converts this primitive to a plain [`serde_json::Value`]
    ///
    /// Non-finite floating point numbers cannot be represented and become [`Value::Null`].
    pub fn to_plain_value(&self) -> Value {
        match self {
            JsonPrimitive::String(value) => Value::String(value.clone()),
            JsonPrimitive::Integer(value) => Value::Number(Number::from(*value)),
            JsonPrimitive::Float(value) => Number::from_f64(*value).map_or(Value::Null, Value::Number),
            JsonPrimitive::Boolean(value) => Value::Bool(*value),
        }
    }

    /// Writes this primitive as next value of the JSON writer
    ///
    /// # Errors
    /// Returns the error of the writer, for example when a value is not expected at the
    /// current position or when a floating point number is not finite.
    pub fn write_to<W: JsonWriter>(&self, json_writer: &mut W) -> Result<(), WriterError> {
        match self {
            JsonPrimitive::String(value) => json_writer.write_string(value),
            JsonPrimitive::Integer(value) => json_writer.write_integer(*value),
            JsonPrimitive::Float(value) => json_writer.write_float(*value),
            JsonPrimitive::Boolean(value) => json_writer.write_boolean(*value),
        }
    }
}

impl Display for JsonPrimitive {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_plain_value(), f)
    }
}

// Use `duplicate` crate to avoid repeating code for all supported types
#[duplicate_item(int_type; [i8]; [i16]; [i32]; [i64]; [u8]; [u16]; [u32])]
impl From<int_type> for JsonPrimitive {
    fn from(value: int_type) -> Self {
        JsonPrimitive::Integer(value.into())
    }
}

#[duplicate_item(float_type; [f32]; [f64])]
impl From<float_type> for JsonPrimitive {
    fn from(value: float_type) -> Self {
        JsonPrimitive::Float(value.into())
    }
}

impl From<bool> for JsonPrimitive {
    fn from(value: bool) -> Self {
        JsonPrimitive::Boolean(value)
    }
}

impl From<String> for JsonPrimitive {
    fn from(value: String) -> Self {
        JsonPrimitive::String(value)
    }
}

impl From<&str> for JsonPrimitive {
    fn from(value: &str) -> Self {
        JsonPrimitive::String(value.to_owned())
    }
}

/// A JSON element
///
/// See the [module documentation](self) for an overview.
///
/// Equality is structural: two independently constructed trees with the same content
/// are equal.
#[derive(PartialEq, Clone, Debug, Default)]
pub enum JsonElement {
    /// JSON `null`
    #[default]
    Null,
    /// String, number or boolean value
    Primitive(JsonPrimitive),
    /// JSON array
    Array(JsonArray),
    /// JSON object
    Object(JsonObject),
}

impl JsonElement {
    /// Gets the type of this element
    pub fn value_type(&self) -> ValueType {
        match self {
            JsonElement::Null => ValueType::Null,
            JsonElement::Primitive(primitive) => primitive.value_type(),
            JsonElement::Array(_) => ValueType::Array,
            JsonElement::Object(_) => ValueType::Object,
        }
    }

    /// Whether this element is JSON `null`
    pub fn is_null(&self) -> bool {
        matches!(self, JsonElement::Null)
    }

    /// Whether this element is a primitive
    pub fn is_primitive(&self) -> bool {
        matches!(self, JsonElement::Primitive(_))
    }

    /// Whether this element is an array
    pub fn is_array(&self) -> bool {
        matches!(self, JsonElement::Array(_))
    }

    /// Whether this element is an object
    pub fn is_object(&self) -> bool {
        matches!(self, JsonElement::Object(_))
    }

    /// Whether this element is a string primitive
    pub fn is_string(&self) -> bool {
        self.value_type() == ValueType::String
    }

    /// Whether this element is an integer primitive
    pub fn is_integer(&self) -> bool {
        self.value_type() == ValueType::Integer
    }

    /// Whether this element is a floating point primitive
    pub fn is_float(&self) -> bool {
        self.value_type() == ValueType::Float
    }

    /// Whether this element is a boolean primitive
    pub fn is_boolean(&self) -> bool {
        self.value_type() == ValueType::Boolean
    }

    fn type_mismatch(&self, expected: ValueType) -> ElementError {
        ElementError::TypeMismatch {
            expected,
            actual: self.value_type(),
        }
    }

    /// Gets this element as primitive
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not a primitive. The `expected`
    /// type of the error is [`ValueType::String`] because there is no dedicated type for
    /// "any primitive".
    pub fn as_primitive(&self) -> Result<&JsonPrimitive, ElementError> {
        match self {
            JsonElement::Primitive(primitive) => Ok(primitive),
            _ => Err(self.type_mismatch(ValueType::String)),
        }
    }

    /// Gets this element as array
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not an array.
    pub fn as_array(&self) -> Result<&JsonArray, ElementError> {
        match self {
            JsonElement::Array(array) => Ok(array),
            _ => Err(self.type_mismatch(ValueType::Array)),
        }
    }

    /// Gets this element as mutable array
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not an array.
    pub fn as_array_mut(&mut self) -> Result<&mut JsonArray, ElementError> {
        match self {
            JsonElement::Array(array) => Ok(array),
            _ => Err(self.type_mismatch(ValueType::Array)),
        }
    }

    /// Gets this element as object
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not an object.
    pub fn as_object(&self) -> Result<&JsonObject, ElementError> {
        match self {
            JsonElement::Object(object) => Ok(object),
            _ => Err(self.type_mismatch(ValueType::Object)),
        }
    }

    /// Gets this element as mutable object
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not an object.
    pub fn as_object_mut(&mut self) -> Result<&mut JsonObject, ElementError> {
        match self {
            JsonElement::Object(object) => Ok(object),
            _ => Err(self.type_mismatch(ValueType::Object)),
        }
    }

    /// Gets the value of a string primitive
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not a string.
    pub fn as_string(&self) -> Result<&str, ElementError> {
        match self {
            JsonElement::Primitive(primitive) => primitive.as_string(),
            _ => Err(self.type_mismatch(ValueType::String)),
        }
    }

    /// Gets the value of an integer primitive
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not an integer.
    pub fn as_integer(&self) -> Result<i64, ElementError> {
        match self {
            JsonElement::Primitive(primitive) => primitive.as_integer(),
            _ => Err(self.type_mismatch(ValueType::Integer)),
        }
    }

    /// Gets the value of a floating point primitive
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not a floating point number.
    pub fn as_float(&self) -> Result<f64, ElementError> {
        match self {
            JsonElement::Primitive(primitive) => primitive.as_float(),
            _ => Err(self.type_mismatch(ValueType::Float)),
        }
    }

    /// Gets the value of a boolean primitive
    ///
    /// # Errors
    /// [`ElementError::TypeMismatch`] if this element is not a boolean.
    pub fn as_boolean(&self) -> Result<bool, ElementError> {
        match self {
            JsonElement::Primitive(primitive) => primitive.as_boolean(),
            _ => Err(self.type_mismatch(ValueType::Boolean)),
        }
    }

    /// Recursively converts this element to a plain [`serde_json::Value`]
    ///
    /// Primitives keep their tag: integers become integral numbers and floating point
    /// numbers become floating point numbers, so `2.0` is still rendered as `2.0`.
    /// Object members keep their order.
    ///
    /// # Examples
    /// ```
    /// # use jsontree::element::*;
    /// let mut object = JsonObject::new();
    /// object.add_integer("int", 2);
    /// object.add_float("float", 2.0);
    ///
    /// let value = JsonElement::from(object).to_plain_value();
    /// assert_eq!(r#"{"int":2,"float":2.0}"#, value.to_string());
    /// ```
    pub fn to_plain_value(&self) -> Value {
        match self {
            JsonElement::Null => Value::Null,
            JsonElement::Primitive(primitive) => primitive.to_plain_value(),
            JsonElement::Array(array) => array.to_plain_value(),
            JsonElement::Object(object) => object.to_plain_value(),
        }
    }

    /// Converts a plain [`serde_json::Value`] to an element
    ///
    /// Numbers which fit into an `i64` become [`JsonPrimitive::Integer`], all other
    /// numbers become [`JsonPrimitive::Float`].
    pub fn from_plain_value(value: Value) -> Self {
        match value {
            Value::Null => JsonElement::Null,
            Value::Bool(value) => JsonElement::from(value),
            Value::String(value) => JsonElement::from(value),
            Value::Number(number) => match number.as_i64() {
                Some(value) => JsonElement::from(value),
                None => number.as_f64().map_or(JsonElement::Null, JsonElement::from),
            },
            Value::Array(values) => JsonElement::Array(
                values
                    .into_iter()
                    .map(JsonElement::from_plain_value)
                    .collect(),
            ),
            Value::Object(members) => JsonElement::Object(
                members
                    .into_iter()
                    .map(|(name, value)| (name, JsonElement::from_plain_value(value)))
                    .collect(),
            ),
        }
    }

    /// Writes this element as next value of the JSON writer
    ///
    /// The writer receives the same calls a caller would make when writing the tree
    /// manually, so the writer's null serialization policy applies to `null` elements
    /// nested in arrays and objects.
    ///
    /// # Examples
    /// ```
    /// # use jsontree::element::*;
    /// # use jsontree::writer::*;
    /// let mut array = JsonArray::new();
    /// array.add_integer(1);
    /// array.add_null();
    /// array.add_float(2.5);
    ///
    /// let mut json_writer = JsonStreamWriter::new();
    /// JsonElement::from(array).write_to(&mut json_writer)?;
    /// assert_eq!("[1,2.5]", json_writer.finish_document()?);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// Returns the error of the writer, for example when a value is not expected at the
    /// current position.
    pub fn write_to<W: JsonWriter>(&self, json_writer: &mut W) -> Result<(), WriterError> {
        match self {
            JsonElement::Null => json_writer.write_null(),
            JsonElement::Primitive(primitive) => primitive.write_to(json_writer),
            JsonElement::Array(array) => array.write_to(json_writer),
            JsonElement::Object(object) => object.write_to(json_writer),
        }
    }
}

/// Writes the compact JSON text of the [plain value](JsonElement::to_plain_value)
impl Display for JsonElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.to_plain_value(), f)
    }
}

#[duplicate_item(source_type; [i8]; [i16]; [i32]; [i64]; [u8]; [u16]; [u32]; [f32]; [f64]; [bool]; [String]; [&str])]
impl From<source_type> for JsonElement {
    fn from(value: source_type) -> Self {
        JsonElement::Primitive(JsonPrimitive::from(value))
    }
}

impl From<JsonPrimitive> for JsonElement {
    fn from(value: JsonPrimitive) -> Self {
        JsonElement::Primitive(value)
    }
}

impl From<JsonArray> for JsonElement {
    fn from(value: JsonArray) -> Self {
        JsonElement::Array(value)
    }
}

impl From<JsonObject> for JsonElement {
    fn from(value: JsonObject) -> Self {
        JsonElement::Object(value)
    }
}
