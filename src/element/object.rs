use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{ElementError, JsonArray, JsonElement, JsonPrimitive, ValueType};
use crate::writer::{JsonWriter, WriterError};

/// A JSON object
///
/// Maps unique member names to [`JsonElement`]s and keeps the members in insertion order.
/// Adding a member whose name already exists replaces its value without changing its
/// position.
///
/// Equality compares the members regardless of their order, the same way JSON
/// consumers treat objects.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct JsonObject {
    members: IndexMap<String, JsonElement>,
}

impl JsonObject {
    /// Creates an empty object
    pub fn new() -> Self {
        JsonObject::default()
    }

    /// Adds a string member
    pub fn add_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value: String = value.into();
        self.add(name, value);
    }

    /// Adds an integer member
    pub fn add_integer(&mut self, name: impl Into<String>, value: i64) {
        self.add(name, value);
    }

    /// Adds a floating point member
    ///
    /// The value is tagged as float even if it has no fractional part.
    pub fn add_float(&mut self, name: impl Into<String>, value: f64) {
        self.add(name, value);
    }

    /// Adds a boolean member
    pub fn add_boolean(&mut self, name: impl Into<String>, value: bool) {
        self.add(name, value);
    }

    /// Adds a `null` member
    pub fn add_null(&mut self, name: impl Into<String>) {
        self.add(name, JsonElement::Null);
    }

    /// Adds a member, replacing the value of an existing member with the same name
    ///
    /// Returns the replaced value, if any.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        element: impl Into<JsonElement>,
    ) -> Option<JsonElement> {
        self.members.insert(name.into(), element.into())
    }

    /// Whether a member with the name exists
    pub fn has(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Gets the value of the member with the name
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member.
    pub fn get(&self, name: &str) -> Result<&JsonElement, ElementError> {
        self.members.get(name).ok_or_else(|| not_found(name))
    }

    /// Gets the value of the member with the name mutably
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut JsonElement, ElementError> {
        self.members.get_mut(name).ok_or_else(|| not_found(name))
    }

    /// Gets the value of the member with the name as primitive
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not a primitive.
    pub fn get_as_primitive(&self, name: &str) -> Result<&JsonPrimitive, ElementError> {
        self.get(name)?.as_primitive()
    }

    /// Gets the value of the member with the name as array
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not an array.
    pub fn get_as_array(&self, name: &str) -> Result<&JsonArray, ElementError> {
        self.get(name)?.as_array()
    }

    /// Gets the value of the member with the name as object
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not an object.
    pub fn get_as_object(&self, name: &str) -> Result<&JsonObject, ElementError> {
        self.get(name)?.as_object()
    }

    /// Gets the string value of the member with the name
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not a string.
    pub fn get_as_string(&self, name: &str) -> Result<&str, ElementError> {
        self.get(name)?.as_string()
    }

    /// Gets the integer value of the member with the name
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not an integer.
    pub fn get_as_integer(&self, name: &str) -> Result<i64, ElementError> {
        self.get(name)?.as_integer()
    }

    /// Gets the floating point value of the member with the name
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not a floating point number.
    pub fn get_as_float(&self, name: &str) -> Result<f64, ElementError> {
        self.get(name)?.as_float()
    }

    /// Gets the boolean value of the member with the name
    ///
    /// # Errors
    /// [`ElementError::NotFound`] if there is no such member, [`ElementError::TypeMismatch`]
    /// if its value is not a boolean.
    pub fn get_as_boolean(&self, name: &str) -> Result<bool, ElementError> {
        self.get(name)?.as_boolean()
    }

    /// Removes the member with the name
    ///
    /// Returns whether the member existed. The remaining members keep their order.
    pub fn remove(&mut self, name: &str) -> bool {
        self.members.shift_remove(name).is_some()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the object has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the member names in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    /// Iterates over the members in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, JsonElement> {
        self.members.iter()
    }

    /// Recursively converts this object to a plain [`serde_json::Value`]
    ///
    /// The members of the resulting map keep their order.
    pub fn to_plain_value(&self) -> Value {
        Value::Object(
            self.members
                .iter()
                .map(|(name, value)| (name.clone(), value.to_plain_value()))
                .collect::<Map<String, Value>>(),
        )
    }

    /// Writes this object as next value of the JSON writer
    ///
    /// # Errors
    /// Returns the error of the writer.
    pub fn write_to<W: JsonWriter>(&self, json_writer: &mut W) -> Result<(), WriterError> {
        json_writer.begin_object()?;
        for (name, value) in &self.members {
            json_writer.name(name)?;
            value.write_to(json_writer)?;
        }
        json_writer.end_object()
    }
}

fn not_found(name: &str) -> ElementError {
    ElementError::NotFound {
        name: name.to_owned(),
    }
}

impl std::fmt::Display for JsonObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_plain_value(), f)
    }
}

impl<K: Into<String>, V: Into<JsonElement>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonObject {
            members: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, JsonElement);
    type IntoIter = indexmap::map::IntoIter<String, JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a JsonElement);
    type IntoIter = indexmap::map::Iter<'a, String, JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn add_and_get() -> TestResult {
        let mut object = JsonObject::new();
        object.add_string("string", "text");
        object.add_integer("integer", 1);
        object.add_float("float", 1.0);
        object.add_boolean("boolean", true);
        object.add_null("null");
        object.add("array", JsonArray::new());
        object.add("object", JsonObject::new());

        assert_eq!("text", object.get_as_string("string")?);
        assert_eq!(1, object.get_as_integer("integer")?);
        assert_eq!(1.0, object.get_as_float("float")?);
        assert_eq!(true, object.get_as_boolean("boolean")?);
        assert_eq!(true, object.get("null")?.is_null());
        assert_eq!(0, object.get_as_array("array")?.len());
        assert_eq!(0, object.get_as_object("object")?.len());
        assert_eq!(
            &JsonPrimitive::Integer(1),
            object.get_as_primitive("integer")?
        );
        assert_eq!(7, object.len());
        Ok(())
    }

    #[test]
    fn get_missing() {
        let object = JsonObject::new();
        let expected = ElementError::NotFound {
            name: "a".to_owned(),
        };

        assert_eq!(Err(expected.clone()), object.get("a"));
        assert_eq!(Err(expected), object.get_as_integer("a"));
        assert_eq!(false, object.has("a"));
    }

    #[test]
    fn typed_accessor_mismatch() {
        let mut object = JsonObject::new();
        object.add_integer("a", 1);
        object.add("b", JsonArray::new());

        assert_eq!(
            Err(ElementError::TypeMismatch {
                expected: ValueType::Float,
                actual: ValueType::Integer
            }),
            object.get_as_float("a")
        );
        assert_eq!(
            Err(ElementError::TypeMismatch {
                expected: ValueType::Object,
                actual: ValueType::Array
            }),
            object.get_as_object("b")
        );
        assert_eq!(
            Err(ElementError::TypeMismatch {
                expected: ValueType::String,
                actual: ValueType::Array
            }),
            object.get_as_primitive("b").map(|_| ())
        );
    }

    #[test]
    fn replace_keeps_position() -> TestResult {
        let mut object = JsonObject::new();
        object.add_integer("a", 1);
        object.add_integer("b", 2);

        let replaced = object.add("a", "new");
        assert_eq!(Some(JsonElement::from(1)), replaced);

        assert_eq!(vec!["a", "b"], object.keys().collect::<Vec<_>>());
        assert_eq!("new", object.get_as_string("a")?);
        assert_eq!(r#"{"a":"new","b":2}"#, object.to_string());
        Ok(())
    }

    #[test]
    fn remove() {
        let mut object = JsonObject::new();
        object.add_integer("a", 1);
        object.add_integer("b", 2);
        object.add_integer("c", 3);

        assert_eq!(true, object.remove("b"));
        assert_eq!(false, object.remove("b"));
        assert_eq!(vec!["a", "c"], object.keys().collect::<Vec<_>>());

        // Re-adding appends at the end
        object.add_integer("b", 4);
        assert_eq!(vec!["a", "c", "b"], object.keys().collect::<Vec<_>>());
    }

    #[test]
    fn equality_ignores_order() {
        let first: JsonObject = vec![("a", 1), ("b", 2)].into_iter().collect();
        let second: JsonObject = vec![("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(first, second);

        let third: JsonObject = vec![("a", 1), ("b", 3)].into_iter().collect();
        assert_ne!(first, third);
    }

    #[test]
    fn iteration_order() {
        let mut object = JsonObject::new();
        object.add_integer("z", 1);
        object.add_integer("a", 2);
        object.add_integer("m", 3);

        let members: Vec<_> = object
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_integer().unwrap()))
            .collect();
        assert_eq!(vec![("z", 1), ("a", 2), ("m", 3)], members);
    }
}
