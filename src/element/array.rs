use serde_json::Value;

use super::{ElementError, JsonElement};
use crate::writer::{JsonWriter, WriterError};

/// A JSON array
///
/// An ordered sequence of [`JsonElement`]s whose indices are contiguous from 0.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct JsonArray {
    elements: Vec<JsonElement>,
}

impl JsonArray {
    /// Creates an empty array
    pub fn new() -> Self {
        JsonArray::default()
    }

    /// Appends a string
    pub fn add_string(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        self.add(value);
    }

    /// Appends an integer
    pub fn add_integer(&mut self, value: i64) {
        self.add(value);
    }

    /// Appends a floating point number
    ///
    /// The element is tagged as float even if `value` has no fractional part.
    pub fn add_float(&mut self, value: f64) {
        self.add(value);
    }

    /// Appends a boolean
    pub fn add_boolean(&mut self, value: bool) {
        self.add(value);
    }

    /// Appends `null`
    pub fn add_null(&mut self) {
        self.add(JsonElement::Null);
    }

    /// Appends an element
    pub fn add(&mut self, element: impl Into<JsonElement>) {
        self.elements.push(element.into());
    }

    /// Appends copies of all elements of `other`
    ///
    /// `other` is left unchanged; the two arrays do not share any elements afterwards.
    pub fn add_all(&mut self, other: &JsonArray) {
        self.elements.extend_from_slice(&other.elements);
    }

    /// Whether an element exists at `index`
    pub fn has(&self, index: usize) -> bool {
        index < self.elements.len()
    }

    fn out_of_range(&self, index: usize) -> ElementError {
        ElementError::IndexOutOfRange {
            index,
            len: self.elements.len(),
        }
    }

    /// Gets the element at `index`
    ///
    /// # Errors
    /// [`ElementError::IndexOutOfRange`] if `index` is not smaller than the length.
    pub fn get(&self, index: usize) -> Result<&JsonElement, ElementError> {
        self.elements
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Gets the element at `index` mutably
    ///
    /// # Errors
    /// [`ElementError::IndexOutOfRange`] if `index` is not smaller than the length.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut JsonElement, ElementError> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(ElementError::IndexOutOfRange { index, len })
    }

    /// Replaces the element at an existing `index` and returns the previous element
    ///
    /// This method never grows the array; use [`add`](Self::add) to append.
    ///
    /// # Errors
    /// [`ElementError::IndexOutOfRange`] if `index` is not smaller than the length.
    pub fn set(
        &mut self,
        index: usize,
        element: impl Into<JsonElement>,
    ) -> Result<JsonElement, ElementError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, element.into()))
    }

    /// Whether the array contains an element structurally equal to `element`
    pub fn contains(&self, element: &JsonElement) -> bool {
        self.elements.contains(element)
    }

    /// Removes the first element structurally equal to `element`
    ///
    /// Returns whether such an element existed.
    pub fn remove(&mut self, element: &JsonElement) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the array has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, JsonElement> {
        self.elements.iter()
    }

    /// Recursively converts this array to a plain [`serde_json::Value`]
    pub fn to_plain_value(&self) -> Value {
        Value::Array(self.elements.iter().map(JsonElement::to_plain_value).collect())
    }

    /// Writes this array as next value of the JSON writer
    ///
    /// # Errors
    /// Returns the error of the writer.
    pub fn write_to<W: JsonWriter>(&self, json_writer: &mut W) -> Result<(), WriterError> {
        json_writer.begin_array()?;
        for element in &self.elements {
            element.write_to(json_writer)?;
        }
        json_writer.end_array()
    }
}

impl std::fmt::Display for JsonArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.to_plain_value(), f)
    }
}

impl<E: Into<JsonElement>> FromIterator<E> for JsonArray {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        JsonArray {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for JsonArray {
    type Item = JsonElement;
    type IntoIter = std::vec::IntoIter<JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a JsonElement;
    type IntoIter = std::slice::Iter<'a, JsonElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
