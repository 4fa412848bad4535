//! Module for property metadata
//!
//! A [`PropertyCollection`] holds the properties of a mapped data type, each with the name
//! of the property on the Rust side and the member name used in JSON. A mapper looks up
//! properties by either name when converting between values and JSON elements.

use indexmap::IndexMap;

/// A property of a mapped data type
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Property {
    name: String,
    serialized_name: String,
}

impl Property {
    /// Creates a property
    ///
    /// `name` is the name of the property in the data type, `serialized_name` the name of
    /// the corresponding JSON object member.
    pub fn new(name: impl Into<String>, serialized_name: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            serialized_name: serialized_name.into(),
        }
    }

    /// Name of the property in the data type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the JSON object member
    pub fn serialized_name(&self) -> &str {
        &self.serialized_name
    }
}

/// Collection of [`Property`] values, keyed by serialized name
///
/// Properties are iterated in the order in which they were first added.
///
/// # Examples
/// ```
/// # use jsontree::property::*;
/// let mut properties = PropertyCollection::new();
/// properties.add(Property::new("user_id", "userId"));
/// properties.add(Property::new("name", "name"));
///
/// assert_eq!("userId", properties.get_by_name("user_id").unwrap().serialized_name());
/// assert_eq!("user_id", properties.get_by_serialized_name("userId").unwrap().name());
/// assert!(properties.get_by_name("userId").is_none());
/// ```
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct PropertyCollection {
    properties: IndexMap<String, Property>,
}

impl PropertyCollection {
    /// Creates an empty collection
    pub fn new() -> Self {
        PropertyCollection::default()
    }

    /// Adds a property
    ///
    /// A property with the same serialized name is replaced, keeping its position.
    /// Returns the replaced property, if any.
    pub fn add(&mut self, property: Property) -> Option<Property> {
        self.properties
            .insert(property.serialized_name.clone(), property)
    }

    /// Gets the first property with the given data type name
    ///
    /// This performs a linear search.
    pub fn get_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.values().find(|p| p.name == name)
    }

    /// Gets the property with the given serialized name
    pub fn get_by_serialized_name(&self, serialized_name: &str) -> Option<&Property> {
        self.properties.get(serialized_name)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the collection has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterates over the properties
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Property> {
        self.properties.values()
    }
}

impl FromIterator<Property> for PropertyCollection {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut collection = PropertyCollection::new();
        for property in iter {
            collection.add(property);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a PropertyCollection {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
