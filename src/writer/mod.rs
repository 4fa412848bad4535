//! Module for writing JSON data
//!
//! [`JsonWriter`] is the general trait for JSON writers. [`JsonStreamWriter`] is an implementation
//! of it which writes JSON text to an in-memory buffer, [`JsonTreeWriter`] is an implementation
//! which builds a [`JsonElement`](crate::element::JsonElement) tree.
//!
//! Both implementations track the [JSON path](json_path) of the value currently being
//! written and validate every call against the structure written so far.

use duplicate::duplicate_item;
use thiserror::Error;

pub mod json_path;
mod state;
mod stream_writer;
mod tree_writer;

// Re-export the implementations under `writer` module
pub use stream_writer::*;
pub use tree_writer::*;

/// Settings to customize the JSON writer behavior
///
/// These settings are used by [`JsonStreamWriter::new_custom`] and [`JsonTreeWriter::new_custom`].
/// To avoid repeating the default values for unchanged settings `..Default::default()` can be used:
/// ```
/// # use jsontree::writer::WriterSettings;
/// WriterSettings {
///     serialize_null: true,
///     // For all other settings use the default
///     ..Default::default()
/// }
/// # ;
/// ```
#[derive(Clone, Debug, Default)]
pub struct WriterSettings {
    /// Whether to write `null` values inside arrays and objects
    ///
    /// When disabled, a `null` array item is omitted entirely: it is not written and
    /// the array index in the JSON path does not advance for it. A member with a `null`
    /// value is omitted from the output as well, but the JSON path keeps pointing at the
    /// member name until the next member is started.
    ///
    /// A top-level `null` is always written.
    pub serialize_null: bool,

    /// Whether to escape all control characters
    ///
    /// Characters `U+0000` to `U+001F` are always escaped. With this setting, every
    /// character for which [`char::is_control`] is true is escaped as well, for example
    /// `U+007F` and `U+0085`.
    ///
    /// Only has an effect for [`JsonStreamWriter`].
    pub escape_all_control_chars: bool,

    /// Whether to escape all non-ASCII characters
    ///
    /// Every character from `U+0080` upwards is then written as `\uXXXX` escape, characters
    /// outside the Basic Multilingual Plane as surrogate pair. The output is pure ASCII.
    ///
    /// Only has an effect for [`JsonStreamWriter`].
    pub escape_all_non_ascii: bool,
}

/// Error which occurred while writing JSON data
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum WriterError {
    /// A writer method was called at a point where it is not allowed
    ///
    /// This indicates incorrect usage by the caller, for example calling
    /// [`end_object`](JsonWriter::end_object) while writing an array. The writer state is
    /// unchanged by the failed call.
    #[error("{message} at \"{path}\"")]
    InvalidState {
        /// Message describing which call was not allowed
        message: String,
        /// JSON path at the moment the call was rejected, for example `$.a[1]`
        path: String,
    },
    /// The number is not a valid JSON number
    ///
    /// The data of this enum variant is a message explaining why the number is not valid.
    #[error("{0}")]
    InvalidNumber(String),
}

impl WriterError {
    /// Gets the JSON path at which an [`InvalidState`](WriterError::InvalidState) error occurred
    pub fn path(&self) -> Option<&str> {
        match self {
            WriterError::InvalidState { path, .. } => Some(path),
            WriterError::InvalidNumber(_) => None,
        }
    }
}

/// A trait for JSON writers
///
/// The methods of this writer can be divided into the following categories:
///
/// - Writing values
///     - [`begin_array`](Self::begin_array), [`end_array`](Self::end_array): Starting and ending a JSON array
///     - [`begin_object`](Self::begin_object), [`end_object`](Self::end_object): Starting and ending a JSON object
///     - [`name`](Self::name): Setting the name of the next JSON object member
///     - [`write_string`](Self::write_string), [`write_integer`](Self::write_integer),
///       [`write_float`](Self::write_float), [`write_boolean`](Self::write_boolean),
///       [`write_null`](Self::write_null): Writing scalar values
///  - Inspecting the state:
///     - [`path`](Self::path): The JSON path of the current position
///     - [`serialize_null`](Self::serialize_null): The null serialization policy
///  - Other:
///     - [`finish_document`](Self::finish_document): Ensuring that the JSON document is complete
///
/// A JSON document has exactly one top-level value. For JSON arrays and objects the opening bracket
/// is written with the corresponding `begin_` method and the closing bracket with the corresponding
/// `end_` method. Inside an object every value must be preceded by a call to [`name`](Self::name).
///
/// # Examples
/// ```
/// # use jsontree::writer::*;
/// let mut json_writer = JsonStreamWriter::new();
///
/// json_writer.begin_object()?;
/// json_writer.name("a")?;
///
/// json_writer.begin_array()?;
/// json_writer.write_integer(1)?;
/// json_writer.write_boolean(true)?;
/// assert_eq!("$.a[1]", json_writer.path());
/// json_writer.end_array()?;
///
/// json_writer.end_object()?;
///
/// let json = json_writer.finish_document()?;
/// assert_eq!(json, r#"{"a":[1,true]}"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Error handling
/// Calls which are not allowed at the current position fail with [`WriterError::InvalidState`],
/// which contains the JSON path at the moment of failure. A failed call does not modify the
/// writer, but such an error indicates a bug in the calling code and writing the document
/// should normally be aborted.
pub trait JsonWriter {
    /// Result returned by [`finish_document`](Self::finish_document)
    type WriterResult;

    /// Begins writing a JSON object
    ///
    /// To write a member of the object first call [`name`](Self::name) and afterwards one of the
    /// value writing methods. At the end call [`end_object`](Self::end_object).
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written.
    fn begin_object(&mut self) -> Result<(), WriterError>;

    /// Writes the closing bracket `}` of the current JSON object
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when not inside a JSON object, or when a name has been
    /// set but its value has not been written yet.
    fn end_object(&mut self) -> Result<(), WriterError>;

    /// Begins writing a JSON array
    ///
    /// Items are written with the regular value writing methods. At the end call
    /// [`end_array`](Self::end_array).
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written.
    fn begin_array(&mut self) -> Result<(), WriterError>;

    /// Writes the closing bracket `]` of the current JSON array
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when not inside a JSON array.
    fn end_array(&mut self) -> Result<(), WriterError>;

    /// Sets the name of the next JSON object member
    ///
    /// The name only becomes part of the output once its value is written. Duplicate member
    /// names are not detected.
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when not inside a JSON object, or when a name has already
    /// been set and its value has not been written yet.
    fn name(&mut self, name: &str) -> Result<(), WriterError>;

    /// Writes a JSON null value
    ///
    /// Inside arrays and objects the value is only written if [`serialize_null`](Self::serialize_null)
    /// is enabled; see [`WriterSettings::serialize_null`] for how an omitted value affects the
    /// JSON path.
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written.
    fn write_null(&mut self) -> Result<(), WriterError>;

    /// Writes a JSON boolean value
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written.
    fn write_boolean(&mut self, value: bool) -> Result<(), WriterError>;

    /// Writes a JSON string value
    ///
    /// Characters are automatically escaped in the JSON output if necessary.
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written.
    fn write_string(&mut self, value: &str) -> Result<(), WriterError>;

    /// Writes an integral JSON number value
    ///
    /// This method supports all standard primitive integral number types, such as `u32`.
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when a member name is expected, or when the top-level
    /// value has already been written. Implementations which store numbers with a limited
    /// range may return [`WriterError::InvalidNumber`] for numbers outside of it.
    fn write_integer<N: FiniteNumber>(&mut self, value: N) -> Result<(), WriterError>;

    /// Writes a floating point JSON number value
    ///
    /// This method supports the standard floating point number types `f32` and `f64`.
    /// The number is written in its shortest form without exponent; a number without
    /// fractional part has no decimal point, for example `1.0` is written as `1`.
    ///
    /// # Errors
    /// [`WriterError::InvalidNumber`] when the number is not finite; this check happens
    /// before any other validation. [`WriterError::InvalidState`] when a member name is
    /// expected, or when the top-level value has already been written.
    fn write_float<N: FloatingPointNumber>(&mut self, value: N) -> Result<(), WriterError>;

    /// Gets the JSON path of the current position, for example `$.a[2]`
    fn path(&self) -> String;

    /// Whether `null` values inside arrays and objects are written
    fn serialize_null(&self) -> bool;

    /// Verifies that the JSON document is complete and returns the result
    ///
    /// # Errors
    /// [`WriterError::InvalidState`] when no top-level value has been written yet, or when
    /// the top-level value has not been fully written yet.
    fn finish_document(self) -> Result<Self::WriterResult, WriterError>;
}

/// Sealed trait for finite number types such as `u32`
///
/// Values of this number type are finite and will therefore always be
/// valid JSON numbers.
pub trait FiniteNumber: private::Sealed {
    /// Converts this number to a JSON number string
    ///
    /// The JSON number string is passed to the given `consumer`.
    fn use_json_number<C: FnOnce(&str) -> Result<(), WriterError>>(
        &self,
        consumer: C,
    ) -> Result<(), WriterError>;

    /// Gets this number as `i64`
    ///
    /// Returns `None` if the number cannot be losslessly converted.
    fn as_i64(&self) -> Option<i64>;
}

/// Sealed trait for floating point number types such as `f64`
pub trait FloatingPointNumber: private::Sealed {
    /// Converts this number to a JSON number string
    ///
    /// The JSON number string is passed to the given `consumer`.
    /// Returns an error if this number is not a valid JSON number, for example
    /// because it is NaN or Infinity.
    fn use_json_number<C: FnOnce(&str) -> Result<(), WriterError>>(
        &self,
        consumer: C,
    ) -> Result<(), WriterError>;

    /// Gets this number as `f64`
    ///
    /// The `f64` number can be NaN or Infinity.
    fn as_f64(&self) -> Option<f64>;
}

mod private {
    // Sealed trait, see https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
    pub trait Sealed {}

    // Use `duplicate` crate to avoid repeating code for all supported types, see https://stackoverflow.com/a/61467564
    #[duplicate::duplicate_item(type_template; [u8]; [i8]; [u16]; [i16]; [u32]; [i32]; [u64]; [i64]; [u128]; [i128]; [usize]; [isize]; [f32]; [f64])]
    impl Sealed for type_template {}
}

#[duplicate_item(type_template; [u8]; [i8]; [u16]; [i16]; [u32]; [i32]; [u64]; [i64]; [u128]; [i128]; [usize]; [isize])]
impl FiniteNumber for type_template {
    #[inline(always)]
    fn use_json_number<C: FnOnce(&str) -> Result<(), WriterError>>(
        &self,
        consumer: C,
    ) -> Result<(), WriterError> {
        consumer(&self.to_string())
    }

    fn as_i64(&self) -> Option<i64> {
        #[allow(clippy::useless_conversion, clippy::unnecessary_fallible_conversions /* reason = "for i64 -> i64" */)]
        (*self).try_into().ok()
    }
}

#[duplicate_item(type_template; [f32]; [f64])]
impl FloatingPointNumber for type_template {
    #[inline(always)]
    fn use_json_number<C: FnOnce(&str) -> Result<(), WriterError>>(
        &self,
        consumer: C,
    ) -> Result<(), WriterError> {
        if self.is_finite() {
            // `Display` of Rust floats never uses an exponent and omits a `.0` fraction
            consumer(&self.to_string())
        } else {
            Err(WriterError::InvalidNumber(format!(
                "non-finite number: {self}"
            )))
        }
    }

    fn as_f64(&self) -> Option<f64> {
        #[allow(clippy::useless_conversion)] // for f64 -> f64
        Some((*self).into())
    }
}
