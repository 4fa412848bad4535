use super::state::{StackValue, ValuePosition, WriterState};
use super::*;
use crate::element::{JsonArray, JsonElement, JsonObject};

/// A JSON writer implementation which builds a [`JsonElement`] tree
///
/// The writer validates calls exactly like [`JsonStreamWriter`], but instead of producing JSON
/// text [`finish_document`](JsonWriter::finish_document) returns the written value as element.
/// `null` values omitted because of the [null serialization policy](WriterSettings::serialize_null)
/// are not added to their array or object.
///
/// # Examples
/// ```
/// # use jsontree::writer::*;
/// let mut json_writer = JsonTreeWriter::new();
/// json_writer.begin_object()?;
/// json_writer.name("a")?;
/// json_writer.write_float(1.0)?;
/// json_writer.name("b")?;
/// json_writer.write_null()?;
/// json_writer.end_object()?;
///
/// let object = json_writer.finish_document()?;
/// assert_eq!(1.0, object.as_object()?.get_as_float("a")?);
/// assert_eq!(false, object.as_object()?.has("b"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct JsonTreeWriter {
    state: WriterState,
    /// Containers which are currently being written, together with their position
    /// in the enclosing container
    stack: Vec<(ValuePosition, JsonElement)>,
    final_value: Option<JsonElement>,
    writer_settings: WriterSettings,
}

impl JsonTreeWriter {
    /// Creates a JSON writer with [default settings](WriterSettings::default)
    pub fn new() -> Self {
        JsonTreeWriter::new_custom(WriterSettings::default())
    }

    /// Creates a JSON writer with custom settings
    ///
    /// Only [`WriterSettings::serialize_null`] has an effect for this writer.
    pub fn new_custom(writer_settings: WriterSettings) -> Self {
        JsonTreeWriter {
            state: WriterState::new(),
            stack: Vec::new(),
            final_value: None,
            writer_settings,
        }
    }

    /// Sets whether `null` values inside arrays and objects are added
    ///
    /// See [`WriterSettings::serialize_null`].
    pub fn set_serialize_null(&mut self, serialize_null: bool) {
        self.writer_settings.serialize_null = serialize_null;
    }

    fn add_value(&mut self, position: ValuePosition, value: JsonElement) {
        match (position, self.stack.last_mut()) {
            (ValuePosition::TopLevel, None) => self.final_value = Some(value),
            (ValuePosition::ArrayItem, Some((_, JsonElement::Array(array)))) => array.add(value),
            (ValuePosition::ObjectMember(name), Some((_, JsonElement::Object(object)))) => {
                object.add(name, value);
            }
            (position, _) => unreachable!("element stack does not match value position {position:?}"),
        }
    }

    fn write_value(&mut self, call: &str, value: JsonElement) -> Result<(), WriterError> {
        let position = self.state.start_value(call)?;
        self.add_value(position, value);
        Ok(())
    }

    fn begin_container(&mut self, call: &str, kind: StackValue) -> Result<(), WriterError> {
        let position = self.state.begin_container(call, kind)?;
        let container = match kind {
            StackValue::Array => JsonElement::Array(JsonArray::new()),
            StackValue::Object => JsonElement::Object(JsonObject::new()),
        };
        self.stack.push((position, container));
        Ok(())
    }

    fn end_container(&mut self, kind: StackValue) -> Result<(), WriterError> {
        self.state.end_container(kind)?;
        match self.stack.pop() {
            Some((position, container)) => self.add_value(position, container),
            None => unreachable!("element stack is empty although container was open"),
        }
        Ok(())
    }
}

impl Default for JsonTreeWriter {
    fn default() -> Self {
        JsonTreeWriter::new()
    }
}

impl JsonWriter for JsonTreeWriter {
    type WriterResult = JsonElement;

    fn begin_object(&mut self) -> Result<(), WriterError> {
        self.begin_container("begin_object", StackValue::Object)
    }

    fn end_object(&mut self) -> Result<(), WriterError> {
        self.end_container(StackValue::Object)
    }

    fn begin_array(&mut self) -> Result<(), WriterError> {
        self.begin_container("begin_array", StackValue::Array)
    }

    fn end_array(&mut self) -> Result<(), WriterError> {
        self.end_container(StackValue::Array)
    }

    fn name(&mut self, name: &str) -> Result<(), WriterError> {
        self.state.name(name)
    }

    fn write_null(&mut self) -> Result<(), WriterError> {
        if let Some(position) = self.state.start_null(self.writer_settings.serialize_null)? {
            self.add_value(position, JsonElement::Null);
        }
        Ok(())
    }

    fn write_boolean(&mut self, value: bool) -> Result<(), WriterError> {
        self.write_value("write_boolean", value.into())
    }

    fn write_string(&mut self, value: &str) -> Result<(), WriterError> {
        self.write_value("write_string", value.into())
    }

    fn write_integer<N: FiniteNumber>(&mut self, value: N) -> Result<(), WriterError> {
        match value.as_i64() {
            Some(integer) => self.write_value("write_integer", integer.into()),
            None => value.use_json_number(|number_str| {
                Err(WriterError::InvalidNumber(format!(
                    "number is out of range for 64-bit integer: {number_str}"
                )))
            }),
        }
    }

    fn write_float<N: FloatingPointNumber>(&mut self, value: N) -> Result<(), WriterError> {
        // Fails for NaN and Infinity
        value.use_json_number(|_| Ok(()))?;
        let float = value.as_f64().unwrap_or(f64::NAN);
        self.write_value("write_float", float.into())
    }

    fn path(&self) -> String {
        self.state.path()
    }

    fn serialize_null(&self) -> bool {
        self.writer_settings.serialize_null
    }

    fn finish_document(self) -> Result<JsonElement, WriterError> {
        self.state.check_finished()?;
        self.final_value.ok_or_else(|| {
            self.state
                .invalid_state("Cannot finish document when no value has been written")
        })
    }
}
