use std::fmt::{Debug, Display, Formatter};

use super::state::{StackValue, ValuePosition, WriterState};
use super::*;

/// A JSON writer implementation which writes JSON text to an in-memory buffer
///
/// The text written so far can be inspected at any time, either as raw prefix with
/// [`output`](Self::output), or with the [`Display`] implementation which additionally closes
/// all arrays and objects which are still open:
/// ```
/// # use jsontree::writer::*;
/// let mut json_writer = JsonStreamWriter::new();
/// json_writer.begin_array()?;
/// json_writer.write_integer(1)?;
///
/// assert_eq!("[1", json_writer.output());
/// assert_eq!("[1]", json_writer.to_string());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// No insignificant whitespace is written.
pub struct JsonStreamWriter {
    // When adding more fields to this struct, adjust the Debug implementation below, if necessary
    buf: String,
    /// Whether the current array or object is empty
    is_empty: bool,
    state: WriterState,

    writer_settings: WriterSettings,
}

// Implementation with public constructor and inspection methods
impl JsonStreamWriter {
    /// Creates a JSON writer with [default settings](WriterSettings::default)
    pub fn new() -> Self {
        JsonStreamWriter::new_custom(WriterSettings::default())
    }

    /// Creates a JSON writer with custom settings
    ///
    /// The settings can be used to customize how the JSON output will look like.
    pub fn new_custom(writer_settings: WriterSettings) -> Self {
        Self {
            buf: String::new(),
            is_empty: true,
            state: WriterState::new(),
            writer_settings,
        }
    }

    /// Sets whether `null` values inside arrays and objects are written
    ///
    /// See [`WriterSettings::serialize_null`].
    pub fn set_serialize_null(&mut self, serialize_null: bool) {
        self.writer_settings.serialize_null = serialize_null;
    }

    /// Gets the JSON text written so far
    ///
    /// While arrays or objects are still open this is only a prefix of a JSON document.
    pub fn output(&self) -> &str {
        &self.buf
    }
}

impl Default for JsonStreamWriter {
    fn default() -> Self {
        JsonStreamWriter::new()
    }
}

// Implementation with structure related methods
impl JsonStreamWriter {
    /// Writes the separator and member name (if any) for a value which has been started
    fn before_value(&mut self, position: ValuePosition) {
        match position {
            ValuePosition::TopLevel => {}
            ValuePosition::ArrayItem => self.before_container_element(),
            ValuePosition::ObjectMember(name) => {
                self.before_container_element();
                self.write_string_value(&name);
                self.buf.push(':');
            }
        }
    }

    fn before_container_element(&mut self) {
        if !self.is_empty {
            self.buf.push(',');
        }
        self.is_empty = false;
    }

    fn begin_container(&mut self, call: &str, kind: StackValue) -> Result<(), WriterError> {
        let position = self.state.begin_container(call, kind)?;
        self.before_value(position);
        self.buf.push(match kind {
            StackValue::Array => '[',
            StackValue::Object => '{',
        });
        self.is_empty = true;
        Ok(())
    }

    fn end_container(&mut self, kind: StackValue) -> Result<(), WriterError> {
        self.state.end_container(kind)?;
        self.buf.push(match kind {
            StackValue::Array => ']',
            StackValue::Object => '}',
        });
        // Enclosing container is not empty since the closed container is its child
        self.is_empty = false;
        Ok(())
    }

    fn write_raw_value(&mut self, call: &str, value: &str) -> Result<(), WriterError> {
        let position = self.state.start_value(call)?;
        self.before_value(position);
        self.buf.push_str(value);
        Ok(())
    }
}

// Implementation with string writing methods
impl JsonStreamWriter {
    fn should_escape(&self, c: char) -> bool {
        matches!(c, '"' | '\\')
        // Control characters which must be escaped per JSON specification
        || matches!(c, '\u{0}'..='\u{1F}')
            || (self.writer_settings.escape_all_non_ascii && !c.is_ascii())
            || (self.writer_settings.escape_all_control_chars && c.is_control())
    }

    fn write_escaped_char(&mut self, c: char) {
        fn push_unicode_escape(buf: &mut String, value: u32) {
            // For convenience `value` is u32, but it is actually u16
            debug_assert!(value <= u16::MAX as u32);

            fn to_hex(i: u32) -> char {
                match i {
                    0..=9 => (b'0' + i as u8) as char,
                    10..=15 => (b'A' + (i - 10) as u8) as char,
                    _ => unreachable!("Unexpected value {i}"),
                }
            }

            buf.push_str("\\u");
            for shift in [12, 8, 4, 0] {
                buf.push(to_hex(value >> shift & 15));
            }
        }

        let escape = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{0008}' => "\\b",
            '\u{000C}' => "\\f",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\0'..='\u{FFFF}' => {
                push_unicode_escape(&mut self.buf, c as u32);
                return;
            }
            _ => {
                // Encode as surrogate pair
                let temp = (c as u32) - 0x10000;
                let high = (temp >> 10) + 0xD800;
                let low = (temp & ((1 << 10) - 1)) + 0xDC00;

                push_unicode_escape(&mut self.buf, high);
                push_unicode_escape(&mut self.buf, low);
                return;
            }
        };
        self.buf.push_str(escape);
    }

    fn write_string_value(&mut self, value: &str) {
        self.buf.push('"');
        let mut next_to_write_index = 0;

        for (index, char) in value.char_indices() {
            if self.should_escape(char) {
                if index > next_to_write_index {
                    self.buf.push_str(&value[next_to_write_index..index]);
                }
                self.write_escaped_char(char);
                next_to_write_index = index + char.len_utf8();
            }
        }
        // Write remaining chars
        if next_to_write_index < value.len() {
            self.buf.push_str(&value[next_to_write_index..]);
        }
        self.buf.push('"');
    }
}

impl JsonWriter for JsonStreamWriter {
    type WriterResult = String;

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
        // Name is only written together with the value, see `before_value`
        self.state.name(name)
    }

    fn write_null(&mut self) -> Result<(), WriterError> {
        if let Some(position) = self.state.start_null(self.writer_settings.serialize_null)? {
            self.before_value(position);
            self.buf.push_str("null");
        }
        Ok(())
    }

    fn write_boolean(&mut self, value: bool) -> Result<(), WriterError> {
        self.write_raw_value("write_boolean", if value { "true" } else { "false" })
    }

    fn write_string(&mut self, value: &str) -> Result<(), WriterError> {
        let position = self.state.start_value("write_string")?;
        self.before_value(position);
        self.write_string_value(value);
        Ok(())
    }

    fn write_integer<N: FiniteNumber>(&mut self, value: N) -> Result<(), WriterError> {
        value.use_json_number(|number_str| self.write_raw_value("write_integer", number_str))
    }

    fn write_float<N: FloatingPointNumber>(&mut self, value: N) -> Result<(), WriterError> {
        value.use_json_number(|number_str| self.write_raw_value("write_float", number_str))
    }

    fn path(&self) -> String {
        self.state.path()
    }

    fn serialize_null(&self) -> bool {
        self.writer_settings.serialize_null
    }

    fn finish_document(self) -> Result<String, WriterError> {
        self.state.check_finished()?;
        Ok(self.buf)
    }
}

impl Display for JsonStreamWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)?;
        for value in self.state.stack().iter().rev() {
            f.write_str(match value {
                StackValue::Array => "]",
                StackValue::Object => "}",
            })?;
        }
        Ok(())
    }
}

impl Debug for JsonStreamWriter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fn limit_str_middle(s: &str) -> String {
            let chars_count = s.chars().count();

            let prefix_len = 25;
            let suffix_len = prefix_len;

            let max_len = 55;
            // Assert that `max_len` is large enough for splitting to be possible and worth it
            debug_assert!(max_len > prefix_len + suffix_len);

            if chars_count <= max_len {
                return s.to_owned();
            }

            // `suffix_len - 1` because `nth_back(0)` already returns inclusive index of first char
            match (
                s.char_indices().nth(prefix_len),
                s.char_indices().nth_back(suffix_len - 1),
            ) {
                (Some((prefix_end, _)), Some((suffix_start, _))) => {
                    format!("{} ... {}", &s[..prefix_end], &s[suffix_start..])
                }
                _ => s.to_owned(),
            }
        }

        f.debug_struct("JsonStreamWriter")
            .field("buf_str", &limit_str_middle(&self.buf))
            .field("is_empty", &self.is_empty)
            .field("stack", &self.state.stack())
            .field("path", &self.state.path())
            .field("writer_settings", &self.writer_settings)
            .finish()
    }
}
