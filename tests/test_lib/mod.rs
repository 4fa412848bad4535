//! Common library module for integration tests
// See https://doc.rust-lang.org/book/ch11-03-test-organization.html#submodules-in-integration-tests
#![allow(dead_code)]

use std::path::PathBuf;

use jsontree::writer::{JsonWriter, WriterError};

pub fn get_test_data_file_path() -> PathBuf {
    // Get path of test file, see https://stackoverflow.com/a/30004252
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/test_data.json");
    path
}

/// Initializes logging for the test, `RUST_LOG=jsontree=trace` shows the writer events
pub fn init_logging() {
    // Ignore the error when another test has already initialized the logger
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(PartialEq, Debug, Clone)]
pub enum JsonEvent {
    ArrayStart,
    ArrayEnd,
    ObjectStart,
    ObjectEnd,
    MemberName(String),

    StringValue(String),
    IntegerValue(i64),
    FloatValue(f64),
    BoolValue(bool),
    NullValue,
}

/// Performs the writer call corresponding to each event
pub fn write_events<W: JsonWriter>(
    events: &[JsonEvent],
    json_writer: &mut W,
) -> Result<(), WriterError> {
    for event in events {
        match event {
            JsonEvent::ArrayStart => json_writer.begin_array()?,
            JsonEvent::ArrayEnd => json_writer.end_array()?,
            JsonEvent::ObjectStart => json_writer.begin_object()?,
            JsonEvent::ObjectEnd => json_writer.end_object()?,
            JsonEvent::MemberName(name) => json_writer.name(name)?,
            JsonEvent::StringValue(value) => json_writer.write_string(value)?,
            JsonEvent::IntegerValue(value) => json_writer.write_integer(*value)?,
            JsonEvent::FloatValue(value) => json_writer.write_float(*value)?,
            JsonEvent::BoolValue(value) => json_writer.write_boolean(*value)?,
            JsonEvent::NullValue => json_writer.write_null()?,
        }
    }
    Ok(())
}

/// Gets the events for the JSON document at the path returned by [`get_test_data_file_path`]
///
/// The document contains `null` values, it is only written as is when nulls are serialized.
pub fn get_expected_events() -> Vec<JsonEvent> {
    vec![
        JsonEvent::ArrayStart,
        // Arrays
        JsonEvent::ArrayStart,
        JsonEvent::ArrayEnd,
        //   Array with single item
        JsonEvent::ArrayStart,
        JsonEvent::IntegerValue(1),
        JsonEvent::ArrayEnd,
        //   Array with multiple items
        JsonEvent::ArrayStart,
        JsonEvent::IntegerValue(1),
        JsonEvent::StringValue("a".to_owned()),
        JsonEvent::BoolValue(true),
        JsonEvent::NullValue,
        JsonEvent::ObjectStart,
        JsonEvent::MemberName("nested".to_owned()),
        JsonEvent::ArrayStart,
        JsonEvent::ObjectStart,
        JsonEvent::MemberName("nested2".to_owned()),
        JsonEvent::ArrayStart,
        JsonEvent::IntegerValue(2),
        JsonEvent::ArrayEnd,
        JsonEvent::ObjectEnd,
        JsonEvent::ArrayEnd,
        JsonEvent::ObjectEnd,
        JsonEvent::ArrayEnd,
        // Objects
        JsonEvent::ObjectStart,
        JsonEvent::ObjectEnd,
        //   Object with single member
        JsonEvent::ObjectStart,
        JsonEvent::MemberName("name".to_owned()),
        JsonEvent::IntegerValue(1),
        JsonEvent::ObjectEnd,
        //   Object with multiple members
        JsonEvent::ObjectStart,
        JsonEvent::MemberName("name1".to_owned()),
        JsonEvent::BoolValue(false),
        JsonEvent::MemberName("name2".to_owned()),
        JsonEvent::StringValue("value".to_owned()),
        JsonEvent::MemberName("absent".to_owned()),
        JsonEvent::NullValue,
        JsonEvent::MemberName("".to_owned()),
        JsonEvent::IntegerValue(3),
        JsonEvent::ObjectEnd,
        // Strings
        JsonEvent::StringValue("string value".to_owned()),
        JsonEvent::StringValue("\0 test \n\t \\ \"".to_owned()),
        JsonEvent::StringValue("unicode \u{00A7} \u{0C80} \u{1805} \u{1D106}".to_owned()),
        // Numbers
        JsonEvent::IntegerValue(0),
        JsonEvent::IntegerValue(-1234),
        JsonEvent::FloatValue(567.89),
        JsonEvent::FloatValue(-0.5),
        JsonEvent::FloatValue(2.0),
        // Booleans
        JsonEvent::BoolValue(true),
        JsonEvent::BoolValue(false),
        JsonEvent::NullValue,
        JsonEvent::ArrayEnd,
    ]
}
