#![warn(missing_docs)]
#![forbid(unsafe_code)]
// Allow needless `return` because that makes it sometimes more obvious that
// an expression is the result of the function
#![allow(clippy::needless_return)]
// Allow `assert_eq!(true, ...)` because in some cases it is used to check a bool
// value and not a 'flag' / 'state', and `assert_eq!` makes that more explicit
#![allow(clippy::bool_assert_comparison)]
// Enable 'unused' warnings for doc tests (are disabled by default)
#![doc(test(no_crate_inject))]
#![doc(test(attr(warn(unused))))]
// Fail on warnings in doc tests
#![doc(test(attr(deny(warnings))))]
// When `docsrs` configuration flag is set enable banner for features in documentation
// See https://stackoverflow.com/q/61417452
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! jsontree is a JSON document model together with a push-style JSON writer.
//!
//! The [`element`] module contains an in-memory representation of JSON values. The [`writer`]
//! module contains the [`JsonWriter`](writer::JsonWriter) trait, whose implementations validate
//! every call against the structure written so far and keep track of the JSON path of the
//! current position, so that incorrect usage is reported together with the exact location.
//!
//! The API was inspired by the element and streaming APIs of the Java library
//! [Gson](https://github.com/google/gson).
//!
//! # Terminology
//!
//! This crate uses the same terminology as the JSON specification:
//!
//! - *object*: `{ ... }`
//!   - *member*: Entry in an object. For example the JSON object `{"a": 1}` has the member
//!     `"a": 1` where `"a"` is the member *name* and `1` is the member *value*.
//! - *array*: `[ ... ]`
//! - *primitive*: string, number or boolean value
//! - `null`
//!
//! Numbers are either *integers* or *floats*, and this distinction is kept by the element
//! model even when a float has no fractional part.
//!
//! # Usage examples
//!
//! ## Writing
//! ```
//! # use jsontree::writer::*;
//! let mut json_writer = JsonStreamWriter::new();
//!
//! json_writer.begin_object()?;
//! json_writer.name("a")?;
//!
//! json_writer.begin_array()?;
//! json_writer.write_integer(1)?;
//! json_writer.write_boolean(true)?;
//! json_writer.end_array()?;
//!
//! json_writer.name("b")?;
//! // Omitted, `null` values inside objects and arrays are not written by default
//! json_writer.write_null()?;
//! assert_eq!("$.b", json_writer.path());
//!
//! json_writer.end_object()?;
//!
//! // Ensures that the JSON document is complete
//! let json = json_writer.finish_document()?;
//! assert_eq!(r#"{"a":[1,true]}"#, json);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Building elements
//! ```
//! # use jsontree::element::*;
//! # use jsontree::writer::*;
//! let mut inner = JsonArray::new();
//! inner.add_integer(1);
//! inner.add_float(2.0);
//!
//! let mut object = JsonObject::new();
//! object.add_string("name", "value");
//! object.add("numbers", inner);
//!
//! assert_eq!(2.0, object.get_as_array("numbers")?.get(1)?.as_float()?);
//!
//! // Write the element with a JSON writer
//! let mut json_writer = JsonStreamWriter::new();
//! JsonElement::from(object).write_to(&mut json_writer)?;
//! assert_eq!(r#"{"name":"value","numbers":[1,2]}"#, json_writer.finish_document()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Serde integration
//! Optional integration with [Serde](https://docs.rs/serde/latest/serde/) exists to
//! allow embedding JSON elements in a `Serialize` value. See the `serde` module of this
//! crate for more information.

pub mod element;
pub mod property;
pub mod writer;

#[cfg(feature = "serde")]
pub mod serde;
