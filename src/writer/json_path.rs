//! Module for JSON path tracking
//!
//! A [`JsonPath`] is a stack of [`PathFrame`]s, one per currently open JSON array or object.
//! It is rendered in dot-notation starting with `$` for the document root, for example
//! `$.outer[4].inner`.
//!
//! JSON path was originally specified in [this article](https://goessner.net/articles/JsonPath/).
//! This module only supports the small subset needed for reporting the position of a JSON writer.

use std::fmt::{Display, Formatter};

/// A frame of a JSON path, representing one open JSON array or object
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum PathFrame {
    /// An open JSON object
    Object {
        /// Name of the current member, `None` if no name has been set yet
        name: Option<String>,
    },
    /// An open JSON array
    Array {
        /// Index (starting at 0) of the current item, `None` if no item has been started yet
        index: Option<usize>,
    },
}

/// A JSON path
///
/// The rendered string is computed from the frames every time, so it always reflects the
/// current position exactly.
///
/// # Examples
/// ```
/// # use jsontree::writer::json_path::JsonPath;
/// let mut path = JsonPath::new();
/// path.push_object_frame();
/// path.set_current_name("a");
/// path.push_array_frame();
/// assert_eq!("$.a", path.render());
///
/// path.advance_array_index();
/// path.advance_array_index();
/// assert_eq!("$.a[1]", path.render());
///
/// path.pop_frame();
/// assert_eq!("$.a", path.render());
/// ```
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct JsonPath {
    frames: Vec<PathFrame>,
}

impl JsonPath {
    /// Creates an empty path, rendered as `$`
    pub fn new() -> Self {
        JsonPath::default()
    }

    /// Pushes a frame for a JSON object which has no current member yet
    pub fn push_object_frame(&mut self) {
        self.frames.push(PathFrame::Object { name: None });
    }

    /// Pushes a frame for a JSON array which has no current item yet
    pub fn push_array_frame(&mut self) {
        self.frames.push(PathFrame::Array { index: None });
    }

    /// Removes the top frame
    ///
    /// # Panics
    /// Panics when the path has no frames. This indicates incorrect usage by the caller.
    pub fn pop_frame(&mut self) {
        if self.frames.pop().is_none() {
            panic!("Incorrect path usage: Cannot pop frame of empty path");
        }
    }

    /// Sets the name of the current member of the top object frame
    ///
    /// # Panics
    /// Panics when the top frame is not an object frame. This indicates incorrect usage
    /// by the caller.
    pub fn set_current_name(&mut self, name: impl Into<String>) {
        match self.frames.last_mut() {
            Some(PathFrame::Object { name: current }) => *current = Some(name.into()),
            _ => panic!("Incorrect path usage: Cannot set name when not inside object"),
        }
    }

    /// Advances the top array frame to its next item
    ///
    /// The first call for a frame moves it to index 0.
    ///
    /// # Panics
    /// Panics when the top frame is not an array frame. This indicates incorrect usage
    /// by the caller.
    pub fn advance_array_index(&mut self) {
        match self.frames.last_mut() {
            Some(PathFrame::Array { index }) => *index = Some(index.map_or(0, |i| i + 1)),
            _ => panic!("Incorrect path usage: Cannot advance index when not inside array"),
        }
    }

    /// Number of frames, equal to the current nesting depth
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The frames, starting with the outermost one
    pub fn frames(&self) -> &[PathFrame] {
        &self.frames
    }

    /// Renders the path in dot-notation
    ///
    /// Object frames with a name contribute `.name`, array frames with an index contribute
    /// `[index]`; frames without name or index contribute nothing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Display for JsonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("$")?;
        for frame in &self.frames {
            match frame {
                PathFrame::Object { name: Some(name) } => write!(f, ".{name}")?,
                PathFrame::Array { index: Some(index) } => write!(f, "[{index}]")?,
                PathFrame::Object { name: None } | PathFrame::Array { index: None } => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render() {
        let mut path = JsonPath::new();
        assert_eq!("$", path.render());

        path.push_array_frame();
        assert_eq!("$", path.render());
        path.advance_array_index();
        assert_eq!("$[0]", path.render());
        path.advance_array_index();
        path.advance_array_index();
        assert_eq!("$[2]", path.render());

        path.push_object_frame();
        assert_eq!("$[2]", path.render());
        path.set_current_name("a");
        assert_eq!("$[2].a", path.render());
        path.set_current_name("b");
        assert_eq!("$[2].b", path.render());

        path.push_array_frame();
        path.advance_array_index();
        assert_eq!("$[2].b[0]", path.render());
        assert_eq!(3, path.depth());

        path.pop_frame();
        path.pop_frame();
        assert_eq!("$[2]", path.render());
        path.pop_frame();
        assert_eq!("$", path.render());
        assert_eq!(0, path.depth());
    }

    #[test]
    fn frames() {
        let mut path = JsonPath::new();
        path.push_object_frame();
        path.set_current_name("a");
        path.push_array_frame();

        assert_eq!(
            &[
                PathFrame::Object {
                    name: Some("a".to_owned())
                },
                PathFrame::Array { index: None }
            ],
            path.frames()
        );
        assert_eq!(path.render(), path.to_string());
    }

    #[test]
    fn render_deep() {
        let mut path = JsonPath::new();
        let mut expected = "$".to_owned();
        for i in 0..100 {
            path.push_array_frame();
            for _ in 0..=i % 3 {
                path.advance_array_index();
            }
            expected.push_str(&format!("[{}]", i % 3));
            assert_eq!(expected, path.render());
        }
    }

    #[test]
    #[should_panic(expected = "Incorrect path usage: Cannot pop frame of empty path")]
    fn pop_empty() {
        JsonPath::new().pop_frame();
    }

    #[test]
    #[should_panic(expected = "Incorrect path usage: Cannot set name when not inside object")]
    fn set_name_in_array() {
        let mut path = JsonPath::new();
        path.push_array_frame();
        path.set_current_name("a");
    }

    #[test]
    #[should_panic(expected = "Incorrect path usage: Cannot advance index when not inside array")]
    fn advance_in_object() {
        let mut path = JsonPath::new();
        path.push_object_frame();
        path.advance_array_index();
    }
}
