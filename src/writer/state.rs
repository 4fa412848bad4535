use log::{debug, trace};

use super::json_path::JsonPath;
use super::WriterError;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub(crate) enum StackValue {
    Array,
    Object,
}

/// Where a value which has just been started is located in its enclosing structure
#[derive(PartialEq, Eq, Clone, Debug)]
pub(crate) enum ValuePosition {
    TopLevel,
    ArrayItem,
    /// Member of an object; contains the name which was set for it
    ObjectMember(String),
}

/// Structure validation shared by all writer implementations
///
/// Every method either fails without modifying the state, or applies the complete effect
/// of the call. Writers therefore first ask the state and only afterwards produce output.
#[derive(Debug)]
pub(crate) struct WriterState {
    stack: Vec<StackValue>,
    path: JsonPath,
    /// Name set for the next member of the innermost object
    pending_name: Option<String>,
    /// Whether a top-level value has been started, regardless of whether it is finished
    has_top_level_value: bool,
}

impl WriterState {
    pub(crate) fn new() -> Self {
        WriterState {
            stack: Vec::with_capacity(16),
            path: JsonPath::new(),
            pending_name: None,
            has_top_level_value: false,
        }
    }

    pub(crate) fn stack(&self) -> &[StackValue] {
        &self.stack
    }

    pub(crate) fn path(&self) -> String {
        self.path.render()
    }

    pub(crate) fn invalid_state(&self, message: impl Into<String>) -> WriterError {
        let message = message.into();
        let path = self.path();
        debug!("rejected writer call: {message} at \"{path}\"");
        WriterError::InvalidState { message, path }
    }

    fn name_expected(&self, call: &str) -> WriterError {
        self.invalid_state(format!(
            "Cannot call {call}() before name() during object serialization"
        ))
    }

    /// Starts a value, `call` is the name of the writer method used in error messages
    pub(crate) fn start_value(&mut self, call: &str) -> Result<ValuePosition, WriterError> {
        match self.stack.last().copied() {
            None => {
                if self.has_top_level_value {
                    return Err(self.invalid_state("Attempting to write two different types"));
                }
                self.has_top_level_value = true;
                Ok(ValuePosition::TopLevel)
            }
            Some(StackValue::Array) => {
                self.path.advance_array_index();
                Ok(ValuePosition::ArrayItem)
            }
            Some(StackValue::Object) => match self.pending_name.take() {
                Some(name) => Ok(ValuePosition::ObjectMember(name)),
                None => Err(self.name_expected(call)),
            },
        }
    }

    /// Starts a `null` value
    ///
    /// Returns `None` if the value is omitted because of the null serialization policy,
    /// in which case nothing must be written for it.
    pub(crate) fn start_null(
        &mut self,
        serialize_null: bool,
    ) -> Result<Option<ValuePosition>, WriterError> {
        if serialize_null {
            return self.start_value("write_null").map(Some);
        }

        match self.stack.last().copied() {
            // A top-level null is always written
            None => self.start_value("write_null").map(Some),
            Some(StackValue::Array) => {
                trace!("omitting null array item after \"{}\"", self.path);
                Ok(None)
            }
            Some(StackValue::Object) => match self.pending_name.take() {
                Some(name) => {
                    trace!("omitting null value of member \"{name}\" at \"{}\"", self.path);
                    Ok(None)
                }
                None => Err(self.name_expected("write_null")),
            },
        }
    }

    pub(crate) fn begin_container(
        &mut self,
        call: &str,
        kind: StackValue,
    ) -> Result<ValuePosition, WriterError> {
        let position = self.start_value(call)?;
        self.stack.push(kind);
        match kind {
            StackValue::Array => self.path.push_array_frame(),
            StackValue::Object => self.path.push_object_frame(),
        }
        Ok(position)
    }

    pub(crate) fn end_container(&mut self, kind: StackValue) -> Result<(), WriterError> {
        if self.stack.last() != Some(&kind) {
            return Err(self.invalid_state(match kind {
                StackValue::Array => "Cannot call end_array() if not serializing array",
                StackValue::Object => "Cannot call end_object() if not serializing object",
            }));
        }
        if self.pending_name.is_some() {
            return Err(self.invalid_state(
                "Cannot call end_object() before a value has been written for name()",
            ));
        }

        self.stack.pop();
        self.path.pop_frame();
        Ok(())
    }

    pub(crate) fn name(&mut self, name: &str) -> Result<(), WriterError> {
        if self.stack.last() != Some(&StackValue::Object) || self.pending_name.is_some() {
            return Err(self.invalid_state("Cannot call name() at this point.  Either name() has already been called or object serialization has not been started"));
        }

        self.path.set_current_name(name);
        self.pending_name = Some(name.to_owned());
        Ok(())
    }

    pub(crate) fn check_finished(&self) -> Result<(), WriterError> {
        if !self.stack.is_empty() {
            Err(self.invalid_state("Cannot finish document when top-level value is not finished"))
        } else if !self.has_top_level_value {
            Err(self.invalid_state("Cannot finish document when no value has been written"))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn assert_invalid_state(expected_message: &str, expected_path: &str, error: WriterError) {
        assert_eq!(
            WriterError::InvalidState {
                message: expected_message.to_owned(),
                path: expected_path.to_owned(),
            },
            error
        );
    }

    #[test]
    fn positions() -> TestResult {
        let mut state = WriterState::new();
        assert_eq!(
            ValuePosition::TopLevel,
            state.begin_container("begin_object", StackValue::Object)?
        );
        state.name("a")?;
        assert_eq!(
            ValuePosition::ObjectMember("a".to_owned()),
            state.begin_container("begin_array", StackValue::Array)?
        );
        assert_eq!(ValuePosition::ArrayItem, state.start_value("write_integer")?);
        assert_eq!(ValuePosition::ArrayItem, state.start_value("write_integer")?);
        assert_eq!("$.a[1]", state.path());
        assert_eq!(&[StackValue::Object, StackValue::Array], state.stack());

        state.end_container(StackValue::Array)?;
        assert_eq!("$.a", state.path());
        state.end_container(StackValue::Object)?;
        assert_eq!("$", state.path());
        state.check_finished()?;
        Ok(())
    }

    #[test]
    fn rejected_calls_keep_state() -> TestResult {
        let mut state = WriterState::new();
        state.begin_container("begin_object", StackValue::Object)?;

        assert_invalid_state(
            "Cannot call write_string() before name() during object serialization",
            "$",
            state.start_value("write_string").unwrap_err(),
        );
        assert_invalid_state(
            "Cannot call end_array() if not serializing array",
            "$",
            state.end_container(StackValue::Array).unwrap_err(),
        );

        state.name("a")?;
        assert_invalid_state(
            "Cannot call name() at this point.  Either name() has already been called or object serialization has not been started",
            "$.a",
            state.name("b").unwrap_err(),
        );
        assert_invalid_state(
            "Cannot call end_object() before a value has been written for name()",
            "$.a",
            state.end_container(StackValue::Object).unwrap_err(),
        );

        // Pending name is still usable
        assert_eq!(
            ValuePosition::ObjectMember("a".to_owned()),
            state.start_value("write_string")?
        );
        state.end_container(StackValue::Object)?;

        assert_invalid_state(
            "Attempting to write two different types",
            "$",
            state.start_value("write_string").unwrap_err(),
        );
        Ok(())
    }

    #[test]
    fn omitted_null() -> TestResult {
        let mut state = WriterState::new();
        state.begin_container("begin_array", StackValue::Array)?;
        assert_eq!(None, state.start_null(false)?);
        assert_eq!("$", state.path());
        assert_eq!(Some(ValuePosition::ArrayItem), state.start_null(true)?);
        assert_eq!("$[0]", state.path());

        state.begin_container("begin_object", StackValue::Object)?;
        assert_invalid_state(
            "Cannot call write_null() before name() during object serialization",
            "$[1]",
            state.start_null(false).unwrap_err(),
        );
        state.name("a")?;
        assert_eq!(None, state.start_null(false)?);
        assert_eq!("$[1].a", state.path());
        // Name has been consumed
        state.end_container(StackValue::Object)?;
        Ok(())
    }

    #[test]
    fn top_level_null_always_written() -> TestResult {
        let mut state = WriterState::new();
        assert_eq!(Some(ValuePosition::TopLevel), state.start_null(false)?);
        state.check_finished()?;
        Ok(())
    }

    #[test]
    fn finish() -> TestResult {
        let mut state = WriterState::new();
        assert_invalid_state(
            "Cannot finish document when no value has been written",
            "$",
            state.check_finished().unwrap_err(),
        );

        state.begin_container("begin_array", StackValue::Array)?;
        assert_invalid_state(
            "Cannot finish document when top-level value is not finished",
            "$",
            state.check_finished().unwrap_err(),
        );
        Ok(())
    }
}
