use std::collections::{BTreeMap, BTreeSet};
use std::panic::{self, AssertUnwindSafe};
use std::str;

use knuckleball_core::{text, Error, TypeTag};
use knuckleball_grammar as grammar;
use knuckleball_parser::Statement;

use crate::compare::Comparator;
use crate::expect_args;
use crate::logger::Logger;
use crate::primitives::{self, display, null};
use crate::session::Session;
use crate::value::Value;

/// The formatting and comparison settings shared by every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of digits rendered after the decimal point of floats (always > 0).
    pub float_precision: usize,
    /// Half-width of the band within which two numbers compare equal (always >= 0).
    pub float_comparison_tolerance: f32,
}

impl Settings {
    pub const DEFAULT_FLOAT_PRECISION: i32 = 3;
    pub const DEFAULT_FLOAT_COMPARISON_TOLERANCE: f32 = 0.000_000_1;

    /// Validates and builds settings.
    pub fn new(float_precision: i32, float_comparison_tolerance: f32) -> Result<Self, Error> {
        let mut settings = Self::default();
        settings.set_float_precision(float_precision)?;
        settings.set_float_comparison_tolerance(float_comparison_tolerance)?;
        Ok(settings)
    }

    pub fn set_float_precision(&mut self, float_precision: i32) -> Result<(), Error> {
        if float_precision <= 0 {
            return Err(Error::InvalidArgument);
        }
        self.float_precision = float_precision as usize;
        Ok(())
    }

    pub fn set_float_comparison_tolerance(&mut self, tolerance: f32) -> Result<(), Error> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(Error::InvalidArgument);
        }
        self.float_comparison_tolerance = tolerance;
        Ok(())
    }

    /// The comparator matching the current tolerance.
    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.float_comparison_tolerance)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            float_precision: Self::DEFAULT_FLOAT_PRECISION as usize,
            float_comparison_tolerance: Self::DEFAULT_FLOAT_COMPARISON_TOLERANCE,
        }
    }
}

/// The registry of every variable, along with the settings and the statement log.
pub struct Context {
    variables: BTreeMap<String, Value>,
    settings: Settings,
    logger: Logger,
}

impl Context {
    pub fn new(settings: Settings, logger: Logger) -> Self {
        Self {
            variables: BTreeMap::new(),
            settings,
            logger,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Looks up a registered variable.
    pub fn lookup_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Executes a single statement and returns its output.
    ///
    /// Both are raw bytes, as string and character literals are not bound to any encoding.
    /// This never fails: errors are rendered into their message, and panics into an unknown error.
    /// Every statement is logged along with its output.
    pub fn execute(
        &mut self,
        input: impl AsRef<[u8]>,
        session: Option<&mut dyn Session>,
    ) -> Vec<u8> {
        let input = input.as_ref();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.evaluate(input, session)));
        let output = match outcome {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => display(err),
            Err(_) => {
                let input = String::from_utf8_lossy(input);
                tracing::error!(%input, "statement execution panicked");
                display(Error::Unknown)
            }
        };
        self.logger.log(text::trim(input), &output);
        output
    }

    fn evaluate(
        &mut self,
        input: &[u8],
        session: Option<&mut dyn Session>,
    ) -> Result<Vec<u8>, Error> {
        let statement = knuckleball_parser::parse(input)?;
        let object = statement.object.as_bytes();

        if grammar::is_type(object) {
            self.execute_in_type(&statement)
        } else if grammar::is_context(object) {
            self.execute_in_context(&statement)
        } else if grammar::is_connection(object) {
            match session {
                Some(session) => session.receive(&statement.message, &statement.arguments),
                None => Err(Error::InvalidMessage),
            }
        } else {
            self.execute_in_variable(&statement)
        }
    }

    fn execute_in_type(&mut self, statement: &Statement) -> Result<Vec<u8>, Error> {
        let tag: TypeTag = statement.object.parse()?;
        let (name, value) = Value::construct(tag, &statement.message, &statement.arguments)?;

        if self.variables.contains_key(&name) {
            if statement.message_starts_with("createIfNotExists:") {
                return Ok(null());
            }
            return Err(Error::VariableNameAlreadyUsed);
        }

        tracing::debug!(name = name.as_str(), ty = %value.type_tag(), "variable created");
        self.variables.insert(name, value);
        Ok(null())
    }

    fn execute_in_variable(&mut self, statement: &Statement) -> Result<Vec<u8>, Error> {
        let settings = self.settings;
        let variable = self
            .variables
            .get_mut(&statement.object)
            .ok_or(Error::UnexistentVariable)?;
        variable.dispatch(&statement.message, &statement.arguments, &settings)
    }

    fn execute_in_context(&mut self, statement: &Statement) -> Result<Vec<u8>, Error> {
        let args = statement.arguments.as_slice();
        match statement.message.as_str() {
            "listVariables" => {
                expect_args!(args, []);
                Ok(list(self.variables.keys()))
            }
            "listVariablesOfNamespace:" => {
                expect_args!(args, [namespace]);
                let prefix = namespace_prefix(namespace)?;
                Ok(list(
                    self.variables
                        .keys()
                        .filter(|name| name.starts_with(&prefix)),
                ))
            }
            "listNamespaces" => {
                expect_args!(args, []);
                let namespaces: BTreeSet<&str> = self
                    .variables
                    .keys()
                    .filter_map(|name| name.find("::").map(|idx| &name[..idx]))
                    .collect();
                Ok(list(namespaces))
            }
            "deleteVariable:" => {
                expect_args!(args, [name]);
                if !grammar::is_variable(name) {
                    return Err(Error::InvalidArgument);
                }
                let name = str::from_utf8(name).map_err(|_| Error::InvalidArgument)?;
                self.variables
                    .remove(name)
                    .ok_or(Error::UnexistentVariable)?;
                tracing::debug!(name, "variable deleted");
                Ok(null())
            }
            "deleteVariablesOfNamespace:" => {
                expect_args!(args, [namespace]);
                let prefix = namespace_prefix(namespace)?;
                self.variables.retain(|name, _| !name.starts_with(&prefix));
                Ok(null())
            }
            "getFloatPrecision" => {
                expect_args!(args, []);
                Ok(display(self.settings.float_precision))
            }
            "setFloatPrecision:" => {
                expect_args!(args, [precision]);
                let precision = primitives::parse_integer(precision)?;
                self.settings.set_float_precision(precision)?;
                Ok(null())
            }
            "getFloatComparisonTolerance" => {
                expect_args!(args, []);
                let tolerance = Value::Float(self.settings.float_comparison_tolerance);
                Ok(tolerance.render(&self.settings))
            }
            "setFloatComparisonTolerance:" => {
                expect_args!(args, [tolerance]);
                let tolerance = primitives::parse_float(tolerance)?;
                self.settings.set_float_comparison_tolerance(tolerance)?;
                Ok(null())
            }
            _ => Err(Error::InvalidMessage),
        }
    }
}

fn namespace_prefix(namespace: &[u8]) -> Result<String, Error> {
    if !grammar::is_namespace(namespace) {
        return Err(Error::InvalidArgument);
    }
    let namespace = str::from_utf8(namespace).map_err(|_| Error::InvalidArgument)?;
    Ok(format!("{}::", namespace))
}

fn list<I>(names: I) -> Vec<u8>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut output = vec![b'['];
    for (idx, name) in names.into_iter().enumerate() {
        if idx > 0 {
            output.push(b',');
        }
        output.extend_from_slice(name.as_ref().as_bytes());
    }
    output.push(b']');
    output
}
