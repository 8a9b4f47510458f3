use knuckleball_core::{text, Error, PrimitiveType, TypeTag};
use knuckleball_grammar as grammar;

use crate::context::Settings;
use crate::expect_args;
use crate::primitives;

/// Represents a Knuckleball value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A single byte.
    Character(u8),
    /// A 32-bit signed integer.
    Integer(i32),
    /// A 32-bit floating-point number.
    Float(f32),
    /// A byte string.
    String(Vec<u8>),
    /// An ordered sequence of primitive values.
    Vector(Vector),
    /// A duplicate-free collection of primitive values, in comparator order.
    Set(Set),
    /// A mapping from unique keys to values, in key comparator order.
    Dictionary(Dictionary),
}

/// The payload of a `Vector<T>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub element: PrimitiveType,
    pub items: Vec<Value>,
}

/// The payload of a `Set<T>`.
///
/// `items` is kept sorted by the comparator, without any two equal items.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub element: PrimitiveType,
    pub items: Vec<Value>,
}

/// The payload of a `Dictionary<K, V>`.
///
/// `entries` is kept sorted by key, without any two equal keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Dictionary {
    pub key: PrimitiveType,
    pub value: PrimitiveType,
    pub entries: Vec<(Value, Value)>,
}

impl Vector {
    pub fn new(element: PrimitiveType) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds an element from its literal.
    pub fn element(&self, literal: &[u8]) -> Result<Value, Error> {
        Value::from_literal(self.element, literal)
    }
}

impl Set {
    pub fn new(element: PrimitiveType) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// Builds an element from its literal.
    pub fn element(&self, literal: &[u8]) -> Result<Value, Error> {
        Value::from_literal(self.element, literal)
    }

    /// Renders as `{a,b,c}`.
    pub fn render(&self, settings: &Settings) -> Vec<u8> {
        enclose(b'{', render_items(&self.items, settings), b'}')
    }
}

impl Dictionary {
    pub fn new(key: PrimitiveType, value: PrimitiveType) -> Self {
        Self {
            key,
            value,
            entries: Vec::new(),
        }
    }

    /// Builds a key from its literal.
    pub fn key(&self, literal: &[u8]) -> Result<Value, Error> {
        Value::from_literal(self.key, literal)
    }

    /// Builds a value from its literal.
    pub fn value(&self, literal: &[u8]) -> Result<Value, Error> {
        Value::from_literal(self.value, literal)
    }

    /// Renders as `((k1,v1),(k2,v2))`.
    pub fn render(&self, settings: &Settings) -> Vec<u8> {
        let entries: Vec<Vec<u8>> = self
            .entries
            .iter()
            .map(|(key, value)| {
                let mut entry = key.render(settings);
                entry.push(b',');
                entry.extend(value.render(settings));
                enclose(b'(', entry, b')')
            })
            .collect();
        enclose(b'(', entries.join(&b','), b')')
    }
}

impl Value {
    /// Builds a transient value of the given type out of its literal (`42`, `'a'`, `"text"`).
    ///
    /// Integers also accept float literals, truncated toward zero.
    pub fn from_literal(ty: PrimitiveType, literal: &[u8]) -> Result<Value, Error> {
        match ty {
            PrimitiveType::Boolean => primitives::parse_boolean(literal).map(Value::Boolean),
            PrimitiveType::Character => primitives::parse_character(literal).map(Value::Character),
            PrimitiveType::Integer => primitives::parse_integer(literal).map(Value::Integer),
            PrimitiveType::Float => primitives::parse_float(literal).map(Value::Float),
            PrimitiveType::String => primitives::parse_string(literal).map(Value::String),
        }
    }

    /// Builds a new variable out of a construction message sent to a type.
    ///
    /// Returns the declared variable name along with its initial value.
    pub fn construct(
        tag: TypeTag,
        message: &str,
        args: &[Vec<u8>],
    ) -> Result<(String, Value), Error> {
        let with_value = match message {
            "create:" | "createIfNotExists:" => false,
            "create:withValue:" | "createIfNotExists:withValue:" => true,
            _ => return Err(Error::InvalidMessage),
        };

        match (tag, with_value) {
            (TypeTag::Primitive(ty), true) => {
                expect_args!(args, [name, literal]);
                let name = variable_name(name)?;
                Ok((name, Value::from_literal(ty, literal)?))
            }
            (TypeTag::Primitive(PrimitiveType::String), false) => {
                expect_args!(args, [name]);
                Ok((variable_name(name)?, Value::String(Vec::new())))
            }
            (TypeTag::Vector(element), false) => {
                expect_args!(args, [name]);
                Ok((variable_name(name)?, Value::Vector(Vector::new(element))))
            }
            (TypeTag::Set(element), false) => {
                expect_args!(args, [name]);
                Ok((variable_name(name)?, Value::Set(Set::new(element))))
            }
            (TypeTag::Dictionary(key, value), false) => {
                expect_args!(args, [name]);
                let dictionary = Dictionary::new(key, value);
                Ok((variable_name(name)?, Value::Dictionary(dictionary)))
            }
            _ => Err(Error::InvalidMessage),
        }
    }

    /// The type of this value.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Boolean(_) => TypeTag::Primitive(PrimitiveType::Boolean),
            Value::Character(_) => TypeTag::Primitive(PrimitiveType::Character),
            Value::Integer(_) => TypeTag::Primitive(PrimitiveType::Integer),
            Value::Float(_) => TypeTag::Primitive(PrimitiveType::Float),
            Value::String(_) => TypeTag::Primitive(PrimitiveType::String),
            Value::Vector(vector) => TypeTag::Vector(vector.element),
            Value::Set(set) => TypeTag::Set(set.element),
            Value::Dictionary(dictionary) => TypeTag::Dictionary(dictionary.key, dictionary.value),
        }
    }

    /// Produces the canonical textual form of this value, byte for byte.
    pub fn render(&self, settings: &Settings) -> Vec<u8> {
        match self {
            Value::Boolean(value) => primitives::display(value),
            Value::Character(value) => render_character(*value),
            Value::Integer(value) => primitives::display(value),
            Value::Float(value) => format!("{:.*}", settings.float_precision, value).into_bytes(),
            Value::String(value) => render_string(value),
            Value::Vector(vector) => render_sequence(&vector.items, settings),
            Value::Set(set) => set.render(settings),
            Value::Dictionary(dictionary) => dictionary.render(settings),
        }
    }

    /// Sends a message to this value, through the primitive table of its type.
    pub fn dispatch(
        &mut self,
        message: &str,
        args: &[Vec<u8>],
        settings: &Settings,
    ) -> Result<Vec<u8>, Error> {
        use crate::primitives::*;

        match self {
            Value::Boolean(value) => {
                invoke(boolean::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
            Value::Character(value) => {
                invoke(character::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
            Value::Integer(value) => {
                invoke(integer::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
            Value::Float(value) => invoke(float::INSTANCE_PRIMITIVES, value, message, args, settings),
            Value::String(value) => {
                invoke(string::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
            Value::Vector(value) => {
                invoke(vector::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
            Value::Set(value) => invoke(set::INSTANCE_PRIMITIVES, value, message, args, settings),
            Value::Dictionary(value) => {
                invoke(dictionary::INSTANCE_PRIMITIVES, value, message, args, settings)
            }
        }
    }
}

fn variable_name(name: &[u8]) -> Result<String, Error> {
    if !grammar::is_variable(name) {
        return Err(Error::InvalidArgument);
    }
    String::from_utf8(name.to_vec()).map_err(|_| Error::InvalidArgument)
}

fn enclose(open: u8, mut content: Vec<u8>, close: u8) -> Vec<u8> {
    content.insert(0, open);
    content.push(close);
    content
}

/// Renders a single byte as a character literal (`'x'`), the byte itself left untouched.
pub fn render_character(value: u8) -> Vec<u8> {
    vec![b'\'', value, b'\'']
}

/// Renders bytes as a string literal, escaping quotes and backslashes.
pub fn render_string(value: &[u8]) -> Vec<u8> {
    enclose(b'"', text::escape(value), b'"')
}

/// Renders values as a vector literal (`[a,b,c]`).
pub fn render_sequence(items: &[Value], settings: &Settings) -> Vec<u8> {
    enclose(b'[', render_items(items, settings), b']')
}

fn render_items(items: &[Value], settings: &Settings) -> Vec<u8> {
    let rendered: Vec<Vec<u8>> = items.iter().map(|item| item.render(settings)).collect();
    rendered.join(&b',')
}
