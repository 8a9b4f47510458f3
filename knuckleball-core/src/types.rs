use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::text;

/// The scalar types, the only ones allowed as container elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `true` or `false`.
    Boolean,
    /// A single byte, written `'x'`.
    Character,
    /// A 32-bit signed integer.
    Integer,
    /// A 32-bit floating-point number.
    Float,
    /// A byte string, written between double quotes.
    String,
}

impl PrimitiveType {
    /// All primitive types, in declaration order.
    pub const ALL: [PrimitiveType; 5] = [
        PrimitiveType::Boolean,
        PrimitiveType::Character,
        PrimitiveType::Integer,
        PrimitiveType::Float,
        PrimitiveType::String,
    ];

    /// The keyword naming this type in statements.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Character => "Character",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Float => "Float",
            PrimitiveType::String => "String",
        }
    }

    /// Looks up a primitive type by its exact keyword.
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        Self::from_bytes(name.as_bytes())
    }

    /// Same as [`PrimitiveType::from_name`], over raw statement bytes.
    pub fn from_bytes(name: &[u8]) -> Option<PrimitiveType> {
        Self::ALL
            .iter()
            .copied()
            .find(|ty| ty.name().as_bytes() == name)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The type of a variable, as named by the object of a construction statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A scalar type.
    Primitive(PrimitiveType),
    /// `Vector<T>`.
    Vector(PrimitiveType),
    /// `Set<T>`.
    Set(PrimitiveType),
    /// `Dictionary<K, V>`.
    Dictionary(PrimitiveType, PrimitiveType),
}

impl FromStr for TypeTag {
    type Err = Error;

    /// Parses a type name, tolerating whitespace anywhere (`Dictionary< String , Integer >`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact = String::from_utf8(text::remove_spaces(input.as_bytes()))
            .map_err(|_| Error::InvalidStatement)?;
        let primitive = |name: &str| PrimitiveType::from_name(name).ok_or(Error::InvalidStatement);

        if let Some(ty) = PrimitiveType::from_name(&compact) {
            return Ok(TypeTag::Primitive(ty));
        }

        let generic = |prefix: &str| {
            compact
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('<'))
                .and_then(|rest| rest.strip_suffix('>'))
        };

        if let Some(element) = generic("Vector") {
            return Ok(TypeTag::Vector(primitive(element)?));
        }
        if let Some(element) = generic("Set") {
            return Ok(TypeTag::Set(primitive(element)?));
        }
        if let Some(parameters) = generic("Dictionary") {
            let (key, value) = parameters.split_once(',').ok_or(Error::InvalidStatement)?;
            return Ok(TypeTag::Dictionary(primitive(key)?, primitive(value)?));
        }

        Err(Error::InvalidStatement)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Primitive(ty) => write!(f, "{}", ty),
            TypeTag::Vector(element) => write!(f, "Vector<{}>", element),
            TypeTag::Set(element) => write!(f, "Set<{}>", element),
            TypeTag::Dictionary(key, value) => write!(f, "Dictionary<{},{}>", key, value),
        }
    }
}
