use knuckleball_core::text;
use knuckleball_core::PrimitiveType;

pub fn is_boolean_type(input: &[u8]) -> bool {
    input == PrimitiveType::Boolean.name().as_bytes()
}

pub fn is_character_type(input: &[u8]) -> bool {
    input == PrimitiveType::Character.name().as_bytes()
}

pub fn is_integer_type(input: &[u8]) -> bool {
    input == PrimitiveType::Integer.name().as_bytes()
}

pub fn is_float_type(input: &[u8]) -> bool {
    input == PrimitiveType::Float.name().as_bytes()
}

pub fn is_string_type(input: &[u8]) -> bool {
    input == PrimitiveType::String.name().as_bytes()
}

pub fn is_primitive_type(input: &[u8]) -> bool {
    PrimitiveType::from_bytes(input).is_some()
}

/// The generic type keywords, with their opening bracket.
pub(crate) static GENERIC_PREFIXES: &[&[u8]] = &[b"Vector<", b"Set<", b"Dictionary<"];

/// Returns what sits between `<prefix><` and the closing `>`, if the input has that shape.
fn type_parameters<'a>(input: &'a [u8], prefix: &str) -> Option<&'a [u8]> {
    input
        .strip_prefix(prefix.as_bytes())?
        .strip_prefix(b"<")?
        .strip_suffix(b">")
}

/// `Vector<T>`, whitespace around `T` tolerated.
pub fn is_vector_type(input: &[u8]) -> bool {
    type_parameters(input, "Vector").map_or(false, |element| is_primitive_type(text::trim(element)))
}

/// `Set<T>`, whitespace around `T` tolerated.
pub fn is_set_type(input: &[u8]) -> bool {
    type_parameters(input, "Set").map_or(false, |element| is_primitive_type(text::trim(element)))
}

/// `Dictionary<K, V>`, split at the first comma, whitespace around both types tolerated.
pub fn is_dictionary_type(input: &[u8]) -> bool {
    type_parameters(input, "Dictionary").map_or(false, |parameters| {
        match parameters.iter().position(|byte| *byte == b',') {
            Some(idx) => {
                is_primitive_type(text::trim(&parameters[..idx]))
                    && is_primitive_type(text::trim(&parameters[idx + 1..]))
            }
            None => false,
        }
    })
}

pub fn is_type(input: &[u8]) -> bool {
    is_primitive_type(input)
        || is_vector_type(input)
        || is_set_type(input)
        || is_dictionary_type(input)
}

pub fn is_connection(input: &[u8]) -> bool {
    input == b"Connection"
}

pub fn is_context(input: &[u8]) -> bool {
    input == b"Context"
}
