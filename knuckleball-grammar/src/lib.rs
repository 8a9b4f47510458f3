//!
//! The Knuckleball Grammar
//! =======================
//!
//! This crate decides what the pieces of a Knuckleball statement are.
//!
//! A statement has the shape `object message;`, where the message is either unary
//! (`get;`, `isEmpty?;`) or made of keyword parts (`create: i withValue: 42;`).
//! Every function here is a pure predicate over the raw bytes of a statement.
//!

mod messages;
mod names;
mod types;
mod values;

pub use crate::messages::{
    is_keyword_message, is_keyword_message_argument, is_keyword_message_part,
    is_keyword_message_token, is_statement, is_unary_message, split_keyword_part, split_statement,
};
pub use crate::names::{is_identifier, is_namespace, is_object, is_reserved_word, is_variable};
pub use crate::types::{
    is_boolean_type, is_character_type, is_connection, is_context, is_dictionary_type,
    is_float_type, is_integer_type, is_primitive_type, is_set_type, is_string_type, is_type,
    is_vector_type,
};
pub use crate::values::{
    is_boolean_value, is_character_value, is_float_value, is_integer_value, is_primitive_value,
    is_spaces, is_string_value,
};
