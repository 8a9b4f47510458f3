use knuckleball_core::text;

/// Is the input empty or made only of whitespace ?
pub fn is_spaces(input: &[u8]) -> bool {
    text::trim_start(input).is_empty()
}

pub fn is_boolean_value(input: &[u8]) -> bool {
    input == b"true" || input == b"false"
}

/// A character literal is exactly three bytes: `'x'`, where `x` may be any byte.
pub fn is_character_value(input: &[u8]) -> bool {
    matches!(input, [b'\'', _, b'\''])
}

/// An optional sign followed by at least one digit.
pub fn is_integer_value(input: &[u8]) -> bool {
    let digits = match input {
        [] => return false,
        [b'+', rest @ ..] | [b'-', rest @ ..] => rest,
        all => all,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

/// An optional sign, digits with at most one decimal point (at least one digit overall),
/// then an optional `e` followed by an integer value.
///
/// Plain integers (`42`) and bare fractions (`.5`) are valid floats.
pub fn is_float_value(input: &[u8]) -> bool {
    let start = match input.first() {
        None => return false,
        Some(b'+') | Some(b'-') => 1,
        Some(_) => 0,
    };

    let mut points = 0;
    let mut digits = 0;
    for (idx, byte) in input.iter().copied().enumerate().skip(start) {
        match byte {
            b'.' => points += 1,
            b'0'..=b'9' => digits += 1,
            b'e' => return points <= 1 && digits > 0 && is_integer_value(&input[idx + 1..]),
            _ => return false,
        }
    }

    points <= 1 && digits > 0
}

/// Counts the backslashes immediately preceding `bytes[idx]`.
fn preceding_backslashes(bytes: &[u8], idx: usize) -> usize {
    bytes[..idx]
        .iter()
        .rev()
        .take_while(|byte| **byte == b'\\')
        .count()
}

/// A double-quoted literal in which every inner quote is escaped
/// (preceded by an odd run of backslashes) and the closing quote is not.
pub fn is_string_value(bytes: &[u8]) -> bool {
    if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
        return false;
    }

    // the opening quote stops every backward run of backslashes
    let last = bytes.len() - 1;
    let inner_quotes_escaped = (1..last)
        .filter(|idx| bytes[*idx] == b'"')
        .all(|idx| preceding_backslashes(bytes, idx) % 2 == 1);

    inner_quotes_escaped && preceding_backslashes(bytes, last) % 2 == 0
}

/// Index just past the first unescaped quote closing the string literal that starts the input.
pub(crate) fn string_value_end(input: &[u8]) -> Option<usize> {
    if input.first() != Some(&b'"') {
        return None;
    }
    let mut escaped = false;
    for (idx, byte) in input.iter().copied().enumerate().skip(1) {
        match byte {
            b'"' if !escaped => return Some(idx + 1),
            b'\\' => escaped = !escaped,
            _ => escaped = false,
        }
    }
    None
}

pub fn is_primitive_value(input: &[u8]) -> bool {
    is_boolean_value(input)
        || is_character_value(input)
        || is_integer_value(input)
        || is_float_value(input)
        || is_string_value(input)
}
