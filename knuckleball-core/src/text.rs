/// Whitespace as understood by the statement grammar (the ASCII `isspace` set, vertical tab included).
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Removes leading grammar whitespace.
pub fn trim_start(input: &[u8]) -> &[u8] {
    let start = input
        .iter()
        .position(|byte| !is_space(*byte))
        .unwrap_or(input.len());
    &input[start..]
}

/// Removes trailing grammar whitespace.
pub fn trim_end(input: &[u8]) -> &[u8] {
    let end = input
        .iter()
        .rposition(|byte| !is_space(*byte))
        .map_or(0, |idx| idx + 1);
    &input[..end]
}

/// Removes leading and trailing grammar whitespace.
pub fn trim(input: &[u8]) -> &[u8] {
    trim_end(trim_start(input))
}

/// Removes every grammar whitespace byte, wherever it is.
pub fn remove_spaces(input: &[u8]) -> Vec<u8> {
    input.iter().copied().filter(|byte| !is_space(*byte)).collect()
}

/// Index of the first grammar whitespace byte.
pub fn find_space(input: &[u8]) -> Option<usize> {
    input.iter().position(|byte| is_space(*byte))
}

/// Escapes double quotes and backslashes, so that the result can sit between two double quotes.
pub fn escape(bytes: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(bytes.len());
    for &byte in bytes {
        if byte == b'"' || byte == b'\\' {
            output.push(b'\\');
        }
        output.push(byte);
    }
    output
}

/// Reverses [`escape`].
///
/// A backslash that does not precede a double quote or another backslash is kept as is.
pub fn unescape(bytes: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(byte) = iter.next() {
        match (byte, iter.peek()) {
            (b'\\', Some(&next)) if next == b'"' || next == b'\\' => {
                output.push(next);
                iter.next();
            }
            _ => output.push(byte),
        }
    }
    output
}
