/// A statement, broken down into its parts.
///
/// For keyword messages, `message` is the concatenation of every keyword token
/// (`create:withValue:`) and `arguments` holds their arguments, in order.
/// For unary messages, `arguments` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// The object receiving the message (`Integer`, `Context`, `std::prices`, ...).
    pub object: String,
    /// The full message name.
    pub message: String,
    /// The raw argument bytes, which string and character literals may carry beyond ASCII.
    pub arguments: Vec<Vec<u8>>,
}

impl Statement {
    /// Does the message name start with the given prefix ?
    pub fn message_starts_with(&self, prefix: &str) -> bool {
        self.message.starts_with(prefix)
    }
}
