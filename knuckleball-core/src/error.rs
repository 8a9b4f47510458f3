use thiserror::Error;

/// Every failure a statement can end with.
///
/// The `Display` output of each variant is the exact text sent back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The input is not a well-formed statement.
    #[error("SyntaxError: invalid statement.")]
    InvalidStatement,
    /// An argument has the wrong shape or is out of range.
    #[error("RuntimeError: invalid argument.")]
    InvalidArgument,
    /// The receiver does not understand the message.
    #[error("RuntimeError: invalid message.")]
    InvalidMessage,
    /// A `create:` message targeted a name that is already registered.
    #[error("RuntimeError: variable name already used.")]
    VariableNameAlreadyUsed,
    /// The statement refers to a variable that is not registered.
    #[error("RuntimeError: name cannot be resolved to a variable.")]
    UnexistentVariable,
    /// The message was sent with the wrong number of arguments.
    #[error("RuntimeError: wrong number of arguments.")]
    WrongNumberOfArguments,
    /// Two values of incomparable types were compared.
    #[error("RuntimeError: cannot compare these two types.")]
    InvalidComparison,
    /// The session must authenticate before sending this statement.
    #[error("AuthenticationError: not authenticated.")]
    NotAuthenticated,
    /// The password given to `authenticateWithPassword:` is wrong.
    #[error("AuthenticationError: wrong password.")]
    WrongPassword,
    /// Anything not covered by the other variants.
    #[error("RuntimeError: unknown error.")]
    Unknown,
}
