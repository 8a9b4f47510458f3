use knuckleball_core::Error;

use crate::expect_args;
use crate::primitives;

/// The transport-side endpoint of a statement: what `Connection` messages are forwarded to.
pub trait Session {
    /// Handles a message sent to `Connection`.
    fn receive(&mut self, message: &str, args: &[Vec<u8>]) -> Result<Vec<u8>, Error>;
}

/// The state of one client connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSession {
    password: String,
    is_connected: bool,
    is_authenticated: bool,
}

impl ConnectionSession {
    /// Opens a session, already authenticated when there is no password to check.
    pub fn new(password: impl Into<String>) -> Self {
        let password = password.into();
        let is_authenticated = password.is_empty();
        Self {
            password,
            is_connected: true,
            is_authenticated,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }
}

impl Session for ConnectionSession {
    fn receive(&mut self, message: &str, args: &[Vec<u8>]) -> Result<Vec<u8>, Error> {
        match message {
            "close" => {
                expect_args!(args, []);
                self.is_connected = false;
                tracing::debug!("session closed by client");
                Ok(primitives::null())
            }
            "authenticateWithPassword:" => {
                expect_args!(args, [password]);
                let password = primitives::parse_string(password)?;
                if password != self.password.as_bytes() {
                    tracing::info!("authentication failed");
                    return Err(Error::WrongPassword);
                }
                self.is_authenticated = true;
                tracing::info!("session authenticated");
                Ok(primitives::null())
            }
            _ => Err(Error::InvalidMessage),
        }
    }
}
