use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use knuckleball_core::Error;
use knuckleball_grammar as grammar;

use crate::context::Context;
use crate::session::{ConnectionSession, Session};

/// The longest line a client may send, terminator excluded.
pub const MAX_LINE_LENGTH: usize = 64 * 1024;

/// What a client sent, one `\n`-terminated line at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Frame {
    /// A line, without its terminator (`\n` or `\r\n`).
    Line(Vec<u8>),
    /// A line over [`MAX_LINE_LENGTH`], already skipped.
    TooLong,
}

/// Accepts clients forever, serving each one from its own task.
///
/// Every client gets a fresh session checked against `password`, while all of them share `context`.
pub async fn serve(
    listener: TcpListener,
    context: Arc<Mutex<Context>>,
    password: String,
) -> io::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        tracing::info!(%peer, "connection accepted");

        let context = Arc::clone(&context);
        let session = ConnectionSession::new(password.clone());
        tokio::spawn(async move {
            match handle_client(stream, &context, session).await {
                Ok(()) => tracing::info!(%peer, "connection closed"),
                Err(err) => tracing::warn!(%peer, error = %err, "connection failed"),
            }
        });
    }
}

async fn handle_client(
    stream: TcpStream,
    context: &Mutex<Context>,
    mut session: ConnectionSession,
) -> io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    while let Some(frame) = read_frame(&mut reader).await? {
        let reply = match frame {
            Frame::Line(line) => respond(context, &mut session, &line),
            Frame::TooLong => {
                tracing::warn!(limit = MAX_LINE_LENGTH, "line too long, skipped");
                Some(Error::InvalidStatement.to_string().into_bytes())
            }
        };
        match reply {
            Some(mut reply) => {
                reply.push(b'\n');
                writer.write_all(&reply).await?;
            }
            None => break,
        }
    }

    Ok(())
}

/// Reads the next line, or `None` at the end of the stream.
///
/// Reading stops after [`MAX_LINE_LENGTH`] bytes, so an unterminated line never grows
/// past that bound: the rest of it is drained and dropped.
async fn read_frame<R>(reader: &mut R) -> io::Result<Option<Frame>>
where
    R: AsyncBufRead + Unpin,
{
    let limit = MAX_LINE_LENGTH as u64 + 1;
    let mut line = Vec::new();
    if (&mut *reader).take(limit).read_until(b'\n', &mut line).await? == 0 {
        return Ok(None);
    }

    let terminated = line.last() == Some(&b'\n');
    if terminated {
        line.pop();
    }
    if line.len() > MAX_LINE_LENGTH {
        if !terminated {
            loop {
                line.clear();
                let read = (&mut *reader).take(limit).read_until(b'\n', &mut line).await?;
                if read == 0 || line.last() == Some(&b'\n') {
                    break;
                }
            }
        }
        return Ok(Some(Frame::TooLong));
    }

    if line.last() == Some(&b'\r') {
        line.pop();
    }
    Ok(Some(Frame::Line(line)))
}

/// Runs one line received from a client.
///
/// Returns the reply to send back, or `None` once the client asked to close the connection.
/// Until the session is authenticated, only `Connection` statements reach the context.
pub fn respond(
    context: &Mutex<Context>,
    session: &mut ConnectionSession,
    line: &[u8],
) -> Option<Vec<u8>> {
    if !session.is_authenticated() && !addresses_connection(line) {
        return Some(Error::NotAuthenticated.to_string().into_bytes());
    }

    let output = context
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .execute(line, Some(&mut *session as &mut dyn Session));

    if session.is_connected() {
        Some(output)
    } else {
        None
    }
}

fn addresses_connection(line: &[u8]) -> bool {
    knuckleball_parser::parse(line).map_or(false, |statement| {
        grammar::is_connection(statement.object.as_bytes())
    })
}
