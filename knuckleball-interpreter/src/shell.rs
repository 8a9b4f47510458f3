use std::io;
use std::io::{BufRead, Write};

use anyhow::Error;

use knuckleball_core::text;
use knuckleball_interpreter::session::{ConnectionSession, Session};
use knuckleball_interpreter::Context;

/// Launches an interactive Read-Eval-Print-Loop over the given context.
pub fn interactive(context: &mut Context) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut session = ConnectionSession::new("");
    let mut counter = 0;
    let mut line = Vec::new();
    loop {
        write!(&mut stdout, "({}) Knuckleball | ", counter)?;
        stdout.flush()?;
        line.clear();
        stdin.read_until(b'\n', &mut line)?;
        if line.is_empty() {
            writeln!(&mut stdout, "exit")?;
            break;
        }
        let statement = text::trim(&line);
        if statement.is_empty() {
            continue;
        }
        if statement == b"exit" {
            break;
        }

        let mut output = context.execute(statement, Some(&mut session as &mut dyn Session));
        output.push(b'\n');
        stdout.write_all(&output)?;

        if !session.is_connected() {
            break;
        }
        counter += 1;
    }

    Ok(())
}
