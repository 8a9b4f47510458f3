use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use knuckleball_interpreter::compare::Comparator;
use knuckleball_interpreter::logger::Logger;
use knuckleball_interpreter::server::respond;
use knuckleball_interpreter::session::{ConnectionSession, Session};
use knuckleball_interpreter::{Context, Settings, Value};

const NOT_AUTHENTICATED: &str = "AuthenticationError: not authenticated.";
const WRONG_PASSWORD: &str = "AuthenticationError: wrong password.";

/// A writer whose content stays readable after being handed to a logger.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn setup_context() -> Context {
    Context::new(Settings::default(), Logger::new(io::sink()))
}

fn reply(context: &Mutex<Context>, session: &mut ConnectionSession, line: &str) -> Option<String> {
    respond(context, session, line.as_bytes())
        .map(|reply| String::from_utf8(reply).expect("non UTF-8 reply"))
}

#[test]
fn session_authentication_test() {
    let context = Mutex::new(setup_context());
    let mut session = ConnectionSession::new("secret");
    assert!(!session.is_authenticated());

    let tests: &[(&str, &str)] = &[
        ("Boolean create: t withValue: true;", NOT_AUTHENTICATED),
        ("not even a statement", NOT_AUTHENTICATED),
        ("Connection authenticateWithPassword: \"wrong\";", WRONG_PASSWORD),
        ("Connection authenticateWithPassword: secret;", "RuntimeError: invalid argument."),
        ("Connection authenticate;", "RuntimeError: invalid message."),
        ("Connection authenticateWithPassword: \"secret\";", "null"),
        ("Boolean create: t withValue: true;", "null"),
        ("t get;", "true"),
    ];
    for (line, expected) in tests {
        let output = reply(&context, &mut session, line);
        assert_eq!(output.as_deref(), Some(*expected), "unexpected reply for `{}`", line);
    }
    assert!(session.is_authenticated());

    assert_eq!(reply(&context, &mut session, "Connection close;"), None);
    assert!(!session.is_connected());
}

#[test]
fn sessions_share_the_context_test() {
    let context = Mutex::new(setup_context());
    let mut first = ConnectionSession::new("");
    let mut second = ConnectionSession::new("");
    assert!(first.is_authenticated());

    assert_eq!(
        reply(&context, &mut first, "Integer create: shared withValue: 1;").as_deref(),
        Some("null")
    );
    assert_eq!(
        reply(&context, &mut second, "shared add: 41;").as_deref(),
        Some("null")
    );
    assert_eq!(
        reply(&context, &mut first, "shared get;").as_deref(),
        Some("42")
    );
    assert_eq!(reply(&context, &mut second, "Connection close;"), None);
    assert!(first.is_connected());
}

#[test]
fn unauthenticated_long_line_test() {
    let context = Mutex::new(setup_context());
    let mut session = ConnectionSession::new("secret");

    let mut line = String::from("i");
    for _ in 0..50_000 {
        line.push_str(" a: 1");
    }
    line.push(';');
    assert_eq!(reply(&context, &mut session, &line).as_deref(), Some(NOT_AUTHENTICATED));

    let mut line = String::from("Connection authenticateWithPassword: \"secret\"");
    for _ in 0..50_000 {
        line.push_str(" a: 1");
    }
    line.push(';');
    assert_eq!(
        reply(&context, &mut session, &line).as_deref(),
        Some("RuntimeError: invalid message.")
    );
    assert!(!session.is_authenticated());
}

#[test]
fn session_arity_test() {
    let mut session = ConnectionSession::new("secret");
    let args = vec![b"42".to_vec()];

    assert_eq!(
        session.receive("close", &args).unwrap_err().to_string(),
        "RuntimeError: wrong number of arguments."
    );
    assert!(session.is_connected());
    assert_eq!(session.receive("close", &[]), Ok(b"null".to_vec()));
    assert!(!session.is_connected());
}

#[test]
fn statement_log_test() {
    let buffer = SharedBuffer::default();
    let mut context = Context::new(Settings::default(), Logger::new(buffer.clone()));

    context.execute("  Boolean create: t withValue: true;  ", None);
    context.execute("t frobnicate;", None);

    let contents = buffer.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    for line in &lines {
        let bytes = line.as_bytes();
        assert_eq!(bytes[0], b'[');
        assert_eq!(bytes[20], b']');
        assert!(chrono::NaiveDateTime::parse_from_str(&line[1..20], "%Y-%m-%d %H:%M:%S").is_ok());
    }
    assert_eq!(&lines[0][21..], " Boolean create: t withValue: true; -> null");
    assert_eq!(
        &lines[1][21..],
        " t frobnicate; -> RuntimeError: invalid message."
    );
}

#[test]
fn comparator_properties_test() {
    let comparator = Comparator::new(0.001);
    let numbers = [
        Value::Integer(-1),
        Value::Integer(42),
        Value::Float(41.9995),
        Value::Float(42.5),
        Value::Float(-0.5),
    ];

    for lhs in numbers.iter() {
        assert!(comparator.is_equal(lhs, lhs).unwrap());
        for rhs in numbers.iter() {
            let less = comparator.is_less(lhs, rhs).unwrap();
            let equal = comparator.is_equal(lhs, rhs).unwrap();
            let greater = comparator.is_greater(lhs, rhs).unwrap();
            let holding = [less, equal, greater].iter().filter(|it| **it).count();
            assert_eq!(holding, 1, "{:?} against {:?}", lhs, rhs);
            assert_eq!(less, comparator.is_greater(rhs, lhs).unwrap());
        }
    }

    assert!(comparator
        .is_equal(&Value::Integer(42), &Value::Float(41.9995))
        .unwrap());

    let mut strings = vec![
        Value::String(b"knuckle".to_vec()),
        Value::String(b"ball".to_vec()),
        Value::String(b"".to_vec()),
    ];
    comparator.sort(&mut strings).unwrap();
    assert_eq!(
        strings,
        vec![
            Value::String(b"".to_vec()),
            Value::String(b"ball".to_vec()),
            Value::String(b"knuckle".to_vec()),
        ]
    );
}
