use std::io;

use knuckleball_interpreter::logger::Logger;
use knuckleball_interpreter::{Context, Settings};

const INVALID_ARGUMENT: &str = "RuntimeError: invalid argument.";
const INVALID_COMPARISON: &str = "RuntimeError: cannot compare these two types.";

fn setup_context() -> Context {
    let settings = Settings::new(3, 0.001).expect("could not setup test settings");
    Context::new(settings, Logger::new(io::sink()))
}

fn run(context: &mut Context, script: &[(&str, &str)]) {
    for (statement, expected) in script {
        let output = context.execute(statement, None);
        assert_eq!(
            String::from_utf8_lossy(&output),
            *expected,
            "unexpected output for `{}`",
            statement
        );
    }
}

#[test]
fn boolean_and_character_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Boolean create: f withValue: false;", "null"),
            ("f isTrue?;", "false"),
            ("f set: true;", "null"),
            ("f isTrue?;", "true"),
            ("f isFalse?;", "false"),
            ("f set: 0;", INVALID_ARGUMENT),
            ("Character create: numeric withValue: '1';", "null"),
            ("Character create: space withValue: ' ';", "null"),
            ("numeric isNumeric?;", "true"),
            ("numeric isAlphabetic?;", "false"),
            ("numeric isAlphanumeric?;", "true"),
            ("space isSpace?;", "true"),
            ("space isAlphanumeric?;", "false"),
            ("numeric isLessThan? '2';", "true"),
            ("numeric isLessThanOrEqualTo? '0';", "false"),
            ("numeric isGreaterThanOrEqualTo? '1';", "true"),
            ("numeric isEqualTo? 0;", INVALID_ARGUMENT),
            ("numeric set: 'a';", "null"),
            ("numeric get;", "'a'"),
        ],
    );
}

#[test]
fn integer_arithmetic_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Integer create: f withValue: 42.9;", "null"),
            ("f get;", "42"),
            ("f set: 43.9;", "null"),
            ("f get;", "43"),
            ("Integer create: i withValue: 42;", "null"),
            ("i add: 42;", "null"),
            ("i get;", "84"),
            ("i add: -42.5;", "null"),
            ("i get;", "41"),
            ("i set: -42;", "null"),
            ("i subtract: -84.5;", "null"),
            ("i get;", "42"),
            ("i set: 20;", "null"),
            ("i multiplyBy: 2;", "null"),
            ("i multiplyBy: -2.5;", "null"),
            ("i get;", "-100"),
            ("i set: 100;", "null"),
            ("i divideBy: 2.5;", "null"),
            ("i divideBy: -2;", "null"),
            ("i get;", "-20"),
            ("i divideBy: 0.0;", INVALID_ARGUMENT),
            ("i multiplyBy: \"2.5\";", INVALID_ARGUMENT),
            ("i get;", "-20"),
        ],
    );
}

#[test]
fn integer_and_float_comparison_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Integer create: i withValue: 42;", "null"),
            ("i isEqualTo? 42;", "true"),
            ("i isEqualTo? 42.0;", "true"),
            ("i isEqualTo? 42.1;", "false"),
            ("i isLessThan? 42.1;", "true"),
            ("i isLessThan? 42.0;", "false"),
            ("i isLessThanOrEqualTo? 41.9;", "false"),
            ("i isGreaterThan? 41.9;", "true"),
            ("i isGreaterThanOrEqualTo? 42.1;", "false"),
            ("i isLessThan? false;", INVALID_ARGUMENT),
            ("Float create: f withValue: 42.5;", "null"),
            ("f isEqualTo? 42.5;", "true"),
            ("f isEqualTo? 42.0;", "false"),
            ("f isEqualTo? 42.5004;", "true"),
            ("f isLessThan? 43.0;", "true"),
            ("f isLessThanOrEqualTo? 42.5;", "true"),
            ("f isGreaterThan? 42.5;", "false"),
            ("f isGreaterThanOrEqualTo? 43.0;", "false"),
            ("f isGreaterThan? \"0\";", INVALID_ARGUMENT),
        ],
    );
}

#[test]
fn float_arithmetic_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Float create: f withValue: 42.5;", "null"),
            ("f get;", "42.500"),
            ("f add: .5;", "null"),
            ("f get;", "43.000"),
            ("f subtract: 1;", "null"),
            ("f multiplyBy: 2;", "null"),
            ("f get;", "84.000"),
            ("f divideBy: 2;", "null"),
            ("f get;", "42.000"),
            ("f subtract: i;", INVALID_ARGUMENT),
            ("f multiplyBy: true;", INVALID_ARGUMENT),
        ],
    );
}

#[test]
fn string_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("String create: str;", "null"),
            ("str isEmpty?;", "true"),
            ("str set: \"knuckleball\";", "null"),
            ("str length;", "11"),
            ("str startsWith? \"knuckle\";", "true"),
            ("str endsWith? \"knuckle\";", "false"),
            ("str isLexicographicallyLessThan? \"zball\";", "true"),
            ("str isLexicographicallyGreaterThanOrEqualTo? \"zball\";", "false"),
            ("str atIndex: 1;", "'n'"),
            ("str atIndex: 11;", INVALID_ARGUMENT),
            ("str first: 7;", "\"knuckle\""),
            ("str last: 42;", "\"knuckleball\""),
            ("str substringFromIndex: 7;", "\"ball\""),
            ("str substringFromIndex: 0 toIndex: 7;", "\"knuckle\""),
            ("str substringFromIndex: 4 toIndex: 2;", INVALID_ARGUMENT),
            ("str popAtIndex: 0;", "'k'"),
            ("str pushFront: 'k';", "null"),
            ("str insert: \" \" beforeIndex: 7;", "null"),
            ("str get;", "\"knuckle ball\""),
            ("str eraseFromIndex: 7 toIndex: 8;", "null"),
            ("str eraseFromIndex: 7;", "null"),
            ("str concatenate: \"ball\";", "null"),
            ("str popBack;", "'l'"),
            ("str pushBack: 'l';", "null"),
            ("str get;", "\"knuckleball\""),
            ("str clear;", "null"),
            ("str popFront;", "null"),
            ("str set: \"say \\\"hi\\\"\";", "null"),
            ("str length;", "8"),
            ("str get;", "\"say \\\"hi\\\"\""),
        ],
    );
}

#[test]
fn vector_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Vector<Integer> create: p;", "null"),
            ("p pushBack: 21;", "null"),
            ("p pushBack: 42;", "null"),
            ("p pushBack: 63;", "null"),
            ("p atIndex: 1;", "42"),
            ("p atIndex: -1;", INVALID_ARGUMENT),
            ("p atIndex: 42;", INVALID_ARGUMENT),
            ("p pushBack: 42;", "null"),
            ("p count: 42;", "2"),
            ("p firstIndexOf: 42;", "1"),
            ("p firstIndexOf: 42 fromIndex: 2;", "3"),
            ("p firstIndexOf: 42 fromIndex: 4;", "-1"),
            ("p firstIndexOf: 42 fromIndex: 5;", INVALID_ARGUMENT),
            ("p allIndexesOf: 42;", "[1,3]"),
            ("p contains? 63 fromIndex: 3;", "false"),
            ("p first: 2;", "[21,42]"),
            ("p last: 2;", "[63,42]"),
            ("p sliceFromIndex: 1 toIndex: 3;", "[42,63]"),
            ("p insert: 22 beforeIndex: 1;", "null"),
            ("p get;", "[21,22,42,63,42]"),
            ("p removeFirst: 42 fromIndex: 3;", "null"),
            ("p get;", "[21,22,42,63]"),
            ("p replaceAll: 42 with: -42;", "null"),
            ("p replaceFirst: 21 with: 84;", "null"),
            ("p sort;", "null"),
            ("p get;", "[-42,22,63,84]"),
            ("p reverse;", "null"),
            ("p popFront;", "84"),
            ("p popBack;", "-42"),
            ("p popAtIndex: 1;", "22"),
            ("p removeAll: 63;", "null"),
            ("p size;", "0"),
            ("p popBack;", "null"),
            ("p pushBack: true;", INVALID_ARGUMENT),
            ("p get;", "[]"),
        ],
    );
}

#[test]
fn vector_of_floats_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Vector<Float> create: v;", "null"),
            ("v pushBack: 2.5;", "null"),
            ("v pushBack: 1;", "null"),
            ("v pushBack: 1.0004;", "null"),
            ("v get;", "[2.500,1.000,1.000]"),
            ("v count: 1;", "2"),
            ("v sort;", "null"),
            ("v atIndex: 2;", "2.500"),
            ("Vector<Character> create: cs;", "null"),
            ("cs pushBack: 'b';", "null"),
            ("cs pushFront: 'a';", "null"),
            ("cs get;", "['a','b']"),
        ],
    );
}

#[test]
fn set_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Set<String> create: ids;", "null"),
            ("ids get;", "{}"),
            ("ids add: \"knuckle\";", "null"),
            ("ids add: \"ball\";", "null"),
            ("ids add: \"knuckle\";", "null"),
            ("ids get;", "{\"ball\",\"knuckle\"}"),
            ("ids size;", "2"),
            ("ids contains? \"ball\";", "true"),
            ("ids remove: \"knuckle\";", "null"),
            ("ids remove: \"absent\";", "null"),
            ("ids get;", "{\"ball\"}"),
            ("ids add: 42;", INVALID_ARGUMENT),
            ("ids clear;", "null"),
            ("ids isEmpty?;", "true"),
            ("Set<Float> create: fs;", "null"),
            ("fs add: 1.0;", "null"),
            ("fs add: 1.0005;", "null"),
            ("fs add: 0.5;", "null"),
            ("fs get;", "{0.500,1.000}"),
        ],
    );
}

#[test]
fn dictionary_test() {
    let mut context = setup_context();

    run(
        &mut context,
        &[
            ("Dictionary<String, Integer> create: ages;", "null"),
            ("ages get;", "()"),
            ("ages associateValue: 21 withKey: \"b\";", "null"),
            ("ages associateValue: 42 withKey: \"a\";", "null"),
            ("ages associateValue: 99 withKey: \"a\";", "null"),
            ("ages get;", "((\"a\",99),(\"b\",21))"),
            ("ages size;", "2"),
            ("ages keys;", "[\"a\",\"b\"]"),
            ("ages values;", "[99,21]"),
            ("ages containsKey? \"a\";", "true"),
            ("ages getValueForKey: \"b\";", "21"),
            ("ages getValueForKey: \"\";", "null"),
            ("ages removeKey: \"a\";", "null"),
            ("ages removeKey: \"42\";", "null"),
            ("ages get;", "((\"b\",21))"),
            ("ages associateValue: \"knuckleball\" withKey: 42;", INVALID_ARGUMENT),
            ("ages getValueForKey: 42;", INVALID_ARGUMENT),
            ("ages clear;", "null"),
            ("ages isEmpty?;", "true"),
        ],
    );
}

#[test]
fn incomparable_types_test() {
    use knuckleball_interpreter::compare::Comparator;
    use knuckleball_interpreter::Value;

    let comparator = Comparator::new(0.001);
    let mismatched = [
        (Value::Boolean(true), Value::Integer(1)),
        (Value::Character(b'a'), Value::String(b"a".to_vec())),
        (Value::Float(1.0), Value::Character(b'1')),
    ];
    for (lhs, rhs) in mismatched.iter() {
        let err = comparator.is_less(lhs, rhs).unwrap_err();
        assert_eq!(err.to_string(), INVALID_COMPARISON);
    }
}

fn run_bytes(context: &mut Context, statement: &[u8], expected: &[u8]) {
    let output = context.execute(statement, None);
    assert_eq!(
        output,
        expected,
        "unexpected output for `{}`",
        String::from_utf8_lossy(statement)
    );
}

#[test]
fn raw_bytes_test() {
    let mut context = setup_context();

    run_bytes(&mut context, b"String create: s withValue: \"\xC3\xA9\";", b"null");
    run_bytes(&mut context, b"s length;", b"2");
    run_bytes(&mut context, b"s popBack;", b"'\xA9'");
    run_bytes(&mut context, b"s get;", b"\"\xC3\"");
    run_bytes(&mut context, b"s concatenate: \"\xFF\\\"\xFE\";", b"null");
    run_bytes(&mut context, b"s get;", b"\"\xC3\xFF\\\"\xFE\"");
    run_bytes(&mut context, b"s length;", b"4");
    run_bytes(&mut context, b"s isLexicographicallyGreaterThan? \"z\";", b"true");

    run_bytes(&mut context, b"Character create: c withValue: '\xE9';", b"null");
    run_bytes(&mut context, b"c get;", b"'\xE9'");
    run_bytes(&mut context, b"c isAlphabetic?;", b"false");
    run_bytes(&mut context, b"s pushFront: '\xE9';", b"null");
    run_bytes(&mut context, b"s atIndex: 0;", b"'\xE9'");

    run_bytes(&mut context, b"Set<Character> create: cs;", b"null");
    run_bytes(&mut context, b"cs add: '\xFF';", b"null");
    run_bytes(&mut context, b"cs add: 'a';", b"null");
    run_bytes(&mut context, b"cs get;", b"{'a','\xFF'}");

    run_bytes(&mut context, b"Dictionary<String, Character> create: d;", b"null");
    run_bytes(&mut context, b"d associateValue: '\x80' withKey: \"\xFF\";", b"null");
    run_bytes(&mut context, b"d get;", b"((\"\xFF\",'\x80'))");
}
