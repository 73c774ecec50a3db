use std::fs::{self};

use ember::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{scope::Scope, value::core::Value},
    repl::run_repl,
    run_source,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_ember_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_source(&code, &mut Scope::global()) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_ember_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```ember") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Result<Value, Error> {
    run_source(src, &mut Scope::global())
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected.into(), "script: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e}"),
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match eval(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Script {src:?} was expected to fail at runtime, got {other:?}"),
    }
}

fn assert_parse_failure(src: &str) -> ParseError {
    match eval(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Script {src:?} was expected to fail to parse, got {other:?}"),
    }
}

fn run_lines(input: &str) -> (String, String) {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    run_repl(input.as_bytes(), &mut output, &mut errors, false).unwrap();
    (String::from_utf8(output).unwrap(), String::from_utf8(errors).unwrap())
}

#[test]
fn declaration_and_basic_arithmetic() {
    assert_value("let x = 1 + 2; x", 3.0);
    assert_value("let x = 7 * 9; x", 63.0);
    assert_value("let x = 8 - 5; x", 3.0);
    assert_value("let x = 10 / 4; x", 2.5);
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("24 / 4 / 2", 3.0);
    assert_value("1 + 2 < 2 * 2", true);
    assert_value("-2 * 3", -6.0);
}

#[test]
fn declaration_yields_its_value() {
    assert_value("let x = 10", 10.0);
    assert_value("const name = \"ember\"", "ember");
    assert_value("let nothing", Value::Null);
}

#[test]
fn assignment_updates_binding_and_chains() {
    assert_value("let x = 1; x = x + 41; x", 42.0);
    assert_value("let a = 0; let b = 0; a = b = 5; a + b", 10.0);
    assert_value("let x; x = \"now set\"", "now set");
}

#[test]
fn comparisons_between_numbers() {
    assert_value("3 < 4", true);
    assert_value("3 > 4", false);
    assert_value("4 <= 4", true);
    assert_value("5 >= 6", false);
    assert_value("2 == 2", true);
    assert_value("2 != 2", false);
}

#[test]
fn bools_compare_to_numbers_as_zero_or_one() {
    assert_value("1 == true", true);
    assert_value("0 == false", true);
    assert_value("2 > true", true);
    assert_value("true < 2", true);
    assert_value("false >= 1", false);
    assert_value("1 <= true", true);
    assert_value("2 <= true", false);
    assert_value("true <= 1", true);
    assert_value("true <= 0", false);
    assert_value("3 != true", true);
    assert_value("true == false", false);
    assert_value("true != false", true);
}

#[test]
fn mismatched_types_are_never_equal() {
    assert_value("\"1\" == 1", false);
    assert_value("\"1\" != 1", true);
    assert_value("true == \"true\"", false);
}

#[test]
fn strings_concatenate_and_compare() {
    assert_value("\"foo\" + \"bar\"", "foobar");
    assert_value("\"a\" == \"a\"", true);
    assert_value("\"a\" != \"b\"", true);
    assert_value("let s = \"x\"; s = s + s; s + s", "xxxx");
}

#[test]
fn string_repetition() {
    assert_value("3 * \"ab\"", "ababab");
    assert_value("\"ab\" * 3", "ababab");
    assert_value("0 * \"ab\"", "");
    assert_value("\"ab\" * -2", "");
    assert_value("\"\" * 5", "");

    let err = assert_runtime_failure("\"ab\" * (3 / 2)");
    assert!(matches!(err, RuntimeError::RealIsFractional { .. }));
}

#[test]
fn oversized_repetition_counts_are_not_literal_errors() {
    let err = assert_runtime_failure("\"ab\" * (9007199254740991 + 1)");
    assert!(matches!(err, RuntimeError::AllocationFailed { line: 1, .. }));

    let err = assert_runtime_failure("(99999999 * 99999999 * 99999999) * \"ab\"");
    assert!(matches!(err, RuntimeError::IntegerOutOfRange { line: 1, .. }));
}

#[test]
fn null_propagates_through_binary_operators() {
    assert_value("null + 1", Value::Null);
    assert_value("\"a\" * null", Value::Null);
    assert_value("null == null", Value::Null);
    assert_value("let x; x - 3", Value::Null);
}

#[test]
fn unary_operators() {
    assert_value("-5", -5.0);
    assert_value("- -5", 5.0);
    assert_value("-true", -1.0);
    assert_value("-false", 0.0);
    assert_value("!0", true);
    assert_value("!3", false);
    assert_value("!true", false);
    assert_value("!null", true);
    assert_value("!\"abc\"", true);
    assert_value("!\"\"", false);
    assert_value("~5", -6.0);
    assert_value("~-1", 0.0);
    assert_value("~true", false);
}

#[test]
fn bitwise_not_covers_whole_integer_range() {
    assert_value("~9007199254740991", -9_007_199_254_740_992.0);
    assert_value("~(9007199254740991 + 1)", -9_007_199_254_740_992.0);
    assert_value("~(0 - 9007199254740991)", 9_007_199_254_740_990.0);

    let err = assert_runtime_failure("~(99999999 * 99999999 * 99999999)");
    assert!(matches!(err, RuntimeError::IntegerOutOfRange { line: 1, .. }));
    assert!(matches!(assert_runtime_failure("~(1 / 0)"), RuntimeError::IntegerOutOfRange { .. }));
}

#[test]
fn unsupported_unary_operands_are_errors() {
    let err = assert_runtime_failure("-\"abc\"");
    assert_eq!(err,
               RuntimeError::UnsupportedUnaryOperand { op:      "-".to_string(),
                                                       operand: "string",
                                                       line:    1, });

    assert!(matches!(assert_runtime_failure("~null"),
                     RuntimeError::UnsupportedUnaryOperand { .. }));
    assert!(matches!(assert_runtime_failure("~(1 / 2)"), RuntimeError::RealIsFractional { .. }));
}

#[test]
fn unsupported_operand_pairs_are_errors() {
    let err = assert_runtime_failure("true + 1");
    assert_eq!(err,
               RuntimeError::UnsupportedOperands { op:    "+".to_string(),
                                                   left:  "bool",
                                                   right: "number",
                                                   line:  1, });

    for src in ["\"a\" - \"b\"",
                "\"a\" < \"b\"",
                "true * false",
                "true + 1",
                "\"a\" + 1",
                "1 / \"a\"",
                "2 - \"a\"",
                "\"a\" < 1",
                "3 >= \"a\"",
                "true + \"a\"",
                "\"a\" < false",
                "\"a\" * true"]
    {
        assert!(matches!(assert_runtime_failure(src), RuntimeError::UnsupportedOperands { .. }),
                "{src}");
    }
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("1 / 0", f64::INFINITY);
    assert_value("-1 / 0", f64::NEG_INFINITY);

    match eval("0 / 0") {
        Ok(Value::Number(n)) => assert!(n.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

#[test]
fn constants_cannot_be_reassigned() {
    let err = assert_runtime_failure("const c = 1; c = 2");
    assert_eq!(err,
               RuntimeError::ConstantReassignment { name: "c".to_string(),
                                                    line: 1, });

    assert!(matches!(assert_runtime_failure("true = false"),
                     RuntimeError::ConstantReassignment { .. }));
    assert!(matches!(assert_runtime_failure("null = 1"),
                     RuntimeError::ConstantReassignment { .. }));
}

#[test]
fn redeclaration_is_error() {
    let err = assert_runtime_failure("let x = 1; let x = 2");
    assert!(matches!(err, RuntimeError::VariableRedeclaration { ref name, .. } if name == "x"));
    assert!(matches!(assert_runtime_failure("let true = 1"),
                     RuntimeError::VariableRedeclaration { .. }));
}

#[test]
fn unknown_variable_is_error() {
    let err = assert_runtime_failure("\n\nmissing + 1");
    assert_eq!(err,
               RuntimeError::UnknownVariable { name: "missing".to_string(),
                                               line: 3, });
    assert!(matches!(assert_runtime_failure("ghost = 1"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn assignment_to_non_identifier_is_error() {
    assert!(matches!(assert_runtime_failure("1 = 2"),
                     RuntimeError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(assert_runtime_failure("let x = 1; (x + 1) = 2"),
                     RuntimeError::InvalidAssignmentTarget { .. }));
}

#[test]
fn malformed_input_is_parse_error() {
    assert!(matches!(assert_parse_failure("const c"),
                     ParseError::ConstWithoutInitializer { .. }));
    assert!(matches!(assert_parse_failure("(1 + 2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_parse_failure("1 +"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_parse_failure("let 5 = 1"), ParseError::ExpectedIdentifier { .. }));
    assert!(matches!(assert_parse_failure("* 2"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_parse_failure("9007199254740992"),
                     ParseError::LiteralTooLarge { .. }));
    assert!(matches!(assert_parse_failure("99999999999999999999"),
                     ParseError::LiteralTooLarge { .. }));
}

#[test]
fn largest_safe_literal_is_accepted() {
    assert_value("9007199254740991", 9_007_199_254_740_991.0);
}

#[test]
fn statements_without_separator_run_in_sequence() {
    assert_value("let x = 1 x + 1", 2.0);
    assert_value("1 2 3", 3.0);
    assert_value(";;", Value::Null);
    assert_value("", Value::Null);
}

#[test]
fn comments_are_ignored() {
    assert_value("// leading\n1 + /* inline /* nested */ */ 2 // trailing", 3.0);
}

#[test]
fn declarations_before_a_runtime_error_are_kept() {
    let mut scope = Scope::global();

    assert!(run_source("let a = 1; a + missing", &mut scope).is_err());
    assert_eq!(run_source("a", &mut scope).unwrap(), Value::Number(1.0));
}

#[test]
fn repl_end_to_end() {
    let (output, errors) = run_lines("let x = 10;\nlet y = \"hi\";\nx + 1\nexit\ny\n");

    assert_eq!(output, "10\nhi\n11\n");
    assert!(errors.is_empty());
}

#[test]
fn repl_recovers_after_errors() {
    let (output, errors) = run_lines("let x = 1\nlet x = 2\n@\nx + 1\n");

    assert_eq!(output, "1\n2\n");
    assert_eq!(errors.lines().count(), 2);
    assert!(errors.contains("Cannot redeclare"));
    assert!(errors.contains("Unrecognized character"));
}

#[test]
fn repl_formats_values() {
    let (output, _) = run_lines("10 / 4\n1 / 3\n2 == 2\nnull\n\"text\"\n");

    assert_eq!(output, "2.5\n0.333333\ntrue\nnull\ntext\n");
}

#[test]
fn repl_prints_prompt_and_stops_at_end_of_input() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    run_repl("1\r\n\n".as_bytes(), &mut output, &mut errors, true).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), ">>> 1\n>>> >>> ");
}

#[test]
fn only_a_bare_exit_ends_the_session() {
    let (output, errors) = run_lines("  exit  \n1\nexit\n2\n");

    assert_eq!(output, "1\n");
    assert!(errors.contains("Cannot resolve variable 'exit'"));
}
