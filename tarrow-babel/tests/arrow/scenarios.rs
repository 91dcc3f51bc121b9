use crate::common::{conversion_error, convert};
use tarrow_babel::ConversionError;

#[test]
fn basic_variable() {
    assert!(convert("a = 10").contains("10 -> a"));
}

#[test]
fn comment_before_binding() {
    let output = convert("# hello\na = 10");
    assert!(output.contains("\" hello\n10 -> a"));
}

#[test]
fn comment_keeps_non_ascii_text() {
    let output = convert("# Это комментарий\na = 10");
    assert!(output.contains("\" Это комментарий\n10 -> a"));
}

#[test]
fn inline_table() {
    let output = convert("inlineTable = { a = 0 }");
    assert!(output.contains("([\n    a : 0,\n]) -> inlineTable"));
}

#[test]
fn nested_tables_three_levels() {
    let output = convert("[dog.\"tamer_man\".cat]\ntype = 42");
    insta::assert_snapshot!(output, @r"
([
    tamer_man : ([
        cat : ([
            type : 42,
        ]),
    ]),
]) -> dog
");
}

#[test]
fn invalid_variable_name() {
    assert_eq!(
        conversion_error("1a = 10"),
        ConversionError::InvalidName("1a".to_string())
    );
}

#[test]
fn invalid_nested_name() {
    assert_eq!(
        conversion_error("[server]\nhost-name = 1"),
        ConversionError::InvalidName("host-name".to_string())
    );
}

#[test]
fn variable_link() {
    let output = convert("a = 10\nb = \"?(a)\"");
    assert!(output.contains("10 -> a\n10 -> b"));
}

#[test]
fn forward_reference_fails() {
    assert_eq!(
        conversion_error("b = \"?(a)\"\na = 10"),
        ConversionError::UndefinedConstant("a".to_string())
    );
}

#[test]
fn undefined_reference_fails() {
    assert_eq!(
        conversion_error("a = \"?(nowhere)\""),
        ConversionError::UndefinedConstant("nowhere".to_string())
    );
}

#[test]
fn reference_to_invalid_name_fails() {
    assert_eq!(
        conversion_error("a = \"?(not-a-name)\""),
        ConversionError::InvalidName("not-a-name".to_string())
    );
}

#[test]
fn plain_string_is_unsupported() {
    assert_eq!(
        conversion_error("greeting = \"hello\""),
        ConversionError::UnsupportedType("string".to_string())
    );
}

#[test]
fn booleans_and_arrays_are_unsupported() {
    assert_eq!(
        conversion_error("enabled = true"),
        ConversionError::UnsupportedType("boolean".to_string())
    );
    assert_eq!(
        conversion_error("ports = [1, 2]"),
        ConversionError::UnsupportedType("array".to_string())
    );
}

#[test]
fn invalid_name_is_reported_before_unsupported_value() {
    assert_eq!(
        conversion_error("1a = true"),
        ConversionError::InvalidName("1a".to_string())
    );
}

#[test]
fn first_failing_key_decides_the_error() {
    assert_eq!(
        conversion_error("a = \"?(x)\"\n[t]\nflag = true"),
        ConversionError::UndefinedConstant("x".to_string())
    );
    assert_eq!(
        conversion_error("[t]\nflag = true\n\"bad key\" = 1"),
        ConversionError::UnsupportedType("boolean".to_string())
    );
}

#[test]
fn top_level_order_is_preserved() {
    let output = convert("zeta = 1\nalpha = 2\nmid = 3");
    assert_eq!(output, "1 -> zeta\n2 -> alpha\n3 -> mid");
}

#[test]
fn reference_to_table_inside_table() {
    let output = convert("base = { x = 1 }\nderived = { inner = \"?(base)\" }");
    insta::assert_snapshot!(output, @r"
([
    x : 1,
]) -> base
([
    inner : ([
    x : 1,
]),
]) -> derived
");
}

#[test]
fn floats_and_negative_numbers() {
    let output = convert("a = -3\nb = 1.0\nc = 6.02e23\nd = inf");
    assert_eq!(output, "-3 -> a\n1.0 -> b\n6.02e+23 -> c\ninf -> d");
}
