use crate::ParseError;

#[test]
fn invalid_literal_includes_offending_text() {
    let err = ParseError::invalid_literal("int", "12a");
    assert_eq!(err.to_string(), r#"invalid int literal "12a""#);
}

#[test]
fn out_of_range_message() {
    let err = ParseError::out_of_range("int32", "99999999999");
    assert_eq!(
        err.to_string(),
        r#"int32 literal "99999999999" is out of range"#
    );
}

#[test]
fn structural_messages() {
    let err = ParseError::MissingField {
        record: "point".into(),
        field: "y".into(),
    };
    assert_eq!(err.to_string(), "missing field `y` in record `point`");

    let err = ParseError::UnknownCase {
        variant: "shape".into(),
        case: "Triangle".into(),
    };
    assert_eq!(err.to_string(), "unknown case `Triangle` in variant `shape`");

    let err = ParseError::mismatch("array", "object");
    assert_eq!(err.to_string(), "expected array, found object");
}

#[test]
fn message_is_verbatim() {
    assert_eq!(ParseError::msg("bad colour").to_string(), "bad colour");
}
