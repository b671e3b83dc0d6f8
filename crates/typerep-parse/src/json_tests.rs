use indoc::indoc;
use serde_json::json;
use typerep_core::{Len, ParseError, RecordBuilder, Ty, VariantBuilder};

use crate::{JsonDecoder, parse};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: isize,
    y: isize,
}

fn point() -> Ty<Point> {
    RecordBuilder::new("point")
        .field("x", Ty::int(), |p: &Point| &p.x)
        .field("y", Ty::int(), |p: &Point| &p.y)
        .seal_with(|f| Point {
            x: f.take(),
            y: f.take(),
        })
}

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
    age: Option<i32>,
}

fn profile() -> Ty<Profile> {
    RecordBuilder::new("profile")
        .field("name", Ty::string(), |p: &Profile| &p.name)
        .field("age", Ty::option(Ty::int32()), |p: &Profile| &p.age)
        .seal_with(|f| Profile {
            name: f.take(),
            age: f.take(),
        })
}

#[derive(Debug, Clone, PartialEq)]
enum Shape {
    Square,
    Circle(f64),
}

fn shape() -> Ty<Shape> {
    let mut b = VariantBuilder::new("shape");
    let square = b.case0("square", Shape::Square);
    let circle = b.case1("circle", Ty::float(), Shape::Circle);
    b.seal(move |s| match s {
        Shape::Square => square.tag(),
        Shape::Circle(r) => circle.tag(r),
    })
}

#[derive(Debug, PartialEq)]
struct Cell {
    head: isize,
    tail: Option<Box<Cell>>,
}

fn cell() -> Ty<Cell> {
    Ty::fix(|cell| {
        RecordBuilder::new("cell")
            .field("head", Ty::int(), |c: &Cell| &c.head)
            .field("tail", Ty::option(Ty::boxed(cell)), |c: &Cell| &c.tail)
            .seal_with(|f| Cell {
                head: f.take(),
                tail: f.take(),
            })
    })
}

fn missing(record: &str, field: &str) -> ParseError {
    ParseError::MissingField {
        record: record.to_owned(),
        field: field.to_owned(),
    }
}

#[test]
fn lists_and_arrays() {
    assert_eq!(parse(&Ty::list(Ty::int()), "[1, 2, 3]"), Ok(vec![1, 2, 3]));
    assert_eq!(parse(&Ty::list(Ty::int()), "[]"), Ok(vec![]));
    assert_eq!(
        parse(&Ty::array_with(Ty::bool(), Len::U8), "[true, false]"),
        Ok(vec![true, false].into_boxed_slice())
    );
    assert_eq!(
        parse(&Ty::list(Ty::int()), r#"{"a": 1}"#),
        Err(ParseError::mismatch("array", "object"))
    );
}

#[test]
fn options() {
    assert_eq!(parse(&Ty::option(Ty::int()), "null"), Ok(None));
    assert_eq!(parse(&Ty::option(Ty::int()), "4"), Ok(Some(4)));
    assert_eq!(
        parse(&Ty::list(Ty::option(Ty::string())), r#"["a", null]"#),
        Ok(vec![Some("a".to_owned()), None])
    );
}

#[test]
fn tuples_need_exact_arity() {
    let pair = Ty::pair(Ty::int(), Ty::string());
    assert_eq!(parse(&pair, r#"[1, "one"]"#), Ok((1, "one".to_owned())));

    let triple = Ty::triple(Ty::bool(), Ty::char(), Ty::float());
    assert_eq!(parse(&triple, r#"[true, "c", 0.5]"#), Ok((true, 'c', 0.5)));

    assert_eq!(
        parse(&pair, "[1]"),
        Err(ParseError::mismatch("array of 2 items", "array of 1 items"))
    );
}

#[test]
fn records() {
    assert_eq!(
        parse(&point(), r#"{"x": 3, "y": -4}"#),
        Ok(Point { x: 3, y: -4 })
    );
    // Key order in the input does not matter.
    assert_eq!(
        parse(&point(), r#"{"y": 2, "x": 1}"#),
        Ok(Point { x: 1, y: 2 })
    );
}

#[test]
fn record_field_errors() {
    assert_eq!(parse(&point(), r#"{"x": 3}"#), Err(missing("point", "y")));
    assert_eq!(
        parse(&point(), r#"{"x": 3, "y": 4, "z": 5}"#),
        Err(ParseError::UnknownField {
            record: "point".to_owned(),
            field: "z".to_owned(),
        })
    );
    assert_eq!(
        parse(&point(), "[3, 4]"),
        Err(ParseError::mismatch("object", "array"))
    );
}

#[test]
fn absent_option_field_is_none() {
    assert_eq!(
        parse(&profile(), r#"{"name": "ada"}"#),
        Ok(Profile {
            name: "ada".to_owned(),
            age: None,
        })
    );
    assert_eq!(parse(&profile(), r#"{"age": 36}"#), Err(missing("profile", "name")));
}

#[test]
fn record_without_constructor_is_unsupported() {
    let ty = RecordBuilder::<Point>::new("point")
        .field("x", Ty::int(), |p: &Point| &p.x)
        .seal();
    assert_eq!(
        parse(&ty, r#"{"x": 1}"#),
        Err(ParseError::Unsupported {
            shape: "record `point` (no constructor)".to_owned()
        })
    );
}

#[test]
fn variants() {
    assert_eq!(parse(&shape(), r#""square""#), Ok(Shape::Square));
    assert_eq!(parse(&shape(), r#""Square""#), Ok(Shape::Square));
    assert_eq!(parse(&shape(), r#"{"Circle": 2.5}"#), Ok(Shape::Circle(2.5)));
    assert_eq!(parse(&shape(), r#"{"circle": 1}"#), Ok(Shape::Circle(1.0)));
}

#[test]
fn variant_errors() {
    assert_eq!(
        parse(&shape(), r#""Hexagon""#),
        Err(ParseError::UnknownCase {
            variant: "shape".to_owned(),
            case: "Hexagon".to_owned(),
        })
    );
    assert_eq!(
        parse(&shape(), r#""Circle""#),
        Err(ParseError::mismatch("`Circle` with a payload", "bare case name"))
    );
    assert_eq!(
        parse(&shape(), r#"{"Square": 1}"#),
        Err(ParseError::mismatch("bare `Square`", "case with a payload"))
    );
    assert_eq!(
        parse(&shape(), r#"{"Square": 1, "Circle": 2}"#),
        Err(ParseError::mismatch("case name or single-key object", "object"))
    );
}

#[test]
fn chars_are_single_character_strings() {
    let ty = Ty::list(Ty::char());
    assert_eq!(parse(&ty, r#"["a", "é"]"#), Ok(vec!['a', 'é']));
    assert_eq!(
        parse(&ty, r#"["ab"]"#),
        Err(ParseError::invalid_literal("char", "ab"))
    );
}

#[test]
fn integer_ranges() {
    let ty = Ty::list(Ty::int32());
    assert_eq!(parse(&ty, "[2147483647]"), Ok(vec![i32::MAX]));
    assert_eq!(
        parse(&ty, "[2147483648]"),
        Err(ParseError::out_of_range("int32", "2147483648"))
    );
    assert_eq!(
        parse(&Ty::list(Ty::int64()), "[18446744073709551615]"),
        Err(ParseError::out_of_range("int64", "18446744073709551615"))
    );
    assert_eq!(
        parse(&Ty::list(Ty::int()), "[1.5]"),
        Err(ParseError::invalid_literal("int", "1.5"))
    );
}

#[test]
fn floats_accept_special_strings() {
    let ty = Ty::list(Ty::float());
    let parsed = parse(&ty, r#"[1, 2.5, "infinity", "neg_infinity", "nan"]"#).unwrap();
    assert_eq!(parsed[..4], [1.0, 2.5, f64::INFINITY, f64::NEG_INFINITY]);
    assert!(parsed[4].is_nan());

    assert_eq!(
        parse(&ty, r#"["huge"]"#),
        Err(ParseError::invalid_literal("float", "huge"))
    );
}

#[test]
fn primitive_kind_mismatch() {
    assert_eq!(
        parse(&Ty::list(Ty::bool()), "[1]"),
        Err(ParseError::mismatch("bool", "number"))
    );
    assert_eq!(
        parse(&Ty::option(Ty::string()), "[]"),
        Err(ParseError::mismatch("string", "array"))
    );
    assert_eq!(parse(&Ty::list(Ty::unit()), "[null]"), Ok(vec![()]));
}

#[test]
fn bytes_from_strings() {
    assert_eq!(
        parse(&Ty::list(Ty::bytes()), r#"["ok"]"#),
        Ok(vec![b"ok".to_vec()])
    );
}

#[test]
fn custom_inside_structure() {
    let hex: Ty<u32> = Ty::custom(
        |out, v: &u32| out.push_str(&format!("{v:x}")),
        |text| u32::from_str_radix(text, 16).map_err(|e| ParseError::msg(e.to_string())),
    );
    assert_eq!(parse(&Ty::list(hex.clone()), r#"["ff", 10]"#), Ok(vec![255, 16]));
    assert_eq!(
        parse(&Ty::list(hex), r#"["zz"]"#),
        Err(ParseError::msg("invalid digit found in string"))
    );
}

#[test]
fn malformed_json_is_a_syntax_error() {
    let err = parse(&Ty::list(Ty::int()), "[1, 2").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { .. }), "{err:?}");
}

#[test]
fn recursive_record() {
    let text = indoc! {r#"
        {
          "head": 1,
          "tail": {"head": 2, "tail": {"head": 3}}
        }
    "#};
    let expected = Cell {
        head: 1,
        tail: Some(Box::new(Cell {
            head: 2,
            tail: Some(Box::new(Cell {
                head: 3,
                tail: None,
            })),
        })),
    };
    assert_eq!(parse(&cell(), text), Ok(expected));
}

#[test]
fn decode_value_works_on_parsed_json() {
    let value = json!({"x": 10, "y": 20});
    let decoded = JsonDecoder.decode_value(point().node(), &value).unwrap();
    assert_eq!(decoded.downcast_ref::<Point>(), Some(&Point { x: 10, y: 20 }));
}

#[test]
#[should_panic(expected = "unbound type variable `'a`")]
fn var_is_fatal() {
    let ty: Ty<Vec<isize>> = Ty::list(Ty::var("'a"));
    let _ = parse(&ty, "[1]");
}
