use std::thread;

use indoc::indoc;

use crate::{
    Config, ParseError, Parser, RecordBuilder, Ty, UnsupportedDecoder, ValuePrinter,
    VariantBuilder, describe, dump, parse, print,
};

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
enum Shape {
    Circle(f64),
    Square,
}

fn shape() -> Ty<Shape> {
    let mut b = VariantBuilder::new("shape");
    let circle = b.case1("circle", Ty::float(), Shape::Circle);
    let square = b.case0("square", Shape::Square);
    b.seal(move |s| match s {
        Shape::Circle(r) => circle.tag(r),
        Shape::Square => square.tag(),
    })
}

struct Rose(Vec<Rose>);

fn rose() -> Ty<Rose> {
    Ty::fix(|rose| Ty::map_ref(Ty::list(rose), Rose, |r: &Rose| &r.0))
}

#[test]
fn point_record() {
    let p = Point { x: 3, y: -4 };
    assert_eq!(print(&point(), &p), "{ x: 3; y: -4 }");
    assert_eq!(describe(&point()), "(< x : int; y : int > as point)");
    assert_eq!(parse(&point(), r#"{"x": 3, "y": -4}"#), Ok(p));
}

#[test]
fn shape_variant() {
    assert_eq!(print(&shape(), &Shape::Square), "Square");
    assert_eq!(print(&shape(), &Shape::Circle(2.5)), "Circle (2.5)");
    assert_eq!(describe(&shape()), "([ `Circle of float | `Square ] as shape)");
}

#[test]
fn integers_round_trip_through_text() {
    let mut parser = Parser::new(UnsupportedDecoder);
    for n in [0, 1, -1, 42, isize::MIN, isize::MAX] {
        assert_eq!(parser.parse(&Ty::int(), &print(&Ty::int(), &n)), Ok(n));
    }
    for n in [i32::MIN, -7, i32::MAX] {
        assert_eq!(parser.parse(&Ty::int32(), &print(&Ty::int32(), &n)), Ok(n));
    }
    for n in [i64::MIN, 1 << 40, i64::MAX] {
        assert_eq!(parser.parse(&Ty::int64(), &print(&Ty::int64(), &n)), Ok(n));
    }
}

#[test]
fn bools_round_trip_through_text() {
    for b in [true, false] {
        assert_eq!(parse(&Ty::bool(), &print(&Ty::bool(), &b)), Ok(b));
    }
}

#[test]
fn floats_round_trip_through_text() {
    for x in [
        0.0,
        -0.0,
        0.1,
        -2.5,
        1e-320,
        123456.789,
        f64::MAX,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ] {
        let text = print(&Ty::float(), &x);
        let back = parse(&Ty::float(), &text);
        assert_eq!(back.map(f64::to_bits), Ok(x.to_bits()), "{text}");
    }

    let nan = parse(&Ty::float(), &print(&Ty::float(), &f64::NAN));
    assert!(nan.is_ok_and(f64::is_nan));
}

#[test]
fn char_parse_rejects_short_text() {
    assert!(parse(&Ty::char(), "").is_err());
    assert!(parse(&Ty::char(), "x").is_err());
}

#[test]
fn string_print_and_parse_are_asymmetric() {
    let s = String::from("hi");
    let printed = print(&Ty::string(), &s);
    assert_eq!(printed, r#""hi""#);
    assert_eq!(parse(&Ty::string(), &printed), Ok(printed.clone()));
}

#[test]
fn twenty_seven_fixpoints_get_distinct_names() {
    let mut builder = RecordBuilder::<Vec<Rose>>::new("forest");
    for i in 0..27 {
        builder = builder.field(format!("f{i}"), rose(), move |v: &Vec<Rose>| &v[i]);
    }
    let out = describe(&builder.seal());

    let vars: Vec<&str> = out
        .split(" as ")
        .skip(1)
        .map(|rest| rest.split(')').next().unwrap_or_default())
        .collect();
    assert_eq!(vars.len(), 28);
    assert_eq!(vars[0], "'a");
    assert_eq!(vars[25], "'z");
    assert_eq!(vars[26], "'aa");
    assert_eq!(vars[27], "forest");
}

#[test]
fn named_fixpoint_has_no_variable_alias() {
    #[derive(Debug, PartialEq)]
    struct Cell {
        head: isize,
        tail: Option<Box<Cell>>,
    }

    let cell: Ty<Cell> = Ty::fix(|cell| {
        RecordBuilder::new("cell")
            .field("head", Ty::int(), |c: &Cell| &c.head)
            .field("tail", Ty::option(Ty::boxed(cell)), |c: &Cell| &c.tail)
            .seal_with(|f| Cell {
                head: f.take(),
                tail: f.take(),
            })
    });

    let out = describe(&cell);
    assert!(!out.contains("'a"), "{out}");

    let value = parse(&cell, r#"{"head": 1, "tail": {"head": 2}}"#).unwrap();
    insta::assert_snapshot!(print(&cell, &value), @"{ head: 1; tail: Some ({ head: 2; tail: None }) }");
}

#[test]
fn json_errors_name_the_culprit() {
    assert_eq!(
        parse(&point(), r#"{"x": 1}"#),
        Err(ParseError::MissingField {
            record: "point".to_owned(),
            field: "y".to_owned(),
        })
    );
    assert_eq!(
        parse(&shape(), r#""Triangle""#),
        Err(ParseError::UnknownCase {
            variant: "shape".to_owned(),
            case: "Triangle".to_owned(),
        })
    );
}

#[test]
fn pretty_dump() {
    let ty = Ty::list(point());
    let value = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];

    assert_eq!(
        format!("{:#}", dump(&ty, &value)),
        indoc! {"
            [
              {
                x: 1;
                y: 2
              };
              {
                x: 3;
                y: 4
              }
            ]"}
    );
    assert_eq!(
        ValuePrinter::new(Config::new()).print(&ty, &value),
        "[{ x: 1; y: 2 }; { x: 3; y: 4 }]"
    );
}

#[test]
fn descriptors_are_shared_across_threads() {
    let ty = Ty::pair(rose(), shape());
    let expected = describe(&ty);

    thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| describe(&ty))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
