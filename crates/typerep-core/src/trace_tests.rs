use crate::trace::{NoopTracer, Pass, PrintTracer, Tracer, Verbosity};
use crate::{Colors, Kind, ParseError};

fn drive(tracer: &mut impl Tracer) {
    tracer.trace_enter(Pass::Print, Kind::Fix, 0);
    tracer.trace_unroll(Pass::Print, 0);
    tracer.trace_enter(Pass::Print, Kind::Record, 1);
    tracer.trace_enter(Pass::Print, Kind::Prim, 2);
    tracer.trace_parse_failure(Kind::Prim, 1, &ParseError::invalid_literal("int", "x"));
}

#[test]
fn default_verbosity_keeps_unrolls_and_failures() {
    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    drive(&mut tracer);

    insta::assert_snapshot!(tracer.dump(), @r#"
    print    ↻ unroll self
    parse      prim failed: invalid int literal "x"
    "#);
}

#[test]
fn verbose_includes_every_node() {
    let mut tracer = PrintTracer::new(Verbosity::Verbose, Colors::OFF);
    drive(&mut tracer);

    insta::assert_snapshot!(tracer.dump(), @r#"
    print    self
    print    ↻ unroll self
    print      record
    print        prim
    parse      prim failed: invalid int literal "x"
    "#);
}

#[test]
fn colored_lines_carry_escape_codes() {
    let mut tracer = PrintTracer::new(Verbosity::Verbose, Colors::ON);
    tracer.trace_enter(Pass::Describe, Kind::Variant, 0);

    let line = &tracer.lines()[0];
    assert!(line.starts_with("\x1b[2mdescribe"));
    assert!(line.contains("\x1b[34mvariant\x1b[0m"));
}

#[test]
fn tracer_by_mutable_reference() {
    fn unroll_once(mut tracer: impl Tracer) {
        tracer.trace_unroll(Pass::Parse, 2);
    }

    let mut tracer = PrintTracer::new(Verbosity::Default, Colors::OFF);
    unroll_once(&mut tracer);
    assert_eq!(tracer.lines().len(), 1);
}

#[test]
fn noop_tracer_accepts_everything() {
    drive(&mut NoopTracer);
}

#[test]
fn pass_names() {
    assert_eq!(Pass::Print.as_str(), "print");
    assert_eq!(Pass::Describe.as_str(), "describe");
    assert_eq!(Pass::Parse.as_str(), "parse");
}
