//! Format template mini-language: `%i`, `%f`, `%s`, `%%`.
//!
//! A [`Format`] is a validated template. [`Format::new`] is `const`, so a
//! template bound to a `const` or `static` is checked at compile time and a
//! malformed directive is a compile error. The latest point a malformed
//! template can surface is the first runtime construction of the `Format`,
//! which is always before any byte is rendered.
//!
//! Directive/argument arity and directive-kind versus argument-variant
//! agreement are contract violations checked once per render call; they
//! panic rather than returning an error, because they indicate a defect at
//! the call site and not an environmental condition.

use crate::decimal::{
    MAX_F64_LEN, MAX_I64_DIGITS, buf_print_f64, buf_print_i64, buf_print_u64,
};

/// A validated format template.
#[derive(Debug, Clone, Copy)]
pub struct Format<'a> {
    template: &'a [u8],
    directives: usize,
}

impl<'a> Format<'a> {
    /// Validate `template` and count its argument-consuming directives.
    ///
    /// Panics on a directive other than `%i`, `%f`, `%s`, `%%`, and on a
    /// trailing bare `%`. In const context the panic is a compile error.
    pub const fn new(template: &'a str) -> Format<'a> {
        let bytes = template.as_bytes();
        let mut directives = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                i += 1;
                if i == bytes.len() {
                    panic!("format template ends with a bare '%'");
                }
                match bytes[i] {
                    b'i' | b'f' | b's' => directives += 1,
                    b'%' => {}
                    _ => panic!("unknown directive after '%' (expected i, f, s, or %)"),
                }
            }
            i += 1;
        }
        Format {
            template: bytes,
            directives,
        }
    }

    /// The raw template bytes.
    pub const fn template(&self) -> &'a [u8] {
        self.template
    }

    /// How many arguments a render of this template consumes.
    pub const fn directives(&self) -> usize {
        self.directives
    }
}

/// A typed positional argument for a render call.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(&'a [u8]),
}

/// Scanner states of the single-pass template walk.
#[derive(Clone, Copy)]
enum State {
    /// Outside any literal run.
    Start,
    /// Inside a literal run that began at the recorded index.
    Literal(usize),
    /// Just consumed `%`, awaiting the directive byte.
    SawPercent,
}

/// Drive `format` over `args`, handing each output fragment to `sink`.
///
/// Returns the total byte count produced. The sink's first error aborts
/// the walk and is returned as-is, so streams keep their own failure
/// semantics.
///
/// Panics if `args.len()` differs from the template's directive count or
/// an argument variant does not match its directive.
pub fn render<E, F>(format: &Format<'_>, args: &[Arg<'_>], sink: &mut F) -> Result<usize, E>
where
    F: FnMut(&[u8]) -> Result<(), E>,
{
    assert_eq!(
        format.directives(),
        args.len(),
        "format template consumes {} argument(s), {} supplied",
        format.directives(),
        args.len()
    );

    let template = format.template();
    let mut state = State::Start;
    let mut next_arg = 0;
    let mut total = 0;

    let mut i = 0;
    while i < template.len() {
        let byte = template[i];
        match state {
            State::Start => {
                state = if byte == b'%' {
                    State::SawPercent
                } else {
                    State::Literal(i)
                };
            }
            State::Literal(run_start) => {
                if byte == b'%' {
                    sink(&template[run_start..i])?;
                    total += i - run_start;
                    state = State::SawPercent;
                }
            }
            State::SawPercent => {
                match byte {
                    b'i' => {
                        let mut scratch = [0u8; MAX_I64_DIGITS];
                        let n = match args[next_arg] {
                            Arg::Int(v) => buf_print_i64(v, &mut scratch),
                            Arg::Uint(v) => buf_print_u64(v, &mut scratch),
                            _ => panic!("%i directive requires an integer argument"),
                        };
                        next_arg += 1;
                        sink(&scratch[..n])?;
                        total += n;
                    }
                    b'f' => {
                        let Arg::Float(v) = args[next_arg] else {
                            panic!("%f directive requires a float argument");
                        };
                        next_arg += 1;
                        let mut scratch = [0u8; MAX_F64_LEN];
                        let n = buf_print_f64(v, &mut scratch);
                        sink(&scratch[..n])?;
                        total += n;
                    }
                    b's' => {
                        let Arg::Str(bytes) = args[next_arg] else {
                            panic!("%s directive requires a byte-string argument");
                        };
                        next_arg += 1;
                        sink(bytes)?;
                        total += bytes.len();
                    }
                    b'%' => {
                        sink(b"%")?;
                        total += 1;
                    }
                    // Format::new rejected everything else.
                    _ => unreachable!("directive byte survived template validation"),
                }
                state = State::Start;
            }
        }
        i += 1;
    }

    match state {
        State::Literal(run_start) => {
            sink(&template[run_start..])?;
            total += template.len() - run_start;
        }
        // A trailing bare '%' was rejected by Format::new.
        State::SawPercent => unreachable!("trailing '%' survived template validation"),
        State::Start => {}
    }

    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    // Compile-time validation: these templates are checked by rustc.
    const GREETING: Format<'static> = Format::new("%i and %s\n");
    const PLAIN: Format<'static> = Format::new("no directives here");

    fn render_to_vec(format: &Format<'_>, args: &[Arg<'_>]) -> Vec<u8> {
        let mut out = Vec::new();
        let total = render::<Infallible, _>(format, args, &mut |bytes| {
            out.extend_from_slice(bytes);
            Ok(())
        })
        .unwrap();
        assert_eq!(total, out.len());
        out
    }

    #[test]
    fn test_directive_count() {
        assert_eq!(GREETING.directives(), 2);
        assert_eq!(PLAIN.directives(), 0);
        assert_eq!(Format::new("%%").directives(), 0);
        assert_eq!(Format::new("%i%f%s").directives(), 3);
    }

    #[test]
    fn test_render_mixed() {
        let out = render_to_vec(&Format::new("%i and %s"), &[Arg::Int(42), Arg::Str(b"x")]);
        assert_eq!(out, b"42 and x");
    }

    #[test]
    fn test_render_literal_only() {
        assert_eq!(render_to_vec(&PLAIN, &[]), b"no directives here");
        assert_eq!(render_to_vec(&Format::new(""), &[]), b"");
    }

    #[test]
    fn test_render_percent_escape() {
        let out = render_to_vec(&Format::new("100%% of %i"), &[Arg::Uint(7)]);
        assert_eq!(out, b"100% of 7");
    }

    #[test]
    fn test_render_adjacent_directives() {
        let out = render_to_vec(
            &Format::new("%s%i%s"),
            &[Arg::Str(b"["), Arg::Int(-5), Arg::Str(b"]")],
        );
        assert_eq!(out, b"[-5]");
    }

    #[test]
    fn test_render_float() {
        let out = render_to_vec(&Format::new("pi=%f"), &[Arg::Float(3.5)]);
        assert_eq!(out, b"pi=3.5000");
    }

    #[test]
    fn test_render_uint_and_int_min() {
        let out = render_to_vec(
            &Format::new("%i %i"),
            &[Arg::Uint(u64::MAX), Arg::Int(i64::MIN)],
        );
        assert_eq!(out, b"18446744073709551615 -9223372036854775808");
    }

    #[test]
    #[should_panic(expected = "bare '%'")]
    fn test_trailing_percent_rejected() {
        let _ = Format::new("oops %");
    }

    #[test]
    #[should_panic(expected = "unknown directive")]
    fn test_unknown_directive_rejected() {
        let _ = Format::new("%d");
    }

    #[test]
    #[should_panic(expected = "argument(s)")]
    fn test_arity_mismatch_panics() {
        let _ = render_to_vec(&Format::new("%i"), &[]);
    }

    #[test]
    #[should_panic(expected = "integer argument")]
    fn test_argument_kind_mismatch_panics() {
        let _ = render_to_vec(&Format::new("%i"), &[Arg::Str(b"nope")]);
    }

    #[test]
    fn test_sink_error_aborts_walk() {
        let mut calls = 0;
        let result = render::<&'static str, _>(
            &Format::new("ab%icd"),
            &[Arg::Int(1)],
            &mut |_bytes| {
                calls += 1;
                if calls == 2 { Err("sink failed") } else { Ok(()) }
            },
        );
        assert_eq!(result, Err("sink failed"));
        assert_eq!(calls, 2);
    }
}
