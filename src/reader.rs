// ABOUTME: Reader module for parsing Lisp source text using nom combinators

//! Parses source text into `Value` trees directly — there is no intermediate
//! generic parse-tree node type. Grammar:
//!
//! ```text
//! comment : ';' to end-of-line
//! number  : optional '-' followed by one or more digits
//! string  : '"' ( '\' any | any-except-'"' )* '"'
//! symbol  : one or more of [A-Za-z0-9_+\-*/\\=<>!&]
//! sexpr   : '(' expr* ')'
//! qexpr   : '{' expr* '}'
//! expr    : comment | number | string | symbol | sexpr | qexpr
//! program : expr*
//! ```

use nom::{
    branch::alt,
    bytes::complete::{escaped, take_while, take_while1},
    character::complete::{char, digit1, multispace1, none_of, one_of},
    combinator::{opt, recognize, value},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};

use crate::error::ReaderError;
use crate::value::Value;

fn comment(input: &str) -> IResult<&str, ()> {
    value((), (char(';'), take_while(|c| c != '\n'))).parse(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    value((), many0(alt((value((), multispace1), comment)))).parse(input)
}

fn number(input: &str) -> IResult<&str, Value> {
    recognize((opt(char('-')), digit1))
        .map(|s: &str| match s.parse::<i64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Error("invalid number".to_string()),
        })
        .parse(input)
}

const SYMBOL_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_+-*/\\=<>!&";

fn symbol(input: &str) -> IResult<&str, Value> {
    take_while1(|c: char| SYMBOL_CHARS.contains(c))
        .map(|s: &str| Value::Symbol(s.to_string()))
        .parse(input)
}

fn decode_escapes(content: &str) -> String {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('r') => result.push('\r'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn string(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('"')(input)?;
    if let Ok((input, _)) = char::<_, nom::error::Error<&str>>('"')(input) {
        return Ok((input, Value::Str(String::new())));
    }
    let (input, content) = escaped(none_of("\"\\"), '\\', one_of("\"\\nrt"))(input)?;
    let (input, _) = char('"')(input)?;
    Ok((input, Value::Str(decode_escapes(content))))
}

/// Parses the children of a delimited form by hand (rather than `many0` +
/// closing-delimiter combinator) so a missing close paren/brace surfaces as
/// an error instead of `many0` silently stopping at end-of-input.
fn delimited_children(mut input: &str, close: char) -> IResult<&str, Vec<Value>> {
    let mut items = Vec::new();
    loop {
        let (rest, _) = ws(input)?;
        if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>(close)(rest) {
            return Ok((rest, items));
        }
        let (rest, item) = expr(rest)?;
        items.push(item);
        input = rest;
    }
}

fn sexpr(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('(')(input)?;
    let (input, items) = delimited_children(input, ')')?;
    Ok((input, Value::SExpr(items)))
}

fn qexpr(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('{')(input)?;
    let (input, items) = delimited_children(input, '}')?;
    Ok((input, Value::QExpr(items)))
}

fn expr(input: &str) -> IResult<&str, Value> {
    alt((sexpr, qexpr, number, string, symbol)).parse(input)
}

/// Parses a single line (REPL mode): exactly one top-level expression.
pub fn read_line(input: &str) -> Result<Value, ReaderError> {
    let (rest, _) = ws(input).map_err(|e| ReaderError::Syntax(format!("{e:?}")))?;
    if rest.trim().is_empty() {
        return Ok(Value::SExpr(vec![]));
    }
    let (rest, value) = expr(rest).map_err(|e| ReaderError::Syntax(format!("{e:?}")))?;
    let (rest, _) = ws(rest).unwrap_or((rest, ()));
    if !rest.is_empty() {
        return Err(ReaderError::Syntax(format!("unexpected trailing input: '{rest}'")));
    }
    Ok(value)
}

/// Parses an entire source file (`load`/file-mode): zero or more top-level
/// expressions, returned individually so the caller can evaluate each in
/// turn rather than as one combined S-expression.
pub fn read_program(input: &str) -> Result<Vec<Value>, ReaderError> {
    let (rest, _) = ws(input).map_err(|e| ReaderError::Syntax(format!("{e:?}")))?;
    let (rest, items) = many0(preceded(ws, expr))
        .parse(rest)
        .map_err(|e| ReaderError::Syntax(format!("{e:?}")))?;
    let (rest, _) = ws(rest).unwrap_or((rest, ()));
    if !rest.is_empty() {
        return Err(ReaderError::Syntax(format!("unexpected trailing input: '{rest}'")));
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number() {
        assert!(matches!(read_line("42"), Ok(Value::Number(42))));
        assert!(matches!(read_line("-7"), Ok(Value::Number(-7))));
    }

    #[test]
    fn parses_symbol() {
        match read_line("foo-bar!") {
            Ok(Value::Symbol(s)) => assert_eq!(s, "foo-bar!"),
            other => panic!("expected symbol, got {other:?}"),
        }
    }

    #[test]
    fn parses_operator_symbols() {
        for op in ["+", "-", "*", "/", "<", ">", "<=", ">=", "==", "!=", "&"] {
            match read_line(op) {
                Ok(Value::Symbol(s)) => assert_eq!(s, op),
                other => panic!("expected symbol {op}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_string_with_escapes() {
        match read_line(r#""a\nb\t\"c\"""#) {
            Ok(Value::Str(s)) => assert_eq!(s, "a\nb\t\"c\""),
            other => panic!("expected string, got {other:?}"),
        }
    }

    #[test]
    fn parses_empty_string() {
        assert!(matches!(read_line("\"\""), Ok(Value::Str(s)) if s.is_empty()));
    }

    #[test]
    fn parses_sexpr_and_qexpr() {
        match read_line("(+ 1 2)") {
            Ok(Value::SExpr(items)) => assert_eq!(items.len(), 3),
            other => panic!("expected sexpr, got {other:?}"),
        }
        match read_line("{1 2 3}") {
            Ok(Value::QExpr(items)) => assert_eq!(items.len(), 3),
            other => panic!("expected qexpr, got {other:?}"),
        }
    }

    #[test]
    fn parses_nested_expressions() {
        match read_line("(def {x} (head {1 2 3}))") {
            Ok(Value::SExpr(items)) => {
                assert_eq!(items.len(), 3);
                assert!(matches!(&items[1], Value::QExpr(_)));
                assert!(matches!(&items[2], Value::SExpr(_)));
            }
            other => panic!("expected sexpr, got {other:?}"),
        }
    }

    #[test]
    fn skips_comments() {
        match read_line("; a comment\n(+ 1 2) ; trailing") {
            Ok(Value::SExpr(items)) => assert_eq!(items.len(), 3),
            other => panic!("expected sexpr, got {other:?}"),
        }
    }

    #[test]
    fn rejects_multiple_top_level_forms_on_one_line() {
        assert!(read_line("1 2").is_err());
    }

    #[test]
    fn empty_line_is_empty_sexpr() {
        assert!(matches!(read_line("   "), Ok(Value::SExpr(items)) if items.is_empty()));
    }

    #[test]
    fn read_program_returns_each_top_level_form_separately() {
        let forms = read_program("(def {x} 1)\n(def {y} 2)\n(+ x y)").unwrap();
        assert_eq!(forms.len(), 3);
    }

    #[test]
    fn read_program_skips_comment_only_lines() {
        let forms = read_program("; header comment\n(+ 1 1)\n; trailing\n").unwrap();
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn unclosed_sexpr_is_an_error() {
        assert!(read_line("(+ 1 2").is_err());
    }
}
