//! Flat CSS rule-block parser.
//!
//! Only the subset the stylesheet emitter produces is accepted: a sequence of
//! `selector { name: value; ... }` blocks with no nesting, at-rules, or
//! comments.

use nom::{
    bytes::complete::{take_till1, take_while1},
    character::complete::{char, multispace0},
    combinator::{all_consuming, map, opt, verify},
    multi::many0,
    sequence::{delimited, pair, preceded, separated_pair, terminated},
    Finish, IResult,
};

/// One `name: value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub property: &'a str,
    pub value: &'a str,
}

/// A selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule<'a> {
    pub selector: &'a str,
    pub declarations: Vec<Declaration<'a>>,
}

/// Parse a whole stylesheet. Trailing garbage is an error.
pub fn parse_rules(input: &str) -> Result<Vec<CssRule<'_>>, nom::error::Error<&str>> {
    all_consuming(terminated(many0(rule), multispace0))(input)
        .finish()
        .map(|(_, rules)| rules)
}

fn selector(input: &str) -> IResult<&str, &str> {
    verify(
        map(take_till1(|c: char| c == '{' || c == '}'), str::trim),
        |s: &str| !s.is_empty(),
    )(input)
}

fn property(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)
}

fn value(input: &str) -> IResult<&str, &str> {
    verify(
        map(take_till1(|c: char| c == ';' || c == '}'), str::trim),
        |s: &str| !s.is_empty(),
    )(input)
}

fn declaration(input: &str) -> IResult<&str, Declaration<'_>> {
    map(
        terminated(
            separated_pair(
                preceded(multispace0, property),
                delimited(multispace0, char(':'), multispace0),
                value,
            ),
            opt(char(';')),
        ),
        |(property, value)| Declaration { property, value },
    )(input)
}

fn rule(input: &str) -> IResult<&str, CssRule<'_>> {
    map(
        pair(
            preceded(multispace0, selector),
            delimited(
                char('{'),
                many0(declaration),
                preceded(multispace0, char('}')),
            ),
        ),
        |(selector, declarations)| CssRule {
            selector,
            declarations,
        },
    )(input)
}
