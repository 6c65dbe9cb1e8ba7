use crate::value::Value;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete as character,
    combinator::{all_consuming, map, value},
    number::complete::double,
    IResult,
};

fn boolean(i: &str) -> IResult<&str, Value> {
    let parse_true = value(Value::Bool(true), tag("true"));

    let parse_false = value(Value::Bool(false), tag("false"));

    alt((all_consuming(parse_true), all_consuming(parse_false)))(i)
}

fn null(i: &str) -> IResult<&str, Value> {
    all_consuming(value(Value::Null, tag("null")))(i)
}

// Integers that do not fit in 32 bits fail here and are read as floats.
fn integer(i: &str) -> IResult<&str, Value> {
    map(all_consuming(character::i32), Value::Integer)(i)
}

fn float(i: &str) -> IResult<&str, Value> {
    map(all_consuming(double), Value::Float)(i)
}

/// Classifies an unquoted token. Every branch has to consume the whole
/// token, so `12.5` is never taken for the integer `12`.
pub fn classify(token: &str) -> Option<Value> {
    alt((boolean, null, integer, float))(token)
        .ok()
        .map(|(_, value)| value)
}
