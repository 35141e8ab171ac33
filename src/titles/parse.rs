use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till};
use nom::character::complete::char;
use nom::combinator::{map, value};
use nom::multi::{fold_many0, separated_list0, separated_list1};
use nom::sequence::delimited;
use nom::IResult;

pub type Record = Vec<String>;

fn line_ending(input: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), tag("\n")))(input)
}

fn quoted_content(input: &str) -> IResult<&str, String> {
    fold_many0(
        alt((value("\"", tag("\"\"")), is_not("\""))),
        String::new,
        |mut acc, s| {
            acc.push_str(s);
            acc
        },
    )(input)
}

fn quoted(input: &str) -> IResult<&str, String> {
    delimited(char('"'), quoted_content, char('"'))(input)
}

fn unquoted(input: &str) -> IResult<&str, String> {
    map(take_till(|c: char| c == ',' || c == '\n' || c == '\r'), |s: &str| s.to_string())(input)
}

fn field(input: &str) -> IResult<&str, String> {
    alt((quoted, unquoted))(input)
}

pub fn record(input: &str) -> IResult<&str, Record> {
    separated_list1(char(','), field)(input)
}

/// Every record of a CSV document. A trailing line ending yields one final
/// record holding a single empty field.
pub fn records(input: &str) -> IResult<&str, Vec<Record>> {
    separated_list0(line_ending, record)(input)
}
