use nom::{bytes::complete::take_while_m_n, IResult};

use chrono::NaiveDate;

pub type Input<'a> = &'a str;

/// A section of exactly `length` ASCII digits.
pub fn digits_exact<'a>(length: usize) -> impl Fn(Input<'a>) -> IResult<Input<'a>, Input<'a>> {
    move |input| take_while_m_n(length, length, |c: char| c.is_ascii_digit())(input)
}

/// A section of exactly `length` characters, each an uppercase letter or a
/// digit.
pub fn uppercase_alphanumeric_exact<'a>(
    length: usize,
) -> impl Fn(Input<'a>) -> IResult<Input<'a>, Input<'a>> {
    move |input| {
        take_while_m_n(length, length, |c: char| {
            c.is_ascii_uppercase() || c.is_ascii_digit()
        })(input)
    }
}

/// Dates in the industry's distributor data files are `DD/MM/YYYY`.
pub fn date_dmy(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d/%m/%Y").ok()
}

/// A field extracted from an MPAN, keyed by its raw identifier string.
///
/// Identifiers that don't appear in the reference tables are representable;
/// they answer `false` to [`is_valid`](Subsection::is_valid) and their
/// descriptive lookups return `None`.
pub trait Subsection {
    fn identifier(&self) -> &str;

    fn is_valid(&self) -> bool;

    fn description(&self) -> Option<&'static str> {
        None
    }
}
