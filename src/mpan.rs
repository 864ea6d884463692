//! The MPAN format itself: parsing, the check digit, and validity.

use std::fmt;
use std::str::FromStr;

use nom::{
    combinator::{all_consuming, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::codes::{Distributor, MeterTimeSwitchCode, ProfileClass};
use crate::common::{digits_exact, uppercase_alphanumeric_exact, Input, Subsection};
use crate::error::{Error, Result};

/// Check digit weights. 11 is deliberately missing from the prime sequence
/// as per the rules for the validation algorithm.
const PRIMES: [u32; 12] = [3, 5, 7, 13, 17, 19, 23, 29, 31, 37, 41, 43];

/// The weighted check digit over the first twelve digits of a core:
/// `sum(prime * digit) mod 11 mod 10`. `None` if any character is not a
/// digit.
pub(crate) fn check_digit(digits: &str) -> Option<u32> {
    let mut sum = 0;
    for (prime, c) in PRIMES.iter().zip(digits.chars()) {
        sum += prime * c.to_digit(10)?;
    }
    Some(sum % 11 % 10)
}

// The 13 digit bottom line: distributor, meter identifier, two spare
// digits, check digit.
struct CoreFields<'a> {
    core: Input<'a>,
    distributor: Input<'a>,
    meter_identifier: Input<'a>,
    checksum: Input<'a>,
}

fn core_fields(input: Input) -> IResult<Input, CoreFields> {
    let (input, core) = recognize(tuple((
        digits_exact(2),
        digits_exact(8),
        digits_exact(2),
        digits_exact(1),
    )))(input)?;

    let fields = CoreFields {
        core,
        distributor: &core[..2],
        meter_identifier: &core[2..10],
        checksum: &core[12..],
    };

    Ok((input, fields))
}

// The 8 character top line: profile class, meter time switch code, line
// loss factor class.
struct TopLineFields<'a> {
    top_line: Input<'a>,
    profile_class: Input<'a>,
    meter_time_switch_code: Input<'a>,
    line_loss_factor_class: Input<'a>,
}

fn top_line_fields(input: Input) -> IResult<Input, TopLineFields> {
    let (input, top_line) = recognize(tuple((
        digits_exact(2),
        digits_exact(3),
        uppercase_alphanumeric_exact(3),
    )))(input)?;

    let fields = TopLineFields {
        top_line,
        profile_class: &top_line[..2],
        meter_time_switch_code: &top_line[2..5],
        line_loss_factor_class: &top_line[5..],
    };

    Ok((input, fields))
}

/// A parsed MPAN, in either its 13 digit short form or its 21 character
/// long form.
///
/// The raw input is kept verbatim; nothing is trimmed, padded or
/// normalised. Equality compares raw strings, so two values parsed from
/// the same text are equal and nothing else is.
#[derive(Debug, Clone)]
pub struct Mpan {
    raw: String,
    top_line: Option<String>,
    profile_class: Option<ProfileClass>,
    meter_time_switch_code: Option<MeterTimeSwitchCode>,
    line_loss_factor_class: Option<String>,
    core: String,
    distributor: Distributor,
    meter_identifier: String,
    checksum: String,
}

impl Mpan {
    /// Parse the short or the long layout. Anything else, including stray
    /// leading or trailing characters, is an [`Error::Parse`].
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();

        if let Ok((_, core)) = all_consuming(core_fields)(raw) {
            return Ok(Mpan::from_short(raw, core));
        }

        if let Ok((_, (top_line, core))) = all_consuming(pair(top_line_fields, core_fields))(raw) {
            return Ok(Mpan::from_long(raw, top_line, core));
        }

        Err(Error::Parse(raw.to_owned()))
    }

    fn from_short(raw: &str, core: CoreFields) -> Self {
        Mpan {
            raw: raw.to_owned(),
            top_line: None,
            profile_class: None,
            meter_time_switch_code: None,
            line_loss_factor_class: None,
            core: core.core.to_owned(),
            distributor: Distributor::new(core.distributor),
            meter_identifier: core.meter_identifier.to_owned(),
            checksum: core.checksum.to_owned(),
        }
    }

    fn from_long(raw: &str, top_line: TopLineFields, core: CoreFields) -> Self {
        Mpan {
            raw: raw.to_owned(),
            top_line: Some(top_line.top_line.to_owned()),
            profile_class: Some(ProfileClass::new(top_line.profile_class)),
            meter_time_switch_code: Some(MeterTimeSwitchCode::new(top_line.meter_time_switch_code)),
            line_loss_factor_class: Some(top_line.line_loss_factor_class.to_owned()),
            core: core.core.to_owned(),
            distributor: Distributor::new(core.distributor),
            meter_identifier: core.meter_identifier.to_owned(),
            checksum: core.checksum.to_owned(),
        }
    }

    pub fn top_line(&self) -> Option<&str> {
        self.top_line.as_deref()
    }

    pub fn profile_class(&self) -> Option<&ProfileClass> {
        self.profile_class.as_ref()
    }

    pub fn meter_time_switch_code(&self) -> Option<&MeterTimeSwitchCode> {
        self.meter_time_switch_code.as_ref()
    }

    pub fn line_loss_factor_class(&self) -> Option<&str> {
        self.line_loss_factor_class.as_deref()
    }

    /// The 13 digit bottom line, common to both forms.
    pub fn core(&self) -> &str {
        &self.core
    }

    pub fn distributor(&self) -> &Distributor {
        &self.distributor
    }

    /// The 8 digit meter identifier within the core.
    pub fn meter_identifier(&self) -> &str {
        &self.meter_identifier
    }

    /// The check digit, as text.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn is_short(&self) -> bool {
        self.profile_class.is_none()
    }

    pub fn is_long(&self) -> bool {
        !self.is_short()
    }

    /// The short form equivalent: the core, whichever form was parsed.
    pub fn as_short(&self) -> &str {
        &self.core
    }

    pub fn pc(&self) -> Option<&ProfileClass> {
        self.profile_class()
    }

    pub fn mtc(&self) -> Option<&MeterTimeSwitchCode> {
        self.meter_time_switch_code()
    }

    pub fn llfc(&self) -> Option<&str> {
        self.line_loss_factor_class()
    }

    /// Validate the top line subsections and the distributor against their
    /// reference tables, then the check digit, stopping at the first
    /// failure.
    pub fn is_valid(&self) -> bool {
        if let Some(profile_class) = &self.profile_class {
            if !profile_class.is_valid() {
                return false;
            }
        }

        if let Some(meter_time_switch_code) = &self.meter_time_switch_code {
            if !meter_time_switch_code.is_valid() {
                return false;
            }
        }

        if !self.distributor.is_valid() {
            return false;
        }

        match check_digit(&self.core[..self.core.len() - 1]) {
            Some(expected) => self.checksum.parse() == Ok(expected),
            None => false,
        }
    }

    /// As [`is_valid`](Mpan::is_valid), but failing with an
    /// [`Error::Validation`] carrying the raw input.
    pub fn check(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::Validation(self.raw.clone()))
        }
    }
}

impl FromStr for Mpan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mpan::parse(s)
    }
}

impl fmt::Display for Mpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Mpan {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Mpan {}

/// Whether `raw` parses as an MPAN and passes the validity check. A parse
/// failure and a validation failure both come back as `false`; callers
/// that need to tell them apart use [`Mpan::parse`] and [`Mpan::check`].
pub fn is_valid(raw: impl AsRef<str>) -> bool {
    Mpan::parse(raw).map_or(false, |mpan| mpan.is_valid())
}
