//! Reference data for the subsections of an MPAN.
//!
//! Distributor, profile class and meter time switch code identifiers only
//! mean anything against the industry's published tables, reproduced here
//! as static data.
//!
//! Sources:
//!   https://en.wikipedia.org/wiki/Meter_Point_Administration_Number
//!   https://en.wikipedia.org/wiki/Distribution_network_operator
//!   https://www.ofgem.gov.uk/sites/default/files/2022-07/Copy%20of%20Electricity%20Registered%20or%20service%20addresses%20NEW%201.0.pdf

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::common::{date_dmy, Subsection};
use crate::gsp::GSP_GROUPS;

pub struct DnoMeta {
    pub code: &'static str,
    pub area: &'static str,
    pub operator: &'static str,
    pub participant_id: &'static str,
    pub gsp_group_id: &'static str,
}

pub struct IdnoMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub licensee: &'static str,
    pub mpas_operator_id: &'static str,
}

/// Licensed regional distributors, operator codes 10 to 23.
pub static DNOS: &[DnoMeta] = &[
    DnoMeta { code: "10", area: "Eastern England",              operator: "UK Power Networks",                        participant_id: "EELC", gsp_group_id: "_A" },
    DnoMeta { code: "11", area: "East Midlands",                operator: "Western Power Distribution",               participant_id: "EMEB", gsp_group_id: "_B" },
    DnoMeta { code: "12", area: "London",                       operator: "UK Power Networks",                        participant_id: "LOND", gsp_group_id: "_C" },
    DnoMeta { code: "13", area: "Merseyside and Northern Wales", operator: "SP Energy Networks",                      participant_id: "MANW", gsp_group_id: "_D" },
    DnoMeta { code: "14", area: "West Midlands",                operator: "Western Power Distribution",               participant_id: "MIDE", gsp_group_id: "_E" },
    DnoMeta { code: "15", area: "North Eastern England",        operator: "Northern Powergrid",                       participant_id: "NEEB", gsp_group_id: "_F" },
    DnoMeta { code: "16", area: "North Western England",        operator: "Electricity North West",                   participant_id: "NORW", gsp_group_id: "_G" },
    DnoMeta { code: "17", area: "Northern Scotland",            operator: "Scottish & Southern Electricity Networks", participant_id: "HYDE", gsp_group_id: "_P" },
    DnoMeta { code: "18", area: "Southern Scotland",            operator: "SP Energy Networks",                       participant_id: "SPOW", gsp_group_id: "_N" },
    DnoMeta { code: "19", area: "South Eastern England",        operator: "UK Power Networks",                        participant_id: "SEEB", gsp_group_id: "_J" },
    DnoMeta { code: "20", area: "Southern England",             operator: "Scottish & Southern Electricity Networks", participant_id: "SOUT", gsp_group_id: "_H" },
    DnoMeta { code: "21", area: "Southern Wales",               operator: "Western Power Distribution",               participant_id: "SWAE", gsp_group_id: "_K" },
    DnoMeta { code: "22", area: "South Western England",        operator: "Western Power Distribution",               participant_id: "SWEB", gsp_group_id: "_L" },
    DnoMeta { code: "23", area: "Yorkshire",                    operator: "Northern Powergrid",                       participant_id: "YELG", gsp_group_id: "_M" },
];

/// Licensed independent distributors, operator codes 24 to 38.
pub static IDNOS: &[IdnoMeta] = &[
    IdnoMeta { code: "24", name: "Envoy",                          licensee: "Independent Power Networks",         mpas_operator_id: "IPNL" },
    IdnoMeta { code: "25", name: "ESP Electricity",                licensee: "ESP Electricity",                    mpas_operator_id: "LENG" },
    IdnoMeta { code: "26", name: "Last Mile Electricity",          licensee: "Last Mile Electricity",              mpas_operator_id: "GUCL" },
    IdnoMeta { code: "27", name: "GTC",                            licensee: "The Electricity Network Company Ltd", mpas_operator_id: "ETCL" },
    IdnoMeta { code: "28", name: "EDF IDNO",                       licensee: "UK Power Networks (IDNO) Ltd",       mpas_operator_id: "EDFI" },
    IdnoMeta { code: "29", name: "Harlaxton Energy Networks Ltd",  licensee: "Harlaxton (IDNO)",                   mpas_operator_id: "HARL" },
    IdnoMeta { code: "30", name: "Leep Electricity Networks Ltd",  licensee: "Leep Electricity Networks (IDNO)",   mpas_operator_id: "PENL" },
    IdnoMeta { code: "31", name: "UK Power Distribution Ltd",      licensee: "UK Power Distribution Ltd",          mpas_operator_id: "UKPD" },
    IdnoMeta { code: "32", name: "Energy Assets Networks Ltd",     licensee: "Energy Assets Networks Ltd.",        mpas_operator_id: "UDNL" },
    IdnoMeta { code: "33", name: "Eclipse Power Networks",         licensee: "Eclipse Power Networks",             mpas_operator_id: "GGEN" },
    IdnoMeta { code: "34", name: "Murphy Power",                   licensee: "Murphy Power",                       mpas_operator_id: "MPDL" },
    IdnoMeta { code: "35", name: "Fulcrum Electricity Assets",     licensee: "Fulcrum Electricity Assets",         mpas_operator_id: "FEAL" },
    IdnoMeta { code: "36", name: "Vattenfall Networks Ltd",        licensee: "Vattenfall Networks Ltd",            mpas_operator_id: "VATT" },
    IdnoMeta { code: "37", name: "Optimal Power Networks Ltd",     licensee: "Optimal Power Networks Ltd",         mpas_operator_id: "FORB" },
    IdnoMeta { code: "38", name: "Indigo Power Limited",           licensee: "Indigo Power Limited",               mpas_operator_id: "INDI" },
];

/// Tariff profile categories, codes 00 to 08.
pub static PROFILE_CLASSES: &[(&str, &str)] = &[
    ("00", "Half-hourly supply (import and export)"),
    ("01", "Domestic unrestricted"),
    ("02", "Domestic Economy meter of two or more rates"),
    ("03", "Non-domestic unrestricted"),
    ("04", "Non-domestic Economy 7"),
    (
        "05",
        "Non-domestic, with maximum demand (MD) recording capability and \
         with load factor (LF) less than or equal to 20%",
    ),
    (
        "06",
        "Non-domestic, with MD recording capability and with LF less than \
         or equal to 30% and greater than 20%",
    ),
    (
        "07",
        "Non-domestic, with MD recording capability and with LF less than \
         or equal to 40% and greater than 30%",
    ),
    (
        "08",
        "Non-domestic, with MD recording capability and with LF greater \
         than 40% (also all non-half-hourly export MSIDs)",
    ),
];

pub struct MtcRange {
    pub from: u16,
    pub to: u16,
    pub description: &'static str,
}

/// Meter time switch code bands. The five bands are disjoint and cover
/// 1 to 999 inclusive.
pub static MTC_RANGES: &[MtcRange] = &[
    MtcRange { from: 1,   to: 399, description: "DNO specific" },
    MtcRange { from: 400, to: 499, description: "Reserved" },
    MtcRange { from: 500, to: 509, description: "Codes for related Metering Systems – common across the Industry" },
    MtcRange { from: 510, to: 799, description: "Codes for related Metering Systems – DNO specific" },
    MtcRange { from: 800, to: 999, description: "Codes common across the Industry" },
];

/// One row of the GSP group membership table: a market participant's
/// registration in a GSP group over an effective-dated span. Dates are kept
/// in the source CSV's `DD/MM/YYYY` form.
pub struct GspSpan {
    pub participant_id: &'static str,
    pub gsp_group_id: &'static str,
    pub from: &'static str,
    pub to: Option<&'static str>,
}

impl GspSpan {
    /// Whether the span covers `on`. Membership counts strictly after the
    /// start date and strictly before the stop date; a missing stop date
    /// means the registration is still open. A date that fails to parse
    /// covers nothing.
    fn covers(&self, on: NaiveDate) -> bool {
        match date_dmy(self.from) {
            Some(from) if on > from => match self.to {
                None => true,
                Some(to) => date_dmy(to).map_or(false, |to| to > on),
            },
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributorKind {
    Dno,
    Idno,
}

/// The first two digits of the core: a DNO or IDNO operator code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distributor {
    identifier: String,
}

impl Distributor {
    pub fn new(identifier: impl Into<String>) -> Self {
        Distributor {
            identifier: identifier.into(),
        }
    }

    /// The identifier as a number, if it is made of digits alone. Sign
    /// prefixes are not operator codes.
    fn as_number(&self) -> Option<u32> {
        if !self.identifier.is_empty() && self.identifier.bytes().all(|b| b.is_ascii_digit()) {
            self.identifier.parse().ok()
        } else {
            None
        }
    }

    pub fn is_dno(&self) -> bool {
        matches!(self.as_number(), Some(10..=23))
    }

    pub fn is_idno(&self) -> bool {
        matches!(self.as_number(), Some(24..=38))
    }

    /// Which side of the registry the code falls on, if either.
    pub fn kind(&self) -> Option<DistributorKind> {
        if self.is_dno() {
            Some(DistributorKind::Dno)
        } else if self.is_idno() {
            Some(DistributorKind::Idno)
        } else {
            None
        }
    }

    fn dno_meta(&self) -> Option<&'static DnoMeta> {
        DNOS.iter().find(|dno| dno.code == self.identifier)
    }

    fn idno_meta(&self) -> Option<&'static IdnoMeta> {
        IDNOS.iter().find(|idno| idno.code == self.identifier)
    }

    /// Geographic distribution area. DNOs only.
    pub fn area(&self) -> Option<&'static str> {
        self.dno_meta().map(|dno| dno.area)
    }

    /// Operating company. DNOs only.
    pub fn operator(&self) -> Option<&'static str> {
        self.dno_meta().map(|dno| dno.operator)
    }

    /// Market participant code. DNOs only.
    pub fn participant_id(&self) -> Option<&'static str> {
        self.dno_meta().map(|dno| dno.participant_id)
    }

    /// Home GSP group. DNOs only.
    pub fn gsp_group_id(&self) -> Option<&'static str> {
        self.dno_meta().map(|dno| dno.gsp_group_id)
    }

    /// Network name. IDNOs only.
    pub fn name(&self) -> Option<&'static str> {
        self.idno_meta().map(|idno| idno.name)
    }

    /// Licence holder. IDNOs only.
    pub fn licensee(&self) -> Option<&'static str> {
        self.idno_meta().map(|idno| idno.licensee)
    }

    /// MPAS operator code. IDNOs only.
    pub fn mpas_operator_id(&self) -> Option<&'static str> {
        self.idno_meta().map(|idno| idno.mpas_operator_id)
    }

    /// The participant code that keys the GSP group membership table,
    /// whichever kind of distributor this is.
    fn participant(&self) -> Option<&'static str> {
        self.participant_id().or_else(|| self.mpas_operator_id())
    }

    /// GSP groups this distributor is registered in as of today.
    pub fn gsp_group_ids(&self) -> Vec<&'static str> {
        self.gsp_group_ids_at(Utc::now().date_naive())
    }

    /// GSP groups whose membership span covers `on`.
    pub fn gsp_group_ids_at(&self, on: NaiveDate) -> Vec<&'static str> {
        let participant = match self.participant() {
            Some(participant) => participant,
            None => return Vec::new(),
        };

        GSP_GROUPS
            .iter()
            .filter(|span| span.participant_id == participant && span.covers(on))
            .map(|span| span.gsp_group_id)
            .collect()
    }
}

impl Subsection for Distributor {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn is_valid(&self) -> bool {
        self.is_dno() || self.is_idno()
    }
}

impl fmt::Display for Distributor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// The first two digits of the top line: the tariff profile category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileClass {
    identifier: String,
}

impl ProfileClass {
    pub fn new(identifier: impl Into<String>) -> Self {
        ProfileClass {
            identifier: identifier.into(),
        }
    }
}

impl Subsection for ProfileClass {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn is_valid(&self) -> bool {
        PROFILE_CLASSES
            .iter()
            .any(|(code, _)| *code == self.identifier)
    }

    fn description(&self) -> Option<&'static str> {
        PROFILE_CLASSES
            .iter()
            .find(|(code, _)| *code == self.identifier)
            .map(|(_, description)| *description)
    }
}

impl fmt::Display for ProfileClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

/// Digits three to five of the top line: the meter's time switch regime.
///
/// The identifier stays text; validity and the description band are judged
/// on its integer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterTimeSwitchCode {
    identifier: String,
}

impl MeterTimeSwitchCode {
    pub fn new(identifier: impl Into<String>) -> Self {
        MeterTimeSwitchCode {
            identifier: identifier.into(),
        }
    }

    fn as_number(&self) -> Option<i64> {
        self.identifier.parse().ok()
    }
}

impl Subsection for MeterTimeSwitchCode {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn is_valid(&self) -> bool {
        self.as_number().map_or(false, |value| 0 < value && value < 1000)
    }

    fn description(&self) -> Option<&'static str> {
        let value = self.as_number()?;

        MTC_RANGES
            .iter()
            .find(|range| i64::from(range.from) <= value && value <= i64::from(range.to))
            .map(|range| range.description)
    }
}

impl fmt::Display for MeterTimeSwitchCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn distributor_classification() {
        assert!(Distributor::new("10").is_dno());
        assert!(!Distributor::new("10").is_idno());
        assert!(Distributor::new("24").is_idno());
        assert!(!Distributor::new("24").is_dno());
        assert!(Distributor::new("38").is_idno());

        assert!(!Distributor::new("09").is_dno());
        assert!(!Distributor::new("39").is_idno());
        assert!(!Distributor::new("+10").is_dno());
        assert!(!Distributor::new("test").is_dno());
    }

    #[test]
    fn distributor_kind() {
        assert_eq!(Distributor::new("10").kind(), Some(DistributorKind::Dno));
        assert_eq!(Distributor::new("24").kind(), Some(DistributorKind::Idno));
        assert_eq!(Distributor::new("99").kind(), None);
    }

    #[test]
    fn distributor_validity() {
        assert!(Distributor::new("10").is_valid());
        assert!(Distributor::new("24").is_valid());
        assert!(!Distributor::new("99").is_valid());
        assert!(!Distributor::new("test").is_valid());
        assert!(!Distributor::new("").is_valid());
    }

    #[test]
    fn dno_attributes() {
        let dno = Distributor::new("10");

        assert_eq!(dno.area(), Some("Eastern England"));
        assert_eq!(dno.operator(), Some("UK Power Networks"));
        assert_eq!(dno.participant_id(), Some("EELC"));
        assert_eq!(dno.gsp_group_id(), Some("_A"));

        // The IDNO attribute set stays absent.
        assert_eq!(dno.name(), None);
        assert_eq!(dno.licensee(), None);
        assert_eq!(dno.mpas_operator_id(), None);
    }

    #[test]
    fn idno_attributes() {
        let idno = Distributor::new("24");

        assert_eq!(idno.name(), Some("Envoy"));
        assert_eq!(idno.licensee(), Some("Independent Power Networks"));
        assert_eq!(idno.mpas_operator_id(), Some("IPNL"));

        assert_eq!(idno.area(), None);
        assert_eq!(idno.operator(), None);
        assert_eq!(idno.participant_id(), None);
        assert_eq!(idno.gsp_group_id(), None);
    }

    #[test]
    fn unknown_distributor_attributes_are_absent() {
        let unknown = Distributor::new("99");

        assert_eq!(unknown.area(), None);
        assert_eq!(unknown.name(), None);
        assert_eq!(unknown.gsp_group_ids_at(date(2020, 1, 1)), Vec::<&str>::new());
    }

    #[test]
    fn gsp_group_ids_follow_the_effective_dates() {
        let distributor = Distributor::new("28");

        assert_eq!(distributor.gsp_group_ids_at(date(2001, 1, 1)), Vec::<&str>::new());
        assert_eq!(distributor.gsp_group_ids_at(date(2010, 1, 1)), vec!["_C"]);
        assert_eq!(distributor.gsp_group_ids_at(date(2020, 1, 1)), Vec::<&str>::new());
    }

    #[test]
    fn gsp_membership_starts_and_stops_exclusively() {
        // EDFI's _C span runs 09/11/2004 to 23/05/2014.
        let distributor = Distributor::new("28");

        assert_eq!(distributor.gsp_group_ids_at(date(2004, 11, 9)), Vec::<&str>::new());
        assert_eq!(distributor.gsp_group_ids_at(date(2004, 11, 10)), vec!["_C"]);
        assert_eq!(distributor.gsp_group_ids_at(date(2014, 5, 22)), vec!["_C"]);
        assert_eq!(distributor.gsp_group_ids_at(date(2014, 5, 23)), Vec::<&str>::new());
    }

    #[test]
    fn dno_home_group_membership_is_open_ended() {
        let dno = Distributor::new("10");

        assert_eq!(dno.gsp_group_ids_at(date(2023, 6, 1)), vec!["_A"]);
        assert_eq!(dno.gsp_group_ids_at(date(1997, 1, 1)), Vec::<&str>::new());
    }

    #[test]
    fn every_gsp_span_date_parses() {
        for span in GSP_GROUPS {
            assert!(date_dmy(span.from).is_some(), "bad from date: {}", span.from);
            if let Some(to) = span.to {
                assert!(date_dmy(to).is_some(), "bad to date: {}", to);
            }
        }
    }

    #[test]
    fn profile_class_validity() {
        assert!(ProfileClass::new("00").is_valid());
        assert!(ProfileClass::new("04").is_valid());
        assert!(ProfileClass::new("08").is_valid());
        assert!(!ProfileClass::new("09").is_valid());
        assert!(!ProfileClass::new("4").is_valid());
        assert!(!ProfileClass::new("test").is_valid());
    }

    #[test]
    fn profile_class_description() {
        assert_eq!(
            ProfileClass::new("04").description(),
            Some("Non-domestic Economy 7")
        );
        assert_eq!(ProfileClass::new("").description(), None);
        assert_eq!(ProfileClass::new("99").description(), None);
    }

    #[test]
    fn mtc_validity() {
        assert!(MeterTimeSwitchCode::new("001").is_valid());
        assert!(MeterTimeSwitchCode::new("999").is_valid());
        assert!(!MeterTimeSwitchCode::new("1000").is_valid());
        assert!(!MeterTimeSwitchCode::new("0").is_valid());
        assert!(!MeterTimeSwitchCode::new("00").is_valid());
        assert!(!MeterTimeSwitchCode::new("000").is_valid());
        assert!(!MeterTimeSwitchCode::new("-1").is_valid());
        assert!(!MeterTimeSwitchCode::new("test").is_valid());
    }

    #[test]
    fn mtc_description() {
        assert_eq!(
            MeterTimeSwitchCode::new("404").description(),
            Some("Reserved")
        );
        assert_eq!(
            MeterTimeSwitchCode::new("801").description(),
            Some("Codes common across the Industry")
        );
        assert_eq!(MeterTimeSwitchCode::new("").description(), None);
        assert_eq!(MeterTimeSwitchCode::new("1000").description(), None);
        assert_eq!(MeterTimeSwitchCode::new("test").description(), None);
    }

    #[test]
    fn display_is_the_identifier() {
        assert_eq!(Distributor::new("10").to_string(), "10");
        assert_eq!(ProfileClass::new("04").to_string(), "04");
        assert_eq!(MeterTimeSwitchCode::new("801").to_string(), "801");
    }
}
