//! Parsing, validation and generation of MPANs, the Meter Point
//! Administration Numbers that identify electricity supply points in the
//! UK.
//!
//! An MPAN travels either as its 13 digit core alone (the "short form") or
//! with the supplementary top line attached (the "long form", 21
//! characters):
//!
//! ```plain
//! 01 801 100 20 99999999 38 6
//! |  |   |   |  |        |  `- check digit
//! |  |   |   |  |        `---- spare digits
//! |  |   |   |  `------------- meter identifier
//! |  |   |   `---------------- distributor
//! |  |   `-------------------- line loss factor class
//! |  `------------------------ meter time switch code
//! `--------------------------- profile class
//! ```
//!
//! Parsing is strict (the whole input must match one of the two layouts)
//! and validation replicates the industry algorithm: table checks on the
//! profile class, meter time switch code and distributor, then a
//! prime-weighted check digit over the core.
//!
//! ```
//! use mpan::{Mpan, Subsection};
//!
//! let mpan = Mpan::parse("018011002099999999386")?;
//!
//! assert!(mpan.is_long());
//! assert_eq!(mpan.distributor().identifier(), "20");
//! assert_eq!(mpan.distributor().area(), Some("Southern England"));
//! assert_eq!(mpan.as_short(), "2099999999386");
//! # Ok::<(), mpan::Error>(())
//! ```
//!
//! Fixture data can be produced with [`generate`], which inverts the check
//! digit formula so its output always validates.

pub mod codes;
pub mod common;
mod error;
pub mod generate;
mod gsp;
pub mod mpan;

pub use codes::{Distributor, DistributorKind, MeterTimeSwitchCode, ProfileClass};
pub use common::Subsection;
pub use error::{Error, Result};
pub use generate::{generate, generate_with};
pub use mpan::{is_valid, Mpan};
