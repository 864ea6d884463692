//! Random but well-formed MPANs, for test fixtures and fake-data
//! providers.

use rand::Rng;

use crate::codes::{DNOS, IDNOS, PROFILE_CLASSES};
use crate::mpan::check_digit;

const LLFC_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate one random long form MPAN. The output always parses and
/// always passes the validity check.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// As [`generate`], with a caller-supplied source of randomness.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let (profile_class, _) = PROFILE_CLASSES[rng.gen_range(0..PROFILE_CLASSES.len())];

    let mtc = rng.gen_range(100..=999);

    let llfc: String = (0..3)
        .map(|_| LLFC_CHARSET[rng.gen_range(0..LLFC_CHARSET.len())] as char)
        .collect();

    let distributor = {
        let index = rng.gen_range(0..DNOS.len() + IDNOS.len());
        if index < DNOS.len() {
            DNOS[index].code
        } else {
            IDNOS[index - DNOS.len()].code
        }
    };

    // Ten digits covering the meter identifier and the two spare core
    // digits.
    let meter_identifier: u64 = rng.gen_range(1_000_000_000..=9_999_999_999);

    let bottom_line = format!("{}{}", distributor, meter_identifier);
    let check = check_digit(&bottom_line).expect("operator codes and identifiers are digits");

    format!("{}{}{}{}{}", profile_class, mtc, llfc, bottom_line, check)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::common::Subsection;
    use crate::mpan::{is_valid, Mpan};

    use super::*;

    #[test]
    fn generated_mpans_are_always_valid() {
        for _ in 0..1000 {
            let raw = generate();
            assert!(is_valid(&raw), "{}", raw);
        }
    }

    #[test]
    fn generated_mpans_are_long_form() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            let raw = generate_with(&mut rng);
            assert_eq!(raw.len(), 21, "{}", raw);

            let mpan = Mpan::parse(&raw).unwrap();
            assert!(mpan.is_long());
            assert!(mpan.profile_class().unwrap().is_valid());
            assert!(mpan.meter_time_switch_code().unwrap().is_valid());
            assert!(mpan.distributor().is_valid());
        }
    }

    #[test]
    fn generated_mtc_stays_in_the_three_digit_band() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let raw = generate_with(&mut rng);
            let mtc: u32 = raw[2..5].parse().unwrap();
            assert!((100..=999).contains(&mtc), "{}", raw);
        }
    }
}
