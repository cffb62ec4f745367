mod consts;
mod error;
mod parse;
mod prelude;
mod text;
mod types;

pub use consts::*;
pub use error::ErrorReason;
pub use text::Language;
pub use types::{BirthDate, Day, Gender, Month, Year};

use crate::parse::Canonical;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Per-call validation options. There is no global configuration; every
/// call carries its own flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Options {
    /// Runs the modulus-11 checksum when set. Off by default: the check is
    /// historically optional and some genuinely issued numbers fail it.
    pub use_modula11_check: bool,
    /// Subtracts the administrative-correction offset from repaired days.
    /// On by default.
    pub repair_day_in_month: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            use_modula11_check: false,
            repair_day_in_month: true,
        }
    }
}

/// Gender and date of birth decoded from a valid CPR number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub gender: Gender,
    pub date_of_birth: BirthDate,
}

/// Shared pipeline: structural parsing, then the optional checksum, then
/// date resolution. A checksum failure is reported even when the date part
/// is also invalid; a parse failure beats both.
fn decode(ssn: &str, options: Options) -> Result<(Canonical, BirthDate), ErrorReason> {
    let canonical = Canonical::parse(ssn)?;
    if options.use_modula11_check && !canonical.passes_modula11() {
        return Err(ErrorReason::Modula11CheckFail);
    }
    let date = BirthDate::resolve(canonical.date_parts(), options.repair_day_in_month)?;
    Ok((canonical, date))
}

/// Validates `ssn` structurally and semantically.
///
/// # Errors
/// Returns the first `ErrorReason` encountered in pipeline order.
pub fn validate(ssn: &str, options: Options) -> Result<(), ErrorReason> {
    decode(ssn, options).map(|_| ())
}

/// Convenience wrapper over [`validate`] discarding the rejection reason.
pub fn is_valid(ssn: &str, options: Options) -> bool {
    validate(ssn, options).is_ok()
}

/// Decodes `ssn` into the gender and date of birth it encodes.
///
/// # Errors
/// Returns the first `ErrorReason` encountered in pipeline order; the
/// outcome is all-or-nothing, never a partially populated person.
pub fn decode_person(ssn: &str, options: Options) -> Result<Person, ErrorReason> {
    let (canonical, date_of_birth) = decode(ssn, options)?;
    Ok(Person {
        gender: canonical.gender(),
        date_of_birth,
    })
}

impl FromStr for Person {
    type Err = ErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_person(s, Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_modula11() -> Options {
        Options {
            use_modula11_check: true,
            ..Options::default()
        }
    }

    fn without_repair() -> Options {
        Options {
            repair_day_in_month: false,
            ..Options::default()
        }
    }

    #[test]
    fn test_options_default() {
        let options = Options::default();
        assert!(!options.use_modula11_check);
        assert!(options.repair_day_in_month);
    }

    #[test]
    fn test_decode_person_reference_number() {
        let person = decode_person("010203-1234", Options::default()).unwrap();
        assert_eq!(person.gender, Gender::Female);
        assert_eq!(person.date_of_birth.to_string(), "1903-02-01");
        assert_eq!(person.date_of_birth.year.get(), 1903);
        assert_eq!(person.date_of_birth.month.get(), 2);
        assert_eq!(person.date_of_birth.day.get(), 1);
    }

    #[test]
    fn test_decode_person_without_separator() {
        let person = decode_person("0102031234", Options::default()).unwrap();
        assert_eq!(person.date_of_birth.to_string(), "1903-02-01");
    }

    #[test]
    fn test_whitespace_padding_is_accepted() {
        assert!(validate(" 010203-1234 ", Options::default()).is_ok());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(
            validate("", Options::default()),
            Err(ErrorReason::NullEmptyOrWhiteSpace)
        );
        assert_eq!(
            validate("   ", Options::default()),
            Err(ErrorReason::NullEmptyOrWhiteSpace)
        );
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            validate("010203-123", Options::default()),
            Err(ErrorReason::InvalidLength)
        );
        assert_eq!(
            validate("010203-12345", Options::default()),
            Err(ErrorReason::InvalidLength)
        );
    }

    #[test]
    fn test_non_dash_character() {
        assert_eq!(
            validate("010203x1234", Options::default()),
            Err(ErrorReason::NonDashCharacter)
        );
    }

    #[test]
    fn test_non_digit_characters() {
        assert_eq!(
            validate("a10203-1234", Options::default()),
            Err(ErrorReason::NonDigitCharacters)
        );
    }

    #[test]
    fn test_day_invalid_even_with_repair() {
        // 32 is below the repair offset, so no subtraction applies
        assert_eq!(
            validate("320203-1234", Options::default()),
            Err(ErrorReason::InvalidDayInMonth)
        );
    }

    #[test]
    fn test_modula11_gating() {
        // 070261-4082 passes the checksum, 070261-4081 does not
        assert!(validate("070261-4082", with_modula11()).is_ok());
        assert!(validate("070261-4082", Options::default()).is_ok());

        assert_eq!(
            validate("070261-4081", with_modula11()),
            Err(ErrorReason::Modula11CheckFail)
        );
        assert!(validate("070261-4081", Options::default()).is_ok());
    }

    #[test]
    fn test_modula11_reported_before_date_errors() {
        // Month 13 and a failing checksum: the checksum wins when enabled
        assert_eq!(
            validate("071361-4082", with_modula11()),
            Err(ErrorReason::Modula11CheckFail)
        );
        assert_eq!(
            validate("071361-4082", Options::default()),
            Err(ErrorReason::InvalidMonth)
        );
    }

    #[test]
    fn test_date_error_when_modula11_passes() {
        // Month 13 but the weighted sum is 121, divisible by 11
        assert_eq!(
            validate("071361-4084", with_modula11()),
            Err(ErrorReason::InvalidMonth)
        );
    }

    #[test]
    fn test_parse_failure_beats_modula11() {
        assert_eq!(
            validate("07026x-4082", with_modula11()),
            Err(ErrorReason::NonDigitCharacters)
        );
    }

    #[test]
    fn test_day_repair_equivalence() {
        // Day 61 with repair decodes like day 01 without it
        let repaired = decode_person("610203-1234", Options::default()).unwrap();
        let plain = decode_person("010203-1234", without_repair()).unwrap();
        assert_eq!(repaired, plain);

        // Without repair, day 61 is simply invalid
        assert_eq!(
            validate("610203-1234", without_repair()),
            Err(ErrorReason::InvalidDayInMonth)
        );
    }

    #[test]
    fn test_day_repair_idempotent_on_ordinary_days() {
        for ssn in ["010203-1234", "310103-1234", "070261-4082"] {
            assert_eq!(
                decode_person(ssn, Options::default()),
                decode_person(ssn, without_repair()),
                "repair flag must not affect {ssn}"
            );
        }
    }

    #[test]
    fn test_leap_day_revalidated_after_century_resolution() {
        // 1904 and 2000 are leap years; 1903 and 1899 are not
        assert!(validate("290204-1234", Options::default()).is_ok());
        assert!(validate("290200-4000", Options::default()).is_ok());
        assert_eq!(
            validate("290203-1234", Options::default()),
            Err(ErrorReason::InvalidDayInMonth)
        );
        assert_eq!(
            validate("290299-5678", Options::default()),
            Err(ErrorReason::InvalidDayInMonth)
        );
    }

    #[test]
    fn test_century_resolution_rows() {
        struct TestCase {
            ssn: &'static str,
            year: u16,
        }

        let cases = [
            TestCase {
                ssn: "010103-1234",
                year: 1903,
            },
            TestCase {
                ssn: "010136-4000",
                year: 2036,
            },
            TestCase {
                ssn: "010137-4000",
                year: 1937,
            },
            TestCase {
                ssn: "010157-5000",
                year: 2057,
            },
            TestCase {
                ssn: "010158-5000",
                year: 1858,
            },
            TestCase {
                ssn: "010136-9000",
                year: 1936,
            },
            TestCase {
                ssn: "010137-9000",
                year: 1937,
            },
        ];

        for case in &cases {
            let person = decode_person(case.ssn, Options::default()).unwrap();
            assert_eq!(
                person.date_of_birth.year.get(),
                case.year,
                "{} should resolve to {}",
                case.ssn,
                case.year
            );
        }
    }

    #[test]
    fn test_gender_follows_final_digit_parity() {
        let female = decode_person("070261-4082", Options::default()).unwrap();
        assert_eq!(female.gender, Gender::Female);

        let male = decode_person("070261-4081", Options::default()).unwrap();
        assert_eq!(male.gender, Gender::Male);
    }

    #[test]
    fn test_validate_agrees_with_decode_person() {
        let inputs = [
            "010203-1234",
            "0102031234",
            "320203-1234",
            "a10203-1234",
            "010203x1234",
            "070261-4081",
            "",
        ];
        for ssn in inputs {
            for options in [Options::default(), with_modula11(), without_repair()] {
                assert_eq!(
                    validate(ssn, options),
                    decode_person(ssn, options).map(|_| ()),
                    "validate and decode_person disagree on {ssn:?}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_construction() {
        // Control 1234 pins every two-digit year to the 1900s
        let control = 1234u16;
        for month in 1..=12u8 {
            for day in [1, 15, 28] {
                for yy in [3u16, 50, 99] {
                    let ssn = format!("{day:02}{month:02}{yy:02}-{control:04}");
                    let person = decode_person(&ssn, Options::default()).unwrap();
                    assert_eq!(person.date_of_birth.day.get(), day);
                    assert_eq!(person.date_of_birth.month.get(), month);
                    assert_eq!(person.date_of_birth.year.get(), 1900 + u16::from(yy));
                    assert_eq!(person.gender, Gender::Female);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_with_repaired_days() {
        // The same dates written with the +60 correction decode identically
        for month in 1..=12u8 {
            for day in [1, 15, 28] {
                let plain = format!("{:02}{month:02}61-4082", day);
                let corrected = format!("{:02}{month:02}61-4082", day + 60);
                assert_eq!(
                    decode_person(&plain, Options::default()),
                    decode_person(&corrected, Options::default()),
                    "{corrected} should decode like {plain}"
                );
            }
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("010203-1234", Options::default()));
        assert!(!is_valid("320203-1234", Options::default()));
    }

    #[test]
    fn test_person_from_str_uses_default_options() {
        let person = "010203-1234".parse::<Person>().unwrap();
        assert_eq!(person.date_of_birth.to_string(), "1903-02-01");

        // Repair defaults on, checksum defaults off
        assert!("610203-1234".parse::<Person>().is_ok());
        assert!("070261-4081".parse::<Person>().is_ok());

        assert_eq!(
            "010203x1234".parse::<Person>(),
            Err(ErrorReason::NonDashCharacter)
        );
    }

    #[test]
    fn test_person_serde() {
        let person = "010203-1234".parse::<Person>().unwrap();
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(
            json,
            r#"{"gender":"Female","date_of_birth":"1903-02-01"}"#
        );

        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, parsed);
    }

    #[test]
    fn test_person_serde_rejects_invalid_date() {
        let json = r#"{"gender":"Female","date_of_birth":"1903-02-29"}"#;
        let result: Result<Person, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_text_for_rejection() {
        let error = validate("071361-4082", with_modula11()).unwrap_err();
        assert_eq!(error.text(Language::English), "The modula 11 check failed");
        assert_eq!(error.text(Language::Danish), "Modula-11 tjekket fejlede");
    }
}
