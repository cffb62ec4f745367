use crate::consts::{
    CANONICAL_LENGTH, MODULA11_DIVISOR, MODULA11_WEIGHTS, SEPARATED_LENGTH, SEPARATOR,
    SEPARATOR_INDEX,
};
use crate::types::Gender;
use crate::ErrorReason;

/// A CPR number reduced to its ten digits, separator removed.
/// Invariant: every element is a digit value 0..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Canonical([u8; CANONICAL_LENGTH]);

/// Raw date components of a canonical number, before any repair or
/// century resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateParts {
    /// Day of month as written, possibly carrying the +60 correction
    pub(crate) day: u8,
    /// Month as written
    pub(crate) month: u8,
    /// Two-digit year
    pub(crate) year: u8,
    /// Four-digit control code
    pub(crate) control: u16,
}

impl Canonical {
    /// Parses a raw input string into its canonical ten-digit form.
    ///
    /// Checks run in a fixed order and stop at the first failure: empty or
    /// white-space input, trimmed length, separator placement (11-character
    /// inputs only), digit content. A wrong character at the separator
    /// position is a separator defect, not a digit defect.
    ///
    /// # Errors
    /// Returns the first applicable of `NullEmptyOrWhiteSpace`,
    /// `InvalidLength`, `NonDashCharacter`, `NonDigitCharacters`.
    pub(crate) fn parse(raw: &str) -> Result<Self, ErrorReason> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ErrorReason::NullEmptyOrWhiteSpace);
        }

        let chars: Vec<char> = trimmed.chars().collect();
        let chars = match chars.len() {
            CANONICAL_LENGTH => chars,
            SEPARATED_LENGTH => {
                if chars[SEPARATOR_INDEX] != SEPARATOR {
                    return Err(ErrorReason::NonDashCharacter);
                }
                let mut without_separator = chars;
                without_separator.remove(SEPARATOR_INDEX);
                without_separator
            }
            _ => return Err(ErrorReason::InvalidLength),
        };

        let mut digits = [0u8; CANONICAL_LENGTH];
        for (slot, c) in digits.iter_mut().zip(&chars) {
            let digit = c.to_digit(10).ok_or(ErrorReason::NonDigitCharacters)?;
            *slot = digit as u8;
        }

        Ok(Self(digits))
    }

    /// Weighted digit sum modulo 11. Historically mandatory, now optional:
    /// some genuinely issued numbers fail it, so it only runs on request.
    pub(crate) fn passes_modula11(&self) -> bool {
        let sum: u32 = self
            .0
            .iter()
            .zip(MODULA11_WEIGHTS)
            .map(|(&digit, weight)| u32::from(digit) * weight)
            .sum();
        sum % MODULA11_DIVISOR == 0
    }

    /// Gender follows the parity of the final digit
    pub(crate) const fn gender(&self) -> Gender {
        if self.0[CANONICAL_LENGTH - 1] % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    /// Splits the digits into day, month, two-digit year and control code
    pub(crate) const fn date_parts(&self) -> DateParts {
        let d = &self.0;
        DateParts {
            day: d[0] * 10 + d[1],
            month: d[2] * 10 + d[3],
            year: d[4] * 10 + d[5],
            control: (d[6] as u16) * 1000
                + (d[7] as u16) * 100
                + (d[8] as u16) * 10
                + (d[9] as u16),
        }
    }
}
