// src/rut.rs
//! Chilean national identifier (RUT) parsing and check-digit verification.
//!
//! A RUT is a numeric body of 1 to 8 digits, a `-` separator and one check
//! symbol (`0`-`9` or `K`). The body may carry `.` thousands separators; they
//! are stripped before anything else and their placement is not checked.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MAX_BODY_DIGITS: usize = 8;
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RutError {
    #[error("RUT is empty")]
    Empty,
    #[error("RUT is missing the '-' before the check digit")]
    MissingSeparator,
    #[error("RUT is missing the check digit")]
    MissingCheckSymbol,
    #[error("RUT check digit must be a single digit or 'K'")]
    InvalidCheckSymbol,
    #[error("RUT body must contain only digits")]
    InvalidBody,
    #[error("RUT body must have between 1 and 8 digits")]
    BodyLength,
    #[error("RUT check digit does not match (expected '{expected}')")]
    CheckDigitMismatch { expected: char },
}

/// A syntactically valid RUT. The check symbol is stored upper-cased and is
/// not guaranteed to match the body until [`Rut::verify`] succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rut {
    body: u32,
    check: char,
}

impl Rut {
    /// Parses the syntax only; the check digit is not verified.
    pub fn parse(input: &str) -> Result<Self, RutError> {
        if input.is_empty() {
            return Err(RutError::Empty);
        }

        let normalized: String = input.chars().filter(|&c| c != '.').collect();
        let (body, check) = normalized
            .split_once('-')
            .ok_or(RutError::MissingSeparator)?;

        let mut check_chars = check.chars();
        let check = match (check_chars.next(), check_chars.next()) {
            (None, _) => return Err(RutError::MissingCheckSymbol),
            (Some(c), None) if c.is_ascii_digit() || c == 'K' || c == 'k' => {
                c.to_ascii_uppercase()
            }
            _ => return Err(RutError::InvalidCheckSymbol),
        };

        if !body.chars().all(|c| c.is_ascii_digit()) {
            return Err(RutError::InvalidBody);
        }
        if body.is_empty() || body.len() > MAX_BODY_DIGITS {
            return Err(RutError::BodyLength);
        }

        // At most 8 ASCII digits, always fits in u32.
        let body = body.parse::<u32>().map_err(|_| RutError::InvalidBody)?;

        Ok(Self { body, check })
    }

    pub fn body(&self) -> u32 {
        self.body
    }

    pub fn check_symbol(&self) -> char {
        self.check
    }

    pub fn verify(&self) -> Result<(), RutError> {
        let expected = compute_check_symbol(self.body);
        if expected == self.check {
            Ok(())
        } else {
            Err(RutError::CheckDigitMismatch { expected })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }

    /// `12345678-5`
    pub fn compact(&self) -> String {
        format!("{}-{}", self.body, self.check)
    }

    /// `12.345.678-5`
    pub fn formatted(&self) -> String {
        let digits = self.body.to_string();
        let mut grouped = String::with_capacity(digits.len() + 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        format!("{}-{}", grouped, self.check)
    }
}

impl FromStr for Rut {
    type Err = RutError;

    /// Parses and verifies the check digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rut = Rut::parse(s)?;
        rut.verify()?;
        Ok(rut)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Modulo-11 check symbol for a RUT body.
pub fn compute_check_symbol(body: u32) -> char {
    let mut remaining = body;
    let mut sum = 0u32;
    let mut i = 0usize;
    loop {
        sum += (remaining % 10) * WEIGHTS[i % WEIGHTS.len()];
        remaining /= 10;
        i += 1;
        if remaining == 0 {
            break;
        }
    }

    match 11 - (sum % 11) {
        11 => '0',
        10 => 'K',
        // 1..=9
        d => char::from_digit(d, 10).unwrap_or('0'),
    }
}

/// True when `input` is well formed and its check symbol matches the body.
pub fn is_valid_rut(input: &str) -> bool {
    input.parse::<Rut>().is_ok()
}
