// Doctor records as served by the directory endpoint
//
// We only model the fields the browser consumes. Serde ignores the rest,
// which keeps decoding robust when the upstream payload grows.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Everything that is not part of a number in a fee string ("₹ 1,500" -> "1500")
static FEE_NOISE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[^0-9.\-]+").ok());

/// Record identifier - upstream sends strings, older dumps send numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DoctorId {
    Text(String),
    Number(i64),
}

impl Default for DoctorId {
    fn default() -> Self {
        DoctorId::Text(String::new())
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorId::Text(s) => write!(f, "{}", s),
            DoctorId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One specialty entry (`{"name": "Dentist"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub name: String,
}

/// One entry of the doctor directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(default)]
    pub id: DoctorId,

    pub name: String,

    /// Ordered; the first entry is the primary specialty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub specialities: Vec<Specialty>,

    /// "Video Consult" or "In Clinic"
    #[serde(default, rename = "consultationType")]
    pub consultation_type: Option<String>,

    /// Years, as free text ("13" or "13 Years of experience")
    #[serde(default)]
    pub experience: Option<String>,

    /// Currency-formatted ("₹ 500")
    #[serde(default)]
    pub fees: Option<String>,

    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub doctor_introduction: Option<String>,

    #[serde(default)]
    pub clinic_name: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Specialty>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Specialty>>::deserialize(deserializer)?.unwrap_or_default())
}

impl DoctorRecord {
    /// First listed specialty, if any
    pub fn primary_specialty(&self) -> Option<&str> {
        self.specialities.first().map(|s| s.name.as_str())
    }

    /// Exact name match against any listed specialty
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialities.iter().any(|s| s.name == name)
    }

    /// Case-insensitive substring match on the display name
    pub fn name_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }

    /// Numeric fee for sorting (0.0 when missing or unparseable)
    pub fn fee_value(&self) -> f64 {
        self.fees
            .as_deref()
            .map(|raw| match FEE_NOISE.as_ref() {
                Some(noise) => parse_float_prefix(&noise.replace_all(raw, "")),
                None => parse_float_prefix(raw),
            })
            .unwrap_or(0.0)
    }

    /// Numeric years of experience for sorting (0.0 when missing or unparseable)
    pub fn experience_value(&self) -> f64 {
        self.experience
            .as_deref()
            .map(parse_float_prefix)
            .unwrap_or(0.0)
    }
}

/// Parse the longest leading decimal number, browser `parseFloat` style.
///
/// Leading whitespace is skipped, trailing garbage ignored. Anything that
/// does not start with a number yields 0.0.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Optional exponent, only consumed when followed by digits
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
