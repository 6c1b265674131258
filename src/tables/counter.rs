//! Lenient frequency counter parsing.
//!
//! Counters may have been written as floats (`3.0`) by other tools, or left empty.
use serde::{de, Deserialize, Deserializer};

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse(raw).map(Some).map_err(de::Error::custom),
    }
}

fn parse(raw: &str) -> Result<u64, String> {
    if let Ok(count) = raw.parse::<u64>() {
        return Ok(count);
    }
    match raw.parse::<f64>() {
        Ok(count) if count.is_finite() && count >= 0.0 && count.fract() == 0.0 => Ok(count as u64),
        _ => Err(format!("invalid frequency counter: {:?}", raw)),
    }
}
