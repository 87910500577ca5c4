//! Field readers for documents written before this service owned the
//! collections, where request bodies were stored verbatim. Numbers may be
//! doubles or strings and timestamps may be RFC 3339 strings; values that
//! cannot be read fall back to the field's default instead of failing the
//! whole cursor.

use mongodb::bson::{Bson, DateTime};
use serde::{Deserialize, Deserializer};

pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Bson::deserialize(deserializer)? {
        Bson::Int32(n) => i64::from(n),
        Bson::Int64(n) => n,
        Bson::Double(n) => whole(n).unwrap_or(0),
        Bson::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
                .unwrap_or(0)
        }
        _ => 0,
    };
    Ok(value)
}

pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Bson::deserialize(deserializer)? {
        Bson::Double(n) => Some(n),
        Bson::Int32(n) => Some(f64::from(n)),
        Bson::Int64(n) => Some(n as f64),
        Bson::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|n| n.is_finite()))
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Bson::deserialize(deserializer)? {
        Bson::DateTime(dt) => Some(dt),
        Bson::String(s) => DateTime::parse_rfc3339_str(s.trim()).ok(),
        Bson::Int64(millis) => Some(DateTime::from_millis(millis)),
        _ => None,
    };
    Ok(value)
}

fn whole(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64).then_some(n as i64)
}
