//! Chain record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One block in the voidchain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    /// 1-based position in the chain.
    pub block: u32,
    /// What happened.
    pub event: String,
    /// Visitor platform; only set on the first block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    /// When the block was recorded.
    #[serde(with = "millis")]
    pub timestamp: DateTime<Utc>,
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
