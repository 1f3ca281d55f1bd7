//! Data model for claim-based judgments.

use std::fmt;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered mapping from 1-based claim index to claim statement.
///
/// The backend is asked for a JSON object keyed "1", "2", ... but
/// occasionally emits a plain array; both forms are accepted, and
/// insertion order is preserved so the persisted output mirrors the
/// backend's enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet(Vec<(String, String)>);

impl ClaimSet {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        ClaimSet(pairs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ClaimSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, claim) in &self.0 {
            map.serialize_entry(index, claim)?;
        }
        map.end()
    }
}

fn value_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

struct ClaimSetVisitor;

impl<'de> Visitor<'de> for ClaimSetVisitor {
    type Value = ClaimSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of claim index to claim text, or a claim array")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::new();
        while let Some((key, value)) = access.next_entry::<String, serde_json::Value>()? {
            pairs.push((key, value_to_text(value)));
        }
        Ok(ClaimSet(pairs))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = Vec::new();
        while let Some(value) = access.next_element::<serde_json::Value>()? {
            pairs.push(((pairs.len() + 1).to_string(), value_to_text(value)));
        }
        Ok(ClaimSet(pairs))
    }
}

impl<'de> Deserialize<'de> for ClaimSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ClaimSetVisitor)
    }
}

/// Counts sometimes come back as quoted digits; accept both.
fn claim_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("claim count not a non-negative integer: {n}"))),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("claim count not numeric: {s:?}"))),
        other => Err(serde::de::Error::custom(format!(
            "claim count has unexpected type: {other}"
        ))),
    }
}

/// The parsed judgment for one (golden, candidate) pair.
///
/// Field names are the backend's wire contract. All six are required;
/// a missing field is a parse failure, never a silent zero.
/// `candidate_count` holds the reconciled value once the judge has
/// applied the count-reconciliation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimJudgment {
    #[serde(rename = "Golden Response Claims")]
    pub golden_claims: ClaimSet,
    #[serde(rename = "Candidate Response Claims")]
    pub candidate_claims: ClaimSet,
    #[serde(rename = "Common Claims")]
    pub common_claims: ClaimSet,
    #[serde(rename = "No of Golden Response Claims", deserialize_with = "claim_count")]
    pub golden_count: u64,
    #[serde(
        rename = "No of Candidate Response Claims",
        deserialize_with = "claim_count"
    )]
    pub candidate_count: u64,
    #[serde(rename = "No of Common Claims", deserialize_with = "claim_count")]
    pub common_count: u64,
}

/// Derived recall/precision/F1 for one judgment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricTriple {
    pub recall: f64,
    pub precision: f64,
    pub f1: f64,
}
