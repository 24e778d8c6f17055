//! Serde support for [`Outcome`].
//!
//! Outcomes serialize as `{ "valid": bool, "value": T, "reason": string }`.
//! The `value` field is omitted for failing outcomes, so a passing
//! `Outcome<()>` (whose value serializes as `null`) stays distinguishable
//! from a failing one.

use super::Outcome;
use crate::types::alloc_type::String;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.value.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Outcome", len)?;
        state.serialize_field("valid", &self.is_valid())?;
        match &self.value {
            Some(value) => state.serialize_field("value", value)?,
            None => state.skip_field("value")?,
        }
        state.serialize_field("reason", &self.reason)?;
        state.end()
    }
}

#[derive(serde::Deserialize)]
#[serde(rename = "Outcome", bound(deserialize = "T: Deserialize<'de>"))]
struct OutcomeRepr<T> {
    valid: bool,
    #[serde(default, deserialize_with = "present")]
    value: Option<T>,
    #[serde(default)]
    reason: String,
}

// A present field is `Some` even when it holds `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<'de, T> Deserialize<'de> for Outcome<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let OutcomeRepr { valid, value, reason } = OutcomeRepr::<T>::deserialize(deserializer)?;
        match (valid, value) {
            (true, Some(value)) => Ok(Self { value: Some(value), reason }),
            (false, None) => Ok(Self { value: None, reason }),
            (true, None) => Err(de::Error::missing_field("value")),
            (false, Some(_)) => {
                Err(de::Error::custom("failing outcome must not carry a value"))
            },
        }
    }
}
