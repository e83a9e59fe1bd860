//! Serde helpers shared by the body types.

use serde::{Deserialize, Deserializer, Serializer};

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serializes a monetary amount, emitting whole numbers as JSON integers.
///
/// `1000.0` goes out as `1000` rather than `1000.0`, which keeps request
/// bodies byte-identical to what a JavaScript caller would send.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
pub fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

/// Same as [`serialize_amount`] for optional amounts.
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::ref_option)]
pub fn serialize_optional_amount<S>(amount: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match amount {
        Some(value) => serialize_amount(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Deserializes an identifier that the API may send as a string or a number.
///
/// # Errors
///
/// Fails when the value is neither a string nor a number.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Same as [`deserialize_id`] for optional identifiers.
///
/// # Errors
///
/// Fails when the value is present but neither a string nor a number.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "deserialize_id")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
}
