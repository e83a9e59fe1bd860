//! Businesses visible to the authenticated API key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::helpers::deserialize_id;

/// A business owned by or shared with the API key's account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Business identifier, the value used for `{businessId}` in paths.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
