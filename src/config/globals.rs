//! The `globals` section of a job configuration

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::token::TokenMap;

/// Global token defaults plus the job-wide name profiles.
///
/// Every key other than `name_profiles` is a global token. YAML scalars of
/// any kind are accepted and stringified, so `year: 2018` works as a token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Globals {
    /// Name templates shared by every software
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_profiles: BTreeMap<String, String>,

    /// Raw global token values
    #[serde(flatten)]
    pub values: BTreeMap<String, Value>,
}

impl Globals {
    /// Global tokens as plain strings.
    ///
    /// Null values are skipped, as are sequences and mappings (with a warning).
    pub fn tokens(&self) -> TokenMap {
        self.values
            .iter()
            .filter_map(|(name, value)| {
                scalar_to_string(value)
                    .or_else(|| {
                        if !value.is_null() {
                            tracing::warn!("Global token '{}' is not a scalar; ignoring it", name);
                        }
                        None
                    })
                    .map(|text| (name.clone(), text))
            })
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Deserialize an explicit YAML `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
