use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::client::{ApiClient, ApiError};

// Wire shapes. Every field is optional and decoded through `lenient`, so a
// partially filled or mistyped record still decodes; the view models fill the
// gaps with zero or a placeholder.

/// Decode a field, falling back to its default when the value has the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Grouping keys come back as strings, but numeric keys still make usable labels.
fn lenient_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPayload {
    #[serde(deserialize_with = "lenient")]
    pub total_books: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub available_books: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub issued_books: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub total_members: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub active_members: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub overdue_books: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MonthKey {
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<i32>,
}

/// One month of issue/return counts, as grouped by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionPayload {
    #[serde(rename = "_id", deserialize_with = "lenient")]
    pub id: MonthKey,
    #[serde(deserialize_with = "lenient")]
    pub issued: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pub returned: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryPayload {
    #[serde(rename = "_id", deserialize_with = "lenient_label")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ActivityUser {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPayload {
    #[serde(deserialize_with = "lenient")]
    pub user: Option<ActivityUser>,
    #[serde(deserialize_with = "lenient")]
    pub details: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
}

impl ApiClient {
    pub async fn dashboard_stats(&self, token: Option<&str>) -> Result<StatsPayload, ApiError> {
        self.get_json("/dashboard/stats", token).await
    }

    pub async fn transaction_chart(&self, token: Option<&str>) -> Result<Vec<TransactionPayload>, ApiError> {
        self.get_json("/dashboard/charts/transactions", token).await
    }

    pub async fn category_chart(&self, token: Option<&str>) -> Result<Vec<CategoryPayload>, ApiError> {
        self.get_json("/dashboard/charts/categories", token).await
    }

    pub async fn activities(&self, token: Option<&str>) -> Result<Vec<ActivityPayload>, ApiError> {
        self.get_json("/dashboard/activities", token).await
    }
}
