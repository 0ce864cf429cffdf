use serde::{Deserialize, Serialize};

/// A travel destination from the read-only catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub location: String,
    pub category: String,
    pub category_id: String,
    pub region: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub best_time: String,
    pub attractions: Vec<String>,
    pub tips: String,
    pub image: String,
}
