use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record as served by the remote directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl User {
    /// Full display name ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One server-determined page of the user collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

/// Single-user envelope returned by the get-user operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEnvelope {
    pub data: User,
}

/// Structured update record sent to the update operation.
///
/// Fields set to `None` are omitted from the JSON payload entirely, so a
/// partial update never sends empty strings for untouched fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Echo returned by the remote service after a successful update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_page_deserializes_from_wire_json() {
        let body = r#"{
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [
                {
                    "id": 7,
                    "email": "michael.lawson@reqres.in",
                    "first_name": "Michael",
                    "last_name": "Lawson",
                    "avatar": "https://reqres.in/img/faces/7-image.jpg"
                }
            ]
        }"#;

        let page: UserPage = serde_json::from_str(body).expect("valid page json");
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 7);
        assert_eq!(page.data[0].full_name(), "Michael Lawson");
    }

    #[test]
    fn user_update_omits_unset_fields() {
        let update = UserUpdate {
            first_name: Some("Eve".to_string()),
            last_name: None,
            email: None,
        };

        let json = serde_json::to_string(&update).expect("serializable");
        assert_eq!(json, r#"{"first_name":"Eve"}"#);
    }

    #[test]
    fn update_response_parses_camel_case_timestamp() {
        let body = r#"{
            "first_name": "Eve",
            "last_name": "Holt",
            "email": "eve.holt@reqres.in",
            "updatedAt": "2024-01-01T12:00:00.000Z"
        }"#;

        let response: UserUpdateResponse = serde_json::from_str(body).expect("valid update json");
        assert_eq!(response.first_name.as_deref(), Some("Eve"));
        assert_eq!(response.updated_at.timestamp(), 1_704_110_400);
    }
}
