use serde::{Deserialize, Serialize};

/// Query de detalles de empleado
pub const GET_USER_DETAILS_QUERY: &str = "query GetUserDetails($userId: ID!) {
  getUserDetails(userId: $userId) {
    firstName
    lastName
    email
    avatar
    availability
  }
}";

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsVariables {
    pub user_id: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsData {
    #[serde(default)]
    pub get_user_details: Option<UserDetails>,
}

/// Payload de `getUserDetails`; cualquier campo puede venir ausente o null
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
}

pub fn user_details_request(user_id: &str) -> GraphQlRequest<UserDetailsVariables> {
    GraphQlRequest {
        query: GET_USER_DETAILS_QUERY,
        variables: UserDetailsVariables {
            user_id: user_id.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_variables() {
        let body = serde_json::to_value(user_details_request("42")).unwrap();
        assert_eq!(body["variables"]["userId"], "42");
        assert!(body["query"].as_str().unwrap().contains("getUserDetails(userId: $userId)"));
    }

    #[test]
    fn decodes_nulls_and_missing_fields() {
        let raw = r#"{"data":{"getUserDetails":{"firstName":"Ada","lastName":null,"email":"ada@corp.io"}}}"#;
        let response: GraphQlResponse<UserDetailsData> = serde_json::from_str(raw).unwrap();
        let details = response.data.unwrap().get_user_details.unwrap();
        assert_eq!(details.first_name.as_deref(), Some("Ada"));
        assert_eq!(details.last_name, None);
        assert_eq!(details.avatar, None);
        assert!(response.errors.is_none());
    }

    #[test]
    fn decodes_errors_without_data() {
        let raw = r#"{"errors":[{"message":"User not found","path":["getUserDetails"]}]}"#;
        let response: GraphQlResponse<UserDetailsData> = serde_json::from_str(raw).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors.unwrap()[0].message, "User not found");
    }
}
