// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN GRAPHQL (Stateless)
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use crate::config::CONFIG;
use crate::models::graphql::{user_details_request, GraphQlResponse, UserDetails, UserDetailsData};
use super::auth_service::Headers;
use super::error::ApiError;

/// Origen de los datos de empleado. `ApiClient` en el navegador,
/// mocks en los tests.
#[async_trait(?Send)]
pub trait EmployeeDirectory {
    async fn fetch_user_details(
        &self,
        user_id: &str,
        headers: &Headers,
    ) -> Result<Option<UserDetails>, ApiError>;
}

/// Cliente GraphQL
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    graphql_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_url(&CONFIG.graphql_url)
    }

    pub fn with_url(graphql_url: &str) -> Self {
        Self {
            graphql_url: graphql_url.to_string(),
        }
    }

    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl EmployeeDirectory for ApiClient {
    async fn fetch_user_details(
        &self,
        user_id: &str,
        headers: &Headers,
    ) -> Result<Option<UserDetails>, ApiError> {
        log::info!("👤 Obteniendo detalles de empleado: {}", user_id);

        let mut builder = Request::post(&self.graphql_url);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .json(&user_details_request(user_id))
            .map_err(encode_error)?
            .send()
            .await?;

        if !response.ok() {
            return Err(ApiError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response
            .json::<GraphQlResponse<UserDetailsData>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        into_user_details(body)
    }
}

/// Fallo al serializar el cuerpo de la petición
fn encode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Encode(err.to_string())
}

/// `errors` no vacío es fallo aunque venga `data` parcial
pub fn into_user_details(
    body: GraphQlResponse<UserDetailsData>,
) -> Result<Option<UserDetails>, ApiError> {
    if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
        return Err(ApiError::GraphQl(errors.into_iter().map(|e| e.message).collect()));
    }
    Ok(body.data.and_then(|d| d.get_user_details))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: &str) -> GraphQlResponse<UserDetailsData> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn extracts_user_details() {
        let body = decode(r#"{"data":{"getUserDetails":{"firstName":"Ada","lastName":"Lovelace","email":"ada@corp.io","avatar":"a.png","availability":"Fridays"}}}"#);
        let details = into_user_details(body).unwrap().unwrap();
        assert_eq!(details.last_name.as_deref(), Some("Lovelace"));
    }

    #[test]
    fn null_user_details_is_none() {
        let body = decode(r#"{"data":{"getUserDetails":null}}"#);
        assert_eq!(into_user_details(body), Ok(None));

        let body = decode(r#"{"data":null}"#);
        assert_eq!(into_user_details(body), Ok(None));
    }

    #[test]
    fn graphql_errors_win_over_partial_data() {
        let body = decode(r#"{"data":{"getUserDetails":null},"errors":[{"message":"forbidden"}]}"#);
        assert_eq!(into_user_details(body), Err(ApiError::GraphQl(vec!["forbidden".into()])));
    }

    #[test]
    fn empty_errors_array_is_ignored() {
        let body = decode(r#"{"data":{"getUserDetails":{"email":"x@y.z"}},"errors":[]}"#);
        assert!(into_user_details(body).unwrap().is_some());
    }

    #[test]
    fn request_serialization_failure_is_an_encode_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mapped = encode_error(gloo_net::Error::SerdeError(err));
        assert!(matches!(mapped, ApiError::Encode(_)));
        assert!(mapped.to_string().starts_with("Serialization error"));
    }

    #[test]
    fn with_url_overrides_config() {
        assert_eq!(ApiClient::with_url("http://localhost:4000/graphql").graphql_url(), "http://localhost:4000/graphql");
    }
}
