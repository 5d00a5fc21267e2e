use thiserror::Error;

/// Errores de la capa de red. La UI los colapsa en un único mensaje,
/// el detalle solo va al log.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Serialization error: {0}")]
    Encode(String),
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let http = ApiError::Http { status: 401, status_text: "Unauthorized".into() };
        assert_eq!(http.to_string(), "HTTP 401: Unauthorized");

        let gql = ApiError::GraphQl(vec!["a".into(), "b".into()]);
        assert_eq!(gql.to_string(), "GraphQL error: a; b");
    }

    #[test]
    fn encode_and_decode_are_reported_apart() {
        let encode = ApiError::Encode("key must be a string".into());
        let decode = ApiError::Decode("expected value".into());
        assert_eq!(encode.to_string(), "Serialization error: key must be a string");
        assert_eq!(decode.to_string(), "Parse error: expected value");
        assert_ne!(encode, decode);
    }
}
