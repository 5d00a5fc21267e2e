use serde::{Deserialize, Serialize};
use super::graphql::UserDetails;

/// Modelo de presentación del perfil; se reconstruye en cada fetch
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EmployeeProfile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub availability: String,
}

impl From<UserDetails> for EmployeeProfile {
    fn from(details: UserDetails) -> Self {
        let first = details.first_name.unwrap_or_default();
        let last = details.last_name.unwrap_or_default();
        Self {
            name: format!("{} {}", first.trim(), last.trim()).trim().to_string(),
            email: details.email.unwrap_or_default(),
            avatar: details.avatar.unwrap_or_default(),
            availability: details.availability.unwrap_or_default(),
        }
    }
}
