use std::collections::HashMap;
use crate::utils::{KeyValueStore, STORAGE_KEY_TOKEN};

/// Cabeceras HTTP nombre -> valor
pub type Headers = HashMap<String, String>;

pub const AUTHORIZATION: &str = "Authorization";

/// Cabecera de autorización a partir del token guardado bajo `token`.
/// Sin token devuelve un mapa vacío.
pub fn auth_header(store: &dyn KeyValueStore) -> Headers {
    auth_header_for_key(store, STORAGE_KEY_TOKEN)
}

/// Igual que `auth_header` pero leyendo otra clave de storage
pub fn auth_header_for_key(store: &dyn KeyValueStore, key: &str) -> Headers {
    let mut headers = Headers::new();
    if let Some(token) = store.get_item(key).filter(|t| !t.is_empty()) {
        headers.insert(AUTHORIZATION.to_string(), format!("Bearer {}", token));
    }
    headers
}
