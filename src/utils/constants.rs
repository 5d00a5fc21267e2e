/// Clave de localStorage con el token que lee la vista de perfil
pub const STORAGE_KEY_AUTH_TOKEN: &str = "authToken";

/// Clave de localStorage con el token que lee `auth_header`
pub const STORAGE_KEY_TOKEN: &str = "token";

/// Parámetro de la URL que transporta el estado de navegación
pub const NAV_PARAM_USER_ID: &str = "userId";

/// Único mensaje de error visible para el usuario
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load employee details";
