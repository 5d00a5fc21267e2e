// ============================================================================
// PROFILE VIEWMODEL - LÓGICA DEL PERFIL DE EMPLEADO
// ============================================================================
// Sin dependencias de Yew: devuelve estados, el hook los aplica.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::models::EmployeeProfile;
use crate::services::{auth_header_for_key, EmployeeDirectory};
use crate::utils::{KeyValueStore, LOAD_ERROR_MESSAGE, STORAGE_KEY_AUTH_TOKEN};

/// Estados mutuamente excluyentes de la vista de perfil
#[derive(Clone, PartialEq, Debug, Default)]
pub enum ProfileState {
    #[default]
    Empty,
    Loading,
    Failed(String),
    Loaded(EmployeeProfile),
}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProfileState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&EmployeeProfile> {
        match self {
            ProfileState::Loaded(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Estado etiquetado con el `userId` que lo produjo
#[derive(Clone, PartialEq, Debug, Default)]
pub struct KeyedProfileState {
    pub user_id: Option<String>,
    pub state: ProfileState,
}

impl KeyedProfileState {
    pub fn new(user_id: Option<String>, state: ProfileState) -> Self {
        Self { user_id, state }
    }

    pub fn starting(user_id: Option<&str>) -> Self {
        Self::new(user_id.map(str::to_string), ProfileViewModel::start_state(user_id))
    }

    /// Estado a pintar para `user_id`. Si el guardado es de otro usuario
    /// se descarta en el mismo render.
    pub fn visible_for(&self, user_id: Option<&str>) -> ProfileState {
        if self.user_id.as_deref() == user_id {
            self.state.clone()
        } else {
            ProfileViewModel::start_state(user_id)
        }
    }
}

/// Sección de disponibilidad plegada/desplegada
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// Valor del contador capturado al lanzar un fetch
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FetchTicket(u64);

/// Contador de generaciones compartido entre el efecto y sus futures.
/// Solo el ticket más reciente puede aplicar su resultado.
#[derive(Clone, Debug, Default)]
pub struct FetchGeneration(Rc<Cell<u64>>);

impl FetchGeneration {
    pub fn begin(&self) -> FetchTicket {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        FetchTicket(next)
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.0.get() == ticket.0
    }
}

impl PartialEq for FetchGeneration {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// ViewModel de perfil - SOLO lógica
pub struct ProfileViewModel {
    directory: Rc<dyn EmployeeDirectory>,
    store: Rc<dyn KeyValueStore>,
}

impl ProfileViewModel {
    pub fn new(directory: Rc<dyn EmployeeDirectory>, store: Rc<dyn KeyValueStore>) -> Self {
        Self { directory, store }
    }

    /// Estado a mostrar mientras se decide si hay que pedir algo
    pub fn start_state(user_id: Option<&str>) -> ProfileState {
        match user_id {
            Some(_) => ProfileState::Loading,
            None => ProfileState::Empty,
        }
    }

    /// Pide el perfil y lo traduce a estado. Cualquier error se registra
    /// y se colapsa en `LOAD_ERROR_MESSAGE`.
    pub async fn load(&self, user_id: &str) -> ProfileState {
        let headers = auth_header_for_key(self.store.as_ref(), STORAGE_KEY_AUTH_TOKEN);
        if headers.is_empty() {
            log::warn!("⚠️ [PROFILE] Sin token en '{}', petición sin autorización", STORAGE_KEY_AUTH_TOKEN);
        }

        match self.directory.fetch_user_details(user_id, &headers).await {
            Ok(Some(details)) => {
                let profile = EmployeeProfile::from(details);
                log::info!("✅ [PROFILE] Perfil cargado: {}", profile.name);
                ProfileState::Loaded(profile)
            }
            Ok(None) => {
                log::warn!("⚠️ [PROFILE] getUserDetails vacío para {}", user_id);
                ProfileState::Empty
            }
            Err(e) => {
                log::error!("❌ [PROFILE] Error obteniendo detalles de {}: {}", user_id, e);
                ProfileState::Failed(LOAD_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// `load` + aplicar el resultado solo si `ticket` sigue vigente.
    /// Devuelve si `apply` llegó a llamarse.
    pub async fn load_for<F>(
        &self,
        user_id: &str,
        generation: &FetchGeneration,
        ticket: FetchTicket,
        apply: F,
    ) -> bool
    where
        F: FnOnce(ProfileState),
    {
        let next = self.load(user_id).await;
        if generation.is_current(ticket) {
            apply(next);
            true
        } else {
            log::debug!("⏭️ [PROFILE] Respuesta obsoleta para {} descartada", user_id);
            false
        }
    }
}
