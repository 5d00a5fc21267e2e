// ============================================================================
// NAVIGATION CONTEXT - Estado de navegación (userId) compartido
// ============================================================================
// El estado vive en la URL (?userId=...) para sobrevivir a recargas y
// se propaga a las vistas con la Context API de Yew.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, UrlSearchParams};
use yew::prelude::*;
use crate::utils::NAV_PARAM_USER_ID;

#[derive(Clone, PartialEq, Debug, Default)]
pub struct NavigationState {
    pub user_id: Option<String>,
}

impl NavigationState {
    pub fn for_user(user_id: Option<String>) -> Self {
        Self {
            user_id: user_id
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
        }
    }

    /// Lee `?userId=` de la URL actual
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let user_id = UrlSearchParams::new_with_str(&search)
            .ok()
            .and_then(|params| params.get(NAV_PARAM_USER_ID));
        Self::for_user(user_id)
    }

    pub fn to_query(&self) -> String {
        match &self.user_id {
            Some(id) => format!(
                "?{}={}",
                NAV_PARAM_USER_ID,
                String::from(js_sys::encode_uri_component(id))
            ),
            None => String::new(),
        }
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct NavigationHandle {
    pub state: NavigationState,
    pub navigate: Callback<Option<String>>,
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    /// Estado inicial explícito; si falta se lee de la URL
    #[prop_or_default]
    pub initial: Option<NavigationState>,
    pub children: Children,
}

#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let state = {
        let initial = props.initial.clone();
        use_state(move || initial.unwrap_or_else(NavigationState::from_location))
    };

    let navigate = {
        let state = state.clone();
        Callback::from(move |user_id: Option<String>| {
            let next = NavigationState::for_user(user_id);
            log::info!("🧭 [NAV] Navegando a userId={:?}", next.user_id);
            push_history(&next);
            state.set(next);
        })
    };

    // Botones atrás/adelante del navegador
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    state.set(NavigationState::from_location());
                }) as Box<dyn FnMut(web_sys::Event)>);
                if let Err(e) = win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ [NAV] No se pudo registrar popstate: {:?}", e);
                }
                (win, closure)
            });
            move || {
                if let Some((win, closure)) = listener {
                    let _ = win.remove_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
                }
            }
        });
    }

    let handle = NavigationHandle {
        state: (*state).clone(),
        navigate,
    };

    html! {
        <ContextProvider<NavigationHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<NavigationHandle>>
    }
}

fn push_history(state: &NavigationState) {
    let Some(win) = window() else { return };
    let path = win.location().pathname().unwrap_or_default();
    let url = format!("{}{}", path, state.to_query());
    match win.history() {
        Ok(history) => {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("⚠️ [NAV] pushState falló: {:?}", e);
            }
        }
        Err(e) => log::warn!("⚠️ [NAV] History no disponible: {:?}", e),
    }
}

/// Estado de navegación actual. Fuera de un provider: sin usuario.
#[hook]
pub fn use_navigation() -> NavigationHandle {
    use_context::<NavigationHandle>().unwrap_or_default()
}
