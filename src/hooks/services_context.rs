// ============================================================================
// SERVICES CONTEXT - Inyección del cliente GraphQL y del storage
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::services::{ApiClient, EmployeeDirectory};
use crate::utils::{BrowserStorage, KeyValueStore};

#[derive(Clone)]
pub struct AppServices {
    pub directory: Rc<dyn EmployeeDirectory>,
    pub store: Rc<dyn KeyValueStore>,
}

impl AppServices {
    pub fn new(directory: Rc<dyn EmployeeDirectory>, store: Rc<dyn KeyValueStore>) -> Self {
        Self { directory, store }
    }

    /// Servicios reales del navegador
    pub fn browser() -> Self {
        Self::new(Rc::new(ApiClient::new()), Rc::new(BrowserStorage))
    }

    /// Instancia única de `browser()` por hilo; todos los clones comparten los `Rc`
    pub fn shared_browser() -> Self {
        BROWSER_SERVICES.with(Clone::clone)
    }
}

thread_local! {
    static BROWSER_SERVICES: AppServices = AppServices::browser();
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.directory, &other.directory) && Rc::ptr_eq(&self.store, &other.store)
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProviderProps {
    pub services: AppServices,
    pub children: Children,
}

#[function_component(ServicesProvider)]
pub fn services_provider(props: &ServicesProviderProps) -> Html {
    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<AppServices>>
    }
}

/// Servicios del contexto, o los del navegador si no hay provider
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>().unwrap_or_else(AppServices::shared_browser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStore;

    #[test]
    fn shared_browser_is_built_once_per_thread() {
        let first = AppServices::shared_browser();
        let second = AppServices::shared_browser();
        assert!(first == second);
        assert!(first != AppServices::browser());
    }

    #[test]
    fn equality_is_by_instance() {
        let services = AppServices::new(Rc::new(ApiClient::with_url("/graphql")), Rc::new(MemoryStore::new()));
        assert!(services == services.clone());
        let other = AppServices::new(services.directory.clone(), Rc::new(MemoryStore::new()));
        assert!(services != other);
    }
}
