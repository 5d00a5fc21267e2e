use yew::prelude::*;
use crate::viewmodels::{FetchGeneration, KeyedProfileState, ProfileState, ProfileViewModel};
use super::services_context::use_services;

/// Carga el perfil de `user_id` cada vez que cambia.
///
/// Cada fetch toma un ticket de `FetchGeneration`; una respuesta llegada
/// después de un cambio de usuario (o del desmontaje) se descarta. El
/// estado guarda el `userId` que lo produjo, así un cambio de usuario no
/// enseña el perfil anterior ni durante un render.
#[hook]
pub fn use_employee_profile(user_id: Option<String>) -> ProfileState {
    let services = use_services();
    let state = {
        let user_id = user_id.clone();
        use_state(move || KeyedProfileState::starting(user_id.as_deref()))
    };
    let generation = use_memo((), |_| FetchGeneration::default());
    let visible = state.visible_for(user_id.as_deref());

    {
        let state = state.clone();
        let generation = (*generation).clone();
        use_effect_with(user_id, move |user_id| {
            let ticket = generation.begin();
            state.set(KeyedProfileState::starting(user_id.as_deref()));

            if let Some(id) = user_id.clone() {
                let vm = ProfileViewModel::new(services.directory.clone(), services.store.clone());
                let state = state.clone();
                let generation = generation.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let key = Some(id.clone());
                    vm.load_for(&id, &generation, ticket, move |next| {
                        state.set(KeyedProfileState::new(key, next));
                    })
                    .await;
                });
            }

            move || generation.invalidate()
        });
    }

    visible
}
