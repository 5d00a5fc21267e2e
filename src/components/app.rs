use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::hooks::{use_navigation, AppServices, NavigationProvider, ServicesProvider};
use super::employee_profile::EmployeeProfileView;
use super::layout::Layout;

#[function_component(App)]
pub fn app() -> Html {
    let services = AppServices::shared_browser();

    html! {
        <ServicesProvider {services}>
            <NavigationProvider>
                <Layout>
                    <UserLookup />
                    <EmployeeProfileView />
                </Layout>
            </NavigationProvider>
        </ServicesProvider>
    }
}

/// Formulario mínimo para cambiar el `userId` de la navegación
#[function_component(UserLookup)]
pub fn user_lookup() -> Html {
    let navigation = use_navigation();
    let input_ref = use_node_ref();

    let onsubmit = {
        let navigate = navigation.navigate.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                navigate.emit(Some(input.value()));
            }
        })
    };

    html! {
        <form class="user-lookup" {onsubmit}>
            <input
                ref={input_ref}
                type="text"
                placeholder="Employee ID"
                value={navigation.state.user_id.clone().unwrap_or_default()}
            />
            <button type="submit">{"View"}</button>
        </form>
    }
}
