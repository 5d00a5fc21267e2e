use yew::prelude::*;
use crate::hooks::{use_employee_profile, use_navigation};
use crate::viewmodels::ProfileState;
use super::profile_card::ProfileCard;

#[derive(Properties, PartialEq)]
pub struct ProfileStatusProps {
    pub state: ProfileState,
}

/// Pinta uno de los cuatro estados del perfil
#[function_component(ProfileStatus)]
pub fn profile_status(props: &ProfileStatusProps) -> Html {
    match &props.state {
        ProfileState::Empty => html! {},
        ProfileState::Loading => html! {
            <div class="profile-loading" role="status">{"Loading..."}</div>
        },
        ProfileState::Failed(message) => html! {
            <div class="profile-error" role="alert">{message.clone()}</div>
        },
        ProfileState::Loaded(profile) => html! {
            <ProfileCard profile={profile.clone()} />
        },
    }
}

/// Vista enrutada: lee `userId` del estado de navegación y carga el perfil
#[function_component(EmployeeProfileView)]
pub fn employee_profile_view() -> Html {
    let navigation = use_navigation();
    let state = use_employee_profile(navigation.state.user_id.clone());

    html! {
        <section class="employee-profile">
            <ProfileStatus {state} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use async_trait::async_trait;
    use yew::ServerRenderer;
    use crate::hooks::{AppServices, NavigationProvider, NavigationState, ServicesProvider};
    use crate::models::{EmployeeProfile, UserDetails};
    use crate::services::{ApiError, EmployeeDirectory, Headers};
    use crate::utils::MemoryStore;

    const LOAD_ERROR: &str = "Failed to load employee details";

    struct NeverCalled;

    #[async_trait(?Send)]
    impl EmployeeDirectory for NeverCalled {
        async fn fetch_user_details(&self, _: &str, _: &Headers) -> Result<Option<UserDetails>, ApiError> {
            Err(ApiError::Network("unexpected call".into()))
        }
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        user_id: Option<String>,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        let services = use_memo((), |_| {
            AppServices::new(Rc::new(NeverCalled), Rc::new(MemoryStore::new()))
        });
        html! {
            <ServicesProvider services={(*services).clone()}>
                <NavigationProvider initial={Some(NavigationState::for_user(props.user_id.clone()))}>
                    <EmployeeProfileView />
                </NavigationProvider>
            </ServicesProvider>
        }
    }

    async fn render_state(state: ProfileState) -> String {
        ServerRenderer::<ProfileStatus>::with_props(move || ProfileStatusProps { state })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn no_navigation_state_renders_nothing() {
        let rendered = ServerRenderer::<Harness>::with_props(|| HarnessProps { user_id: None })
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("employee-profile"));
        assert!(!rendered.contains("Loading"));
        assert!(!rendered.contains(LOAD_ERROR));
        assert!(!rendered.contains("profile-card"));
    }

    #[tokio::test]
    async fn user_id_renders_loading_first() {
        let rendered = ServerRenderer::<Harness>::with_props(|| HarnessProps { user_id: Some("42".into()) })
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("Loading..."));
        assert!(!rendered.contains("profile-card"));
    }

    #[tokio::test]
    async fn failed_state_shows_only_the_error() {
        let rendered = render_state(ProfileState::Failed(LOAD_ERROR.into())).await;
        assert!(rendered.contains(LOAD_ERROR));
        assert!(!rendered.contains("Loading"));
    }

    #[tokio::test]
    async fn loaded_state_shows_card() {
        let rendered = render_state(ProfileState::Loaded(EmployeeProfile {
            name: "Ada Lovelace".into(),
            email: "ada@corp.io".into(),
            avatar: "https://cdn.corp.io/ada.png".into(),
            availability: "Tue/Thu".into(),
        }))
        .await;

        assert!(rendered.contains("Ada Lovelace"));
        assert!(rendered.contains("ada@corp.io"));
        assert!(rendered.contains("https://cdn.corp.io/ada.png"));
        assert!(!rendered.contains("Loading"));
        assert!(!rendered.contains(LOAD_ERROR));
    }
}
