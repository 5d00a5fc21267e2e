use yew::prelude::*;
use crate::models::EmployeeProfile;
use crate::viewmodels::Disclosure;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub profile: EmployeeProfile,
    #[prop_or_default]
    pub initially_expanded: bool,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let disclosure = {
        let expanded = props.initially_expanded;
        use_state(move || if expanded { Disclosure::Expanded } else { Disclosure::Collapsed })
    };

    let on_toggle = {
        let disclosure = disclosure.clone();
        Callback::from(move |_e: MouseEvent| disclosure.set(disclosure.toggled()))
    };

    let profile = &props.profile;
    let expanded = disclosure.is_expanded();

    let avatar = if profile.avatar.is_empty() {
        let initial = profile.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
        html! { <div class="profile-avatar profile-avatar-placeholder">{initial}</div> }
    } else {
        html! { <img class="profile-avatar" src={profile.avatar.clone()} alt={profile.name.clone()} /> }
    };

    let availability = if profile.availability.trim().is_empty() {
        "Not specified".to_string()
    } else {
        profile.availability.clone()
    };

    html! {
        <div class="profile-card">
            {avatar}
            <h2 class="profile-name">{profile.name.clone()}</h2>
            <p class="profile-email">
                <a href={format!("mailto:{}", profile.email)}>{profile.email.clone()}</a>
            </p>
            <div class="availability">
                <button
                    class="availability-toggle"
                    aria-expanded={expanded.to_string()}
                    onclick={on_toggle}
                >
                    <span>{"Availability"}</span>
                    <span>{if expanded { "▲" } else { "▼" }}</span>
                </button>
                if expanded {
                    <div class="availability-body">{availability}</div>
                }
            </div>
        </div>
    }
}
