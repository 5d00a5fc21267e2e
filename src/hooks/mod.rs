pub mod navigation_context;
pub mod services_context;
pub mod use_employee_profile;

pub use navigation_context::{use_navigation, NavigationHandle, NavigationProvider, NavigationState};
pub use services_context::{use_services, AppServices, ServicesProvider};
pub use use_employee_profile::use_employee_profile;
