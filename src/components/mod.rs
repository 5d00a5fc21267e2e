pub mod app;
pub mod employee_profile;
pub mod layout;
pub mod profile_card;

pub use app::App;
pub use employee_profile::{EmployeeProfileView, ProfileStatus};
pub use layout::Layout;
pub use profile_card::ProfileCard;
