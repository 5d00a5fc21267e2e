pub mod employee;
pub mod graphql;

pub use employee::EmployeeProfile;
pub use graphql::{GraphQlError, GraphQlResponse, UserDetails, UserDetailsData};
