pub mod profile_viewmodel;

pub use profile_viewmodel::{
    Disclosure, FetchGeneration, FetchTicket, KeyedProfileState, ProfileState, ProfileViewModel,
};
