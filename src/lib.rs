// ============================================================================
// STAFF PORTAL - FRONTEND YEW (RUST PURO)
// ============================================================================
// - Components: renderizado (layout, perfil de empleado)
// - Hooks: estado Yew + contextos (navegación, servicios)
// - ViewModels: lógica sin Yew, testeable en nativo
// - Services: SOLO comunicación GraphQL + cabeceras de auth
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
