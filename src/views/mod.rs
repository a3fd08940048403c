// ============================================================================
// VIEWS - Funciones que renderizan DOM (sin lógica de negocio)
// ============================================================================

pub mod app;
pub mod footer;
pub mod sidebar;

pub use app::render_app;
pub use footer::render_location_footer;
pub use sidebar::render_wishlist_sidebar;
