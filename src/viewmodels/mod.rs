// ============================================================================
// VIEWMODELS - Lógica de UI y orquestación de servicios
// ============================================================================

pub mod map_viewmodel;
pub mod selection_viewmodel;
pub mod wishlist_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use selection_viewmodel::SelectionViewModel;
pub use wishlist_viewmodel::WishlistViewModel;
