// ============================================================================
// MODELS - Estructuras compartidas con los backends
// ============================================================================

pub mod building;
pub mod location;
pub mod wishlist;

pub use building::*;
pub use location::*;
pub use wishlist::*;
