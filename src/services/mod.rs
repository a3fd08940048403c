// ============================================================================
// SERVICES - SOLO comunicación con servicios externos (stateless)
// ============================================================================

pub mod api_client;
pub mod building_service;
pub mod geocoder;
pub mod zone_service;

pub use api_client::ApiClient;
pub use building_service::BuildingService;
pub use geocoder::{GeocodeResult, Geocoder, UNKNOWN_ADDRESS};
pub use zone_service::ZoneService;
