use serde::Deserialize;

/// Edificio cercano devuelto por `/building/nearby-buildings`
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyBuilding {
    pub location: BuildingLocation,
    #[serde(default)]
    pub stores: Vec<Store>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BuildingLocation {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Store {
    pub name: String,
}
