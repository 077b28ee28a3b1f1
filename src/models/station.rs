//! Station model: a USGS monitoring location on a water.

/// A physical monitoring location with its USGS site code and coordinates.
#[derive(Debug, Clone)]
pub struct Station {
    pub id: String,
    pub name: Option<String>,
    pub usgs_id: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Owning water. Not checked against the waters collection.
    pub water_id: Option<String>,
}

/// Fields accepted by `createStation`, coordinates already coerced to numbers.
#[derive(Debug, Clone, Default)]
pub struct NewStation {
    pub name: Option<String>,
    pub usgs_id: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub water_id: Option<String>,
}
