//! Water model: a named lake, river, or stream.

/// A body of water grouping one or more monitoring stations.
#[derive(Debug, Clone)]
pub struct Water {
    pub id: String,
    pub name: Option<String>,
    /// Free-text classification ("river", "lake", ...)
    pub kind: Option<String>,
}

/// Fields accepted by `createWater`.
#[derive(Debug, Clone, Default)]
pub struct NewWater {
    pub name: Option<String>,
    pub kind: Option<String>,
}
