use serde::{Deserialize, Serialize};

/// Identifier of a hotspot in the hunt scene.
pub type SpotId = u8;

/// A clickable item in the scene-hunt room that exhibits parallel lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntSpot {
    pub id: SpotId,
    pub label: String,
}
