use serde::{Deserialize, Serialize};

/// Which built-in illustration a gallery entry shows. The drawing itself is
/// a view concern; the catalog only names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryArt {
    Railroad,
    Ladder,
    Notebook,
    ZebraCrossing,
}

/// One real-world example in the discovery gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub art: GalleryArt,
    pub label: String,
    pub description: String,
}
