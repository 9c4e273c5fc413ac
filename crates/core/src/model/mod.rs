mod gallery;
mod phase;
mod question;
mod scene;
mod shape;

pub use gallery::{GalleryArt, GalleryItem};
pub use phase::{LessonProgress, Phase, PhaseStatus};
pub use question::{Question, QuestionCategory};
pub use scene::{HuntSpot, SpotId};
pub use shape::{ShapeDefinition, Side, SideId, ViewBox};
