use std::collections::BTreeSet;

use crate::error::ContentError;
use crate::geometry::Point;
use crate::model::{
    GalleryArt, GalleryItem, HuntSpot, Question, QuestionCategory, ShapeDefinition, Side,
    ViewBox,
};

pub const APP_TITLE: &str = "Parallel Pals";

/// Read-only lesson content: quiz questions, gallery examples, shape puzzles
/// and the hunt-scene hotspots. Built once at startup and shared by
/// reference; there is no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub questions: Vec<Question>,
    pub gallery: Vec<GalleryItem>,
    pub shapes: Vec<ShapeDefinition>,
    pub hunt_spots: Vec<HuntSpot>,
}

impl Catalog {
    /// The built-in reference content.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
            gallery: builtin_gallery(),
            shapes: builtin_shapes(),
            hunt_spots: builtin_hunt_spots(),
        }
    }

    /// Check the catalog invariants the views rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: empty sections, a question whose
    /// correct index is out of range, a shape with too few or duplicate
    /// sides, a parallel pair naming an unknown side, a shape with no
    /// ground-truth pair, or duplicate hunt spot ids.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::EmptySection {
                section: "questions",
            });
        }
        if self.gallery.is_empty() {
            return Err(ContentError::EmptySection { section: "gallery" });
        }
        if self.shapes.is_empty() {
            return Err(ContentError::EmptySection { section: "shapes" });
        }
        if self.hunt_spots.is_empty() {
            return Err(ContentError::EmptySection {
                section: "hunt_spots",
            });
        }

        for question in &self.questions {
            if question.options.len() < 2 {
                return Err(ContentError::TooFewOptions {
                    id: question.id,
                    options: question.options.len(),
                });
            }
            if question.correct_index >= question.options.len() {
                return Err(ContentError::CorrectIndexOutOfRange {
                    id: question.id,
                    index: question.correct_index,
                    options: question.options.len(),
                });
            }
        }

        for shape in &self.shapes {
            if shape.sides.len() < 3 {
                return Err(ContentError::TooFewSides {
                    name: shape.name.clone(),
                    sides: shape.sides.len(),
                });
            }
            let mut seen = BTreeSet::new();
            for side in &shape.sides {
                if !seen.insert(side.id) {
                    return Err(ContentError::DuplicateSideId {
                        name: shape.name.clone(),
                        side: side.id,
                    });
                }
            }
            if shape.parallel_pairs.is_empty() {
                return Err(ContentError::NoParallelPairs {
                    name: shape.name.clone(),
                });
            }
            for &(a, b) in &shape.parallel_pairs {
                for side in [a, b] {
                    if !seen.contains(&side) {
                        return Err(ContentError::UnknownSideInPair {
                            name: shape.name.clone(),
                            side,
                        });
                    }
                }
            }
        }

        let mut spots = BTreeSet::new();
        for spot in &self.hunt_spots {
            if !spots.insert(spot.id) {
                return Err(ContentError::DuplicateSpotId { spot: spot.id });
            }
        }

        Ok(())
    }
}

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
    category: QuestionCategory,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(ToString::to_string).collect(),
        correct_index,
        explanation: explanation.to_string(),
        category,
    }
}

fn builtin_questions() -> Vec<Question> {
    vec![
        question(
            1,
            "Which pair of lines is parallel?",
            [
                "Lines that cross like an X",
                "Lines that never touch like train tracks",
                "Lines that meet at a corner",
                "Curvy lines that touch",
            ],
            1,
            "Parallel lines go in the same direction and never touch!",
            QuestionCategory::Lines,
        ),
        question(
            2,
            "What happens if you make parallel lines longer and longer?",
            [
                "They will eventually touch",
                "They will move further apart",
                "They will never meet",
                "They will turn into a circle",
            ],
            2,
            "No matter how long they are, parallel lines never meet.",
            QuestionCategory::Concept,
        ),
        question(
            3,
            "Look at a rectangle. How many pairs of parallel sides does it have?",
            ["0", "1", "2", "4"],
            2,
            "A rectangle has two pairs: top/bottom are parallel, and left/right are parallel.",
            QuestionCategory::Shape,
        ),
        question(
            4,
            "Why are train tracks parallel?",
            [
                "To look pretty",
                "So the train wheels stay on the tracks",
                "To save metal",
                "It was a mistake",
            ],
            1,
            "The wheels need to be the same distance apart to stay on the rails safely!",
            QuestionCategory::RealWorld,
        ),
        question(
            5,
            "Parallel lines are always...",
            [
                "The same distance apart",
                "Getting closer",
                "Getting wider",
                "Touching",
            ],
            0,
            "The distance between parallel lines stays the same everywhere.",
            QuestionCategory::Concept,
        ),
        question(
            6,
            "Which letter consists of parallel lines?",
            ["A", "H", "V", "X"],
            1,
            "The two vertical sides of the letter H are parallel!",
            QuestionCategory::Concept,
        ),
        question(
            7,
            "If two lines cross each other, they are...",
            ["Parallel", "Intersecting", "Invisible", "Broken"],
            1,
            "Intersecting means crossing. Parallel lines never cross.",
            QuestionCategory::Lines,
        ),
        question(
            8,
            "Look at a ladder. The rungs (steps) are usually...",
            [
                "Parallel to each other",
                "Touching each other",
                "Crossing each other",
                "All different directions",
            ],
            0,
            "Ladder steps run in the same direction so you can climb up!",
            QuestionCategory::RealWorld,
        ),
    ]
}

fn builtin_gallery() -> Vec<GalleryItem> {
    let item = |art, label: &str, description: &str| GalleryItem {
        art,
        label: label.to_string(),
        description: description.to_string(),
    };
    vec![
        item(
            GalleryArt::Railroad,
            "Train Tracks",
            "The two rails always stay the same distance apart so the train fits.",
        ),
        item(
            GalleryArt::Ladder,
            "Ladder Rungs",
            "Each step is parallel to the next one so you can climb up straight.",
        ),
        item(
            GalleryArt::Notebook,
            "Notebook Lines",
            "The blue lines help you write straight because they never touch.",
        ),
        item(
            GalleryArt::ZebraCrossing,
            "Zebra Crossing",
            "The white stripes are parallel rectangles on the road.",
        ),
    ]
}

fn side(id: u8, from: (f64, f64), to: (f64, f64)) -> Side {
    Side {
        id,
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
    }
}

fn builtin_shapes() -> Vec<ShapeDefinition> {
    vec![
        ShapeDefinition {
            name: "Rectangle".to_string(),
            instruction: "Find the TOP and BOTTOM parallel sides.".to_string(),
            view_box: ViewBox {
                width: 300.0,
                height: 200.0,
            },
            sides: vec![
                side(0, (50.0, 40.0), (250.0, 40.0)),
                side(1, (250.0, 40.0), (250.0, 160.0)),
                side(2, (250.0, 160.0), (50.0, 160.0)),
                side(3, (50.0, 160.0), (50.0, 40.0)),
            ],
            parallel_pairs: vec![(0, 2), (1, 3)],
        },
        ShapeDefinition {
            name: "Trapezoid".to_string(),
            instruction: "This shape has only ONE pair of parallel sides. Find them!"
                .to_string(),
            view_box: ViewBox {
                width: 300.0,
                height: 200.0,
            },
            sides: vec![
                side(0, (80.0, 40.0), (220.0, 40.0)),
                side(1, (220.0, 40.0), (260.0, 160.0)),
                side(2, (260.0, 160.0), (40.0, 160.0)),
                side(3, (40.0, 160.0), (80.0, 40.0)),
            ],
            parallel_pairs: vec![(0, 2)],
        },
        ShapeDefinition {
            name: "Hexagon".to_string(),
            instruction: "Find the sides that are parallel to each other.".to_string(),
            view_box: ViewBox {
                width: 300.0,
                height: 200.0,
            },
            sides: vec![
                side(0, (80.0, 40.0), (220.0, 40.0)),
                side(1, (220.0, 40.0), (280.0, 100.0)),
                side(2, (280.0, 100.0), (220.0, 160.0)),
                side(3, (220.0, 160.0), (80.0, 160.0)),
                side(4, (80.0, 160.0), (20.0, 100.0)),
                side(5, (20.0, 100.0), (80.0, 40.0)),
            ],
            parallel_pairs: vec![(0, 3), (1, 4), (2, 5)],
        },
    ]
}

fn builtin_hunt_spots() -> Vec<HuntSpot> {
    let spot = |id, label: &str| HuntSpot {
        id,
        label: label.to_string(),
    };
    vec![
        spot(1, "Window Blinds"),
        spot(2, "Bookshelf"),
        spot(3, "Striped Rug"),
    ]
}
