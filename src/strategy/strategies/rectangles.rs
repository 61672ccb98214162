use super::prelude::*;
use crate::chaining::rules::{find_rectangles, Rectangle};
use crate::chaining::RectangleKind;

fn technique(kind: RectangleKind) -> Technique {
    match kind {
        RectangleKind::Unique => Technique::UniqueRectangleType1,
        RectangleKind::Avoidable => Technique::AvoidableRectangleType1,
    }
}

/// Eliminations of a rectangle whose extra candidates lie in a single cell: that cell
/// can't take its part of the deadly pattern.
fn type_1_eliminations(rectangle: &Rectangle) -> Option<CandidateSet> {
    let cell = rectangle.extras.cells().unique().ok()??;
    let deadly = rectangle.deadly.intersection(&CandidateSet::from_digits(cell, Set::ALL));
    if deadly.is_empty() {
        return None;
    }
    Some(deadly)
}

/// Finds rectangles of `kind` with all extra candidates in one cell.
pub(crate) fn find_rectangles_type_1(
    grid: &Grid,
    kind: RectangleKind,
    mut on_rectangle: impl FnMut(Step) -> bool,
) -> Result<(), Unsolvable> {
    for rectangle in find_rectangles(grid).into_iter().filter(|r| r.kind == kind) {
        let eliminations = match type_1_eliminations(&rectangle) {
            Some(eliminations) => eliminations,
            None => continue,
        };
        let pattern = rectangle.pattern();
        let view = View {
            cells: rectangle.cells(),
            candidates: rectangle.deadly,
            houses: Set::NONE,
            links: vec![],
        };
        let step = Step::new(
            technique(kind),
            None,
            eliminations,
            Justification::Rectangle(pattern),
            view,
        );
        if on_rectangle(step) {
            break;
        }
    }
    Ok(())
}
