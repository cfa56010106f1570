//! Plain-text sheet plan

use super::SheetRenderer;
use crate::layout::{Booklet, SheetSide};
use crate::types::Result;
use std::fmt::Write;

/// Renders a booklet as one line per face, using 1-based page numbers:
///
/// ```text
/// sheet 1 front: [  8 |  1 ]
/// sheet 1 back:  [  7 |  2 ]
/// ```
///
/// Blank slots show as `--`.
#[derive(Debug, Default)]
pub struct PlanRenderer;

impl SheetRenderer for PlanRenderer {
    type Output = String;

    fn render(&mut self, booklet: &Booklet) -> Result<String> {
        let mut out = String::new();
        for sheet in &booklet.sheets {
            for face in [&sheet.front, &sheet.back] {
                let label = match face.side {
                    SheetSide::Front => "front:",
                    SheetSide::Back => "back: ",
                };
                // Writing to a String cannot fail
                let _ = writeln!(
                    out,
                    "sheet {} {} [ {} | {} ]",
                    sheet.index + 1,
                    label,
                    slot_label(face.left),
                    slot_label(face.right)
                );
            }
        }
        Ok(out)
    }
}

fn slot_label(slot: Option<usize>) -> String {
    match slot {
        Some(idx) => format!("{:>2}", idx + 1),
        None => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::impose;
    use crate::options::BookletOptions;
    use crate::types::PageSize;

    #[test]
    fn test_plan_for_five_pages() {
        let pages = vec![PageSize::half_letter(); 5];
        let booklet = impose(&pages, &BookletOptions::default()).unwrap();
        let plan = PlanRenderer.render(&booklet).unwrap();

        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(
            lines,
            vec![
                "sheet 1 front: [ -- |  1 ]",
                "sheet 1 back:  [ -- |  2 ]",
                "sheet 2 front: [ -- |  3 ]",
                "sheet 2 back:  [  5 |  4 ]",
            ]
        );
    }
}
