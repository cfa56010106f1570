//! Sheet descriptors produced by the imposer

use crate::constants::SLOTS_PER_FACE;
use crate::types::PageSize;

/// Which side of the physical sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetSide {
    Front,
    Back,
}

/// Which half of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotPosition {
    Left,
    Right,
}

impl SlotPosition {
    /// Horizontal offset of the slot on a sheet built from `page` sized pages
    pub fn x_offset(self, page: PageSize) -> f32 {
        match self {
            SlotPosition::Left => 0.0,
            SlotPosition::Right => page.width_pt,
        }
    }
}

/// One printable side of a sheet.
///
/// `None` marks a padding slot that is left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceLayout {
    pub side: SheetSide,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl FaceLayout {
    /// Slots in reading order, left then right
    pub fn slots(&self) -> [(SlotPosition, Option<usize>); SLOTS_PER_FACE] {
        [
            (SlotPosition::Left, self.left),
            (SlotPosition::Right, self.right),
        ]
    }

    /// Source pages actually drawn on this face
    pub fn placements(&self) -> impl Iterator<Item = (SlotPosition, usize)> + '_ {
        self.slots()
            .into_iter()
            .filter_map(|(position, page)| page.map(|idx| (position, idx)))
    }

    pub fn blank_slots(&self) -> usize {
        self.slots().iter().filter(|(_, page)| page.is_none()).count()
    }
}

/// A physical sheet: two faces, printed front then back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetLayout {
    /// 0-based sheet number, outermost sheet first
    pub index: usize,
    pub front: FaceLayout,
    pub back: FaceLayout,
}

/// The imposed booklet, ready for a renderer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Booklet {
    /// Size of one portrait page; sheets are twice as wide
    pub page_size: PageSize,
    pub source_pages: usize,
    pub padded_pages: usize,
    pub sheets: Vec<SheetLayout>,
}

impl Booklet {
    pub fn sheet_size(&self) -> PageSize {
        self.page_size.sheet()
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Faces in printer feed order: front(0), back(0), front(1), back(1), ...
    pub fn faces(&self) -> impl Iterator<Item = &FaceLayout> + '_ {
        self.sheets
            .iter()
            .flat_map(|sheet| [&sheet.front, &sheet.back])
    }

    pub fn blank_slots(&self) -> usize {
        self.faces().map(FaceLayout::blank_slots).sum()
    }

    /// Source pages in the order a reader meets them once the stack is
    /// nested, folded and stapled, skipping blanks.
    ///
    /// Sheet 0 is outermost. With a short-edge flip the back of a half-leaf
    /// sits behind the same half of the front, so the right leaves read
    /// front then back from the outside in, and the left leaves read back
    /// then front from the inside out.
    pub fn reading_order(&self) -> Vec<usize> {
        let right_leaves = self
            .sheets
            .iter()
            .flat_map(|sheet| [sheet.front.right, sheet.back.right]);
        let left_leaves = self
            .sheets
            .iter()
            .rev()
            .flat_map(|sheet| [sheet.back.left, sheet.front.left]);

        right_leaves.chain(left_leaves).flatten().collect()
    }

    /// Source pages in printer feed order: faces as emitted, each left to
    /// right, skipping blanks
    pub fn feed_order(&self) -> Vec<usize> {
        self.faces()
            .flat_map(|face| face.placements().map(|(_, idx)| idx))
            .collect()
    }
}
