//! Fixed page and table geometry, in PDF points.

/// A4 page width.
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 page height.
pub const PAGE_HEIGHT: f32 = 841.89;
/// Margin on every side.
pub const MARGIN: f32 = 36.0;
/// Baseline reference for the page header.
pub const HEADER_TOP: f32 = PAGE_HEIGHT - MARGIN;
/// Cursor position where the table starts on every page.
pub const TABLE_START: f32 = HEADER_TOP - 70.0;
/// Rows may not extend below this line.
pub const BOTTOM_LIMIT: f32 = MARGIN + 20.0;

/// Minimum row height.
pub const ROW_HEIGHT: f32 = 34.0;
/// Table header row height.
pub const HEADER_ROW_HEIGHT: f32 = 34.0;
/// Horizontal cell padding.
pub const PADDING: f32 = 8.0;
/// Space reserved for the item code before the label starts.
pub const CODE_WIDTH: f32 = 52.0;
/// Leading between wrapped label lines.
pub const LINE_HEIGHT: f32 = 11.0;
/// Distance from a row's top edge to its first baseline.
pub const ROW_BASELINE_OFFSET: f32 = 14.0;

/// Column boundaries of the checklist table.
///
/// Widths are whole points except the last column, which absorbs the
/// remainder so the columns always sum to the table width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns {
    /// Left edge of the table.
    pub x: f32,
    /// Total table width.
    pub width: f32,
    /// Equipment (code + label) column width.
    pub equipment: f32,
    /// "Si" column width.
    pub yes: f32,
    /// "No" column width.
    pub no: f32,
    /// Quantity column width.
    pub quantity: f32,
    /// Expiry column width.
    pub expiry: f32,
}

impl Columns {
    /// Split a table of `width` starting at `x`.
    #[must_use]
    pub fn new(x: f32, width: f32) -> Self {
        let equipment = (width * 0.58).floor();
        let yes = (width * 0.07).floor();
        let no = (width * 0.07).floor();
        let quantity = (width * 0.12).floor();
        let expiry = width - (equipment + yes + no + quantity);
        Self {
            x,
            width,
            equipment,
            yes,
            no,
            quantity,
            expiry,
        }
    }

    /// Columns for an A4 page with the standard margins.
    #[must_use]
    pub fn a4() -> Self {
        Self::new(MARGIN, PAGE_WIDTH - MARGIN * 2.0)
    }

    /// Left edge of the equipment column.
    #[must_use]
    pub fn equipment_x(&self) -> f32 {
        self.x
    }

    /// Left edge of the "Si" column.
    #[must_use]
    pub fn yes_x(&self) -> f32 {
        self.equipment_x() + self.equipment
    }

    /// Left edge of the "No" column.
    #[must_use]
    pub fn no_x(&self) -> f32 {
        self.yes_x() + self.yes
    }

    /// Left edge of the quantity column.
    #[must_use]
    pub fn quantity_x(&self) -> f32 {
        self.no_x() + self.no
    }

    /// Left edge of the expiry column.
    #[must_use]
    pub fn expiry_x(&self) -> f32 {
        self.quantity_x() + self.quantity
    }

    /// The interior vertical separators, left to right.
    #[must_use]
    pub fn separators(&self) -> [f32; 4] {
        [self.yes_x(), self.no_x(), self.quantity_x(), self.expiry_x()]
    }

    /// Width available for wrapped label text.
    #[must_use]
    pub fn label_width(&self) -> f32 {
        self.equipment - (PADDING * 2.0 + CODE_WIDTH)
    }
}
