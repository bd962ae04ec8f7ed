//! Page layout for the checklist document.
//!
//! Layout is a single pass over the checklist rows. It tracks a vertical
//! cursor, wraps each label to its column, and starts a new page (with the
//! page header and table header repeated) whenever the next row would cross
//! the bottom limit. The signature block closes the last page, or gets a
//! page of its own when it does not fit.
//!
//! The result is a [`Document`]: pages of [`DrawOp`]s in PDF user space
//! (origin bottom-left, y up). Turning it into bytes is the job of
//! [`crate::render`].

pub mod geometry;
pub mod wrap;

use tracing::{debug, trace};

use crate::checklist::{Checklist, ChecklistItem};
use crate::config::Config;
use crate::dates;
use crate::font::StandardFont;
use crate::signature::{SignatureSlot, Signatures};

use geometry::{
    Columns, BOTTOM_LIMIT, CODE_WIDTH, HEADER_ROW_HEIGHT, HEADER_TOP, LINE_HEIGHT, MARGIN,
    PADDING, ROW_BASELINE_OFFSET, ROW_HEIGHT, TABLE_START,
};
pub use wrap::wrap_text;

/// Vertical space the signature block needs below the cursor.
pub const SIGNATURE_BLOCK_HEIGHT: f32 = 140.0;
/// Reference line of the signature block.
pub const SIGNATURE_TOP: f32 = MARGIN + 130.0;
/// Horizontal offset of the right-hand signature.
pub const SIGNATURE_RIGHT_OFFSET: f32 = 280.0;
/// Length of each signing line.
pub const SIGNATURE_LINE_LENGTH: f32 = 240.0;

const LABEL_SIZE: f32 = 9.0;
const CODE_SIZE: f32 = 10.0;
const HEADER_LABEL_SIZE: f32 = 12.0;
const CHECK_SIZE: f32 = 12.0;
const BORDER: f32 = 1.0;
const CHECK_STROKE: f32 = 2.0;

/// A point in page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A run of text with its baseline starting at `(x, y)`.
    Text {
        /// Text to draw (sanitized and encoded at render time).
        text: String,
        /// Baseline start x.
        x: f32,
        /// Baseline y.
        y: f32,
        /// Font size in points.
        size: f32,
        /// Font face.
        font: StandardFont,
    },
    /// A straight stroked line.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke width.
        thickness: f32,
    },
    /// A stroked rectangle outline with its lower-left corner at `(x, y)`.
    Rect {
        /// Left edge.
        x: f32,
        /// Bottom edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Border stroke width.
        border: f32,
    },
    /// A signature image with its lower-left corner at `(x, y)`.
    Image {
        /// Which signature to draw.
        slot: SignatureSlot,
        /// Left edge.
        x: f32,
        /// Bottom edge.
        y: f32,
        /// Drawn width.
        width: f32,
        /// Drawn height.
        height: f32,
    },
}

/// The drawing operations of one page, in painting order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Operations in painting order.
    pub ops: Vec<DrawOp>,
}

impl Page {
    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, font: StandardFont) {
        self.ops.push(DrawOp::Text {
            text: text.into(),
            x,
            y,
            size,
            font,
        });
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            thickness,
        });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            border: BORDER,
        });
    }

    /// A two-stroke check mark anchored at `(x, y)`.
    fn check(&mut self, x: f32, y: f32, size: f32) {
        let corner = Point::new(x + size * 0.35, y - size * 0.35);
        self.line(Point::new(x, y), corner, CHECK_STROKE);
        self.line(corner, Point::new(x + size, y + size * 0.55), CHECK_STROKE);
    }

    /// All text runs on the page, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Whether any text run equals `needle`.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text == needle)
    }
}

/// A laid-out document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Pages in order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Number of pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Text and scale settings that shape the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Title at the top of every page.
    pub title: String,
    /// Signature image scale.
    pub signature_scale: f32,
    /// Caption for the left signing line.
    pub responsible_label: String,
    /// Caption for the right signing line.
    pub coordinator_label: String,
}

impl LayoutOptions {
    /// Options taken from the application configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.document.title.clone(),
            signature_scale: config.signatures.scale,
            responsible_label: config.signatures.responsible_label.clone(),
            coordinator_label: config.signatures.coordinator_label.clone(),
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Lay out a checklist and its signatures.
#[must_use]
pub fn lay_out(checklist: &Checklist, signatures: &Signatures, options: &LayoutOptions) -> Document {
    let mut engine = LayoutEngine::new(checklist, options);

    engine.start_page();
    engine.draw_table_header();
    for item in &checklist.items {
        engine.draw_row(item);
    }
    engine.draw_signatures(signatures);

    let document = engine.finish();
    debug!(
        pages = document.page_count(),
        rows = checklist.items.len(),
        "Checklist laid out"
    );
    document
}

/// Row height needed for a label wrapped into `line_count` lines.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn row_height(line_count: usize) -> f32 {
    let lines = line_count.max(1) as f32;
    ROW_HEIGHT.max(ROW_BASELINE_OFFSET + lines * LINE_HEIGHT)
}

struct LayoutEngine<'a> {
    checklist: &'a Checklist,
    options: &'a LayoutOptions,
    columns: Columns,
    finished: Vec<Page>,
    page: Page,
    started: bool,
    cursor: f32,
}

impl<'a> LayoutEngine<'a> {
    fn new(checklist: &'a Checklist, options: &'a LayoutOptions) -> Self {
        Self {
            checklist,
            options,
            columns: Columns::a4(),
            finished: Vec::new(),
            page: Page::default(),
            started: false,
            cursor: TABLE_START,
        }
    }

    /// Close the current page (if any) and open a new one with the page header.
    fn start_page(&mut self) {
        if self.started {
            self.finished.push(std::mem::take(&mut self.page));
        }
        self.started = true;

        let short_date = dates::format_short(self.checklist.date);
        let page = &mut self.page;
        page.text(
            self.options.title.as_str(),
            MARGIN,
            HEADER_TOP - 18.0,
            16.0,
            StandardFont::HelveticaBold,
        );
        page.text(
            format!("Ambulancia: {}", self.checklist.unit),
            MARGIN,
            HEADER_TOP - 40.0,
            11.0,
            StandardFont::HelveticaBold,
        );
        page.text(
            format!("Fecha: {short_date}"),
            MARGIN + 170.0,
            HEADER_TOP - 40.0,
            11.0,
            StandardFont::Helvetica,
        );

        self.cursor = TABLE_START;
        debug!(page = self.finished.len() + 1, "Started page");
    }

    fn draw_separators(&mut self, y_bottom: f32, y_top: f32) {
        for x in self.columns.separators() {
            self.page
                .line(Point::new(x, y_bottom), Point::new(x, y_top), BORDER);
        }
    }

    fn draw_table_header(&mut self) {
        let y_top = self.cursor;
        let y_bottom = y_top - HEADER_ROW_HEIGHT;
        let columns = self.columns;

        self.page
            .rect(columns.x, y_bottom, columns.width, HEADER_ROW_HEIGHT);
        self.draw_separators(y_bottom, y_top);

        let headings = [
            ("Si", columns.yes_x(), columns.yes),
            ("No", columns.no_x(), columns.no),
            ("Cantidad", columns.quantity_x(), columns.quantity),
            ("Caducidad", columns.expiry_x(), columns.expiry),
        ];
        for (label, left, width) in headings {
            let font = StandardFont::HelveticaBold;
            let text_width = font.width_of_text_at_size(label, HEADER_LABEL_SIZE);
            self.page.text(
                label,
                left + (width - text_width) / 2.0,
                y_bottom + 10.0,
                HEADER_LABEL_SIZE,
                font,
            );
        }

        self.cursor = y_bottom;
    }

    /// Start a new page with both headers if `needed` does not fit.
    fn ensure_space(&mut self, needed: f32) {
        if self.cursor - needed < BOTTOM_LIMIT {
            trace!(cursor = self.cursor, needed, "Row does not fit, breaking page");
            self.start_page();
            self.draw_table_header();
        }
    }

    fn draw_row(&mut self, item: &ChecklistItem) {
        let columns = self.columns;
        let lines = wrap_text(
            &item.label,
            columns.label_width(),
            LABEL_SIZE,
            StandardFont::Helvetica,
        );
        let height = row_height(lines.len());

        self.ensure_space(height);

        let y_top = self.cursor;
        let y_bottom = y_top - height;
        trace!(code = %item.code, lines = lines.len(), height, y_top, "Row");

        self.page.rect(columns.x, y_bottom, columns.width, height);
        self.draw_separators(y_bottom, y_top);

        let baseline = y_top - ROW_BASELINE_OFFSET;
        let page = &mut self.page;
        page.text(
            item.code.as_str(),
            columns.equipment_x() + PADDING,
            baseline,
            CODE_SIZE,
            StandardFont::HelveticaBold,
        );

        let label_x = columns.equipment_x() + PADDING + CODE_WIDTH;
        let mut line_y = baseline;
        for line in lines {
            page.text(line, label_x, line_y, LABEL_SIZE, StandardFont::Helvetica);
            line_y -= LINE_HEIGHT;
        }

        let mid_y = y_bottom + height / 2.0;
        if item.is_yes() {
            page.check(
                columns.yes_x() + columns.yes / 2.0 - 6.0,
                mid_y - 1.0,
                CHECK_SIZE,
            );
        }
        if item.is_no() {
            page.check(
                columns.no_x() + columns.no / 2.0 - 6.0,
                mid_y - 1.0,
                CHECK_SIZE,
            );
        }

        if !item.quantity.is_empty() {
            page.text(
                item.quantity.as_str(),
                columns.quantity_x() + PADDING,
                baseline,
                LABEL_SIZE,
                StandardFont::Helvetica,
            );
        }

        if let Some(expiry) = item.expiry {
            page.text(
                dates::format_short(expiry),
                columns.expiry_x() + PADDING,
                baseline,
                LABEL_SIZE,
                StandardFont::Helvetica,
            );
        }

        self.cursor = y_bottom;
    }

    /// Highest point the signature block reaches.
    fn signature_block_top(&self, signatures: &Signatures) -> f32 {
        let tallest = signatures
            .iter()
            .map(|(_, signature)| signature.scaled(self.options.signature_scale).1)
            .reduce(f32::max);

        match tallest {
            Some(height) => SIGNATURE_TOP + 45.0 + height,
            None => SIGNATURE_TOP + 40.0,
        }
    }

    fn draw_signatures(&mut self, signatures: &Signatures) {
        let block_top = self.signature_block_top(signatures);
        let fits =
            self.cursor - SIGNATURE_BLOCK_HEIGHT >= BOTTOM_LIMIT && self.cursor >= block_top;

        if !fits {
            debug!(
                cursor = self.cursor,
                block_top, "Signature block does not fit, adding a page"
            );
            self.start_page();
            self.page.text(
                "Firmas",
                MARGIN,
                self.cursor - 10.0,
                12.0,
                StandardFont::HelveticaBold,
            );
        }

        let right = MARGIN + SIGNATURE_RIGHT_OFFSET;
        let page = &mut self.page;
        page.text(
            self.options.responsible_label.as_str(),
            MARGIN,
            SIGNATURE_TOP + 20.0,
            10.0,
            StandardFont::HelveticaBold,
        );
        page.text(
            self.options.coordinator_label.as_str(),
            right,
            SIGNATURE_TOP + 20.0,
            10.0,
            StandardFont::HelveticaBold,
        );

        let line_y = SIGNATURE_TOP + 40.0;
        page.line(
            Point::new(MARGIN, line_y),
            Point::new(MARGIN + SIGNATURE_LINE_LENGTH, line_y),
            BORDER,
        );
        page.line(
            Point::new(right, line_y),
            Point::new(right + SIGNATURE_LINE_LENGTH, line_y),
            BORDER,
        );

        for (slot, signature) in signatures.iter() {
            let (width, height) = signature.scaled(self.options.signature_scale);
            let x = match slot {
                SignatureSlot::Responsible => MARGIN,
                SignatureSlot::Coordinator => right,
            };
            page.ops.push(DrawOp::Image {
                slot,
                x,
                y: SIGNATURE_TOP + 45.0,
                width,
                height,
            });
        }
    }

    fn finish(mut self) -> Document {
        if self.started {
            self.finished.push(self.page);
        }
        Document {
            pages: self.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::checklist::CATALOG;
    use crate::signature::{png_fixture, Signature};

    fn checklist() -> Checklist {
        Checklist::new("04", NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
    }

    fn rects(page: &Page) -> Vec<(f32, f32, f32, f32)> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((*x, *y, *width, *height)),
                _ => None,
            })
            .collect()
    }

    fn thick_lines(page: &Page) -> usize {
        page.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { thickness, .. } if *thickness > 1.5))
            .count()
    }

    fn signatures(width: u32, height: u32) -> Signatures {
        let signature = Signature::from_png(&png_fixture(width, height, [0, 0, 0, 255])).unwrap();
        Signatures {
            responsible: Some(signature.clone()),
            coordinator: Some(signature),
        }
    }

    #[test]
    fn test_row_height() {
        assert!((row_height(0) - 34.0).abs() < f32::EPSILON);
        assert!((row_height(1) - 34.0).abs() < f32::EPSILON);
        assert!((row_height(2) - 36.0).abs() < f32::EPSILON);
        assert!((row_height(4) - 58.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_every_page_has_header() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());

        assert!(document.page_count() > 1);
        for page in &document.pages {
            assert!(page.contains_text("AmbulanciasTVR CHECK LIST"));
            assert!(page.contains_text("Ambulancia: 04"));
            assert!(page.contains_text("Fecha: 18-octubre-2026"));
        }
    }

    #[test]
    fn test_table_header_repeated_on_row_pages() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());

        for page in &document.pages {
            if page.contains_text("A.1.1.1") || page.texts().any(|t| t.starts_with("D.")) {
                assert!(page.contains_text("Caducidad"));
            }
        }
        let header_pages = document
            .pages
            .iter()
            .filter(|page| page.contains_text("Cantidad"))
            .count();
        assert!(header_pages >= 2);
    }

    #[test]
    fn test_every_code_drawn_once_in_order() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());
        let codes: Vec<&str> = document
            .pages
            .iter()
            .flat_map(Page::texts)
            .filter(|text| CATALOG.iter().any(|(code, _)| code == text))
            .collect();
        let expected: Vec<&str> = CATALOG.iter().map(|(code, _)| *code).collect();

        assert_eq!(codes, expected);
    }

    #[test]
    fn test_rows_stay_above_bottom_limit() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());

        for page in &document.pages {
            for (_, y, _, height) in rects(page) {
                assert!(y >= BOTTOM_LIMIT - 1e-3, "rect at {y}");
                assert!(y + height <= TABLE_START + 1e-3);
            }
        }
    }

    #[test]
    fn test_rows_are_contiguous() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());

        for page in &document.pages {
            let boxes = rects(page);
            if boxes.is_empty() {
                continue;
            }
            assert!((boxes[0].1 + boxes[0].3 - TABLE_START).abs() < 1e-3);
            for pair in boxes.windows(2) {
                let (_, bottom_above, _, _) = pair[0];
                let (_, y, _, height) = pair[1];
                assert!((y + height - bottom_above).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_long_label_wraps_and_grows_row() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());
        let first = &document.pages[0];

        // A.2.1 has the longest label in the catalog.
        let position = first.texts().position(|t| t == "A.2.1").unwrap();
        let following: Vec<&str> = first.texts().skip(position + 1).take(3).collect();
        assert!(following.iter().all(|t| t.len() > 10));

        let tall = rects(first).iter().any(|(_, _, _, height)| *height > ROW_HEIGHT);
        assert!(tall);
    }

    #[test]
    fn test_answers_draw_checks_and_values() {
        let mut checklist = checklist();
        checklist.item_mut("A.1.1.1").unwrap().set_yes(true);
        checklist.item_mut("A.1.1.2").unwrap().set_no(true);
        let item = checklist.item_mut("A.1.1.3").unwrap();
        item.set_quantity("9 piezas");
        item.set_expiry(NaiveDate::from_ymd_opt(2029, 7, 3));

        let document = lay_out(&checklist, &Signatures::default(), &LayoutOptions::default());
        let first = &document.pages[0];

        assert_eq!(thick_lines(first), 4);
        assert!(first.contains_text("9 piezas"));
        assert!(first.contains_text("03-julio-2029"));
    }

    #[test]
    fn test_check_mark_placement() {
        let mut checklist = checklist();
        checklist.item_mut("A.1.1.1").unwrap().set_yes(true);
        let document = lay_out(&checklist, &Signatures::default(), &LayoutOptions::default());

        let columns = Columns::a4();
        let first_stroke = document.pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line {
                    from, thickness, ..
                } if *thickness > 1.5 => Some(*from),
                _ => None,
            })
            .unwrap();

        let row_top = TABLE_START - HEADER_ROW_HEIGHT;
        let mid_y = row_top - ROW_HEIGHT / 2.0;
        assert!((first_stroke.x - (columns.yes_x() + columns.yes / 2.0 - 6.0)).abs() < 1e-3);
        assert!((first_stroke.y - (mid_y - 1.0)).abs() < 1e-3);
    }

    #[test]
    fn test_blank_checklist_has_no_checks() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());
        assert!(document.pages.iter().all(|page| thick_lines(page) == 0));
    }

    #[test]
    fn test_signature_captions_on_last_page() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());
        let last = document.pages.last().unwrap();

        assert!(last.contains_text("Responsable de turno"));
        assert!(last.contains_text("Coordinador operativo / Director General"));
        let earlier = &document.pages[..document.page_count() - 1];
        assert!(earlier
            .iter()
            .all(|page| !page.contains_text("Responsable de turno")));
    }

    #[test]
    fn test_signature_images_placed() {
        let document = lay_out(&checklist(), &signatures(520, 200), &LayoutOptions::default());
        let last = document.pages.last().unwrap();

        let images: Vec<(SignatureSlot, f32, f32, f32, f32)> = last
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image {
                    slot,
                    x,
                    y,
                    width,
                    height,
                } => Some((*slot, *x, *y, *width, *height)),
                _ => None,
            })
            .collect();

        assert_eq!(images.len(), 2);
        let (slot, x, y, width, height) = images[0];
        assert_eq!(slot, SignatureSlot::Responsible);
        assert!((x - MARGIN).abs() < 1e-3);
        assert!((y - (SIGNATURE_TOP + 45.0)).abs() < 1e-3);
        assert!((width - 234.0).abs() < 1e-3);
        assert!((height - 90.0).abs() < 1e-3);
        assert!((images[1].1 - (MARGIN + SIGNATURE_RIGHT_OFFSET)).abs() < 1e-3);
    }

    fn short_rows(count: usize) -> Checklist {
        let mut checklist = checklist();
        checklist.items = (0..count)
            .map(|i| ChecklistItem::new(format!("X.{i}"), "corto"))
            .collect();
        checklist
    }

    fn single_row(code: &str) -> Checklist {
        let mut checklist = checklist();
        checklist.items.retain(|item| item.code == code);
        checklist
    }

    fn first_check_stroke(page: &Page) -> Point {
        page.ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Line {
                    from, thickness, ..
                } if *thickness > 1.5 => Some(*from),
                _ => None,
            })
            .unwrap()
    }

    fn text_position(page: &Page, needle: &str) -> (f32, f32) {
        page.ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, x, y, .. } if text == needle => Some((*x, *y)),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_tall_signatures_move_to_new_page_above_bottom_rule() {
        // 14 rows end at 735.89 - 34 - 14 * 34 = 225.89. That leaves the
        // 140pt block above the bottom limit, but 90pt-high images would
        // reach 166 + 45 + 90 = 301 and cover the last rows.
        let checklist = short_rows(14);
        let signatures = signatures(520, 200);
        let document = lay_out(&checklist, &signatures, &LayoutOptions::default());

        assert_eq!(document.page_count(), 2);
        let first = &document.pages[0];
        let lowest_row = rects(first)
            .iter()
            .map(|(_, y, _, _)| *y)
            .fold(f32::INFINITY, f32::min);
        assert!((lowest_row - 225.89).abs() < 1e-2);
        assert!(lowest_row - SIGNATURE_BLOCK_HEIGHT >= BOTTOM_LIMIT);

        assert!(!first.contains_text("Responsable de turno"));
        let last = &document.pages[1];
        assert!(last.contains_text("Firmas"));
        assert!(last.contains_text("Responsable de turno"));
        assert!(rects(last).is_empty());
    }

    #[test]
    fn test_signature_lines_alone_fit_below_same_rows() {
        let checklist = short_rows(14);
        let document = lay_out(&checklist, &Signatures::default(), &LayoutOptions::default());

        assert_eq!(document.page_count(), 1);
        let page = &document.pages[0];
        assert!(!page.contains_text("Firmas"));

        let lowest_row = rects(page)
            .iter()
            .map(|(_, y, _, _)| *y)
            .fold(f32::INFINITY, f32::min);
        assert!(lowest_row >= SIGNATURE_TOP + 40.0);
    }

    #[test]
    fn test_wrapped_label_lines_step_by_line_height() {
        let document = lay_out(
            &single_row("A.2.1"),
            &Signatures::default(),
            &LayoutOptions::default(),
        );
        let columns = Columns::a4();
        let label_x = columns.equipment_x() + PADDING + CODE_WIDTH;

        let baselines: Vec<f32> = document.pages[0]
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { x, y, font, .. }
                    if (*x - label_x).abs() < 1e-3 && *font == StandardFont::Helvetica =>
                {
                    Some(*y)
                }
                _ => None,
            })
            .collect();

        let y_top = TABLE_START - HEADER_ROW_HEIGHT;
        assert!(baselines.len() >= 3);
        for (i, y) in baselines.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let expected = y_top - ROW_BASELINE_OFFSET - i as f32 * LINE_HEIGHT;
            assert!((y - expected).abs() < 1e-3, "line {i} at {y}, expected {expected}");
        }

        let (_, _, _, height) = rects(&document.pages[0])[1];
        assert!((height - row_height(baselines.len())).abs() < 1e-3);
    }

    #[test]
    fn test_no_check_in_no_column() {
        let mut checklist = single_row("A.1.1.1");
        checklist.items[0].set_no(true);
        let document = lay_out(&checklist, &Signatures::default(), &LayoutOptions::default());

        let columns = Columns::a4();
        let stroke = first_check_stroke(&document.pages[0]);
        let mid_y = TABLE_START - HEADER_ROW_HEIGHT - ROW_HEIGHT / 2.0;
        assert!((stroke.x - (columns.no_x() + columns.no / 2.0 - 6.0)).abs() < 1e-3);
        assert!((stroke.y - (mid_y - 1.0)).abs() < 1e-3);
        assert_eq!(thick_lines(&document.pages[0]), 2);
    }

    #[test]
    fn test_quantity_and_expiry_positions() {
        let mut checklist = single_row("A.1.1.3");
        let item = &mut checklist.items[0];
        item.set_quantity("9 piezas");
        item.set_expiry(NaiveDate::from_ymd_opt(2029, 7, 3));
        let document = lay_out(&checklist, &Signatures::default(), &LayoutOptions::default());

        let columns = Columns::a4();
        let baseline = TABLE_START - HEADER_ROW_HEIGHT - ROW_BASELINE_OFFSET;
        let (qx, qy) = text_position(&document.pages[0], "9 piezas");
        let (ex, ey) = text_position(&document.pages[0], "03-julio-2029");

        assert!((qx - (columns.quantity_x() + PADDING)).abs() < 1e-3);
        assert!((ex - (columns.expiry_x() + PADDING)).abs() < 1e-3);
        assert!((qy - baseline).abs() < 1e-3);
        assert!((ey - baseline).abs() < 1e-3);
    }

    #[test]
    fn test_signature_page_break_adds_firmas_caption() {
        // Short checklist whose last row ends just above the signature block.
        let checklist = short_rows(18);

        let document = lay_out(&checklist, &signatures(520, 200), &LayoutOptions::default());
        // 18 rows of 34pt below the header end at 735.89 - 34 - 612 = 89.89,
        // too low for the signature block.
        assert_eq!(document.page_count(), 2);
        let last = &document.pages[1];
        assert!(last.contains_text("Firmas"));
        assert!(!last.contains_text("Caducidad"));
        assert!(last.contains_text("AmbulanciasTVR CHECK LIST"));
    }

    #[test]
    fn test_signatures_share_page_when_room() {
        let mut checklist = checklist();
        checklist.items = vec![ChecklistItem::new("X.1", "uno")];

        let document = lay_out(&checklist, &signatures(520, 200), &LayoutOptions::default());
        assert_eq!(document.page_count(), 1);
        assert!(!document.pages[0].contains_text("Firmas"));
    }

    #[test]
    fn test_custom_title() {
        let options = LayoutOptions {
            title: "Lista de prueba".to_string(),
            ..LayoutOptions::default()
        };
        let document = lay_out(&checklist(), &Signatures::default(), &options);
        assert!(document.pages[0].contains_text("Lista de prueba"));
    }

    #[test]
    fn test_header_labels_centered() {
        let document = lay_out(&checklist(), &Signatures::default(), &LayoutOptions::default());
        let columns = Columns::a4();

        let si_x = document.pages[0]
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, x, .. } if text == "Si" => Some(*x),
                _ => None,
            })
            .unwrap();
        let width = StandardFont::HelveticaBold.width_of_text_at_size("Si", 12.0);
        assert!((si_x - (columns.yes_x() + (columns.yes - width) / 2.0)).abs() < 1e-3);
    }
}
