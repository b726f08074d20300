//! Page geometry and pagination.
//!
//! Offsets are in millimetres, measured down from the top of the page.
//! Lines flow down the printable area and a line that would cross the
//! bottom margin starts the next page below its top margin. The rendered
//! height then decides how many pages there are: one first page, then one
//! more for every further full page height.

use crate::error::{ExportError, Result};
use crate::view::{LineStyle, ViewLine};

/// A4 portrait width.
pub const A4_WIDTH_MM: f32 = 210.0;

/// A4 portrait height.
pub const A4_HEIGHT_MM: f32 = 297.0;

const MARGIN_MM: f32 = 10.0;

/// A line positioned on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: LineStyle,
    pub x_mm: f32,
    /// Baseline offset from the top of the page.
    pub y_mm: f32,
}

/// The lines that fall on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Fixed page size plus the vertical rhythm of each line style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    width_mm: f32,
    height_mm: f32,
    margin_mm: f32,
}

impl PageLayout {
    /// Creates a layout with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyLayout`] if the page has no printable area.
    pub fn new(width_mm: f32, height_mm: f32) -> Result<Self> {
        let printable = width_mm > 2.0 * MARGIN_MM && height_mm > 2.0 * MARGIN_MM;
        if !printable {
            return Err(ExportError::EmptyLayout(format!(
                "page {width_mm}x{height_mm} mm leaves no room inside the margins"
            )));
        }

        Ok(Self {
            width_mm,
            height_mm,
            margin_mm: MARGIN_MM,
        })
    }

    /// A4 portrait.
    pub fn a4() -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
            margin_mm: MARGIN_MM,
        }
    }

    pub fn width_mm(&self) -> f32 {
        self.width_mm
    }

    pub fn height_mm(&self) -> f32 {
        self.height_mm
    }

    /// Vertical space taken by a line of this style.
    pub fn line_height(style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => 12.0,
            LineStyle::Heading => 8.0,
            LineStyle::Body => 6.0,
            LineStyle::Gap => 4.0,
        }
    }

    /// Font size in points.
    pub fn font_size(style: LineStyle) -> f32 {
        match style {
            LineStyle::Title => 20.0,
            LineStyle::Heading => 14.0,
            LineStyle::Body | LineStyle::Gap => 11.0,
        }
    }

    /// Total rendered height of the flowed lines, margins included.
    pub fn content_height(&self, lines: &[ViewLine]) -> f32 {
        let (pages, y) = self.flow(lines);
        (pages.len() - 1) as f32 * self.height_mm + y + self.margin_mm
    }

    /// Number of pages needed for a rendered height.
    ///
    /// `floor(height / page_height) + 1`, so a height of exactly one page
    /// still opens a second page.
    pub fn page_count(&self, height_mm: f32) -> usize {
        if !height_mm.is_finite() || height_mm <= 0.0 {
            return 1;
        }
        (height_mm / self.height_mm).floor() as usize + 1
    }

    /// Places every line on a page, breaking before a line that would cross
    /// the bottom margin.
    ///
    /// Gap lines take up space but are not placed, and a gap at a page break
    /// is dropped. Trailing pages up to [`Self::page_count`] stay blank.
    pub fn paginate(&self, lines: &[ViewLine]) -> Vec<Page> {
        let (mut pages, y) = self.flow(lines);
        let height = (pages.len() - 1) as f32 * self.height_mm + y + self.margin_mm;
        let page_count = self.page_count(height).max(pages.len());
        pages.resize_with(page_count, Page::default);
        pages
    }

    /// Returns the filled pages and the cursor on the last one.
    fn flow(&self, lines: &[ViewLine]) -> (Vec<Page>, f32) {
        let bottom = self.height_mm - self.margin_mm;
        let mut pages = vec![Page::default()];
        let mut y = self.margin_mm;

        for line in lines {
            let line_height = Self::line_height(line.style);
            let overflows = y + line_height > bottom;

            if line.style == LineStyle::Gap {
                if !overflows {
                    y += line_height;
                }
                continue;
            }

            if overflows && y > self.margin_mm {
                pages.push(Page::default());
                y = self.margin_mm;
            }

            y += line_height;
            if let Some(page) = pages.last_mut() {
                page.lines.push(PlacedLine {
                    text: line.text.clone(),
                    style: line.style,
                    x_mm: self.margin_mm,
                    y_mm: y,
                });
            }
        }

        (pages, y)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}
