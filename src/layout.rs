//! Overlay geometry. Everything here is plain arithmetic over the viewport
//! size, the configured row count and the font metrics; the whole bundle is
//! recomputed from scratch whenever any of those change so dependent
//! coordinates can never drift apart.

use std::ops::Add;

/// 2D position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The (1, 1) shadow offset applied to every run of overlay text.
    pub const ONE: Self = Self::new(1.0, 1.0);
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Metrics of a monospace font as reported by the host's text stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub line_height: f32,
    pub char_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Every coordinate the draw pass needs. Replaced wholesale on viewport
/// change; no field is ever patched in isolation.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    pub background: Rect,
    pub logs_label_position: Vec2,
    pub header_position: Vec2,
    pub records_position: Vec2,
    pub level_column: Vec2,
    pub message_column: Vec2,
    pub exception_column: Vec2,
    pub horizontal_grid_line: Rect,
    pub vertical_grid_lines: [Rect; 3],
}

/// Gap kept between the panel and the bottom edge of the viewport.
const BOTTOM_MARGIN: f32 = 10.0;
/// Inset between the panel edge and its text content.
const TEXT_INSET: f32 = 10.0;
/// Inset of the vertical grid lines from the panel's top and bottom edges,
/// and their distance to the column text.
const GRID_INSET: f32 = 5.0;
const GRID_LINE_THICKNESS: f32 = 1.0;

// Column offsets in monospace character widths from the header x, so the
// table scales with the font instead of being pixel-hardcoded. The
// exception column sits far enough right to stay out of the way of the
// message at common resolutions.
const LEVEL_COLUMN_CHARS: f32 = 13.0;
const MESSAGE_COLUMN_CHARS: f32 = 25.0;
const EXCEPTION_COLUMN_CHARS: f32 = 87.0;

/// Compute the full overlay geometry for the given inputs. Pure; calling it
/// twice with the same arguments yields identical output.
pub fn compute_geometry(
    viewport: Viewport,
    max_batch_size: usize,
    font: FontMetrics,
) -> LayoutGeometry {
    // Two extra rows reserve space for the header and its underline.
    let background_height = font.line_height * (max_batch_size as f32 + 2.0);
    let background_width = viewport.width;
    let background_top = viewport.height - BOTTOM_MARGIN - background_height;
    let background = Rect::new(
        viewport.width - background_width,
        background_top,
        background_width,
        background_height,
    );

    let logs_label_position = Vec2::new(
        background.x + TEXT_INSET,
        background.y + font.line_height + TEXT_INSET,
    );

    let label_width = font.char_width + 5.0;
    let header_position = Vec2::new(
        viewport.width - background_width + label_width + TEXT_INSET,
        background_top + TEXT_INSET,
    );
    let records_position = Vec2::new(
        header_position.x,
        header_position.y + font.line_height + 5.0,
    );

    let level_column = Vec2::new(
        header_position.x + font.char_width * LEVEL_COLUMN_CHARS,
        header_position.y,
    );
    let message_column = Vec2::new(
        header_position.x + font.char_width * MESSAGE_COLUMN_CHARS,
        header_position.y,
    );
    let exception_column = Vec2::new(
        header_position.x + font.char_width * EXCEPTION_COLUMN_CHARS,
        header_position.y,
    );

    let horizontal_grid_line = Rect::new(
        header_position.x,
        header_position.y + font.line_height,
        background_width - 2.0 * TEXT_INSET,
        GRID_LINE_THICKNESS,
    );
    let vertical_grid_line = |column_x: f32| {
        Rect::new(
            column_x - GRID_INSET,
            background_top + GRID_INSET,
            GRID_LINE_THICKNESS,
            background_height - 2.0 * GRID_INSET,
        )
    };

    LayoutGeometry {
        background,
        logs_label_position,
        header_position,
        records_position,
        level_column,
        message_column,
        exception_column,
        horizontal_grid_line,
        vertical_grid_lines: [
            vertical_grid_line(level_column.x),
            vertical_grid_line(message_column.x),
            vertical_grid_line(exception_column.x),
        ],
    }
}
