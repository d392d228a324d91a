use crate::buffer::DrawBuffer;
use crate::channel::{self, EventChannel, EventSender};
use crate::format::{EventFormatter, TemplateFormatter};
use crate::layout::{compute_geometry, FontMetrics, LayoutGeometry, Vec2, Viewport};
use crate::record::{LogRecord, RawLogEvent};
use crate::render::{Color, FontKind, Renderer};
use crate::toggle::ToggleState;
use anyhow::{bail, Result};
use std::sync::Arc;

pub const DEFAULT_MAX_BATCH_SIZE: usize = 4;

const LOGS_LABEL: &str = "LOGS";
const HEADER_TITLES: [&str; 4] = ["Timestamp", "Level", "Message", "Exception"];

/// Construction-time settings for a [`LogOverlay`].
pub struct OverlayConfig {
    /// Rows kept on screen, and the per-tick drain bound. Clamped to >= 1.
    pub max_batch_size: usize,
    /// Renders the always-on plain-text form of every event.
    pub formatter: Arc<dyn EventFormatter>,
    /// Receives that plain text regardless of overlay visibility.
    pub debug_writer: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            formatter: Arc::new(TemplateFormatter),
            debug_writer: Arc::new(|text| eprintln!("{text}")),
        }
    }
}

/// Producer-side handle: formats the event, mirrors the text to the debug
/// writer, then enqueues the raw event. Clone freely across threads.
#[derive(Clone)]
pub struct OverlaySink {
    sender: EventSender,
    formatter: Arc<dyn EventFormatter>,
    debug_writer: Arc<dyn Fn(&str) + Send + Sync>,
}

impl OverlaySink {
    /// Fire-and-forget. Formatting and the debug mirror run on the calling
    /// thread; the event itself travels over the channel to the tick
    /// context. Never blocks and never propagates a failure to the caller.
    pub fn emit(&self, event: RawLogEvent) {
        let text = (self.formatter).format(&event);
        (self.debug_writer)(&text);
        self.sender.emit(event);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Ready,
    Disposed,
}

/// Render-side state that only exists once the host's graphics context does.
struct DrawResources {
    font: FontMetrics,
    font_bold: FontMetrics,
    viewport: Viewport,
    geometry: LayoutGeometry,
}

/// The overlay itself: owns the consumer side of the pipeline and is driven
/// by the host's per-frame tick. Producers interact only through
/// [`OverlaySink`] clones obtained from [`sink`](Self::sink).
pub struct LogOverlay {
    max_batch_size: usize,
    channel: Option<EventChannel>,
    sink: OverlaySink,
    buffer: DrawBuffer,
    toggle: ToggleState,
    lifecycle: Lifecycle,
    resources: Option<DrawResources>,
}

impl LogOverlay {
    pub fn new(config: OverlayConfig) -> Self {
        let max_batch_size = config.max_batch_size.max(1);
        let (sender, channel) = channel::unbounded();
        Self {
            max_batch_size,
            channel: Some(channel),
            sink: OverlaySink {
                sender,
                formatter: config.formatter,
                debug_writer: config.debug_writer,
            },
            buffer: DrawBuffer::new(max_batch_size),
            toggle: ToggleState::default(),
            lifecycle: Lifecycle::Uninitialized,
            resources: None,
        }
    }

    /// A producer handle for this overlay.
    pub fn sink(&self) -> OverlaySink {
        self.sink.clone()
    }

    /// Convenience for producers that already hold the overlay itself.
    pub fn emit(&self, event: RawLogEvent) {
        self.sink.emit(event);
    }

    /// Second phase of construction: called once the host's graphics
    /// context exists and font metrics are known. Computes the initial
    /// geometry. Drawing before this call is a precondition violation.
    pub fn initialize(&mut self, font: FontMetrics, font_bold: FontMetrics, viewport: Viewport) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.resources = Some(DrawResources {
            font,
            font_bold,
            viewport,
            geometry: compute_geometry(viewport, self.max_batch_size, font),
        });
        self.lifecycle = Lifecycle::Ready;
    }

    pub fn is_visible(&self) -> bool {
        self.toggle.visible
    }

    /// True once [`initialize`](Self::initialize) has run and until
    /// disposal. Drawing while visible requires this.
    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    /// Buffered records in arrival order, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &LogRecord> {
        self.buffer.iter()
    }

    /// Per-tick update: advance the toggle, recompute geometry if the
    /// viewport changed, then drain up to `max_batch_size` events into the
    /// draw buffer and enforce its bound.
    ///
    /// Draining runs even while hidden so the channel cannot grow without
    /// bound during long hidden stretches, and the freshest window is
    /// already buffered the moment the overlay is toggled on.
    pub fn on_update(&mut self, toggle_key_down: bool, viewport: Viewport) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }

        self.toggle.tick(toggle_key_down);

        if let Some(resources) = self.resources.as_mut() {
            if resources.viewport != viewport {
                resources.viewport = viewport;
                resources.geometry =
                    compute_geometry(viewport, self.max_batch_size, resources.font);
            }
        }

        if let Some(channel) = self.channel.as_ref() {
            for event in channel.drain_up_to(self.max_batch_size) {
                self.buffer.push(LogRecord::from(event));
            }
        }
    }

    /// Per-tick draw: emits nothing while hidden. While visible, issues the
    /// background, the vertical "LOGS" label, the header row, the grid
    /// lines and then the buffered records most recent first. Every run of
    /// text is drawn twice, a black shadow offset by (1, 1) and then the
    /// actual color, to stay legible against arbitrary backgrounds.
    pub fn on_draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        if self.lifecycle == Lifecycle::Disposed || !self.toggle.visible {
            return Ok(());
        }
        let Some(resources) = self.resources.as_ref() else {
            bail!("log overlay drawn before initialize(); call initialize once a graphics context exists");
        };
        let geometry = &resources.geometry;

        renderer.fill_rect(geometry.background, Color::BACKDROP);

        // Vertical label, one glyph per line.
        let mut label_position = geometry.logs_label_position;
        for glyph in LOGS_LABEL.chars() {
            draw_shadowed(
                renderer,
                glyph.encode_utf8(&mut [0u8; 4]),
                label_position,
                Color::WHITE,
                FontKind::Bold,
            );
            label_position.y += resources.font_bold.line_height;
        }

        let header_positions = [
            geometry.header_position,
            geometry.level_column,
            geometry.message_column,
            geometry.exception_column,
        ];
        for (title, position) in HEADER_TITLES.iter().zip(header_positions) {
            draw_shadowed(renderer, title, position, Color::WHITE, FontKind::Bold);
        }

        renderer.fill_rect(geometry.horizontal_grid_line, Color::WHITE);
        for line in geometry.vertical_grid_lines {
            renderer.fill_rect(line, Color::WHITE);
        }

        let mut row_position = geometry.records_position;
        for record in self.buffer.recent_first() {
            draw_shadowed(
                renderer,
                &record.timestamp_display,
                row_position,
                Color::WHITE,
                FontKind::Regular,
            );
            draw_shadowed(
                renderer,
                record.level.as_str(),
                Vec2::new(geometry.level_column.x, row_position.y),
                record.level_color,
                FontKind::Regular,
            );
            draw_shadowed(
                renderer,
                &record.message,
                Vec2::new(geometry.message_column.x, row_position.y),
                Color::WHITE,
                FontKind::Regular,
            );
            draw_shadowed(
                renderer,
                &record.exception,
                Vec2::new(geometry.exception_column.x, row_position.y),
                Color::WHITE,
                FontKind::Regular,
            );
            row_position.y += resources.font.line_height;
        }

        Ok(())
    }

    /// Idempotent teardown. Drops the consumer state and closes the
    /// channel; producers still holding a sink see it as unavailable and
    /// fall back to the self-log path.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        self.channel = None;
        self.resources = None;
        self.buffer.clear();
    }
}

impl Drop for LogOverlay {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn draw_shadowed(
    renderer: &mut dyn Renderer,
    text: &str,
    position: Vec2,
    color: Color,
    font: FontKind,
) {
    renderer.draw_text(text, position + Vec2::ONE, Color::BLACK, font);
    renderer.draw_text(text, position, color, font);
}

#[cfg(test)]
mod tests {
    use super::{LogOverlay, OverlayConfig};
    use crate::layout::{FontMetrics, Viewport};
    use crate::record::{LogLevel, RawLogEvent};
    use std::sync::Arc;

    const FONT: FontMetrics = FontMetrics {
        line_height: 20.0,
        char_width: 10.0,
    };

    fn quiet_config(max_batch_size: usize) -> OverlayConfig {
        OverlayConfig {
            max_batch_size,
            debug_writer: Arc::new(|_| {}),
            ..OverlayConfig::default()
        }
    }

    fn make_visible(overlay: &mut LogOverlay, viewport: Viewport) {
        overlay.on_update(false, viewport);
        overlay.on_update(true, viewport);
    }

    #[test]
    fn max_batch_size_is_clamped_to_one() {
        let overlay = LogOverlay::new(quiet_config(0));
        assert_eq!(overlay.max_batch_size, 1);
    }

    #[test]
    fn initialize_moves_the_overlay_to_ready() {
        let mut overlay = LogOverlay::new(quiet_config(4));
        assert!(!overlay.is_ready());
        overlay.initialize(FONT, FONT, Viewport::new(800.0, 600.0));
        assert!(overlay.is_ready());
        overlay.dispose();
        assert!(!overlay.is_ready());
    }

    #[test]
    fn update_drains_at_most_one_batch_per_tick() {
        let mut overlay = LogOverlay::new(quiet_config(2));
        overlay.initialize(FONT, FONT, Viewport::new(800.0, 600.0));
        for i in 0..5 {
            overlay.emit(RawLogEvent::new(LogLevel::Debug, format!("e{i}")));
        }

        overlay.on_update(false, Viewport::new(800.0, 600.0));
        assert_eq!(overlay.records().count(), 2);
        overlay.on_update(false, Viewport::new(800.0, 600.0));
        overlay.on_update(false, Viewport::new(800.0, 600.0));
        let messages: Vec<&str> = overlay.records().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["e3", "e4"]);
    }

    #[test]
    fn drains_while_hidden_so_toggling_on_shows_the_freshest_window() {
        let mut overlay = LogOverlay::new(quiet_config(4));
        overlay.initialize(FONT, FONT, Viewport::new(800.0, 600.0));
        overlay.emit(RawLogEvent::new(LogLevel::Information, "while hidden"));

        overlay.on_update(false, Viewport::new(800.0, 600.0));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.records().count(), 1);
    }

    #[test]
    fn viewport_change_replaces_the_whole_geometry() {
        let mut overlay = LogOverlay::new(quiet_config(4));
        overlay.initialize(FONT, FONT, Viewport::new(800.0, 600.0));
        let before = overlay.resources.as_ref().unwrap().geometry.clone();

        overlay.on_update(false, Viewport::new(1920.0, 1080.0));
        let after = &overlay.resources.as_ref().unwrap().geometry;
        assert_ne!(&before, after);
        assert_eq!(after.background.width, 1920.0);

        // Same viewport again: geometry is stable.
        let stable = after.clone();
        overlay.on_update(false, Viewport::new(1920.0, 1080.0));
        assert_eq!(&stable, &overlay.resources.as_ref().unwrap().geometry);
    }

    #[test]
    fn dispose_is_idempotent_and_stops_updates() {
        let mut overlay = LogOverlay::new(quiet_config(4));
        overlay.initialize(FONT, FONT, Viewport::new(800.0, 600.0));
        make_visible(&mut overlay, Viewport::new(800.0, 600.0));
        assert!(overlay.is_visible());

        overlay.dispose();
        overlay.dispose();
        overlay.emit(RawLogEvent::new(LogLevel::Information, "late"));
        overlay.on_update(true, Viewport::new(800.0, 600.0));
        assert_eq!(overlay.records().count(), 0);
    }
}
