//! Hotkey-toggled on-screen log console for interactive applications.
//!
//! Producers hand structured events to a cloneable [`OverlaySink`], either
//! directly or through the [`OverlayLayer`] tracing layer. Once per frame
//! the host calls [`LogOverlay::on_update`] and [`LogOverlay::on_draw`],
//! and the overlay renders a bounded window of the most recent records
//! through the host-supplied [`Renderer`].

pub mod buffer;
pub mod channel;
pub mod format;
pub mod layer;
pub mod layout;
pub mod logging;
pub mod overlay;
pub mod record;
pub mod render;
pub mod self_log;
pub mod toggle;

pub use format::{EventFormatter, TemplateFormatter};
pub use layer::OverlayLayer;
pub use layout::{FontMetrics, LayoutGeometry, Rect, Vec2, Viewport};
pub use overlay::{LogOverlay, OverlayConfig, OverlaySink, DEFAULT_MAX_BATCH_SIZE};
pub use record::{LogLevel, LogRecord, RawLogEvent};
pub use render::{Color, FontKind, Renderer};
