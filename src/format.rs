use crate::record::RawLogEvent;

/// Renders the plain-text form of an event that goes to the secondary debug
/// sink. Swappable at construction time.
pub trait EventFormatter: Send + Sync {
    fn format(&self, event: &RawLogEvent) -> String;
}

/// Default formatter: `HH:mm:ss.mmm [Level] message`, with the exception
/// text appended on its own line when one is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateFormatter;

impl EventFormatter for TemplateFormatter {
    fn format(&self, event: &RawLogEvent) -> String {
        let mut text = format!(
            "{} [{}] {}",
            event.timestamp.format("%H:%M:%S%.3f"),
            event.level,
            event.message
        );
        if let Some(exception) = &event.exception {
            text.push('\n');
            text.push_str(exception);
        }
        text
    }
}
