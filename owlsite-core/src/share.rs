//! Share payloads and analytics events handed to browser collaborators.
use crate::pack::EventInfo;
use crate::text::strip_line_breaks;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    #[must_use]
    pub fn for_event(event: &EventInfo, url: &str) -> Self {
        Self {
            title: strip_line_breaks(&event.title),
            text: event.description.clone(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub category: &'static str,
    pub label: String,
}

impl AnalyticsEvent {
    #[must_use]
    pub fn new(name: &'static str, category: &'static str, label: impl Into<String>) -> Self {
        Self {
            name,
            category,
            label: label.into(),
        }
    }
}

/// Destination for analytics events. Implementations must never fail loudly.
pub trait AnalyticsSink {
    fn emit(&self, event: &AnalyticsEvent);
}

/// Sink used when no reporting backend is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(&self, event: &AnalyticsEvent) {
        log::trace!("analytics disabled, dropping {}", event.name);
    }
}
