//! Collaborators that record what the dashboard sends them.
use std::sync::Arc;

use clock_dashboard::core::display::{DisplaySink, Notification, Notifier, Tag, Widget};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub widget: Widget,
    pub text: String,
    pub tag: Option<Tag>,
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    renders: Mutex<Vec<Render>>,
}

impl RecordingDisplay {
    pub fn new() -> Arc<Self> {
        Arc::default()
    }

    /// The last text rendered by the widget, with its tag.
    pub fn last(&self, widget: Widget) -> Option<(String, Option<Tag>)> {
        self.renders
            .lock()
            .iter()
            .rev()
            .find(|render| render.widget == widget)
            .map(|render| (render.text.clone(), render.tag))
    }

    /// Every text rendered by the widget, oldest first.
    pub fn texts(&self, widget: Widget) -> Vec<String> {
        self.renders
            .lock()
            .iter()
            .filter(|render| render.widget == widget)
            .map(|render| render.text.clone())
            .collect()
    }
}

impl DisplaySink for RecordingDisplay {
    fn render(&self, widget: Widget, text: &str, tag: Option<Tag>) {
        self.renders.lock().push(Render {
            widget,
            text: text.to_owned(),
            tag,
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::default()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .map(|notification| notification.title.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().push(notification.clone());
    }
}
