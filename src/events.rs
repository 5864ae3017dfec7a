//! UI signals the webview listens for.
//!
//! The frontend owns rendering; the Rust side drives it by emitting three
//! events: a loading overlay toggle, transient toasts, and navigation.
//! Flows take the notifier as a trait object so they can be exercised in
//! tests without a running webview.

use std::sync::Mutex;

use serde::Serialize;
use tauri::{AppHandle, Emitter};

/// Event names the webview subscribes to.
pub const LOADING_EVENT: &str = "ui-loading";
pub const TOAST_EVENT: &str = "ui-toast";
pub const NAVIGATE_EVENT: &str = "ui-navigate";

#[derive(Debug, Clone, Serialize)]
pub struct LoadingEvent {
    pub visible: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastEvent {
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigateEvent {
    pub to: String,
}

/// Sink for UI signals.
pub trait UiNotifier: Send + Sync {
    fn show_loading(&self);
    fn hide_loading(&self);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn navigate(&self, to: &str);
}

/// Emits UI events to the webview. Emit failures are ignored.
pub struct TauriNotifier {
    app: AppHandle,
}

impl TauriNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl UiNotifier for TauriNotifier {
    fn show_loading(&self) {
        let _ = self.app.emit(LOADING_EVENT, LoadingEvent { visible: true });
    }

    fn hide_loading(&self) {
        let _ = self.app.emit(LOADING_EVENT, LoadingEvent { visible: false });
    }

    fn success(&self, message: &str) {
        let _ = self.app.emit(
            TOAST_EVENT,
            ToastEvent {
                level: ToastLevel::Success,
                message: message.to_string(),
            },
        );
    }

    fn error(&self, message: &str) {
        let _ = self.app.emit(
            TOAST_EVENT,
            ToastEvent {
                level: ToastLevel::Error,
                message: message.to_string(),
            },
        );
    }

    fn navigate(&self, to: &str) {
        let _ = self.app.emit(NAVIGATE_EVENT, NavigateEvent { to: to.to_string() });
    }
}

/// A recorded UI signal, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiSignal {
    LoadingShown,
    LoadingHidden,
    Success(String),
    Error(String),
    Navigate(String),
}

/// Test notifier that records every signal in order.
pub struct RecordingNotifier {
    signals: Mutex<Vec<UiSignal>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            signals: Mutex::new(Vec::new()),
        }
    }

    /// Everything emitted so far, oldest first.
    pub fn signals(&self) -> Vec<UiSignal> {
        self.signals
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn push(&self, signal: UiSignal) {
        if let Ok(mut signals) = self.signals.lock() {
            signals.push(signal);
        }
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UiNotifier for RecordingNotifier {
    fn show_loading(&self) {
        self.push(UiSignal::LoadingShown);
    }

    fn hide_loading(&self) {
        self.push(UiSignal::LoadingHidden);
    }

    fn success(&self, message: &str) {
        self.push(UiSignal::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(UiSignal::Error(message.to_string()));
    }

    fn navigate(&self, to: &str) {
        self.push(UiSignal::Navigate(to.to_string()));
    }
}
