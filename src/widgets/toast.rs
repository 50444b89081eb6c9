//! Toast notification widget.
//!
//! A non-blocking notification that appears in the bottom-right corner and
//! auto-closes after a configurable duration. Only one toast is shown at a
//! time; a new one replaces the old.

use crate::state::{Notice, NoticeKind};
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

/// Default lifetime of a toast
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Warning,
}

impl ToastVariant {
    pub fn icon(&self) -> &'static str {
        match self {
            ToastVariant::Success => "\u{2714}", // ✔
            ToastVariant::Warning => "\u{26A0}", // ⚠
        }
    }

    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Warning => t.warning,
        }
    }
}

impl From<NoticeKind> for ToastVariant {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => ToastVariant::Success,
            NoticeKind::Warning => ToastVariant::Warning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

impl From<Notice> for Toast {
    fn from(notice: Notice) -> Self {
        Self::new(notice.message, notice.kind.into())
    }
}

/// Renders a toast in the bottom-right corner of the given area.
pub struct ToastWidget<'a> {
    toast: &'a Toast,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast) -> Self {
        Self { toast }
    }

    fn calculate_area(&self, area: Rect) -> Rect {
        // Icon, padding and borders take 6 columns
        let wanted = self.toast.message.chars().count() as u16 + 6;
        let toast_width = wanted.clamp(24, 48).min(area.width.saturating_sub(4));
        let toast_height = 3u16;

        let x = area.x + area.width.saturating_sub(toast_width + 2);
        let y = area.y + area.height.saturating_sub(toast_height + 3); // Above footer

        Rect::new(x, y, toast_width, toast_height.min(area.height))
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = self.calculate_area(area);
        let t = theme();

        Widget::render(Clear, toast_area, buf);

        let message = format!(" {} {} ", self.toast.variant.icon(), self.toast.message);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.toast.variant.color()))
            .style(t.background_style());

        Paragraph::new(message)
            .block(block)
            .style(t.text_style().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

/// Holds the single visible toast
#[derive(Debug)]
pub struct ToastManager {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastManager {
    /// Create a manager whose toasts live for `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a toast, replacing any existing one
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast.with_duration(self.duration));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Toast::success(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Toast::warning(message));
    }

    /// Remove an expired toast and return whether one is still active
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn has_toast(&self) -> bool {
        self.current.is_some()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_toast_replaces_older() {
        let mut toasts = ToastManager::default();
        toasts.success("first");
        toasts.warning("second");
        let current = toasts.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.variant, ToastVariant::Warning);
    }

    #[test]
    fn test_zero_duration_expires_on_tick() {
        let mut toasts = ToastManager::new(Duration::ZERO);
        toasts.success("gone");
        assert!(!toasts.tick());
        assert!(!toasts.has_toast());
    }

    #[test]
    fn test_manager_duration_applies() {
        let mut toasts = ToastManager::new(Duration::from_secs(9));
        toasts.push(Toast::success("x"));
        assert_eq!(toasts.current().unwrap().duration, Duration::from_secs(9));
        assert!(toasts.tick());
    }

    #[test]
    fn test_from_notice() {
        let toast = Toast::from(Notice::warning("Заполните поле"));
        assert_eq!(toast.variant, ToastVariant::Warning);
        assert_eq!(toast.message, "Заполните поле");
    }
}
