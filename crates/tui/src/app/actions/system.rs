//! System action handlers: quit, tick, resize, theme and notifications.

use breezeway_config::Theme;
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::ui::{Toast, ToastLevel};

impl App {
    pub(super) fn handle_system_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::Tick => self.handle_tick(),
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                tracing::info!(theme = self.color_theme.id(), "Theme changed");
                self.toasts.push(Toast::info(format!(
                    "Theme: {}",
                    self.color_theme.display_name()
                )));
            }
            Action::Notify(level, message) => {
                self.toasts.push(Toast::new(message, level));
            }
            _ => {}
        }
    }
}
