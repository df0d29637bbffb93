//! Application view rendering

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use three_dots_progress::ui::{primitives, theme};

use super::App;
use super::message::Message;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        // A hidden indicator still reserves its slot, like an invisible view
        let indicator: Element<'_, Message> = if self.dots.is_visible() {
            primitives::three_dots::view(&self.dots)
        } else {
            let (width, height) = self.dots.measure();
            Space::new()
                .width(width.max(0) as f32)
                .height(height.max(0) as f32)
                .into()
        };

        let label = if self.dots.is_visible() {
            "Hide"
        } else {
            "Show"
        };

        let caption = text(format!(
            "{} ms per leg, dot {}",
            self.dots.config().speed_ms,
            self.dots.active_dot() + 1
        ))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

        let content = column![
            indicator,
            caption,
            button(text(label).size(13))
                .padding([6, 18])
                .style(theme::secondary_button)
                .on_press(Message::ToggleVisibility),
        ]
        .spacing(24)
        .align_x(Alignment::Center);

        container(content)
            .center(Length::Fill)
            .style(theme::main_content)
            .into()
    }
}
