use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::rc::Rc;
use std::time::Instant;
use tap_callback::clock::SystemClock;
use tap_callback::event_loop::Timer;
use tap_callback::{Controller, DemoConfig, EventLoop, TaskId};

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const LABEL_GAP: f32 = 20.0;
const LABEL_MARGIN: f32 = 20.0;
const LABEL_HEIGHT: f32 = 24.0;
// Column spacing adds one more gap under this, matching the gap and label below.
const TOP_SPACER: f32 = LABEL_HEIGHT;

#[derive(Debug, Clone)]
pub enum Message {
    Tapped,
    FollowUpDue(TaskId),
    Frame(Instant),
}

pub struct TapApp {
    controller: Controller,
    event_loop: EventLoop,
    dark: bool,
}

impl TapApp {
    pub fn new(config: DemoConfig) -> Self {
        let event_loop = EventLoop::new();
        let controller = Controller::load(&config, event_loop.clone(), Rc::new(SystemClock));
        Self {
            controller,
            event_loop,
            dark: config.dark,
        }
    }

    pub fn title(&self) -> String {
        String::from("回调测试")
    }

    pub fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tapped => {
                self.controller.handle_tap(Instant::now());
            }
            Message::FollowUpDue(id) => {
                if !self.event_loop.fire(id) {
                    log::warn!("follow-up {:?} already ran", id);
                }
            }
            // Only here to drive redraws while the press animation runs.
            Message::Frame(_) => {}
        }
        self.arm_timers()
    }

    // Freshly scheduled follow-ups become real timers reporting back on the UI thread.
    fn arm_timers(&self) -> Task<Message> {
        Task::batch(self.event_loop.take_timers().into_iter().map(
            |Timer { id, delay }| {
                Task::perform(
                    async move {
                        async_std::task::sleep(delay).await;
                    },
                    move |_| Message::FollowUpDue(id),
                )
            },
        ))
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_animating(Instant::now()) {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let system_blue = iced::Color::from_rgb8(0, 122, 255);
        let pressed_blue = iced::Color::from_rgb8(0, 98, 204);
        let scale = self.controller.button_scale(Instant::now());
        let title = self.controller.button().title().unwrap_or_default().to_string();

        let tap_button = button(
            text(title)
                .size(17.0 * scale)
                .color(iced::Color::WHITE)
                .width(Length::Fill)
                .height(Length::Fill)
                .center(),
        )
        .on_press(Message::Tapped)
        .padding(0)
        .width(Length::Fixed(BUTTON_WIDTH * scale))
        .height(Length::Fixed(BUTTON_HEIGHT * scale))
        .style(move |_theme: &Theme, status| {
            let fill = match status {
                button::Status::Pressed => pressed_blue,
                _ => system_blue,
            };
            button::Style {
                background: Some(iced::Background::Color(fill)),
                text_color: iced::Color::WHITE,
                border: iced::Border {
                    radius: 8.0.into(),
                    width: 0.0,
                    color: iced::Color::TRANSPARENT,
                },
                shadow: iced::Shadow::default(),
            }
        });

        // Fixed slot so the label does not move while the button scales.
        let button_slot = container(tap_button)
            .center_x(Length::Fixed(BUTTON_WIDTH))
            .center_y(Length::Fixed(BUTTON_HEIGHT));

        let status_label = text(self.controller.label_text())
            .width(Length::Fill)
            .align_x(Alignment::Center);

        let content = column![
            Space::with_height(Length::Fixed(TOP_SPACER)),
            button_slot,
            container(status_label)
                .padding([0.0, LABEL_MARGIN])
                .height(Length::Fixed(LABEL_HEIGHT))
        ]
        .spacing(LABEL_GAP)
        .align_x(Alignment::Center)
        .width(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}

pub fn run(config: DemoConfig) -> iced::Result {
    iced::application(TapApp::title, TapApp::update, TapApp::view)
        .subscription(TapApp::subscription)
        .theme(TapApp::theme)
        .window_size(iced::Size::new(390.0, 844.0))
        .run_with(move || (TapApp::new(config), Task::none()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tap_callback::controller::{COMPLETED_TEXT, WAITING_TEXT};

    #[test]
    fn button_sits_at_vertical_centre() {
        let above = TOP_SPACER + LABEL_GAP;
        let below = LABEL_GAP + LABEL_HEIGHT;
        assert_eq!(above, below);
    }

    #[test]
    fn tap_arms_follow_up_that_completes_label() {
        let mut app = TapApp::new(DemoConfig::default());
        assert_eq!(app.controller.label_text(), WAITING_TEXT);

        let _ = app.update(Message::Tapped);
        assert!(app.controller.label_text().starts_with("按钮于 "));
        assert_eq!(app.event_loop.pending(), 1);
        assert!(app.event_loop.take_timers().is_empty());

        app.event_loop.advance(Duration::from_secs(1));
        assert_eq!(app.controller.label_text(), COMPLETED_TEXT);
    }
}
