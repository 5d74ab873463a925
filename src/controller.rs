use crate::animation::TapAnimation;
use crate::clock::Clock;
use crate::config::DemoConfig;
use crate::event_loop::EventLoop;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

pub const WAITING_TEXT: &str = "等待按钮点击...";
pub const COMPLETED_TEXT: &str = "操作完成";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub type ButtonCallback = Box<dyn FnMut(&Button)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    title: Option<String>,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn untitled() -> Self {
        Self { title: None }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
}

#[derive(Debug)]
pub struct Screen {
    pub button: Button,
    pub label: Label,
}

pub fn clicked_text(at: chrono::DateTime<chrono::Utc>) -> String {
    format!("按钮于 {} 被点击", at.format(TIMESTAMP_FORMAT))
}

pub struct Controller {
    screen: Rc<RefCell<Screen>>,
    callback: Option<ButtonCallback>,
    animation: TapAnimation,
}

impl Controller {
    pub fn load(config: &DemoConfig, event_loop: EventLoop, clock: Rc<dyn Clock>) -> Self {
        let button = if config.button_title.is_empty() {
            Button::untitled()
        } else {
            Button::new(config.button_title.clone())
        };
        let mut controller = Self::with_button(button);
        controller.install_default_callback(event_loop, clock, config.follow_up_delay);
        log::debug!("screen loaded with title {:?}", controller.button().title());
        controller
    }

    pub fn with_button(button: Button) -> Self {
        Self {
            screen: Rc::new(RefCell::new(Screen {
                button,
                label: Label {
                    text: WAITING_TEXT.to_string(),
                },
            })),
            callback: None,
            animation: TapAnimation::default(),
        }
    }

    pub fn set_callback(&mut self, callback: impl FnMut(&Button) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Runs the registered callback, if any, then starts the press animation.
    pub fn handle_tap(&mut self, at: Instant) {
        // The callback may borrow the screen, so hand it a snapshot.
        let button = self.button();
        match self.callback.as_mut() {
            Some(callback) => callback(&button),
            None => log::trace!("tap with no callback registered"),
        }
        self.animation.start(at);
    }

    pub fn label_text(&self) -> String {
        self.screen.borrow().label.text.clone()
    }

    pub fn button(&self) -> Button {
        self.screen.borrow().button.clone()
    }

    pub fn button_scale(&self, now: Instant) -> f32 {
        self.animation.scale_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation.is_running(now)
    }

    pub fn screen_handle(&self) -> Weak<RefCell<Screen>> {
        Rc::downgrade(&self.screen)
    }

    fn install_default_callback(
        &mut self,
        event_loop: EventLoop,
        clock: Rc<dyn Clock>,
        delay: Duration,
    ) {
        let screen = self.screen_handle();
        self.set_callback(move |button| {
            let Some(live) = screen.upgrade() else {
                return;
            };
            live.borrow_mut().label.text = clicked_text(clock.now());
            log::info!("按钮标题: {}", button.title().unwrap_or(""));

            let screen = screen.clone();
            event_loop.run_after(delay, move || match screen.upgrade() {
                Some(live) => live.borrow_mut().label.text = COMPLETED_TEXT.to_string(),
                None => log::debug!("screen gone, skipping follow-up"),
            });
        });
    }
}
