//! A single screen with one button, one status label and one callback slot.

pub mod animation;
pub mod clock;
pub mod config;
pub mod controller;
pub mod event_loop;

pub use config::{Args, DemoConfig};
pub use controller::{Button, ButtonCallback, Controller};
pub use event_loop::{EventLoop, TaskId};
