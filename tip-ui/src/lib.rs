pub mod config;
pub mod controller;
pub mod logging;
pub mod render;
pub mod session;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use controller::{FocusManager, InteractionController, LogFocus, PRESS_RESET_DELAY};
pub use render::{ButtonColor, ButtonStyle, render_screen};
pub use state::TipView;
