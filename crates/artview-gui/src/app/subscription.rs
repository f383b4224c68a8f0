//! Application subscriptions.
//!
//! | Subscription | Condition | Purpose |
//! |--------------|-----------|---------|
//! | Keyboard | Always | Paging and popover shortcuts |

use iced::Subscription;
use iced::keyboard;

use crate::message::Message;
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(_state: &AppState) -> Subscription<Message> {
    Subscription::batch([keyboard_subscription()])
}

/// Keyboard event subscription.
///
/// Forwards key presses; [`shortcut`](super::shortcut) decides what they mean.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}
