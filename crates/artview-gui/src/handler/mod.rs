//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message group, and
//! `App::update()` dispatches to it:
//!
//! ```ignore
//! match message {
//!     Message::Table(msg) => TableHandler.handle(&mut self.state, msg),
//!     Message::Bulk(msg) => BulkHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod bulk;
mod table;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use bulk::{BulkHandler, bulk_summary};
pub use table::{TableHandler, apply_page_result, load_page};

/// Trait for handling messages in the Iced architecture.
///
/// # Type Parameters
///
/// * `M` - The message type this handler processes
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    ///
    /// Returns `Task::none()` when there is no async follow-up.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
