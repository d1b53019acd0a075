use flume::Sender;

use crate::event::events::Event;

/// Shared handles passed down to every view.
pub struct AppContext {
    pub event_tx: Sender<Event>,
}
