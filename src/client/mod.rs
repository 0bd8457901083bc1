//! Client-side core: HTTP api wrapper, normalized state store, intent
//! sync layer and local filtering. Presentation (the CLI binary) renders
//! this state and dispatches intents; no business logic lives there.

pub mod api;
pub mod filter;
pub mod state;
pub mod sync;

pub use api::SongsApi;
pub use filter::SongFilter;
pub use state::{SongsState, Transition};
pub use sync::{spawn_sync, Intent, SyncHandle};
