pub mod message;
pub mod note;
pub mod progress;
pub mod scroll;
pub mod state;
pub mod transport;
