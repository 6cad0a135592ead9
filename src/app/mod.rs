#[allow(clippy::module_inception)]
pub mod app;
pub mod event;
pub mod mode;
pub mod stats;

pub use app::App;
pub use event::{AppEvent, Response};
pub use mode::AppMode;
pub use stats::{PracticeStats, SentenceRecord};
