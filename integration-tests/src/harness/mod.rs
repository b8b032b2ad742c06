mod fixtures;
pub mod tracing;

pub use fixtures::{LogFixture, fixture_path};
pub use self::tracing::{CapturedEvent, capture_events};
