//! Page components.

mod group_select;
mod hidden;
mod schedule;

pub use group_select::GroupSelectPage;
pub use hidden::HiddenPage;
pub use schedule::SchedulePage;
