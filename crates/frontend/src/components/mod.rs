//! Reusable UI components.

mod loading;
mod schedule_card;

pub use loading::Loading;
pub use schedule_card::ScheduleCard;
