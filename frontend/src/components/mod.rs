pub mod calendar;
pub mod empty_state;
pub mod guard;
pub mod layout;
pub mod leave_type;
pub mod overlay;
pub mod progress;
