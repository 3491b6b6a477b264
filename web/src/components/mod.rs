pub mod check_availability;
pub mod day_block_toggle;
pub mod error;
pub mod navbar;
pub mod notification_host;

// Re-export commonly used types
pub use check_availability::CheckAvailability;
pub use day_block_toggle::DayBlockToggle;
pub use navbar::Navbar;
pub use notification_host::{LeptosRenderer, NotificationHost};
