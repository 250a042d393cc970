pub mod nav_actions;
pub mod navbar;
pub mod page;
pub mod visiontrack_title;

pub use nav_actions::NavActions;
pub use navbar::Navbar;
pub use page::Page;
pub use visiontrack_title::VisionTrackTitleButton;
