pub mod disclosure;
pub mod scroll_nav;
pub mod viewport;

pub use disclosure::{FeatureList, FeatureListAction, ToggleWording, WeekTab};
pub use scroll_nav::{NavAction, NavState};
pub use viewport::{Point, ViewportController, ViewportView};
