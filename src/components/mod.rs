pub mod app;
pub mod feature_card;
pub mod figure_card;
pub mod image_modal;
pub mod navigation;
pub mod week_module;
