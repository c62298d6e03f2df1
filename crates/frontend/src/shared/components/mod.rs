pub mod drawer;
pub mod icons;
pub mod pagination_controls;
pub mod ui;
