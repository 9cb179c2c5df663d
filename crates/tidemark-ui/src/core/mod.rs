//! Core, DOM-free controller logic for the site interactions.
pub mod breakpoints;
pub mod dropdown;
pub mod menu;
pub mod theme;
