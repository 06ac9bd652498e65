//! Shared interactive widgets and the application navbar.

pub mod app_navbar;
pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

mod select_box;
pub use select_box::SelectBox;

mod year_radio;
pub use year_radio::YearRadio;
