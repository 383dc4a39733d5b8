pub mod create_menu;
pub mod main_menu;
pub mod settings;
