pub mod flows;
pub mod layout;
pub mod navigation;
pub mod styles;
pub mod terminal;

pub use flows::create_menu::run_create_menu;
pub use flows::main_menu::run_main_menu;
pub use flows::settings::run_settings_form;
pub use navigation::{CreateMenuAction, MenuAction, UiRoute};
pub use terminal::TerminalGuard;
