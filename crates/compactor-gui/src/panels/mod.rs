/// One panel per page. Exactly one is shown at a time.
pub mod about_panel;
pub mod main_panel;
pub mod settings_panel;
