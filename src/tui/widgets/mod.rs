// TUI widget modules for each panel and overlay.

pub mod banner;
pub mod confirm;
pub mod entry;
pub mod groups;
pub mod help_bar;
pub mod history;
pub mod roster_list;
pub mod status_bar;
pub mod wheel;
