//! UI components specific to the Daily Goals app shell.

mod confirm_dialog;
mod goal_card;
mod offline_notice;
mod priority_picker;
mod tab_bar;
mod theme_toggle;

pub use confirm_dialog::ConfirmDialog;
pub use goal_card::GoalCard;
pub use offline_notice::OfflineNotice;
pub use priority_picker::PriorityPicker;
pub use tab_bar::{Tab, TabBar};
pub use theme_toggle::ThemeToggle;
