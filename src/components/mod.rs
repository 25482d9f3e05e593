//! UI Components
//!
//! Page components and the pieces they share.

mod check_row;
mod checklist_page;
mod login_page;
mod nav_bar;
mod run_now_button;
mod schedule_editor;
mod settings_page;

pub use check_row::CheckRow;
pub use checklist_page::ChecklistPage;
pub use login_page::{complete_login, LoginOutcome, LoginPage};
pub use nav_bar::NavBar;
pub use run_now_button::RunNowButton;
pub use schedule_editor::ScheduleEditor;
pub use settings_page::{SettingsPage, SettingsPlaceholders, SETTING_FIELDS};
