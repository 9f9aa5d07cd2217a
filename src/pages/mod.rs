//! Page components for Daily Goals.

mod goal_detail;
mod goal_form;
mod home;
mod login;
mod not_found;
mod register;
mod settings;
mod welcome;

pub use goal_detail::GoalDetail;
pub use goal_form::{GoalEdit, GoalNew};
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use settings::Settings;
pub use welcome::Welcome;
