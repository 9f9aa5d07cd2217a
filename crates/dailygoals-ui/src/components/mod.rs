//! Reusable UI components shared by the Daily Goals screens
//!
//! All components are presentational: state lives in the pages, values and
//! handlers arrive through props, and colors come from the active theme's
//! custom properties.

mod button;
mod feedback;
mod input;
mod priority;

pub use button::*;
pub use feedback::*;
pub use input::*;
pub use priority::*;
