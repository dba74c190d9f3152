//! UI Components
//!
//! Reusable Leptos components.

mod progress_bar;
mod task_form;
mod task_list;
mod task_row;
mod theme_toggle;
mod toast;

#[cfg(feature = "sync")]
mod login;
#[cfg(feature = "sync")]
mod signup;

pub use progress_bar::ProgressBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use theme_toggle::ThemeToggle;
pub use toast::Toasts;

#[cfg(feature = "sync")]
pub use login::LoginView;
#[cfg(feature = "sync")]
pub use signup::SignupView;
