pub mod app_reducer;
pub mod form_reducer;
pub mod session_reducer;
pub mod status_bar_reducer;

pub use app_reducer::reduce;
