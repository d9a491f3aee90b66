mod app_table;
mod loading;
mod nav;
mod progress_bar;

pub use app_table::AppTable;
pub use loading::Loading;
pub use nav::Nav;
pub use progress_bar::ProgressBar;
