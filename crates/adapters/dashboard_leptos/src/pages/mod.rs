mod admin;
mod app_detail;
mod app_form;
mod paste;
mod wipe_confirm;

pub use admin::AdminPage;
pub use app_detail::AppDetail;
pub use app_form::{CreateAppForm, EditAppForm};
pub use paste::PastePage;
pub use wipe_confirm::WipeConfirm;
