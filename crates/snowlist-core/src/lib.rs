pub mod list;
pub mod snow;
pub mod task;
pub mod view;
