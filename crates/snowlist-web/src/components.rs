mod snow_canvas;
mod task_form;
mod task_row;
mod task_section;

pub use snow_canvas::SnowCanvas;
pub use task_form::TaskForm;
pub use task_row::TaskRow;
pub use task_section::TaskSection;
