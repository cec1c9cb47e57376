pub mod button_task;
