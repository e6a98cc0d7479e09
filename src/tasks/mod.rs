pub mod description_task;
