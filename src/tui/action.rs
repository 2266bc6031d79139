use crate::model::Task;

/// User intents, keyed by task id (never by row position).
#[derive(Debug)]
pub enum Action {
    CreateTask(String),
    EditTask(String, String),
    DeleteTask(String),
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    TasksLoaded(Vec<Task>),
    Error(String),
    Status(String),
}
