use crate::model::Task;
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Creating,
    Editing,
}

pub struct AppState {
    pub tasks: Vec<Task>,
    pub list_state: ListState,
    pub message: String,
    pub loading: bool,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub editing_id: Option<String>,
    pub show_created: bool,
}

impl AppState {
    pub fn new(show_created: bool) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            tasks: vec![],
            list_state: l_state,
            message: "Ready.".to_string(),
            loading: true,
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            editing_id: None,
            show_created,
        }
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    /// Byte offset of the cursor (the buffer may hold multi-byte chars).
    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len())
    }
    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    /// Replaces the rendered snapshot, keeping the selection in range.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loading = false;
        let sel = self.list_state.selected().unwrap_or(0);
        if self.tasks.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.tasks.len() {
            self.list_state.select(Some(self.tasks.len() - 1));
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.list_state.selected().and_then(|i| self.tasks.get(i))
    }

    /// Opens the create prompt with an empty buffer.
    pub fn begin_create(&mut self) {
        self.reset_input();
        self.editing_id = None;
        self.mode = InputMode::Creating;
    }

    /// Opens the edit prompt prefilled with the selected task's title.
    /// Returns false when nothing is selected.
    pub fn begin_edit(&mut self) -> bool {
        let Some(task) = self.selected_task() else {
            return false;
        };
        let (id, title) = (task.id.clone(), task.title.clone());
        self.editing_id = Some(id);
        self.input_buffer = title;
        self.cursor_position = self.input_buffer.chars().count();
        self.mode = InputMode::Editing;
        true
    }

    pub fn close_input(&mut self) {
        self.mode = InputMode::Normal;
        self.editing_id = None;
        self.reset_input();
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.tasks.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}
