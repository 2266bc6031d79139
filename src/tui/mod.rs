pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::controller::TaskListController;
use crate::store::{JsonFileBackend, TaskStore};
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, InputMode};
use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("ticked_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    // Composition root: the store is built here and injected, never
    // reached through a global.
    let config = Config::load()?;
    let data_file = config
        .data_file()
        .ok_or_else(|| anyhow!("could not determine a data directory"))?;
    let store = TaskStore::new(Box::new(JsonFileBackend::new(data_file)));
    let mut controller = TaskListController::new(store);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(config.show_created);
    let (action_tx, mut action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // Store task: owns the controller and answers every intent with a
    // fresh snapshot, so the screen always renders the projection.
    tokio::spawn(async move {
        match controller.load() {
            Ok(()) => {
                let _ = event_tx
                    .send(AppEvent::TasksLoaded(controller.tasks().to_vec()))
                    .await;
            }
            Err(e) => {
                // Empty list plus a visible error, never a silent
                // partial view.
                let _ = event_tx.send(AppEvent::TasksLoaded(vec![])).await;
                let _ = event_tx
                    .send(AppEvent::Error(format!("Load failed: {}", e)))
                    .await;
            }
        }

        while let Some(action) = action_rx.recv().await {
            let outcome = match action {
                Action::Quit => break,
                Action::CreateTask(title) => controller.add(&title).map(|done| (done, "Created.")),
                Action::EditTask(id, title) => {
                    controller.edit(&id, &title).map(|done| (done, "Updated."))
                }
                Action::DeleteTask(id) => controller.remove(&id).map(|done| (done, "Deleted.")),
            };
            // On failure the controller already rolled back, so this
            // snapshot is the reverted list.
            let _ = event_tx
                .send(AppEvent::TasksLoaded(controller.tasks().to_vec()))
                .await;
            match outcome {
                Ok((true, verb)) => {
                    let _ = event_tx.send(AppEvent::Status(verb.to_string())).await;
                }
                Ok((false, _)) => {} // no-op input, silently ignored
                Err(e) => {
                    let _ = event_tx
                        .send(AppEvent::Error(format!("Save failed: {}", e)))
                        .await;
                }
            }
        }
    });

    // UI Loop
    loop {
        terminal.draw(|f| view::draw(f, &mut app_state))?;

        if let Ok(event) = event_rx.try_recv() {
            match event {
                AppEvent::TasksLoaded(tasks) => {
                    app_state.set_tasks(tasks);
                    app_state.message = format!("Tasks: {}", app_state.tasks.len());
                }
                AppEvent::Error(msg) => {
                    app_state.message = format!("Error: {}", msg);
                    app_state.loading = false;
                }
                AppEvent::Status(msg) => {
                    app_state.message = msg;
                }
            }
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => app_state.next(),
                    MouseEventKind::ScrollUp => app_state.previous(),
                    _ => {}
                },
                Event::Key(key) => match app_state.mode {
                    InputMode::Creating | InputMode::Editing => match key.code {
                        KeyCode::Enter => {
                            // Empty text is the controller's no-op; the
                            // prompt closes either way.
                            let text = app_state.input_buffer.clone();
                            let action = match app_state.editing_id.take() {
                                Some(id) => Action::EditTask(id, text),
                                None => Action::CreateTask(text),
                            };
                            let _ = action_tx.send(action).await;
                            app_state.close_input();
                        }
                        KeyCode::Esc => app_state.close_input(),
                        KeyCode::Char(c) => app_state.enter_char(c),
                        KeyCode::Backspace => app_state.delete_char(),
                        KeyCode::Left => app_state.move_cursor_left(),
                        KeyCode::Right => app_state.move_cursor_right(),
                        _ => {}
                    },
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => {
                            let _ = action_tx.send(Action::Quit).await;
                            break;
                        }
                        KeyCode::Char('a') => {
                            app_state.begin_create();
                            app_state.message = "Enter: Save | Esc: Cancel".to_string();
                        }
                        KeyCode::Char('e') | KeyCode::Enter => {
                            if app_state.begin_edit() {
                                app_state.message = "Enter: Save | Esc: Cancel".to_string();
                            }
                        }
                        KeyCode::Char('d') => {
                            if let Some(task) = app_state.selected_task() {
                                let _ = action_tx.send(Action::DeleteTask(task.id.clone())).await;
                            }
                        }
                        KeyCode::Down | KeyCode::Char('j') => app_state.next(),
                        KeyCode::Up | KeyCode::Char('k') => app_state.previous(),
                        KeyCode::PageDown => app_state.jump_forward(10),
                        KeyCode::PageUp => app_state.jump_backward(10),
                        _ => {}
                    },
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
