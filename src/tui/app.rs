//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;
use tracing::{debug, error};

use crate::core::config::Config;
use crate::core::project::{Group, GroupKind};
use crate::core::storage::Storage;
use crate::core::theme_service::apply_theme;
use crate::core::todo::{TodoEntry, TodoFilter};
use crate::core::Database;
use crate::error::{Result, TuidooError};
use crate::theme::ThemeManager;
use crate::tui::event::{is_back_key, is_down_key, is_quit_key, is_up_key, AppEvent, EventHandler};
use crate::tui::form::{FormAction, TaskForm};
use crate::tui::ui;

/// Ticks a status message stays visible
const STATUS_TTL_TICKS: u32 = 16;

/// Current screen in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tasks,
    TaskForm,
    Themes,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Tasks => "Tasks",
            Screen::TaskForm => "Task",
            Screen::Themes => "Select Theme",
        }
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Content,
}

/// Entries of the side menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Tasks,
    NewTask,
    Themes,
    Help,
    Quit,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Tasks,
            MenuItem::NewTask,
            MenuItem::Themes,
            MenuItem::Help,
            MenuItem::Quit,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Tasks => "Tasks",
            MenuItem::NewTask => "New Task",
            MenuItem::Themes => "Themes",
            MenuItem::Help => "Help",
            MenuItem::Quit => "Quit",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            MenuItem::Tasks => 'h',
            MenuItem::NewTask => 'n',
            MenuItem::Themes => 't',
            MenuItem::Help => '?',
            MenuItem::Quit => 'q',
        }
    }
}

/// Which todos the task screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
    Overdue,
}

impl TaskFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Pending => "Pending",
            TaskFilter::Completed => "Completed",
            TaskFilter::Overdue => "Overdue",
        }
    }

    fn next(&self) -> TaskFilter {
        match self {
            TaskFilter::All => TaskFilter::Pending,
            TaskFilter::Pending => TaskFilter::Completed,
            TaskFilter::Completed => TaskFilter::Overdue,
            TaskFilter::Overdue => TaskFilter::All,
        }
    }

    fn query(&self) -> TodoFilter {
        match self {
            TaskFilter::All => TodoFilter::All,
            TaskFilter::Pending => TodoFilter::Pending,
            TaskFilter::Completed => TodoFilter::Completed,
            TaskFilter::Overdue => TodoFilter::Overdue(Utc::now()),
        }
    }
}

/// List selection state
#[derive(Debug, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total items in the list
    pub total: usize,
}

impl ListState {
    pub fn new(total: usize) -> Self {
        Self { selected: 0, total }
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + 1) % self.total;
        }
    }

    pub fn previous(&mut self) {
        if self.total > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.total - 1);
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.total {
            self.selected = index;
        }
    }

    /// Change the length, keeping the cursor in range
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        if self.selected >= total {
            self.selected = total.saturating_sub(1);
        }
    }
}

/// Main TUI application
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current screen
    pub current_screen: Screen,
    /// Navigation history for back navigation
    pub navigation_stack: Vec<Screen>,
    /// Pane with keyboard focus
    pub focus: Focus,
    /// Side menu selection
    pub menu_selection: ListState,
    /// Cursor in the theme list
    pub theme_selection: ListState,
    /// Active theme context
    pub themes: ThemeManager,
    /// Database, or the reason it is missing
    storage: Storage,
    /// Todos on the task screen
    pub todos: Vec<TodoEntry>,
    pub todo_selection: ListState,
    pub task_filter: TaskFilter,
    /// Open create/edit form
    pub form: Option<TaskForm>,
    /// Status message to display
    pub status_message: Option<String>,
    /// Ticks left before the status message clears
    status_ttl: u32,
    /// Whether to show the help overlay
    pub show_help: bool,
    tick_rate: Duration,
}

impl App {
    /// Create the app around an already-initialised theme manager
    pub fn new(mut themes: ThemeManager, storage: Storage, config: &Config) -> Self {
        themes.set_banner_style(config.banner_style);
        let mut theme_selection = ListState::new(themes.theme_identifiers().len());
        theme_selection.select(themes.current_theme_index());

        let mut app = Self {
            running: true,
            current_screen: Screen::Tasks,
            navigation_stack: Vec::new(),
            focus: Focus::Menu,
            menu_selection: ListState::new(MenuItem::all().len()),
            theme_selection,
            themes,
            storage,
            todos: Vec::new(),
            todo_selection: ListState::default(),
            task_filter: TaskFilter::default(),
            form: None,
            status_message: None,
            status_ttl: 0,
            show_help: false,
            tick_rate: Duration::from_millis(config.tick_rate_ms),
        };
        app.refresh_tasks();
        app
    }

    /// Why the database is unavailable, if it is
    pub fn storage_error(&self) -> Option<&str> {
        self.storage.unavailable_reason()
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| TuidooError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| TuidooError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| TuidooError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| TuidooError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| TuidooError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| TuidooError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut events = EventHandler::new(self.tick_rate);

        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| TuidooError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                Some(AppEvent::Resize(_, _)) => {
                    // Terminal resize is handled automatically by ratatui
                }
                Some(AppEvent::Tick) => self.on_tick(),
                None => self.running = false,
            }
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_message = None;
            }
        }
    }

    /// Show a transient message in the status bar
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ttl = STATUS_TTL_TICKS;
    }

    /// Dispatch a key press
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key dismisses the overlay
            self.show_help = false;
            return;
        }

        // The form owns every key while it is open
        if self.current_screen == Screen::TaskForm {
            self.handle_form_key(key);
            return;
        }

        if is_quit_key(&key) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('?') => {
                self.show_help = true;
                return;
            }
            KeyCode::Char('t') => {
                self.toggle_theme_screen();
                return;
            }
            KeyCode::Char('h') => {
                self.navigate_to(Screen::Tasks);
                return;
            }
            KeyCode::Char('n') => {
                self.open_new_form();
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        if is_back_key(&key) {
            self.go_back();
            return;
        }

        match self.focus {
            Focus::Menu => self.handle_menu_key(key),
            Focus::Content => match self.current_screen {
                Screen::Themes => self.handle_themes_key(key),
                Screen::Tasks => self.handle_tasks_key(key),
                Screen::TaskForm => {}
            },
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        if is_down_key(&key) {
            self.menu_selection.next();
        } else if is_up_key(&key) {
            self.menu_selection.previous();
        } else if key.code == KeyCode::Enter {
            match MenuItem::all().get(self.menu_selection.selected) {
                Some(MenuItem::Tasks) => {
                    self.navigate_to(Screen::Tasks);
                    self.focus = Focus::Content;
                }
                Some(MenuItem::NewTask) => self.open_new_form(),
                Some(MenuItem::Themes) => {
                    self.navigate_to(Screen::Themes);
                    self.focus = Focus::Content;
                }
                Some(MenuItem::Help) => self.show_help = true,
                Some(MenuItem::Quit) => self.quit(),
                None => {}
            }
        }
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) {
        if is_down_key(&key) {
            self.todo_selection.next();
            return;
        }
        if is_up_key(&key) {
            self.todo_selection.previous();
            return;
        }

        match key.code {
            KeyCode::Char(' ') => self.toggle_selected_done(),
            KeyCode::Enter => self.open_edit_form(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('f') => {
                self.task_filter = self.task_filter.next();
                self.refresh_tasks();
            }
            KeyCode::Char('r') => {
                self.refresh_tasks();
                self.set_status("Refreshed");
            }
            _ => {}
        }
    }

    fn handle_themes_key(&mut self, key: KeyEvent) {
        if is_down_key(&key) {
            self.theme_selection.next();
        } else if is_up_key(&key) {
            self.theme_selection.previous();
        } else if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.apply_selected_theme();
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.form.as_mut() else {
            self.go_back();
            return;
        };

        match form.handle_key(key) {
            FormAction::Continue => {}
            FormAction::Cancel => self.close_form(),
            FormAction::Save => self.save_form(),
        }
    }

    /// Reload todos for the current filter
    pub fn refresh_tasks(&mut self) {
        let result = match self.storage.database() {
            Some(db) => db.todos(&self.task_filter.query()),
            None => Ok(Vec::new()),
        };

        match result {
            Ok(todos) => self.todos = todos,
            Err(e) => {
                error!("Loading todos failed: {:?}", e);
                self.todos.clear();
                self.set_status(format!("Error: {}", e));
            }
        }
        self.todo_selection.resize(self.todos.len());
    }

    /// Todo under the cursor
    pub fn selected_todo(&self) -> Option<&TodoEntry> {
        self.todos.get(self.todo_selection.selected)
    }

    /// Borrow the database, or explain on the status bar why it is missing
    fn database_or_status(&mut self) -> Option<&mut Database> {
        if let Some(reason) = self.storage.unavailable_reason() {
            let message = format!("Database unavailable: {}", reason);
            self.set_status(message);
            return None;
        }
        self.storage.database_mut()
    }

    fn run_on_selected(
        &mut self,
        action: impl FnOnce(&mut Database, i64) -> Result<()>,
        done: &str,
    ) {
        let Some((id, name)) = self
            .selected_todo()
            .map(|e| (e.todo.id, e.todo.name.clone()))
        else {
            return;
        };
        let Some(db) = self.database_or_status() else {
            return;
        };

        match action(db, id) {
            Ok(()) => {
                self.refresh_tasks();
                self.set_status(format!("{}: {}", done, name));
            }
            Err(e) => {
                error!("Todo update failed: {:?}", e);
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    /// Flip the done flag of the selected todo
    pub fn toggle_selected_done(&mut self) {
        let Some(done) = self.selected_todo().map(|e| e.todo.done) else {
            return;
        };
        if done {
            self.run_on_selected(|db, id| db.mark_incomplete(id), "Reopened");
        } else {
            self.run_on_selected(|db, id| db.mark_complete(id), "Completed");
        }
    }

    pub fn delete_selected(&mut self) {
        self.run_on_selected(|db, id| db.delete_todo(id), "Deleted");
    }

    /// Projects and lists for the form, or `None` with a status message
    fn form_choices(&mut self) -> Option<(Vec<Group>, Vec<Group>)> {
        let db = self.database_or_status()?;
        let choices = db
            .groups(GroupKind::Project)
            .and_then(|projects| Ok((projects, db.groups(GroupKind::List)?)));

        match choices {
            Ok((projects, _)) if projects.is_empty() => {
                self.set_status("Create a project first: tuidoo project add <name>");
                None
            }
            Ok(choices) => Some(choices),
            Err(e) => {
                self.set_status(format!("Error: {}", e));
                None
            }
        }
    }

    pub fn open_new_form(&mut self) {
        if let Some((projects, lists)) = self.form_choices() {
            self.form = Some(TaskForm::new(projects, lists));
            self.navigate_to(Screen::TaskForm);
            self.focus = Focus::Content;
        }
    }

    pub fn open_edit_form(&mut self) {
        let Some(entry) = self.selected_todo().cloned() else {
            return;
        };
        if let Some((projects, lists)) = self.form_choices() {
            self.form = Some(TaskForm::edit(&entry, projects, lists));
            self.navigate_to(Screen::TaskForm);
            self.focus = Focus::Content;
        }
    }

    fn close_form(&mut self) {
        self.form = None;
        self.go_back();
        self.focus = Focus::Content;
    }

    /// Validate and write the open form; errors stay on the form
    pub fn save_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let Some(db) = self.storage.database_mut() else {
            return;
        };

        let result = match form.editing {
            Some(id) => form
                .to_todo(id)
                .and_then(|todo| db.update_todo(&todo).map(|()| todo.id)),
            None => form
                .to_new_todo()
                .and_then(|new| db.create_todo(&new).map(|entry| entry.todo.id)),
        };

        match result {
            Ok(id) => {
                let name = form.name.trim().to_string();
                self.close_form();
                self.refresh_tasks();
                if let Some(index) = self.todos.iter().position(|e| e.todo.id == id) {
                    self.todo_selection.select(index);
                }
                self.set_status(format!("Saved: {}", name));
            }
            Err(e) => {
                debug!(error = %e, "form rejected");
                if let Some(form) = self.form.as_mut() {
                    form.error = Some(e.to_string());
                }
            }
        }
    }

    /// Identifier under the theme list cursor
    pub fn highlighted_theme_id(&self) -> Option<&'static str> {
        self.themes
            .theme_identifiers()
            .get(self.theme_selection.selected)
            .copied()
    }

    /// Switch to the highlighted theme and persist it
    pub fn apply_selected_theme(&mut self) {
        let Some(id) = self.highlighted_theme_id() else {
            return;
        };

        match apply_theme(&mut self.themes, &mut self.storage, id) {
            Ok(change) => {
                let name = self.themes.current_theme().name;
                if change.is_persisted() {
                    self.set_status(format!("Theme: {}", name));
                } else {
                    self.set_status(format!("Theme: {} (not saved)", name));
                }
            }
            Err(e) => {
                error!("Theme switch failed: {:?}", e);
                self.set_status(format!("Error: {}", e));
            }
        }
    }

    fn toggle_theme_screen(&mut self) {
        if self.current_screen == Screen::Themes {
            self.go_back();
        } else {
            self.navigate_to(Screen::Themes);
            self.focus = Focus::Content;
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Menu => Focus::Content,
            Focus::Content => Focus::Menu,
        };
    }

    /// Navigate to a new screen
    pub fn navigate_to(&mut self, screen: Screen) {
        if screen == self.current_screen {
            return;
        }
        debug!(?screen, "navigate");
        self.navigation_stack.push(self.current_screen);
        self.current_screen = screen;

        if screen == Screen::Themes {
            // Start the cursor on the active theme
            self.theme_selection.select(self.themes.current_theme_index());
        }
    }

    /// Go back to the previous screen
    pub fn go_back(&mut self) {
        if let Some(previous) = self.navigation_stack.pop() {
            self.current_screen = previous;
            self.focus = Focus::Menu;
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed;
    use crate::core::settings::{OfflineSettings, SettingsStore};
    use crate::core::task::Status;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(storage: Storage) -> App {
        App::new(ThemeManager::new(), storage, &Config::default())
    }

    fn sqlite_app() -> App {
        app_with(Database::open_in_memory().unwrap().into())
    }

    fn seeded_app() -> App {
        let mut db = Database::open_in_memory().unwrap();
        seed::seed(&mut db, Utc::now()).unwrap();
        app_with(db.into())
    }

    fn offline_app() -> App {
        app_with(Storage::Unavailable(OfflineSettings::new("file is not a database")))
    }

    fn select_theme(app: &mut App, id: &str) {
        let index = app
            .themes
            .theme_identifiers()
            .iter()
            .position(|t| *t == id)
            .unwrap();
        app.theme_selection.select(index);
    }

    fn focus_tasks(app: &mut App) {
        app.focus = Focus::Content;
        assert_eq!(app.current_screen, Screen::Tasks);
    }

    #[test]
    fn test_list_state_wraps() {
        let mut state = ListState::new(3);
        state.previous();
        assert_eq!(state.selected, 2);
        state.next();
        assert_eq!(state.selected, 0);
        state.select(7);
        assert_eq!(state.selected, 0);
        state.select(2);
        state.resize(1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_starts_on_tasks_with_cursor_on_active_theme() {
        let app = sqlite_app();
        assert_eq!(app.current_screen, Screen::Tasks);
        assert_eq!(app.highlighted_theme_id(), Some("dark"));
        assert!(app.todos.is_empty());
    }

    #[test]
    fn test_loads_todos_from_store() {
        let app = seeded_app();
        assert_eq!(app.todos.len(), 5);
        assert_eq!(app.selected_todo().unwrap().todo.name, "Deploy microservice v2");
    }

    #[test]
    fn test_filter_cycles_and_requeries() {
        let mut app = seeded_app();
        focus_tasks(&mut app);
        app.handle_key_event(key(KeyCode::Char('f')));
        assert_eq!(app.task_filter, TaskFilter::Pending);
        assert_eq!(app.todos.len(), 4);

        app.handle_key_event(key(KeyCode::Char('f')));
        assert_eq!(app.task_filter, TaskFilter::Completed);
        assert_eq!(app.todos.len(), 1);
        assert_eq!(app.todos[0].todo.name, "Grocery shopping");
    }

    #[test]
    fn test_space_toggles_done() {
        let mut app = seeded_app();
        focus_tasks(&mut app);
        app.handle_key_event(key(KeyCode::Char(' ')));

        let todo = &app.todos[0].todo;
        assert!(todo.done);
        assert_eq!(todo.status, Status::Done);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Completed: Deploy microservice v2")
        );

        app.handle_key_event(key(KeyCode::Char(' ')));
        assert!(!app.todos[0].todo.done);
        assert_eq!(app.todos[0].todo.status, Status::Pending);
    }

    #[test]
    fn test_delete_removes_row() {
        let mut app = seeded_app();
        focus_tasks(&mut app);
        app.handle_key_event(key(KeyCode::Down));
        app.handle_key_event(key(KeyCode::Char('d')));
        assert_eq!(app.todos.len(), 4);
        assert!(app.todos.iter().all(|e| e.todo.name != "Code review PR #456"));
    }

    #[test]
    fn test_new_task_form_saves() {
        let mut app = seeded_app();
        app.handle_key_event(key(KeyCode::Char('n')));
        assert_eq!(app.current_screen, Screen::TaskForm);

        // Global shortcuts are plain text inside the form
        for c in "quit the habit".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert!(app.running);
        app.handle_key_event(ctrl('s'));

        assert_eq!(app.current_screen, Screen::Tasks);
        assert!(app.form.is_none());
        assert_eq!(app.todos.len(), 6);
        assert_eq!(app.selected_todo().unwrap().todo.name, "quit the habit");
        assert_eq!(app.selected_todo().unwrap().project, "Work");
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut app = seeded_app();
        app.handle_key_event(key(KeyCode::Char('n')));
        app.handle_key_event(ctrl('s'));

        assert_eq!(app.current_screen, Screen::TaskForm);
        assert!(app.form.as_ref().unwrap().error.is_some());

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.current_screen, Screen::Tasks);
        assert_eq!(app.todos.len(), 5);
    }

    #[test]
    fn test_enter_edits_selected() {
        let mut app = seeded_app();
        focus_tasks(&mut app);
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(
            app.form.as_ref().unwrap().title(),
            "Edit Todo: Deploy microservice v2"
        );

        app.handle_key_event(key(KeyCode::Backspace));
        app.handle_key_event(key(KeyCode::Char('3')));
        app.handle_key_event(ctrl('s'));
        assert_eq!(app.todos[0].todo.name, "Deploy microservice v3");
        assert_eq!(app.todos.len(), 5);
    }

    #[test]
    fn test_new_form_needs_a_project() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('n')));
        assert_eq!(app.current_screen, Screen::Tasks);
        assert!(app.status_message.unwrap().contains("Create a project first"));
    }

    #[test]
    fn test_t_toggles_theme_screen() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('t')));
        assert_eq!(app.current_screen, Screen::Themes);
        assert_eq!(app.focus, Focus::Content);

        app.handle_key_event(key(KeyCode::Char('t')));
        assert_eq!(app.current_screen, Screen::Tasks);
    }

    #[test]
    fn test_enter_applies_and_persists_theme() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('t')));
        select_theme(&mut app, "light");
        app.handle_key_event(key(KeyCode::Enter));

        assert_eq!(app.themes.current_theme().name, "Light");
        assert_eq!(app.status_message.as_deref(), Some("Theme: Light"));
        assert_eq!(
            app.storage.active_theme_id().unwrap().as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_unavailable_database_keeps_theme_switch() {
        let mut app = offline_app();
        assert_eq!(app.storage_error(), Some("file is not a database"));

        app.navigate_to(Screen::Themes);
        select_theme(&mut app, "matrix");
        app.apply_selected_theme();

        assert_eq!(app.themes.current_theme().id, "matrix");
        assert_eq!(app.status_message.as_deref(), Some("Theme: Matrix (not saved)"));
    }

    #[test]
    fn test_unavailable_database_blocks_new_task() {
        let mut app = offline_app();
        app.handle_key_event(key(KeyCode::Char('n')));
        assert_eq!(app.current_screen, Screen::Tasks);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Database unavailable: file is not a database")
        );
    }

    #[test]
    fn test_menu_navigation_and_quit() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('j')));
        app.handle_key_event(key(KeyCode::Char('j')));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.current_screen, Screen::Themes);

        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.current_screen, Screen::Tasks);
        assert_eq!(app.focus, Focus::Menu);

        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_help_overlay_swallows_next_key() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_status_message_expires() {
        let mut app = sqlite_app();
        app.set_status("hello");
        for _ in 0..STATUS_TTL_TICKS {
            app.on_tick();
        }
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_theme_list_navigation_on_content_focus() {
        let mut app = sqlite_app();
        app.handle_key_event(key(KeyCode::Char('t')));
        let start = app.theme_selection.selected;
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.theme_selection.selected, start + 1);

        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Menu);
        app.handle_key_event(key(KeyCode::Down));
        assert_eq!(app.theme_selection.selected, start + 1);
    }
}
