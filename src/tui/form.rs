//! Create/edit form for a single todo

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::project::Group;
use crate::core::task::{Priority, Status};
use crate::core::todo::{parse_due_date, NewTodo, Todo, TodoEntry, DUE_DATE_FORMAT};
use crate::error::{Result, TuidooError};

/// Form fields in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Priority,
    Status,
    Done,
    Project,
    List,
    DueDate,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Description,
            FormField::Priority,
            FormField::Status,
            FormField::Done,
            FormField::Project,
            FormField::List,
            FormField::DueDate,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Description => "Description",
            FormField::Priority => "Priority",
            FormField::Status => "Status",
            FormField::Done => "Done",
            FormField::Project => "Project",
            FormField::List => "List",
            FormField::DueDate => "Due (YYYY-MM-DD)",
        }
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    fn next(&self) -> FormField {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    fn previous(&self) -> FormField {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

/// What the app should do after a key reached the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Continue,
    Save,
    Cancel,
}

/// Step through `items` from `current`, wrapping
fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let len = items.len();
    let i = items.iter().position(|x| *x == current).unwrap_or(0);
    if forward {
        items[(i + 1) % len]
    } else {
        items[(i + len - 1) % len]
    }
}

/// Editable copy of a todo
#[derive(Debug, Clone)]
pub struct TaskForm {
    /// Todo being edited, `None` for a new one
    pub editing: Option<i64>,
    pub field: FormField,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    pub done: bool,
    /// Index into `projects`
    pub project: usize,
    /// Index into `lists`, `None` for no list
    pub list: Option<usize>,
    pub due_date: String,
    pub projects: Vec<Group>,
    pub lists: Vec<Group>,
    /// Last validation error
    pub error: Option<String>,
    color: String,
}

impl TaskForm {
    /// Blank form; `projects` must not be empty
    pub fn new(projects: Vec<Group>, lists: Vec<Group>) -> Self {
        Self {
            editing: None,
            field: FormField::Name,
            name: String::new(),
            description: String::new(),
            priority: Priority::default(),
            status: Status::default(),
            done: false,
            project: 0,
            list: None,
            due_date: String::new(),
            projects,
            lists,
            error: None,
            color: String::new(),
        }
    }

    /// Form prefilled from an existing todo
    pub fn edit(entry: &TodoEntry, projects: Vec<Group>, lists: Vec<Group>) -> Self {
        let todo = &entry.todo;
        let project = projects
            .iter()
            .position(|p| p.id == todo.project_id)
            .unwrap_or(0);
        let list = todo
            .list_id
            .and_then(|id| lists.iter().position(|l| l.id == id));

        Self {
            editing: Some(todo.id),
            field: FormField::Name,
            name: todo.name.clone(),
            description: todo.description.clone().unwrap_or_default(),
            priority: todo.priority,
            status: todo.status,
            done: todo.done,
            project,
            list,
            due_date: todo
                .due_date
                .map(|d| d.format(DUE_DATE_FORMAT).to_string())
                .unwrap_or_default(),
            projects,
            lists,
            error: None,
            color: todo.color.clone(),
        }
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(_) => format!("Edit Todo: {}", self.name),
            None => "New Todo".to_string(),
        }
    }

    /// Display value of `field`
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Description => self.description.clone(),
            FormField::Priority => self.priority.display_name().to_string(),
            FormField::Status => self.status.display_name().to_string(),
            FormField::Done => (if self.done { "[x]" } else { "[ ]" }).to_string(),
            FormField::Project => self
                .projects
                .get(self.project)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            FormField::List => self
                .list
                .and_then(|i| self.lists.get(i))
                .map(|l| l.name.clone())
                .unwrap_or_else(|| "(none)".to_string()),
            FormField::DueDate => self.due_date.clone(),
        }
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            _ => None,
        }
    }

    fn step_choice(&mut self, forward: bool) {
        match self.field {
            FormField::Priority => self.priority = cycle(Priority::all(), self.priority, forward),
            FormField::Status => self.status = cycle(Status::all(), self.status, forward),
            FormField::Done => self.done = !self.done,
            FormField::Project if !self.projects.is_empty() => {
                let len = self.projects.len();
                self.project = if forward {
                    (self.project + 1) % len
                } else {
                    (self.project + len - 1) % len
                };
            }
            FormField::List => {
                // None sits before the first list
                let options: Vec<Option<usize>> = std::iter::once(None)
                    .chain((0..self.lists.len()).map(Some))
                    .collect();
                self.list = cycle(&options, self.list, forward);
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return FormAction::Save
            }
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.field = self.field.previous()
            }
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.previous(),
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down => self.field = self.field.next(),
            KeyCode::Left => self.step_choice(false),
            KeyCode::Right => self.step_choice(true),
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => match self.text_mut() {
                Some(text) => text.push(c),
                None if c == ' ' => self.step_choice(true),
                None => {}
            },
            _ => {}
        }
        FormAction::Continue
    }

    /// Build the record to insert
    pub fn to_new_todo(&self) -> Result<NewTodo> {
        let project = self
            .projects
            .get(self.project)
            .ok_or_else(|| TuidooError::InvalidInput("A todo needs a project".into()))?;
        let description = self.description.trim();

        Ok(NewTodo {
            project_id: project.id,
            list_id: self.list.and_then(|i| self.lists.get(i)).map(|l| l.id),
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: self.priority,
            status: self.status,
            color: self.color.clone(),
            done: self.done,
            due_date: parse_due_date(&self.due_date)?,
        })
    }

    /// Build the updated record for todo `id`
    pub fn to_todo(&self, id: i64) -> Result<Todo> {
        let new = self.to_new_todo()?;
        Ok(Todo {
            id,
            project_id: new.project_id,
            list_id: new.list_id,
            name: new.name,
            description: new.description,
            priority: new.priority,
            status: new.status,
            color: new.color,
            done: new.done,
            due_date: new.due_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn groups(names: &[&str]) -> Vec<Group> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Group {
                id: i as i64 + 10,
                name: name.to_string(),
                color: String::new(),
            })
            .collect()
    }

    fn form() -> TaskForm {
        TaskForm::new(groups(&["Work", "Home"]), groups(&["Urgent"]))
    }

    fn type_text(form: &mut TaskForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_tab_order_wraps_both_ways() {
        let mut form = form();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.field, FormField::DueDate);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.field, FormField::Name);
        form.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT));
        assert_eq!(form.field, FormField::DueDate);
    }

    #[test]
    fn test_typing_and_choices() {
        let mut form = form();
        type_text(&mut form, "Fix the boiler");
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.name, "Fix the boile");

        form.field = FormField::Priority;
        form.handle_key(key(KeyCode::Left));
        assert_eq!(form.priority, Priority::Urgent);

        form.field = FormField::Done;
        form.handle_key(key(KeyCode::Char(' ')));
        assert!(form.done);

        form.field = FormField::List;
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.value(FormField::List), "Urgent");
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.value(FormField::List), "(none)");
    }

    #[test]
    fn test_ctrl_s_and_esc() {
        let mut form = form();
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            FormAction::Save
        );
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
        assert!(form.name.is_empty());
    }

    #[test]
    fn test_builds_new_todo() {
        let mut form = form();
        form.name = "  Pay rent ".into();
        form.project = 1;
        form.list = Some(0);
        form.due_date = "2026-07-01".into();

        let new = form.to_new_todo().unwrap();
        assert_eq!(new.name, "Pay rent");
        assert_eq!(new.project_id, 11);
        assert_eq!(new.list_id, Some(10));
        assert_eq!(new.description, None);
        assert_eq!(
            new.due_date,
            Some(Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_bad_due_date_is_rejected() {
        let mut form = form();
        form.due_date = "next friday".into();
        assert!(matches!(form.to_new_todo(), Err(TuidooError::InvalidInput(_))));
    }

    #[test]
    fn test_edit_prefills_fields() {
        let entry = TodoEntry {
            todo: Todo {
                id: 3,
                project_id: 11,
                list_id: None,
                name: "Review".into(),
                description: Some("PR #9".into()),
                priority: Priority::High,
                status: Status::InProgress,
                color: "#FFA502".into(),
                done: false,
                due_date: Some(Utc.with_ymd_and_hms(2026, 2, 3, 0, 0, 0).unwrap()),
            },
            project: "Home".into(),
            list: None,
        };
        let form = TaskForm::edit(&entry, groups(&["Work", "Home"]), vec![]);
        assert_eq!(form.title(), "Edit Todo: Review");
        assert_eq!(form.value(FormField::Project), "Home");
        assert_eq!(form.due_date, "2026-02-03");

        let todo = form.to_todo(3).unwrap();
        assert_eq!(todo, entry.todo);
    }
}
