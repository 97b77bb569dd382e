//! Main UI renderer
//!
//! Every colour comes from [`Styles`] built off the active theme at the top
//! of [`render`].

use chrono::Utc;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::core::todo::DUE_DATE_FORMAT;
use crate::theme::Theme;
use crate::tui::app::{App, Focus, MenuItem, Screen};
use crate::tui::form::{FormField, TaskForm};
use crate::tui::theme::Styles;

/// Blank rows around the banner art
const HEADER_PADDING: u16 = 2;

/// Width of the side menu
const MENU_WIDTH: u16 = 30;

/// Render the whole frame
pub fn render(frame: &mut Frame, app: &App) {
    let styles = Styles::new(app.themes.current_theme());

    // Paint the background first so gaps between widgets take the theme
    frame.render_widget(Block::default().style(styles.base()), frame.area());

    let banner = app.themes.create_banner();
    let header_height = banner.height() as u16 + HEADER_PADDING;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Banner
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(frame.area());

    let mut header = vec![Line::from("")];
    if usize::from(chunks[0].width) >= banner.width() {
        header.extend(banner.lines());
    } else {
        // Too narrow for the art
        header.push(Line::from(Span::styled("tuidoo", styles.title())));
    }
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_menu(frame, body[0], app, &styles);
    render_content(frame, body[1], app, &styles);
    render_status_bar(frame, chunks[2], app, &styles);

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame, app, &styles);
    }
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let items: Vec<ListItem> = MenuItem::all()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!("  [{}] {}", item.shortcut(), item.label());
            if i == app.menu_selection.selected && app.focus == Focus::Menu {
                ListItem::new(text).style(styles.selected())
            } else if i == app.menu_selection.selected {
                ListItem::new(text).style(styles.accent())
            } else {
                ListItem::new(text).style(styles.normal())
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(Span::styled(" Menu ", styles.title()))
            .borders(Borders::ALL)
            .border_style(styles.border(app.focus == Focus::Menu)),
    );

    frame.render_widget(list, area);
}

/// Render the main content area based on current screen
fn render_content(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let title = match (&app.form, app.current_screen) {
        (Some(form), Screen::TaskForm) => form.title(),
        (_, Screen::Tasks) => format!("Tasks ({}: {})", app.task_filter.label(), app.todos.len()),
        (_, screen) => screen.title().to_string(),
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), styles.title()))
        .borders(Borders::ALL)
        .border_style(styles.border(app.focus == Focus::Content));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.current_screen {
        Screen::Tasks => render_tasks(frame, inner, app, styles),
        Screen::TaskForm => {
            if let Some(form) = &app.form {
                render_task_form(frame, inner, form, styles);
            }
        }
        Screen::Themes => render_themes(frame, inner, app, styles),
    }
}

/// Column header and one row per todo
fn render_tasks(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = if let Some(reason) = app.storage_error() {
        vec![
            ListItem::new(format!("  Database unavailable: {}", reason)).style(styles.error()),
            ListItem::new(""),
            ListItem::new("  Themes still work but nothing will be saved.").style(styles.muted()),
        ]
    } else if app.todos.is_empty() {
        vec![ListItem::new("  No todos yet - Press 'n' to create a new task").style(styles.muted())]
    } else {
        let now = Utc::now();
        let mut items = vec![ListItem::new(format!(
            "  {}  {:<8} {:<30} {:<12} {:<14} {:<12} {}",
            "✓", "Priority", "Task", "Project", "List", "Status", "Due"
        ))
        .style(styles.accent())];

        items.extend(app.todos.iter().enumerate().map(|(i, entry)| {
            let todo = &entry.todo;
            let check = if todo.done {
                Span::styled("  ✓  ", styles.success())
            } else {
                Span::styled("  ·  ", styles.disabled())
            };
            let list = match &entry.list {
                Some(name) => Span::styled(format!("{:<14} ", truncate(name, 14)), styles.muted()),
                None => Span::styled(format!("{:<14} ", "-"), styles.disabled()),
            };
            let due = match todo.due_date {
                Some(due) if todo.is_overdue(now) => {
                    Span::styled(due.format(DUE_DATE_FORMAT).to_string(), styles.error())
                }
                Some(due) => Span::styled(due.format(DUE_DATE_FORMAT).to_string(), styles.muted()),
                None => Span::styled("-", styles.disabled()),
            };

            let line = Line::from(vec![
                check,
                Span::styled(
                    format!("{:<8} ", todo.priority.display_name()),
                    styles.priority(todo.priority),
                ),
                Span::styled(format!("{:<30} ", truncate(&todo.name, 30)), styles.normal()),
                Span::styled(format!("{:<12} ", truncate(&entry.project, 12)), styles.muted()),
                list,
                Span::styled(
                    format!("{:<12} ", todo.status.display_name()),
                    styles.status(todo.status),
                ),
                due,
            ]);

            if i == app.todo_selection.selected && app.focus == Focus::Content {
                ListItem::new(line).style(styles.selected())
            } else {
                ListItem::new(line)
            }
        }));
        items
    };

    frame.render_widget(List::new(items), chunks[0]);

    let help = Paragraph::new(
        " [n] New  [Enter] Edit  [Space] Done  [d] Delete  [f] Filter  [r] Refresh",
    )
    .style(styles.muted());
    frame.render_widget(help, chunks[1]);
}

/// Cut `text` to `width` characters, marking the cut
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

/// One labelled row per field, the active one highlighted
fn render_task_form(frame: &mut Frame, area: Rect, form: &TaskForm, styles: &Styles) {
    let mut lines = vec![Line::from("")];

    for field in FormField::all() {
        let active = *field == form.field;
        let value = form.value(*field);
        let value_span = if value.is_empty() {
            Span::styled(if active { "_" } else { "(empty)" }, styles.disabled())
        } else if active {
            Span::styled(format!("{}_", value), styles.accent())
        } else {
            Span::styled(value, styles.normal())
        };

        let label_style = if active { styles.title() } else { styles.muted() };
        let marker = if active { "›" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} {:<18}", marker, field.label()), label_style),
            value_span,
        ]));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(format!("  Error: {}", error), styles.error())));
    }
    lines.push(Line::from(Span::styled(
        "  [Tab] Next field  [←/→] Change  [Ctrl+S] Save  [Esc] Cancel",
        styles.muted(),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Render the theme picker with a palette preview of the highlighted theme
fn render_themes(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    let current = app.themes.current_theme().id;
    let items: Vec<ListItem> = app
        .themes
        .theme_identifiers()
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let name = app.themes.theme(id).map(|t| t.name).unwrap_or(*id);
            let cursor = if i == app.theme_selection.selected { "›" } else { " " };
            let check = if *id == current { "✓" } else { " " };
            let text = format!("{} {} {}", cursor, check, name);
            if i == app.theme_selection.selected {
                ListItem::new(text).style(styles.selected())
            } else {
                ListItem::new(text).style(styles.normal())
            }
        })
        .collect();

    frame.render_widget(List::new(items), chunks[0]);

    if let Some(theme) = app
        .highlighted_theme_id()
        .and_then(|id| app.themes.theme(id))
    {
        render_palette_preview(frame, chunks[1], theme, styles);
    }
}

/// Swatch per colour slot plus the header ramp
fn render_palette_preview(frame: &mut Frame, area: Rect, theme: &Theme, styles: &Styles) {
    let mut lines = vec![
        Line::from(Span::styled(format!(" {}", theme.name), styles.title())),
        Line::from(""),
    ];

    for (slot, rgb) in theme.colors.slots() {
        lines.push(Line::from(vec![
            Span::styled(" ████ ", Style::default().fg(Color::from(rgb))),
            Span::styled(format!("{:<15}", slot), styles.normal()),
            Span::styled(rgb.to_hex(), styles.muted()),
        ]));
    }

    lines.push(Line::from(""));
    let mut ramp = vec![Span::styled(" gradient ", styles.muted())];
    ramp.extend(
        theme
            .colors
            .header_gradient
            .stops()
            .iter()
            .map(|rgb| Span::styled("███", Style::default().fg(Color::from(*rgb)))),
    );
    lines.push(Line::from(ramp));

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, styles: &Styles) {
    let theme = app.themes.current_theme();
    let status_text = if let Some(msg) = &app.status_message {
        format!(" {}", msg)
    } else {
        format!(" Theme: {} │ ? for help ", theme.name)
    };

    let status = Paragraph::new(status_text).style(styles.status_bar());
    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, styles: &Styles) {
    let area = frame.area();

    // Centered popup, 60% wide and 70% tall, capped
    let popup_width = percent_of(area.width, 60).min(60);
    let popup_height = percent_of(area.height, 70).min(18);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let (title, help_lines) = get_help_content(app.current_screen);

    let text: Vec<Line> = help_lines
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:12}", key), styles.accent()),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} ", title), styles.title()))
                .borders(Borders::ALL)
                .border_style(styles.border(true)),
        )
        .style(styles.popup());

    frame.render_widget(help, popup_area);
}

/// `percent`% of `length`, computed without u16 overflow
fn percent_of(length: u16, percent: u32) -> u16 {
    (u32::from(length) * percent / 100) as u16
}

/// Get help content for the current screen
fn get_help_content(screen: Screen) -> (&'static str, Vec<(&'static str, &'static str)>) {
    let mut keys = vec![
        ("Tab", "Switch pane"),
        ("j / ↓", "Move down"),
        ("k / ↑", "Move up"),
        ("t", "Toggle theme picker"),
        ("h", "Go to tasks"),
        ("Esc", "Go back"),
        ("q", "Quit"),
    ];

    match screen {
        Screen::Tasks => {
            let mut task_keys = vec![
                ("n", "New task"),
                ("Enter", "Edit task"),
                ("Space", "Toggle done"),
                ("d", "Delete task"),
                ("f", "Cycle filter"),
                ("r", "Refresh"),
            ];
            task_keys.append(&mut keys);
            ("Help - Tasks", task_keys)
        }
        Screen::TaskForm => (
            "Help - Task",
            vec![
                ("Tab", "Next field"),
                ("Shift+Tab", "Previous field"),
                ("← / →", "Change choice"),
                ("Ctrl+S", "Save"),
                ("Esc", "Cancel"),
            ],
        ),
        Screen::Themes => {
            keys.insert(0, ("Enter", "Apply highlighted theme"));
            ("Help - Themes", keys)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::seed;
    use crate::core::settings::OfflineSettings;
    use crate::core::storage::Storage;
    use crate::core::Database;
    use crate::theme::ThemeManager;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let mut db = Database::open_in_memory().unwrap();
        seed::seed(&mut db, Utc::now()).unwrap();
        App::new(ThemeManager::new(), db.into(), &Config::default())
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        draw_sized(app, 140, 40)
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    /// First cell whose symbol starts `text` on any row
    fn find(buffer: &ratatui::buffer::Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        (0..area.height).find_map(|y| {
            let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            row.find(text)
                .map(|byte| (row[..byte].chars().count() as u16, y))
        })
    }

    #[test]
    fn test_tasks_screen_renders_banner_and_stored_todos() {
        let app = app();
        let text = buffer_text(&draw(&app));
        assert!(text.contains("████████╗"));
        assert!(text.contains("Deploy microservice v2"));
        assert!(text.contains("Grocery shopping"));
        assert!(text.contains("Homelab Setup"));
        assert!(text.contains("Theme: Dark"));
    }

    #[test]
    fn test_narrow_terminal_shows_plain_title() {
        let app = app();
        let text = buffer_text(&draw_sized(&app, 40, 30));
        assert!(!text.contains("████████╗"));
        assert!(text.contains("tuidoo"));
    }

    #[test]
    fn test_priority_uses_theme_colour() {
        let app = app();
        let buffer = draw(&app);
        let (x, y) = find(&buffer, "High").unwrap();
        let high: Color = app
            .themes
            .current_theme()
            .priority_color(crate::core::task::Priority::High)
            .into();
        assert_eq!(buffer[(x, y)].fg, high);
    }

    #[test]
    fn test_empty_store_shows_hint() {
        let app = App::new(
            ThemeManager::new(),
            Database::open_in_memory().unwrap().into(),
            &Config::default(),
        );
        let text = buffer_text(&draw(&app));
        assert!(text.contains("No todos yet - Press 'n' to create a new task"));
    }

    #[test]
    fn test_unavailable_database_is_explained() {
        let app = App::new(
            ThemeManager::new(),
            Storage::Unavailable(OfflineSettings::new("file is not a database")),
            &Config::default(),
        );
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Database unavailable: file is not a database"));
    }

    #[test]
    fn test_background_uses_active_theme() {
        let mut app = app();
        let dark_bg: Color = app.themes.current_theme().colors.background.into();
        assert_eq!(draw(&app)[(139, 37)].bg, dark_bg);

        app.themes.set_theme("light").unwrap();
        let light_bg: Color = app.themes.current_theme().colors.background.into();
        assert_eq!(draw(&app)[(139, 37)].bg, light_bg);
    }

    #[test]
    fn test_form_renders_fields() {
        let mut app = app();
        app.open_new_form();
        let text = buffer_text(&draw(&app));
        assert!(text.contains("New Todo"));
        assert!(text.contains("Due (YYYY-MM-DD)"));
        assert!(text.contains("Work"));
    }

    #[test]
    fn test_theme_screen_lists_names_with_check() {
        let mut app = app();
        app.navigate_to(Screen::Themes);
        let text = buffer_text(&draw(&app));
        assert!(text.contains("✓ Dark"));
        assert!(text.contains("Tokyo Night"));
        assert!(text.contains("text_secondary"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let mut app = app();
        app.show_help = true;
        let text = buffer_text(&draw(&app));
        assert!(text.contains("Help - Tasks"));
    }

    #[test]
    fn test_help_overlay_on_very_wide_terminal() {
        let mut app = app();
        app.show_help = true;
        let text = buffer_text(&draw_sized(&app, 1200, 50));
        assert!(text.contains("Help - Tasks"));
        assert_eq!(percent_of(u16::MAX, 60), 39321);
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("Homelab", 14), "Homelab");
        assert_eq!(truncate("Update Ansible Galaxy roles", 10), "Update An…");
    }
}
