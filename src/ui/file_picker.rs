//! Roster file picker overlay for the resit path.
//!
//! Lists directories plus files with roster extensions (.csv, .xlsx, .xls)
//! and lets the user navigate into subdirectories. Picking a file only binds
//! it: no parsing or format validation happens here — that is a downstream
//! collaborator's job.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::{Colors, Styles};

/// Extensions accepted for resit rosters.
pub const ROSTER_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// A selectable entry in the picker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl PickerEntry {
    fn display_name(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        if self.is_dir { format!("{}/", name) } else { name }
    }
}

/// State for the roster file picker overlay.
#[derive(Debug, Clone, Default)]
pub struct FilePickerState {
    /// Directory currently being listed.
    pub dir: PathBuf,
    /// Entries: parent link first, then directories, then roster files.
    pub entries: Vec<PickerEntry>,
    /// Currently highlighted entry index.
    pub selected: usize,
    /// Error message if the directory could not be read.
    pub error: Option<String>,
}

impl FilePickerState {
    /// Open a picker rooted at `dir`.
    pub fn new(dir: PathBuf) -> Self {
        let mut state = Self {
            dir,
            entries: Vec::new(),
            selected: 0,
            error: None,
        };
        state.refresh();
        state
    }

    /// Re-read the current directory.
    pub fn refresh(&mut self) {
        self.selected = 0;
        self.error = None;
        self.entries = Vec::new();

        if let Some(parent) = self.dir.parent() {
            self.entries.push(PickerEntry {
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }

        let read = match fs::read_dir(&self.dir) {
            Ok(read) => read,
            Err(e) => {
                self.error = Some(format!("Cannot read {}: {}", self.dir.display(), e));
                return;
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in read.flatten() {
            let path = entry.path();
            if path.is_dir() {
                dirs.push(PickerEntry { path, is_dir: true });
            } else if is_roster_file(&path) {
                files.push(PickerEntry {
                    path,
                    is_dir: false,
                });
            }
        }
        dirs.sort_by(|a, b| a.path.cmp(&b.path));
        files.sort_by(|a, b| a.path.cmp(&b.path));

        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    /// Move the highlight up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the highlight down.
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    /// Activate the highlighted entry.
    ///
    /// Directories are entered in place and `None` is returned; a file
    /// returns its path for the caller to bind.
    pub fn activate(&mut self) -> Option<PathBuf> {
        let entry = self.entries.get(self.selected)?.clone();
        if entry.is_dir {
            self.dir = entry.path;
            self.refresh();
            None
        } else {
            Some(entry.path)
        }
    }
}

/// Check whether a path has a roster extension (case-insensitive).
fn is_roster_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            ROSTER_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Render the picker as a centered overlay.
pub fn render_file_picker(f: &mut Frame, state: &FilePickerState) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // File list
            Constraint::Length(1), // Instructions
        ])
        .split(area);

    let title = format!(" Select Roster File: {} ", state.dir.display());

    if let Some(ref err) = state.error {
        let error = Paragraph::new(format!("  {}", err))
            .style(Style::default().fg(Colors::ERROR))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(error, chunks[0]);
    } else {
        let items: Vec<ListItem> = state
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.is_dir {
                    Style::default().fg(Colors::FG_SECONDARY)
                } else {
                    Style::default().fg(Colors::FG_PRIMARY)
                };
                ListItem::new(format!("  {}", entry.display_name())).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Colors::BORDER_ACTIVE)),
            )
            .highlight_style(Styles::highlight());

        let mut list_state = ListState::default();
        list_state.select(Some(state.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    let instructions = Paragraph::new(Line::from(vec![
        Span::styled(" [Enter] ", Styles::key_hint()),
        Span::raw("Open/Select  "),
        Span::styled(" [j/k] ", Styles::key_hint()),
        Span::raw("Navigate  "),
        Span::styled(" [Esc] ", Styles::key_hint()),
        Span::raw("Cancel"),
    ]));
    f.render_widget(instructions, chunks[1]);
}

/// Centered sub-rectangle of `r`, sized by percentage.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_roster_extension_filter() {
        assert!(is_roster_file(Path::new("/tmp/list.csv")));
        assert!(is_roster_file(Path::new("/tmp/LIST.XLSX")));
        assert!(is_roster_file(Path::new("/tmp/old.xls")));
        assert!(!is_roster_file(Path::new("/tmp/notes.txt")));
        assert!(!is_roster_file(Path::new("/tmp/noext")));
    }

    #[test]
    fn test_picker_lists_dirs_and_roster_files_only() {
        let tmp = tempfile::tempdir().unwrap();
        File::create(tmp.path().join("resit.csv")).unwrap();
        File::create(tmp.path().join("readme.txt")).unwrap();
        fs::create_dir(tmp.path().join("archive")).unwrap();

        let picker = FilePickerState::new(tmp.path().to_path_buf());
        let names: Vec<String> = picker.entries.iter().map(|e| e.display_name()).collect();

        assert!(names.iter().any(|n| n == "archive/"));
        assert!(names.iter().any(|n| n == "resit.csv"));
        assert!(!names.iter().any(|n| n.contains("readme")));
    }

    #[test]
    fn test_activate_descends_into_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("rosters");
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("resit.xlsx")).unwrap();

        let mut picker = FilePickerState::new(tmp.path().to_path_buf());
        let idx = picker
            .entries
            .iter()
            .position(|e| e.path == sub)
            .expect("subdirectory listed");
        picker.selected = idx;

        assert_eq!(picker.activate(), None);
        assert_eq!(picker.dir, sub);
        assert!(picker.entries.iter().any(|e| !e.is_dir));
    }

    #[test]
    fn test_activate_returns_file_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("resit.csv");
        File::create(&file).unwrap();

        let mut picker = FilePickerState::new(tmp.path().to_path_buf());
        let idx = picker
            .entries
            .iter()
            .position(|e| e.path == file)
            .expect("roster file listed");
        picker.selected = idx;

        assert_eq!(picker.activate(), Some(file));
    }

    #[test]
    fn test_unreadable_directory_sets_error() {
        let picker = FilePickerState::new(PathBuf::from("/nonexistent/examplan-test"));
        assert!(picker.error.is_some());
    }
}
