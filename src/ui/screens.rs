//! Wizard step screens.
//!
//! One render function per wizard step. All decision logic lives in the
//! step controllers; these functions only present the controllers' state
//! and derived status.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{AppState, ExamPathItem};
use crate::theme::{Colors, Styles};
use crate::wizard::{CapacityStatus, ExamPath, ExamType};

// ============================================================================
// Exam Path Screen
// ============================================================================

/// Render the exam-path screen: exam type, then the active branch's choices.
pub fn render_exam_path_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Choice list
            Constraint::Length(2), // Branch status
        ])
        .split(area);

    let items: Vec<ListItem> = state
        .exam_path_items()
        .iter()
        .map(|item| exam_path_list_item(state, item))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Exam Type and Cohort ")
                .title_style(Style::default().fg(Colors::SECONDARY)),
        )
        .highlight_style(Styles::highlight());

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let status = match state.exam_path.exam_type() {
        None => Line::from(Span::styled(
            "  Choose an exam type to begin.",
            Style::default().fg(Colors::FG_SECONDARY),
        )),
        Some(ExamType::Regular) => {
            if state.exam_path.can_continue() {
                Line::from(Span::styled(
                    "  Program and year selected.",
                    Style::default().fg(Colors::SUCCESS),
                ))
            } else {
                Line::from(Span::styled(
                    "  Select a program and an academic year to continue.",
                    Style::default().fg(Colors::FG_SECONDARY),
                ))
            }
        }
        Some(ExamType::Resit) => match state.exam_path.bound_roster() {
            Some(roster) => Line::from(vec![
                Span::styled("  Roster: ", Style::default().fg(Colors::SUCCESS)),
                Span::styled(
                    roster.file_name(),
                    Style::default()
                        .fg(Colors::SUCCESS)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled(
                "  Upload a CSV or Excel file containing the resit students.",
                Style::default().fg(Colors::FG_SECONDARY),
            )),
        },
    };
    f.render_widget(Paragraph::new(status), chunks[1]);
}

fn exam_path_list_item<'a>(state: &AppState, item: &ExamPathItem) -> ListItem<'a> {
    match item {
        ExamPathItem::Type(exam_type) => {
            let active = state.exam_path.exam_type() == Some(*exam_type);
            let marker = if active { "(•)" } else { "( )" };
            let (label, badge) = match exam_type {
                ExamType::Regular => ("Regular Students", "Standard Examination"),
                ExamType::Resit => ("Resit Students", "Supplementary Examination"),
            };
            let style = if active {
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {}  ", marker, label), style),
                Span::styled(badge, Style::default().fg(Colors::FG_MUTED)),
            ]))
        }
        ExamPathItem::Program(id) => {
            let selected = state.exam_path.selected_program() == Some(id.as_str());
            let marker = if selected { "[x]" } else { "[ ]" };
            let (name, description) = state
                .catalog
                .program(id)
                .map(|p| (p.name.clone(), p.description.clone()))
                .unwrap_or_else(|| (id.clone(), String::new()));
            let style = if selected {
                Style::default().fg(Colors::SUCCESS)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("   {} {}  ", marker, name), style),
                Span::styled(description, Style::default().fg(Colors::FG_MUTED)),
            ]))
        }
        ExamPathItem::Year(id) => {
            let selected = state.exam_path.selected_year() == Some(id.as_str());
            let marker = if selected { "[x]" } else { "[ ]" };
            let (name, enrolled) = state
                .catalog
                .year(id)
                .map(|y| (y.name.clone(), y.enrolled_count))
                .unwrap_or_else(|| (id.clone(), 0));
            let style = if selected {
                Style::default().fg(Colors::SUCCESS)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("   {} {}  ", marker, name), style),
                Span::styled(
                    format!("{} students enrolled", enrolled),
                    Style::default().fg(Colors::FG_MUTED),
                ),
            ]))
        }
        ExamPathItem::PickRoster => {
            let label = match state.exam_path.bound_roster() {
                Some(roster) => format!("   Upload student list  ({})", roster.file_name()),
                None => "   Upload student list  (.csv, .xlsx, .xls)".to_string(),
            };
            ListItem::new(label).style(Style::default().fg(Colors::FG_PRIMARY))
        }
        ExamPathItem::ClearRoster => ListItem::new("   Remove bound file")
            .style(Style::default().fg(Colors::WARNING)),
    }
}

// ============================================================================
// Sections Screen
// ============================================================================

/// Render the section-selection screen with the capacity panel and the
/// status area (summary or capacity-exceeded advisory).
pub fn render_sections_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Section list
            Constraint::Length(1), // Room capacity panel
            Constraint::Length(3), // Status / advisory
        ])
        .split(area);

    let items: Vec<ListItem> = state
        .catalog
        .sections
        .iter()
        .map(|section| {
            let selected = state.sections.is_selected(&section.id);
            let marker = if selected { "[x]" } else { "[ ]" };
            let style = if selected {
                Style::default().fg(Colors::SUCCESS)
            } else {
                Style::default().fg(Colors::FG_PRIMARY)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {}  ", marker, section.name), style),
                Span::styled(
                    format!("{} students", section.enrolled_count),
                    Style::default().fg(Colors::FG_MUTED),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sections ")
                .title_style(Style::default().fg(Colors::SECONDARY)),
        )
        .highlight_style(Styles::highlight());

    let mut list_state = ListState::default();
    list_state.select(Some(state.cursor));
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let capacity = Paragraph::new(Line::from(vec![
        Span::styled("  Room Capacity: ", Style::default().fg(Colors::FG_SECONDARY)),
        Span::styled(
            format!("{} students", state.catalog.room_capacity),
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  maximum across all available rooms",
            Style::default().fg(Colors::FG_MUTED),
        ),
    ]));
    f.render_widget(capacity, chunks[1]);

    // Exactly one of the three capacity states is active.
    let status = match state.sections.status(&state.catalog) {
        CapacityStatus::Empty => Paragraph::new(Line::from(Span::styled(
            "  Select at least one section to continue.",
            Style::default().fg(Colors::FG_SECONDARY),
        ))),
        CapacityStatus::Within { sections, students } => Paragraph::new(vec![
            Line::from(Span::styled(
                "  Selection Summary",
                Style::default()
                    .fg(Colors::INFO)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "  {} sections selected with {} total students",
                    sections, students
                ),
                Style::default().fg(Colors::INFO),
            )),
        ]),
        CapacityStatus::Exceeded { students, capacity } => Paragraph::new(vec![
            Line::from(Span::styled(
                "  Capacity Exceeded",
                Style::default()
                    .fg(Colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "  The selected sections have {} students, which exceeds the maximum room capacity of {} students. Deselect some sections to proceed.",
                    students, capacity
                ),
                Style::default().fg(Colors::ERROR),
            )),
        ]),
    };
    f.render_widget(status, chunks[2]);
}

// ============================================================================
// Summary Screen
// ============================================================================

/// Render the final review of the accumulated configuration.
pub fn render_summary_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    match &state.config.exam_path {
        Some(ExamPath::Regular { program, year }) => {
            lines.push(summary_line("Exam type", "Regular (standard examination)"));
            let program_name = state
                .catalog
                .program(program)
                .map(|p| format!("{} ({})", p.name, p.description))
                .unwrap_or_else(|| program.clone());
            lines.push(summary_line("Program", &program_name));
            let year_name = state
                .catalog
                .year(year)
                .map(|y| format!("{} ({} students enrolled)", y.name, y.enrolled_count))
                .unwrap_or_else(|| year.clone());
            lines.push(summary_line("Year", &year_name));
        }
        Some(ExamPath::Resit { roster }) => {
            lines.push(summary_line("Exam type", "Resit (supplementary sitting)"));
            lines.push(summary_line("Roster file", &roster.file_name()));
        }
        None => {
            lines.push(summary_line("Exam type", "not configured"));
        }
    }

    if let Some(sections) = &state.config.sections {
        lines.push(summary_line("Sections", &sections.join(", ")));
        let total: u32 = sections
            .iter()
            .filter_map(|id| state.catalog.section(id))
            .map(|s| s.enrolled_count)
            .sum();
        lines.push(summary_line("Total students", &total.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press Enter to finish.",
        Style::default().fg(Colors::FG_SECONDARY),
    )));

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Configuration Summary ")
            .title_style(Style::default().fg(Colors::SECONDARY)),
    );
    f.render_widget(summary, area);
}

fn summary_line<'a>(label: &str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("  {:<16}", label),
            Style::default().fg(Colors::FG_SECONDARY),
        ),
        Span::styled(
            value.to_string(),
            Style::default().fg(Colors::FG_PRIMARY),
        ),
    ])
}
