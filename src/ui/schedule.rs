//! Schedule screen ("Ensalamentos").
//!
//! One layout per selection step: the course search, the shift and period
//! choices, and the weekday-grouped timetable. Today's weekday is drawn in
//! its own color.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ScheduleEntry;
use crate::schedule::weekday::is_same_day;
use crate::schedule::DayGroup;
use crate::view_state::{AppViewState, ScheduleView};

use super::components::render_empty_state;
use super::helpers::{scroll_offset, truncate_to_width};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_PRIMARY, COLOR_TEXT, COLOR_TODAY};

pub const SCHEDULE_TITLE: &str = "Ensalamentos";
pub const CLEAR_LABEL: &str = "Limpar";
pub const SEARCH_PLACEHOLDER: &str = "Buscar curso...";
pub const BACK_LABEL: &str = "Voltar";
pub const NO_COURSES: &str = "Nenhum curso encontrado";
pub const NO_CLASSES: &str = "Nenhum ensalamento encontrado para este curso.";

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn title_line(dirty: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(SCHEDULE_TITLE, bold(COLOR_ACCENT))];
    if dirty {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("✕ {} (Ctrl-L)", CLEAR_LABEL), bold(COLOR_PRIMARY)));
    }
    Line::from(spans)
}

fn back_line() -> Line<'static> {
    Line::from(Span::styled(format!("← {} (Esc)", BACK_LABEL), bold(COLOR_PRIMARY)))
}

fn pill(label: &str, color: Color) -> Span<'static> {
    Span::styled(format!("[{}]", label.to_uppercase()), bold(color))
}

/// Push one selectable row per option; returns the cursor row.
fn push_options(
    lines: &mut Vec<Line<'static>>,
    options: &[&str],
    cursor: usize,
    icon: &str,
    max_width: usize,
) -> usize {
    let mut cursor_line = lines.len();
    for (idx, option) in options.iter().enumerate() {
        let label = truncate_to_width(option, max_width.saturating_sub(6));
        if idx == cursor {
            cursor_line = lines.len();
            lines.push(Line::from(vec![
                Span::styled("▶ ", bold(COLOR_PRIMARY)),
                Span::styled(format!("{}{}", icon, label), bold(COLOR_ACCENT)),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {}{}", icon, label),
                Style::default().fg(COLOR_TEXT),
            )));
        }
    }
    cursor_line
}

fn push_day(
    lines: &mut Vec<Line<'static>>,
    day: &DayGroup<'_>,
    today: Option<usize>,
    first_row: usize,
    cursor: usize,
    ctx: &LayoutContext,
) -> Option<usize> {
    let is_today = is_same_day(day.weekday, today);
    let heading = if is_today {
        Line::from(vec![
            Span::styled(format!("● {}", day.weekday.to_uppercase()), bold(COLOR_TODAY)),
            Span::styled("  hoje", Style::default().fg(COLOR_TODAY)),
        ])
    } else {
        Line::from(Span::styled(
            format!("● {}", day.weekday.to_uppercase()),
            bold(COLOR_PRIMARY),
        ))
    };
    lines.push(heading);

    let mut cursor_line = None;
    for (offset, entry) in day.entries.iter().enumerate() {
        let selected = first_row + offset == cursor;
        if selected {
            cursor_line = Some(lines.len());
        }
        push_class(lines, entry, selected, ctx);
    }
    lines.push(Line::from(""));
    cursor_line
}

fn push_class(lines: &mut Vec<Line<'static>>, entry: &ScheduleEntry, selected: bool, ctx: &LayoutContext) {
    let marker = if selected { "▶ " } else { "  " };
    let width = ctx.content_width() as usize;

    if ctx.is_compact() {
        let text = format!("{} · {} · {}", entry.time_slot, entry.room, entry.subject);
        lines.push(Line::from(vec![
            Span::styled(marker, bold(COLOR_PRIMARY)),
            Span::styled(truncate_to_width(&text, width.saturating_sub(2)), Style::default().fg(COLOR_TEXT)),
        ]));
        return;
    }

    lines.push(Line::from(vec![
        Span::styled(marker, bold(COLOR_PRIMARY)),
        Span::styled(truncate_to_width(&entry.subject, width.saturating_sub(2)), bold(COLOR_PRIMARY)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Professor(a): ", bold(COLOR_TEXT)),
        Span::styled(entry.instructor_or_placeholder().to_string(), Style::default().fg(COLOR_TEXT)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  ◷ Horário: ", Style::default().fg(COLOR_DIM)),
        Span::styled(entry.time_slot.clone(), bold(COLOR_ACCENT)),
        Span::styled("   ⌖ Sala: ", Style::default().fg(COLOR_DIM)),
        Span::styled(entry.room.clone(), bold(COLOR_ACCENT)),
    ]));
}

/// Schedule lines for the current step plus the cursor row.
pub fn build_schedule_lines(state: &AppViewState, ctx: &LayoutContext) -> (Vec<Line<'static>>, usize) {
    let view = state.schedule();
    let cursor = state.schedule_cursor;
    let width = ctx.content_width() as usize;

    let mut lines = vec![title_line(state.selection.is_dirty()), Line::from("")];
    let mut cursor_line = 0;

    match &view {
        ScheduleView::ChooseCourse { search, courses } => {
            let query = if search.is_empty() {
                Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(COLOR_DIM))
            } else {
                Span::styled(search.to_string(), bold(COLOR_ACCENT))
            };
            lines.push(Line::from(vec![
                Span::styled("🔍 ", Style::default().fg(COLOR_PRIMARY)),
                query,
                Span::styled("▏", Style::default().fg(COLOR_PRIMARY)),
            ]));
            lines.push(Line::from(""));

            if courses.is_empty() {
                lines.extend(render_empty_state(NO_COURSES));
            } else {
                cursor_line = push_options(&mut lines, courses, cursor, "", width);
            }
        }

        ScheduleView::ChooseShift { course, shifts } => {
            lines.push(back_line());
            lines.push(Line::from(Span::styled(course.to_string(), bold(COLOR_ACCENT))));
            lines.push(Line::from(Span::styled("Selecione o turno:", Style::default().fg(COLOR_TEXT))));
            cursor_line = push_options(&mut lines, shifts, cursor, "◷ ", width);
        }

        ScheduleView::ChoosePeriod {
            course,
            shift,
            periods,
        } => {
            lines.push(back_line());
            lines.push(Line::from(Span::styled(course.to_string(), bold(COLOR_ACCENT))));
            lines.push(Line::from(pill(shift, COLOR_PRIMARY)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Selecione o período:", Style::default().fg(COLOR_TEXT))));
            cursor_line = push_options(&mut lines, periods, cursor, "", width);
        }

        ScheduleView::Timetable {
            course,
            shift,
            period,
            days,
        } => {
            lines.push(back_line());
            lines.push(Line::from(Span::styled(course.to_string(), bold(COLOR_ACCENT))));
            lines.push(Line::from(vec![
                pill(shift, COLOR_PRIMARY),
                Span::raw(" "),
                pill(period, COLOR_DIM),
            ]));
            lines.push(Line::from(""));

            if days.is_empty() {
                lines.extend(render_empty_state(NO_CLASSES));
            } else {
                let mut first_row = 0;
                for day in days {
                    if let Some(line) = push_day(&mut lines, day, state.today, first_row, cursor, ctx) {
                        cursor_line = line;
                    }
                    first_row += day.entries.len();
                }
            }
        }
    }

    (lines, cursor_line)
}

pub fn render_schedule(frame: &mut Frame, area: Rect, state: &AppViewState, ctx: &LayoutContext) {
    let (lines, cursor_line) = build_schedule_lines(state, ctx);
    // Keep the whole class card visible, not just its first row
    let lookahead = if ctx.is_compact() { 0 } else { 2 };
    let offset = scroll_offset(cursor_line + lookahead, area.height as usize);
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), area);
}
