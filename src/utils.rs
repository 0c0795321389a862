//! Some utility functions

use crate::calendar::{CalendarGrid, DayCell, MonthRelation};
use crate::task::Task;

static WEEK_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa ";

/// A plain-text rendering of a grid.
///
/// Today is shown as `[dd]`, and days of the previous and next months as `(dd)`.
pub fn render_grid(grid: &CalendarGrid) -> String {
    let mut out = format!("{:^width$}\n{}\n", grid.month_label(), WEEK_HEADER, width = WEEK_HEADER.len());
    for week in grid.weeks() {
        let line: String = week.iter().map(render_cell).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn render_cell(cell: &DayCell) -> String {
    match (cell.relation(), cell.is_today()) {
        (MonthRelation::Current, true) => format!("[{:2}]", cell.day_number()),
        (MonthRelation::Current, false) => format!(" {:2} ", cell.day_number()),
        _ => format!("({:2})", cell.day_number()),
    }
}

/// A debug utility that pretty-prints a grid
pub fn print_grid(grid: &CalendarGrid) {
    print!("{}", render_grid(grid));
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    let recurring = if task.is_recurring() { "~" } else { " " };
    println!("    {}{} [P{}] {}\t{} ({})", completion, recurring, task.priority().as_u8(), task.content(), task.date(), task.id());
}
