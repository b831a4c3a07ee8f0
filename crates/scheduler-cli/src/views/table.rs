use chrono::{Datelike, NaiveDate};
use chrono_humanize::HumanTime;
use comfy_table::{Cell, Color, Row, Table};
use scheduler_core::calendar::format_date;

#[derive(Debug, Clone)]
pub struct ViewOccurrence {
    pub position: usize,
    pub date: NaiveDate,
}

pub fn display_occurrences(occurrences: &[ViewOccurrence], now: NaiveDate) {
    if occurrences.is_empty() {
        println!("No upcoming dates.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Weekday", "When"]);

    for occurrence in occurrences {
        let mut row = Row::new();
        row.add_cell(Cell::new(occurrence.position));
        row.add_cell(Cell::new(format_date(occurrence.date)).fg(Color::Yellow));

        let weekday = Cell::new(occurrence.date.weekday());
        row.add_cell(match occurrence.date.weekday().number_from_monday() {
            6 | 7 => weekday.fg(Color::Cyan),
            _ => weekday,
        });

        row.add_cell(Cell::new(HumanTime::from(occurrence.date - now)));
        table.add_row(row);
    }

    println!("{table}");
}
