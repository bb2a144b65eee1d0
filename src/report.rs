//! ASCII table rendering for collected statistics.
//!
//! ```text
//! +HeadHunter Moscow------+------------------+---------------------+------------------+
//! | Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |
//! +-----------------------+------------------+---------------------+------------------+
//! | Python                | 1432             | 517                 | 187436           |
//! +-----------------------+------------------+---------------------+------------------+
//! ```

use crate::config::TABLE_HEADERS;
use crate::models::SiteStats;

/// Render one table for a source, titled `"{site} {region}"`.
pub fn render_table(stats: &SiteStats, region: &str) -> String {
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = stats
        .languages
        .iter()
        .map(|(language, s)| {
            vec![
                language.clone(),
                s.vacancies_found.to_string(),
                s.vacancies_processed.to_string(),
                s.average_salary.to_string(),
            ]
        })
        .collect();

    // Widths in chars: the headers are Cyrillic.
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separator = border(&widths);
    let title = format!("{} {}", stats.site, region);
    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(titled_border(&separator, &title));
    lines.push(row_line(&header, &widths));
    lines.push(separator.clone());
    for row in &rows {
        lines.push(row_line(row, &widths));
    }
    lines.push(separator);
    lines.join("\n")
}

/// Render every table, separated by a blank line.
pub fn render_report(sites: &[SiteStats], region: &str) -> String {
    sites
        .iter()
        .map(|site| render_table(site, region))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlay the title onto the top border right after the first corner.
/// A title that does not fit is left out.
fn titled_border(border: &str, title: &str) -> String {
    let border_len = border.chars().count();
    let title_len = title.chars().count();
    if title_len + 2 > border_len {
        return border.to_string();
    }
    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(title_len + 1));
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
