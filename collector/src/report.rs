//! Terminal table output.

use common::Summary;

const HEADER: [&str; 4] = [
    "Programming language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Renders the summaries as a bordered table, best paid language first.
///
/// Returns `None` when there is nothing to show.
pub fn render_table(title: &str, summaries: &[(String, Summary)]) -> Option<String> {
    if summaries.is_empty() {
        return None;
    }

    let mut sorted: Vec<&(String, Summary)> = summaries.iter().collect();
    // stable: equal averages keep their input order
    sorted.sort_by(|a, b| b.1.average_salary.cmp(&a.1.average_salary));

    let header = HEADER.map(str::to_string);
    let body: Vec<[String; 4]> = sorted
        .into_iter()
        .map(|(language, summary)| {
            [
                language.clone(),
                summary.vacancies_found.to_string(),
                summary.vacancies_processed.to_string(),
                summary.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for row in std::iter::once(&header).chain(body.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(with_title(&border, title));
    lines.push(row_line(&header, &widths));
    lines.push(border.clone());
    lines.extend(body.iter().map(|row| row_line(row, &widths)));
    lines.push(border);

    Some(lines.join("\n"))
}

/// "SuperJob Moscow", or just the provider when it searched everywhere.
pub fn table_title(provider: &str, location: Option<&str>) -> String {
    match location {
        Some(location) => format!("{provider} {location}"),
        None => provider.to_string(),
    }
}

/// Prints the table for `title` to stdout, or nothing for an empty result.
pub fn print_table(title: &str, summaries: &[(String, Summary)]) {
    if let Some(table) = render_table(title, summaries) {
        println!("\n{table}");
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Embeds the title right after the first corner, if it fits.
fn with_title(border: &str, title: &str) -> String {
    let border_len = border.chars().count();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border_len {
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
        let padding = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(padding + 1));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(found: u64, processed: u64, average: u64) -> Summary {
        Summary {
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary: average,
        }
    }

    fn languages(table: &str) -> Vec<String> {
        table
            .lines()
            .skip(3)
            .filter(|line| line.starts_with('|'))
            .map(|line| line.split('|').nth(1).unwrap_or_default().trim().to_string())
            .collect()
    }

    #[test]
    fn test_table_title_with_and_without_location() {
        assert_eq!(table_title("HeadHunter", None), "HeadHunter");
        assert_eq!(table_title("SuperJob", Some("Moscow")), "SuperJob Moscow");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_table("HeadHunter", &[]), None);
    }

    #[test]
    fn test_rows_sorted_by_average_descending() {
        let rows = vec![
            ("Python".to_string(), summary(10, 5, 150_000)),
            ("Go".to_string(), summary(4, 2, 210_000)),
            ("PHP".to_string(), summary(0, 0, 0)),
            ("Java".to_string(), summary(8, 8, 180_000)),
        ];

        let table = render_table("HeadHunter", &rows).unwrap();
        assert_eq!(languages(&table), vec!["Go", "Java", "Python", "PHP"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let rows = vec![
            ("C".to_string(), summary(0, 0, 0)),
            ("Swift".to_string(), summary(1, 1, 90_000)),
            ("Kotlin".to_string(), summary(0, 0, 0)),
        ];

        let table = render_table("SuperJob", &rows).unwrap();
        assert_eq!(languages(&table), vec!["Swift", "C", "Kotlin"]);
    }

    #[test]
    fn test_layout() {
        let rows = vec![("Go".to_string(), summary(12, 3, 200_000))];

        let table = render_table("SuperJob Moscow", &rows).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("+SuperJob Moscow---"));
        assert_eq!(
            lines[1],
            "| Programming language | Vacancies found | Vacancies processed | Average salary |"
        );
        assert_eq!(
            lines[3],
            "| Go                   | 12              | 3                   | 200000         |"
        );
        assert_eq!(lines[2], lines[4]);
        // every line has the same visible width
        assert!(lines.iter().all(|line| line.chars().count() == lines[2].chars().count()));
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let rows = vec![("Язык программирования Си".to_string(), summary(1, 1, 1))];

        let table = render_table("Хедхантер", &rows).unwrap();
        let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
