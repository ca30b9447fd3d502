#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_COLUMN)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize(&truncated, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_start_matches('$').trim_end_matches('%');
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, numeric: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if numeric {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Metric kinds and completion flags get a color; everything else is plain.
fn colorize(value: &str, padded: String) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "true" | "complete" | "completed" | "success" | "good" => Some("32"),
        "warning" | "neutral" | "calculator" => Some("33"),
        "false" | "danger" | "bad" | "missing" | "invalid" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_mixed_widths() {
        let headers = ["id", "type", "title"];
        let rows = vec![
            vec![
                "credit-score-info".to_string(),
                "info".to_string(),
                "Credit scores".to_string(),
            ],
            vec![
                "windfall-scenario".to_string(),
                "scenario".to_string(),
                "A surprise bonus".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let title_at = lines[0].find("title").expect("title header");
        assert_eq!(lines[2].find("Credit"), Some(title_at));
        assert_eq!(lines[3].find("A surprise"), Some(title_at));
    }

    #[test]
    fn numbers_are_right_aligned() {
        let rows = vec![vec!["$500".to_string()], vec!["$12,000".to_string()]];
        let table = render_entity_table(&["amount"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "   $500");
        assert_eq!(lines[3], "$12,000");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["budget-503020-lab".to_string(), "a".repeat(60)]];
        let table = render_entity_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(50),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 50));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_known_states_only() {
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let rows = vec![vec!["danger".to_string(), "plain".to_string()]];
        let table = render_entity_table(&["kind", "note"], &rows, options);
        assert!(table.contains("\u{1b}[31mdanger"));
        assert!(table.contains("\u{1b}[0m  plain"));
    }
}
