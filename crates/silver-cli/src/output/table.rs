/// Render a simple aligned table: header, divider, rows.
#[must_use]
pub fn render(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers, &widths));
    lines.push("-".repeat(
        widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1),
    ));
    for row in rows {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
