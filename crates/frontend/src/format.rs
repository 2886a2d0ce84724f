/// Renders named columns and rows as a bordered fixed-width text table,
/// terminated by a trailing blank line.
///
/// Each column is as wide as its longest content (header included, one
/// character minimum) with a single padding space on either side; values
/// are left-justified. Column and row order are emitted exactly as given.
pub fn format_table(column_names: &[String], rows: &[Vec<String>]) -> String {
    let widths = column_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain([name.chars().count(), 1])
                .max()
                .unwrap()
        })
        .collect::<Vec<_>>();

    let mut border = String::from("+");
    for width in &widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }
    border.push('\n');

    let format_row = |cells: &[String]| {
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str("| ");
            line.push_str(cell);
            line.push_str(&" ".repeat(width - cell.chars().count() + 1));
        }
        line.push_str("|\n");
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format_row(column_names));
    out.push_str(&border);
    for row in rows {
        out.push_str(&format_row(row));
    }
    out.push_str(&border);
    out.push('\n');
    out
}
