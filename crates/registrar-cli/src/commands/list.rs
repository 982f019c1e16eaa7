//! `registrar list`: show the seeded roster.

use crate::{
    cli::{GlobalArgs, ListArgs, ListFormat, ListTarget},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let session = super::open_session(&global, &config, &output)?;

    let table = match args.target {
        ListTarget::Students => Table::new(
            "Students:",
            &["id", "name", "email", "current_credits", "max_credits"],
            session
                .students()?
                .iter()
                .map(|s| {
                    vec![
                        s.id().to_owned(),
                        s.name().to_owned(),
                        s.email().to_owned(),
                        s.current_credits().to_string(),
                        s.max_credits().to_string(),
                    ]
                })
                .collect(),
        ),
        ListTarget::Courses => Table::new(
            "Courses:",
            &["id", "name", "credits"],
            session
                .courses()?
                .iter()
                .map(|c| vec![c.id().to_owned(), c.name().to_owned(), c.credits().to_string()])
                .collect(),
        ),
    };

    match args.format {
        ListFormat::Table => {
            output.header(table.title)?;
            for line in table.render_table() {
                output.data(&line)?;
            }
        }
        // JSON and CSV go through `data` so they stay parseable under --quiet.
        ListFormat::Json => {
            let json = match args.target {
                ListTarget::Students => serde_json::to_string_pretty(&session.students()?),
                ListTarget::Courses => serde_json::to_string_pretty(&session.courses()?),
            }
            .map_err(std::io::Error::from)?;
            output.data(&json)?;
        }
        ListFormat::Csv => {
            for line in table.render_csv() {
                output.data(&line)?;
            }
        }
    }

    Ok(())
}

/// Rows of text cells under named columns.
#[derive(Debug)]
struct Table {
    title: &'static str,
    columns: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(title: &'static str, columns: &[&'static str], rows: Vec<Vec<String>>) -> Self {
        Self {
            title,
            columns: columns.to_vec(),
            rows,
        }
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(col.len()))
                    .max()
                    .unwrap_or_default()
            })
            .collect()
    }

    fn render_table(&self) -> Vec<String> {
        let widths = self.widths();
        let render = |cells: &[String]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_owned()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        let header: Vec<String> = self.columns.iter().map(|c| c.to_uppercase()).collect();
        lines.push(render(header.as_slice()));
        for row in &self.rows {
            lines.push(render(row.as_slice()));
        }
        lines
    }

    fn render_csv(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join(","));
        for row in &self.rows {
            lines.push(row.iter().map(|c| csv_field(c)).collect::<Vec<_>>().join(","));
        }
        lines
    }
}

/// Quote a CSV field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courses() -> Table {
        Table::new(
            "Courses:",
            &["id", "name", "credits"],
            vec![
                vec!["C001".into(), "Math 101".into(), "3".into()],
                vec!["C002".into(), "Physics 101".into(), "4".into()],
            ],
        )
    }

    #[test]
    fn table_columns_are_aligned() {
        let lines = courses().render_table();
        assert_eq!(lines[0], "ID    NAME         CREDITS");
        assert_eq!(lines[1], "C001  Math 101     3");
        assert_eq!(lines[2], "C002  Physics 101  4");
    }

    #[test]
    fn csv_has_header_and_rows() {
        let lines = courses().render_csv();
        assert_eq!(lines, ["id,name,credits", "C001,Math 101,3", "C002,Physics 101,4"]);
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("Doe, John"), "\"Doe, John\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
