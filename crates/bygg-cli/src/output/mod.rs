use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_generic_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print `value` as JSON, or the given rows when the format is `table`.
///
/// Commands use this when the JSON shape is nested but the table should be
/// flat and human-oriented.
pub fn output_rows<T: Serialize>(
    value: &T,
    headers: &[&str],
    rows: &[Vec<String>],
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Table {
        println!("{}", render_rows(headers, rows));
        return Ok(());
    }
    output(value, format)
}

/// Aligned table using the session's UI preferences.
pub fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    table::render_table(headers, rows, table_options())
}

/// Hours with at most two decimals and no trailing zeros.
pub fn hours(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format an average with one decimal, as on the dashboard card.
pub fn average_hours(value: f64) -> String {
    format!("{value:.1}")
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_generic_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(render_rows(&["key", "value"], &rows))
        }
        scalar => Ok(render_rows(&["value"], &[vec![value_to_cell(&scalar)]])),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_rows(&["value"], &rows);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_rows(&header_refs, &rows)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.as_f64().map_or_else(|| v.to_string(), hours),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde::Serialize;

    use super::{average_hours, hours, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        hours: f64,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", hours: 7.5 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["hours"], 7.5);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Example { id: "x", hours: 1.0 }, Example { id: "y", hours: 2.0 }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[1]["id"], "y");
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example { id: "x", hours: 7.5 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("7.5"));
    }

    #[test]
    fn table_render_for_array_has_one_column_per_field() {
        let value = vec![Example { id: "x", hours: 8.0 }];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().unwrap();
        assert!(header.contains("id") && header.contains("hours"));
        let row = out.lines().nth(2).unwrap();
        assert!(row.contains('x') && row.contains('8') && !row.contains("8.0"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let value: Vec<Example> = Vec::new();
        assert_eq!(render(&value, OutputFormat::Table).unwrap(), "(no rows)");
    }

    #[rstest]
    #[case(8.0, "8")]
    #[case(7.5, "7.5")]
    #[case(14.0 / 3.0, "4.67")]
    #[case(0.25, "0.25")]
    #[case(0.0, "0")]
    fn hours_are_compact(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(hours(value), expected);
    }

    #[rstest]
    #[case(14.0 / 3.0, "4.7")]
    #[case(8.0, "8.0")]
    #[case(0.0, "0.0")]
    fn averages_keep_one_decimal(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(average_hours(value), expected);
    }
}
