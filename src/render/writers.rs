//! Flat-file writers
//!
//! Optional shop outputs: CSV, tab-delimited text, a JSON array of row
//! objects, and a styled standalone HTML document. Each writer is
//! independent; any subset may run per invocation.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::model::ShopTable;

const HTML_STYLE: &str = r#"<style>
table {
	border-collapse: collapse;
}
th, td {
	padding: 0.5em;
}
tr:nth-child(even) {
	background-color: Lightgray;
}
.Name {
	text-align: left;
}
.Price {
	text-align: right;
}
.Weight {
	text-align: right;
}
.AC {
	text-align: center;
}
.Damage {
	text-align: center;
}
.Properties {
	text-align: left;
}
.Category {
	text-align: center;
}
.Source {
	text-align: center;
}
</style>"#;

/// Write the shop as CSV, appending a `.csv` extension when missing.
pub fn write_csv(shop: &ShopTable, path: &Path) -> Result<()> {
    write_delimited(shop, &ensure_extension(path, "csv"), b',')
}

/// Write the shop as tab-delimited text, appending a `.txt` extension when
/// missing.
pub fn write_txt(shop: &ShopTable, path: &Path) -> Result<()> {
    write_delimited(shop, &ensure_extension(path, "txt"), b'\t')
}

fn write_delimited(shop: &ShopTable, path: &Path, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(shop.titles())?;
    for row in &shop.rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write the shop as a JSON array of row objects (column title -> cell),
/// tab indented, columns in display order.
pub fn write_json(shop: &ShopTable, path: &Path) -> Result<()> {
    let titles = shop.titles();
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = shop
        .rows
        .iter()
        .map(|row| {
            titles
                .iter()
                .zip(row)
                .map(|(title, cell)| {
                    (title.to_string(), serde_json::Value::String(cell.clone()))
                })
                .collect()
        })
        .collect();

    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    rows.serialize(&mut ser).context("failed to serialize shop")?;
    fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Write the shop as a standalone HTML table document with per-column
/// alignment styling.
pub fn write_html(shop: &ShopTable, path: &Path) -> Result<()> {
    let mut html = String::from("<html>\n<head>");
    html.push_str(HTML_STYLE);
    html.push_str("</head>\n<body><table class=\"shoptable\">\n");

    html.push_str("\t<tr class=\"header\">");
    for title in shop.titles() {
        html.push_str(&format!(
            "<th class=\"{}\">{}</th>",
            css_class(title),
            escape_html(title)
        ));
    }
    html.push_str("</tr>\n");

    for row in &shop.rows {
        html.push_str("\t<tr>");
        for (title, cell) in shop.titles().iter().zip(row) {
            html.push_str(&format!(
                "<td class=\"{}\">{}</td>",
                css_class(title),
                escape_html(cell)
            ));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table></body></html>\n");
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

fn css_class(title: &str) -> String {
    title.replace(' ', "")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Append `.ext` unless the path already ends with it (case-insensitive).
fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));
    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(format!(".{ext}"));
        PathBuf::from(name)
    }
}
