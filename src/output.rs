//! Text and JSON rendering of registry data.
//!
//! Every renderer returns the full document as a `String`; printing is left
//! to the caller.

use crate::config::{OutputConfig, OutputFormat};
use anyhow::Result;
use pagecfg::{ConventionWarning, PageDescriptor, PageRegistry, Section};
use serde::{Serialize, Serializer};

/// Placeholder for absent optional fields in text output
const ABSENT: &str = "-";

/// Render a single descriptor.
pub fn descriptor(key: &str, desc: &PageDescriptor, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => to_json(desc, config.pretty),
        OutputFormat::Text => {
            let rows = [
                ("key", key.to_owned()),
                ("type", desc.page_type.to_string()),
                ("title", desc.title.unwrap_or(ABSENT).to_owned()),
                ("section", section_cell(desc.section)),
            ];
            Ok(rows
                .iter()
                .map(|(name, value)| format!("{name:<8} {value}"))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Render every page of `registry`.
///
/// JSON output is an object keyed by page identifier, in table order.
pub fn page_list(registry: &PageRegistry, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => to_json(&RegistryMap(registry), config.pretty),
        OutputFormat::Text => {
            let rows: Vec<[String; 4]> = registry
                .iter()
                .map(|(key, desc)| {
                    [
                        key.to_owned(),
                        desc.page_type.to_string(),
                        desc.title.unwrap_or(ABSENT).to_owned(),
                        section_cell(desc.section),
                    ]
                })
                .collect();
            Ok(table(["KEY", "TYPE", "TITLE", "SECTION"], &rows))
        }
    }
}

/// Render the section table.
pub fn sections(config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => {
            let infos: Vec<_> = Section::ALL.into_iter().map(SectionInfo::from).collect();
            to_json(&infos, config.pretty)
        }
        OutputFormat::Text => {
            let rows: Vec<[String; 4]> = Section::ALL
                .into_iter()
                .map(|section| {
                    [
                        section.key().to_owned(),
                        section.label().to_owned(),
                        format!("/{}", section.slug()),
                        section.description().to_owned(),
                    ]
                })
                .collect();
            Ok(table(["KEY", "LABEL", "PATH", "DESCRIPTION"], &rows))
        }
    }
}

/// Render convention warnings, one per line in text mode.
pub fn warnings(warnings: &[ConventionWarning], config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Json => {
            let items: Vec<_> = warnings
                .iter()
                .map(|warning| WarningInfo {
                    key: warning.key,
                    message: warning.to_string(),
                })
                .collect();
            to_json(&items, config.pretty)
        }
        OutputFormat::Text => Ok(warnings
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn section_cell(section: Option<Section>) -> String {
    section.map_or_else(|| ABSENT.to_owned(), |s| s.key().to_owned())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Left-aligned columns separated by two spaces, trailing whitespace trimmed.
fn table<const N: usize>(header: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = header.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; N]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_owned()
    };

    std::iter::once(format_row(header))
        .chain(rows.iter().map(|row| format_row(row.each_ref().map(String::as_str))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serializes a registry as a `{ key: descriptor }` map in table order.
struct RegistryMap<'a>(&'a PageRegistry);

impl Serialize for RegistryMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

#[derive(Serialize)]
struct SectionInfo {
    key: &'static str,
    label: &'static str,
    slug: &'static str,
    description: &'static str,
}

impl From<Section> for SectionInfo {
    fn from(section: Section) -> Self {
        Self {
            key: section.key(),
            label: section.label(),
            slug: section.slug(),
            description: section.description(),
        }
    }
}

#[derive(Serialize)]
struct WarningInfo {
    key: &'static str,
    message: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pagecfg::{PAGES, PageType, WarningKind};

    fn text() -> OutputConfig {
        OutputConfig::default()
    }

    fn json() -> OutputConfig {
        OutputConfig {
            format: OutputFormat::Json,
            pretty: false,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_descriptor_text() {
        let desc = PAGES.get("category").unwrap();
        let out = descriptor("category", desc, &text()).unwrap();
        assert_eq!(
            out,
            "key      category\ntype     category\ntitle    Notes\nsection  NOTES"
        );
    }

    #[test]
    fn test_descriptor_text_absent_fields() {
        let desc = PAGES.get("home").unwrap();
        let out = descriptor("home", desc, &text()).unwrap();
        assert!(out.contains("title    -"));
        assert!(out.contains("section  -"));
    }

    #[test]
    fn test_descriptor_json() {
        let desc = PAGES.get("abcd").unwrap();
        let out = descriptor("abcd", desc, &json()).unwrap();
        assert_eq!(out, r#"{"type":"static","title":"ABCD"}"#);
    }

    #[test]
    fn test_page_list_json_keeps_table_order() {
        let out = page_list(&PAGES, &json()).unwrap();
        assert_eq!(
            out,
            r#"{"home":{"type":"home"},"category":{"type":"category","title":"Notes","section":"NOTES"},"abcd":{"type":"static","title":"ABCD"}}"#
        );
    }

    #[test]
    fn test_page_list_text() {
        let out = page_list(&PAGES, &text()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "KEY       TYPE      TITLE  SECTION");
        assert_eq!(lines[1], "home      home      -      -");
        assert_eq!(lines[2], "category  category  Notes  NOTES");
        assert_eq!(lines[3], "abcd      static    ABCD   -");
    }

    #[test]
    fn test_sections_json() {
        let out = sections(&json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[1]["key"], "NOTES");
        assert_eq!(value[1]["slug"], "notes");
    }

    #[test]
    fn test_sections_text() {
        let out = sections(&text()).unwrap();
        assert!(out.lines().any(|line| line.starts_with("DIARY") && line.contains("/diary")));
    }

    #[test]
    fn test_warnings() {
        let list = [ConventionWarning {
            key: "about",
            kind: WarningKind::MissingTitle(PageType::Static),
        }];
        assert_eq!(
            warnings(&list, &text()).unwrap(),
            "`about`: static page has no title"
        );

        let value: serde_json::Value =
            serde_json::from_str(&warnings(&list, &json()).unwrap()).unwrap();
        assert_eq!(value[0]["key"], "about");
        assert!(warnings(&[], &text()).unwrap().is_empty());
    }
}
