//! Grouped command listing

use crate::ui::Table;

/// Group used for names without a `:` separator
pub const MISC_GROUP: &str = "misc";

/// Column headers of the command listing
pub const LISTING_COLUMNS: [&str; 3] = ["Group", "Command", "Description"];

/// One line of the command listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRow {
    /// Upper-cased group
    pub group: String,
    pub name: String,
    pub description: String,
}

/// Group of a command name: the part before the first `:`, or `misc`
pub fn group_of(name: &str) -> &str {
    match name.split_once(':') {
        Some((group, _)) => group,
        None => MISC_GROUP,
    }
}

/// Build sorted listing rows: by upper-cased group, then by full name
pub fn build_rows<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<CommandRow> {
    let mut rows: Vec<CommandRow> = entries
        .into_iter()
        .map(|(name, description)| CommandRow {
            group: group_of(name).to_uppercase(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect();

    rows.sort_by(|a, b| a.group.cmp(&b.group).then_with(|| a.name.cmp(&b.name)));
    rows
}

/// Listing table for the given rows
pub fn listing_table(rows: &[CommandRow]) -> Table {
    let mut table = Table::new(LISTING_COLUMNS);
    for row in rows {
        table.push_row([row.group.as_str(), row.name.as_str(), row.description.as_str()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_of() {
        assert_eq!(group_of("fs:tree"), "fs");
        assert_eq!(group_of("db:migrate:run"), "db");
        assert_eq!(group_of("hello"), "misc");
        assert_eq!(group_of(":odd"), "");
    }

    #[test]
    fn test_build_rows_order() {
        let rows = build_rows([
            ("hello", "Greet"),
            ("fs:tree", "Tree"),
            ("cache:clear", "Clear"),
            ("fs:copy", "Copy"),
            ("about", "About"),
        ]);

        let order: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.group.as_str(), r.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("CACHE", "cache:clear"),
                ("FS", "fs:copy"),
                ("FS", "fs:tree"),
                ("MISC", "about"),
                ("MISC", "hello"),
            ]
        );
    }

    #[test]
    fn test_build_rows_groups_case_insensitively() {
        let rows = build_rows([("Fs:b", ""), ("fs:a", "")]);
        assert_eq!(rows[0].group, "FS");
        assert_eq!(rows[1].group, "FS");
        assert_eq!(rows[0].name, "Fs:b");
        assert_eq!(rows[1].name, "fs:a");
    }

    #[test]
    fn test_listing_table() {
        let rows = build_rows([("fs:tree", "Tree")]);
        let table = listing_table(&rows);
        assert_eq!(table.columns, vec!["Group", "Command", "Description"]);
        assert_eq!(table.rows, vec![vec!["FS", "fs:tree", "Tree"]]);
    }
}
