/// Reserved separator used when one source column participates in more than
/// one foreign-key constraint: the three free-text sides are concatenated
/// with it, in encounter order, keeping the sides aligned by position.
pub const MULTI_FK_SEPARATOR: char = '#';

/// One foreign key of a table, possibly the merge of several constraints
/// sharing the same source column.
#[derive(Clone, Debug)]
pub struct ForeignKeyMeta {
    pub source_column_name: String,
    pub foreign_key_name: String,
    pub referenced_table_name: String,
    pub referenced_column_name: String,
}

impl ForeignKeyMeta {
    /// Fold another constraint on the same source column into this record.
    pub fn merge(&mut self, other: &ForeignKeyMeta) {
        self.foreign_key_name = concat_sep(&self.foreign_key_name, &other.foreign_key_name);
        self.referenced_table_name =
            concat_sep(&self.referenced_table_name, &other.referenced_table_name);
        self.referenced_column_name =
            concat_sep(&self.referenced_column_name, &other.referenced_column_name);
    }

    /// Upper-cased `FK_NAME -> TABLE.COLUMN` rendering, merged entries
    /// joined with ` | `.
    pub fn comment(&self) -> String {
        let names = split_or_one(&self.foreign_key_name);
        let tables = split_or_one(&self.referenced_table_name);
        let columns = split_or_one(&self.referenced_column_name);

        let mut comment = String::new();

        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                comment.push_str(" | ");
            }
            comment.push_str(name);

            if let Some(table) = tables.get(i).filter(|t| !t.trim().is_empty()) {
                comment.push_str(" -> ");
                comment.push_str(table);

                if let Some(column) = columns.get(i).filter(|c| !c.trim().is_empty()) {
                    comment.push('.');
                    comment.push_str(column);
                }
            }
        }

        comment.to_uppercase()
    }
}

fn split_or_one(value: &str) -> Vec<&str> {
    if value.trim().is_empty() {
        vec![""]
    } else {
        value.split(MULTI_FK_SEPARATOR).collect()
    }
}

fn concat_sep(a: &str, b: &str) -> String {
    if a.trim().is_empty() {
        return b.to_string();
    }
    if b.trim().is_empty() {
        return a.to_string();
    }

    format!("{a}{MULTI_FK_SEPARATOR}{b}")
}
