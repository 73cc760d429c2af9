//! Identifier heuristics: raw catalog strings to Java class and field names.
//!
//! All lookup tables are immutable constants owned by this module. The
//! conversion pipeline is pure; calling any function twice with the same
//! input yields the same output.

use heck::ToUpperCamelCase;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::CodeGenerationError;

const MAX_WORDS_IN_CLASS_NAME: usize = 4;

/// Filler words removed from descriptions before identifier conversion.
/// Removal is applied in slice order; the longer "table ..." phrases must
/// run before the bare "table " prefix.
const UNDESIRED_WORDS: &[&str] = &[
    "table of ",
    "table from ",
    "table ",
    " of ",
    " and ",
    " the ",
    " to ",
    " for ",
    " by ",
    " with ",
    " that ",
    " between ",
    " in ",
    " on ",
    " domain ",
];

/// Table codes whose class name is mandated outright, bypassing the
/// heuristics. Matched case-insensitively on the raw table name.
const TABLE_NAME_OVERRIDES: &[(&str, &str)] = &[("T999NULL", "CompositeKeyTable")];

/// Domain abbreviation expansions for `_`-delimited column code segments.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("CD", "code"),
    ("DFK", "doubleForeignKey"),
    ("NM", "name"),
    ("VIE", "view"),
];

/// Whole-result overrides for known ambiguous abbreviation collisions.
const FIELD_NAME_REPLACEMENTS: &[(&str, &str)] = &[("codeSpk", "secondPrimaryKey")];

fn has_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Resolve the Java class base name for a table: override table first, then
/// the description, then the table code itself.
pub fn resolve_class_name(table_description: Option<&str>, table_name: &str) -> String {
    if let Some(overridden) = override_for_table(table_name) {
        return overridden.to_string();
    }

    if let Some(description) = table_description {
        if has_text(description) {
            let from_description = to_camel_case(description);

            if has_text(&from_description) {
                return from_description.to_upper_camel_case();
            }
        }
    }

    class_name_from_table_code(table_name)
}

/// Resolve a Java field name for a column. The description wins only when it
/// is "sufficient": its filler-stripped word count equals the number of
/// `_`-delimited segments of the raw code.
pub fn resolve_field_name(column_description: Option<&str>, column_code: &str) -> String {
    match column_description {
        Some(description)
            if has_text(description) && is_description_sufficient(description, column_code) =>
        {
            to_camel_case(description)
        }
        _ => field_name_from_column_code(column_code),
    }
}

fn override_for_table(table_name: &str) -> Option<&'static str> {
    if !has_text(table_name) {
        return None;
    }

    TABLE_NAME_OVERRIDES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(table_name))
        .map(|(_, class_name)| *class_name)
}

/// Table name portion of a `DATABASE.TABLE` qualified name, upper-cased.
pub fn extract_table_name(qualified_table_name: &str) -> Result<String, CodeGenerationError> {
    if !has_text(qualified_table_name) {
        return Err(CodeGenerationError::InvalidRequest(
            "Table name must be provided.".to_string(),
        ));
    }

    let normalized = qualified_table_name.trim().to_uppercase();

    match normalized.split_once('.') {
        Some((_, table)) => Ok(table.to_string()),
        None => Ok(normalized),
    }
}

/// Database portion of a `DATABASE.TABLE` qualified name, upper-cased.
pub fn extract_database_name(qualified_table_name: &str) -> Option<String> {
    if !has_text(qualified_table_name) {
        return None;
    }

    let normalized = qualified_table_name.trim().to_uppercase();

    normalized
        .split_once('.')
        .map(|(database, _)| database.to_string())
}

/// Split a comma-separated list, trimming entries, dropping empties and
/// duplicates while preserving encounter order.
pub fn split_comma_separated(input: &str) -> Result<Vec<String>, CodeGenerationError> {
    fn invalid() -> CodeGenerationError {
        CodeGenerationError::InvalidRequest(
            "The provided comma-separated value list is invalid.".to_string(),
        )
    }

    if !has_text(input) {
        return Err(invalid());
    }

    let mut values: Vec<String> = Vec::new();
    for value in input.split(',') {
        let value = value.trim();
        if !value.is_empty() && !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }
    }

    if values.is_empty() {
        return Err(invalid());
    }

    Ok(values)
}

fn change_first_letter_case(text: &str, uppercase: bool) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let first: String = if uppercase {
                first.to_uppercase().collect()
            } else {
                first.to_lowercase().collect()
            };
            first + chars.as_str()
        }
    }
}

pub fn capitalize_first(text: &str) -> String {
    change_first_letter_case(text, true)
}

pub fn decapitalize_first(text: &str) -> String {
    change_first_letter_case(text, false)
}

pub fn pk_class_name(class_name: &str) -> String {
    format!("{class_name}PK")
}

pub fn dto_class_name(class_name: &str) -> String {
    format!("{class_name}Dto")
}

pub fn service_class_name(class_name: &str) -> String {
    format!("{class_name}Service")
}

pub fn repository_class_name(class_name: &str) -> String {
    format!("{class_name}Repository")
}

/// Descriptive-to-identifier conversion shared by class and field naming.
fn to_camel_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = strip_diacritics(text);
    let text = text.replace('_', " ").replace('.', " ").replace('/', " ");
    let text = handle_bracketed_text(&text);
    let text = handle_hyphenated_text(&text);
    let text = remove_invalid_characters(&text);
    let text = remove_undesired_words(&text);
    let text = truncate_by_word_limit(&text);

    let mut camel = String::new();
    let mut upper_next = false;

    for c in text.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.extend(c.to_lowercase());
        }
    }

    decapitalize_first(&camel)
}

/// Code-derived class name: everything through the last digit is kept
/// verbatim, the remaining suffix is lower-cased and capitalized.
fn class_name_from_table_code(table_name: &str) -> String {
    if !has_text(table_name) {
        return table_name.to_string();
    }

    let mut suffix_start: Option<usize> = None;
    for (idx, c) in table_name.char_indices() {
        if c.is_ascii_digit() {
            suffix_start = Some(idx + c.len_utf8());
        }
    }

    match suffix_start {
        None => capitalize_first(&table_name.to_lowercase()),
        Some(end) if end == table_name.len() => capitalize_first(&table_name.to_lowercase()),
        Some(end) => {
            let (prefix, suffix) = table_name.split_at(end);
            format!("{}{}", prefix, capitalize_first(&suffix.to_lowercase()))
        }
    }
}

/// Code-derived field name: lower-case, split on `_`, expand abbreviations,
/// camelCase-join, then apply whole-result replacements.
fn field_name_from_column_code(column_name: &str) -> String {
    if !has_text(column_name) {
        return column_name.to_string();
    }

    let lowered = column_name.trim().to_lowercase();
    let mut field_name = String::new();

    for (i, part) in lowered.trim_end_matches('_').split('_').enumerate() {
        let resolved = ABBREVIATIONS
            .iter()
            .find(|(abbreviation, _)| abbreviation.eq_ignore_ascii_case(part))
            .map(|(_, expansion)| *expansion)
            .unwrap_or(part);

        if i == 0 {
            field_name.push_str(&decapitalize_first(resolved));
        } else {
            field_name.push_str(&capitalize_first(resolved));
        }
    }

    FIELD_NAME_REPLACEMENTS
        .iter()
        .find(|(from, _)| *from == field_name)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(field_name)
}

fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

fn handle_bracketed_text(text: &str) -> String {
    if !has_text(text) {
        return text.to_string();
    }

    let text = handle_delimiter(text, '(', ')');
    let text = handle_delimiter(&text, '[', ']');
    handle_delimiter(&text, '{', '}')
}

/// If the text starts with the opener and contains the closer, everything up
/// to and including the closer is discarded; otherwise everything from the
/// opener onward is.
fn handle_delimiter(text: &str, open: char, close: char) -> String {
    let Some(open_idx) = text.find(open) else {
        return text.to_string();
    };

    if text.starts_with(open) {
        if let Some(close_idx) = text.find(close) {
            return text[close_idx + close.len_utf8()..].to_string();
        }
    }

    text[..open_idx].to_string()
}

/// Split once on `-` and keep the half with more words, ties broken by
/// character length.
fn handle_hyphenated_text(text: &str) -> String {
    if !has_text(text) || !text.contains('-') {
        return text.to_string();
    }

    let Some((first, second)) = text.split_once('-') else {
        return text.to_string();
    };

    let first = first.trim();
    let second = second.trim();

    let first_words = first.split(' ').count();
    let second_words = second.split(' ').count();

    if first_words == second_words {
        return if first.len() > second.len() {
            first
        } else {
            second
        }
        .to_string();
    }

    if first_words > second_words {
        first.to_string()
    } else {
        second.to_string()
    }
}

fn remove_invalid_characters(text: &str) -> String {
    let sanitized: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();

    sanitized
        .trim_start_matches(|c: char| c.is_ascii_digit())
        .trim()
        .to_string()
}

fn remove_undesired_words(text: &str) -> String {
    if !has_text(text) {
        return text.to_string();
    }

    let mut normalized = text.to_lowercase();

    for word in UNDESIRED_WORDS {
        normalized = normalized.replace(word, " ").trim().to_string();
    }

    normalized
}

/// More than four words: keep the first two and the last two.
fn truncate_by_word_limit(text: &str) -> String {
    let words: Vec<&str> = text.trim().split_whitespace().collect();

    if words.len() <= MAX_WORDS_IN_CLASS_NAME {
        return text.to_string();
    }

    format!(
        "{} {} {} {}",
        words[0],
        words[1],
        words[words.len() - 2],
        words[words.len() - 1]
    )
}

/// The description maps 1:1 to the code when its filler-stripped word count
/// equals the code's `_`-segment count. Single-space split on purpose:
/// doubled spaces left by filler removal count as extra words.
fn is_description_sufficient(description: &str, column_code: &str) -> bool {
    let column_parts = column_code.trim().trim_end_matches('_').split('_').count();
    let stripped = remove_undesired_words(description);
    let description_parts = stripped.trim().split(' ').count();

    column_parts == description_parts
}
