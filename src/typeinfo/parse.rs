//! Parser for raw column type strings.

use std::sync::LazyLock;

use regex::Regex;

use super::{ColumnKind, TypeDescriptor};
use crate::error::{SchemaError, SchemaResult};

static BASE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*").expect("base name pattern"));

/// Parse a raw type string from server metadata into a [`TypeDescriptor`].
///
/// `collation` is the resolved collation the server reported for the column;
/// it is recorded only for charset-aware kinds (string, enum, set).
///
/// # Errors
///
/// Fails with [`SchemaError::Parse`] on malformed bracket syntax, an
/// unterminated enum/set literal list, or an unrecognized base type name.
/// No partial descriptor is ever returned.
pub fn parse_type(raw: &str, collation: &str) -> SchemaResult<TypeDescriptor> {
    let trimmed = raw.trim();
    let base_match = BASE_NAME
        .find(trimmed)
        .ok_or_else(|| SchemaError::parse(raw, "missing base type name"))?;
    let base = trimmed[base_match.range()].to_ascii_lowercase();
    let kind = classify(&base)
        .ok_or_else(|| SchemaError::parse(raw, format!("unrecognized base type `{base}`")))?;

    let rest = trimmed[base_match.end()..].trim_start();
    let (payload, tail) = split_bracketed(raw, rest)?;
    if tail.contains('(') || tail.contains(')') {
        return Err(SchemaError::parse(raw, "stray bracket after type arguments"));
    }

    let mut desc = TypeDescriptor {
        kind,
        ..TypeDescriptor::default()
    };

    match kind {
        ColumnKind::Enum | ColumnKind::Set => {
            let payload =
                payload.ok_or_else(|| SchemaError::parse(raw, "missing literal list"))?;
            let values = parse_literal_list(raw, payload)?;
            if kind == ColumnKind::Enum {
                desc.enum_values = values;
            } else {
                desc.set_values = values;
            }
        }
        _ => {
            if let Some(payload) = payload {
                let sizes = parse_sizes(raw, payload)?;
                apply_sizes(&mut desc, &base, &sizes);
            }
        }
    }

    // Modifier tokens may come in either order and any case; zerofill
    // implies unsigned even when the unsigned token is omitted.
    for token in tail.split_whitespace() {
        if token.eq_ignore_ascii_case("unsigned") || token.eq_ignore_ascii_case("zerofill") {
            desc.is_unsigned = true;
        }
    }

    if matches!(kind, ColumnKind::String | ColumnKind::Enum | ColumnKind::Set) {
        desc.collation = collation.to_string();
    }

    Ok(desc)
}

fn classify(base: &str) -> Option<ColumnKind> {
    let kind = match base {
        "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" | "year" | "bool"
        | "boolean" => ColumnKind::Integer,
        "float" | "double" | "real" => ColumnKind::Float,
        "decimal" | "numeric" | "dec" | "fixed" => ColumnKind::Decimal,
        "char" | "varchar" | "tinytext" | "text" | "mediumtext" | "longtext" => ColumnKind::String,
        "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" => {
            ColumnKind::Binary
        }
        "enum" => ColumnKind::Enum,
        "set" => ColumnKind::Set,
        "date" | "datetime" | "time" | "timestamp" | "bit" | "json" | "geometry" | "point"
        | "linestring" | "polygon" | "multipoint" | "multilinestring" | "multipolygon"
        | "geometrycollection" => ColumnKind::Other,
        _ => return None,
    };
    Some(kind)
}

/// Split a leading bracketed argument off `rest`, honoring quoted sections
/// so a `)` inside an enum literal does not terminate the argument.
fn split_bracketed<'a>(raw: &str, rest: &'a str) -> SchemaResult<(Option<&'a str>, &'a str)> {
    if !rest.starts_with('(') {
        return Ok((None, rest));
    }
    let bytes = rest.as_bytes();
    let mut in_quote = false;
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\'' => in_quote = !in_quote,
            b')' if !in_quote => return Ok((Some(&rest[1..i]), &rest[i + 1..])),
            _ => {}
        }
        i += 1;
    }
    Err(SchemaError::parse(raw, "unterminated bracket"))
}

/// Parse a quoted, comma-separated literal list (`'a','b','c'`), unescaping
/// doubled quote characters.
fn parse_literal_list(raw: &str, payload: &str) -> SchemaResult<Vec<String>> {
    let mut values = Vec::new();
    let mut chars = payload.chars().peekable();
    loop {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            Some('\'') => {}
            Some(_) => return Err(SchemaError::parse(raw, "expected quoted literal")),
            None => return Err(SchemaError::parse(raw, "empty literal list")),
        }
        let mut value = String::new();
        loop {
            match chars.next() {
                Some('\'') => {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        value.push('\'');
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
                None => return Err(SchemaError::parse(raw, "unterminated literal")),
            }
        }
        values.push(value);
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            Some(',') => continue,
            None => break,
            Some(_) => return Err(SchemaError::parse(raw, "expected comma between literals")),
        }
    }
    Ok(values)
}

fn parse_sizes(raw: &str, payload: &str) -> SchemaResult<Vec<u32>> {
    payload
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u32>()
                .map_err(|_| SchemaError::parse(raw, format!("non-numeric size `{part}`")))
        })
        .collect()
}

fn apply_sizes(desc: &mut TypeDescriptor, base: &str, sizes: &[u32]) {
    let Some(&first) = sizes.first() else {
        return;
    };
    match desc.kind {
        ColumnKind::String | ColumnKind::Binary => {
            desc.max_size = first;
            // Only the exact-width types are fixed; varchar/varbinary and
            // the text/blob families stay variable.
            if base == "char" || base == "binary" {
                desc.fixed_size = first;
            }
        }
        // Numeric display widths and decimal precision are not capacities.
        _ => {}
    }
}
