//! Front-matter parsing
//!
//! Only a restricted, line-oriented subset of YAML is understood: one
//! `key: value` pair per line, where a value is a string, a boolean or an
//! inline `[a, b]` list.

use indexmap::IndexMap;
use serde::Serialize;

/// Delimiter line that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontMatterValue {
    String(String),
    Bool(bool),
    List(Vec<String>),
}

impl FrontMatterValue {
    /// Normalize a raw value string
    fn parse(raw: &str) -> Self {
        if let Some(inner) = strip_quotes(raw) {
            return match inner {
                "true" => FrontMatterValue::Bool(true),
                "false" => FrontMatterValue::Bool(false),
                _ => FrontMatterValue::String(inner.to_string()),
            };
        }

        if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let items = inner
                .split(',')
                .map(|item| {
                    let item = item.trim();
                    strip_quotes(item).unwrap_or(item).to_string()
                })
                .filter(|item| !item.is_empty())
                .collect();
            return FrontMatterValue::List(items);
        }

        match raw {
            "true" => FrontMatterValue::Bool(true),
            "false" => FrontMatterValue::Bool(false),
            _ => FrontMatterValue::String(raw.to_string()),
        }
    }
}

/// Strip a single matching pair of double or single quotes
fn strip_quotes(s: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            Some(&s[1..s.len() - 1])
        } else {
            None
        }
    })
}

/// Front-matter data from a post, keyed in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrontMatter {
    fields: IndexMap<String, FrontMatterValue>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    ///
    /// Never fails: input without a well-formed leading block is returned
    /// whole as the body with empty front-matter.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some((block, body)) = split_block(content) else {
            return (FrontMatter::default(), content);
        };

        let mut fields = IndexMap::new();
        for line in block.lines() {
            let Some(colon_pos) = line.find(':') else {
                continue;
            };
            if colon_pos == 0 {
                continue;
            }
            let key = line[..colon_pos].trim();
            let value = line[colon_pos + 1..].trim();
            fields.insert(key.to_string(), FrontMatterValue::parse(value));
        }

        (Self { fields }, body)
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.fields.get(key)
    }

    /// Non-empty string value for a key
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            FrontMatterValue::String(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Boolean value for a key
    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.fields.get(key)? {
            FrontMatterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// List value for a key; a lone string counts as a one-element list
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.fields.get(key)? {
            FrontMatterValue::List(items) => Some(items.clone()),
            FrontMatterValue::String(s) if !s.is_empty() => Some(vec![s.clone()]),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Split `content` into (block, body) when it opens with a delimited block
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (first, rest) = next_line(content)?;
    if first != DELIMITER {
        return None;
    }

    let mut offset = 0;
    let mut remaining = rest;
    while let Some((line, after)) = next_line(remaining) {
        if line == DELIMITER {
            return Some((&rest[..offset], after));
        }
        offset += remaining.len() - after.len();
        remaining = after;
    }

    None
}

/// Split off the first line, dropping its terminator (`\n` or `\r\n`)
fn next_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    let (line, rest) = match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    };
    Some((line.strip_suffix('\r').unwrap_or(line), rest))
}
