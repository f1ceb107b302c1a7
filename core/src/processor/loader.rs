//! Bulk keyword loading.
//!
//! Loaders fail fast: the first malformed entry aborts the load and keywords
//! added before it stay in the processor.

use super::KeywordProcessor;
use crate::error::LoadError;
use serde_json::Value;
use std::io::BufRead;
use std::path::Path;

const VALUE_SEPARATOR: &str = "=>";

/// Typed bulk operations.
impl<V> KeywordProcessor<V> {
    /// Adds bare keywords, each as its own value. Returns how many were new.
    pub fn add_keywords_from_list<I, S>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: for<'k> From<&'k str>,
    {
        keywords
            .into_iter()
            .filter(|k| self.add_keyword(k.as_ref()))
            .count()
    }

    /// Returns how many of `keywords` were stored and removed.
    pub fn remove_keywords_from_list<I, S>(&mut self, keywords: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keywords
            .into_iter()
            .filter(|k| self.remove(k.as_ref()))
            .count()
    }

    /// Maps every alias to its value. Returns how many aliases were new.
    pub fn add_keywords_from_map<I, A, S>(&mut self, map: I) -> usize
    where
        I: IntoIterator<Item = (V, A)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
        V: Clone,
    {
        let mut added = 0;
        for (value, aliases) in map {
            for alias in aliases {
                if self.insert(alias.as_ref(), value.clone()) {
                    added += 1;
                }
            }
        }
        added
    }

    /// Removes every alias listed in `map`; the values are ignored.
    pub fn remove_keywords_from_map<I, A, S>(&mut self, map: I) -> usize
    where
        I: IntoIterator<Item = (V, A)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        map.into_iter()
            .flat_map(|(_, aliases)| aliases)
            .filter(|alias| self.remove(alias.as_ref()))
            .count()
    }
}

/// Loaders for untyped sources.
impl KeywordProcessor<String> {
    /// Adds a `{ "value": ["alias", ...] }` mapping.
    ///
    /// Fails with [`LoadError::InvalidArgument`] if the root is not an object
    /// or an alias list is not an array of strings.
    pub fn add_keywords_from_json(&mut self, dict: &Value) -> Result<usize, LoadError> {
        let mut added = 0;
        for (value, aliases) in alias_lists(dict)? {
            for alias in aliases {
                if self.insert(alias?, value.clone()) {
                    added += 1;
                }
            }
        }
        tracing::debug!(added, total = self.len(), "added keywords from mapping");
        Ok(added)
    }

    /// Removes every alias of a `{ "value": ["alias", ...] }` mapping.
    pub fn remove_keywords_from_json(&mut self, dict: &Value) -> Result<usize, LoadError> {
        let mut removed = 0;
        for (_, aliases) in alias_lists(dict)? {
            for alias in aliases {
                if self.remove(alias?) {
                    removed += 1;
                }
            }
        }
        tracing::debug!(removed, total = self.len(), "removed keywords from mapping");
        Ok(removed)
    }

    /// Reads one keyword per line, either `keyword` or `keyword=>value`.
    ///
    /// Both sides are trimmed and blank lines are skipped.
    pub fn add_keywords_from_reader(&mut self, reader: impl BufRead) -> Result<usize, LoadError> {
        let mut added = 0;
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let (keyword, value) = parse_line(&line).map_err(|reason| {
                LoadError::InvalidArgument(format!("line {}: {reason}", lineno + 1))
            })?;
            let value = value.unwrap_or(keyword).to_string();
            if self.insert(keyword, value) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Loads a line-oriented keyword file. See
    /// [`add_keywords_from_reader`](Self::add_keywords_from_reader).
    pub fn add_keywords_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let file = open(path)?;
        let added = self.add_keywords_from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(path = %path.display(), added, total = self.len(), "loaded keyword file");
        Ok(added)
    }

    /// Loads a `.json` or `.toml` file mapping values to alias lists.
    pub fn add_keywords_from_dict_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let dict = read_dict(path)?;
        let added = self.add_keywords_from_json(&dict)?;
        tracing::debug!(path = %path.display(), added, total = self.len(), "loaded keyword mapping file");
        Ok(added)
    }
}

fn open(path: &Path) -> Result<std::fs::File, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    Ok(std::fs::File::open(path)?)
}

fn read_dict(path: &Path) -> Result<Value, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "json" => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        "toml" => {
            let content = std::fs::read_to_string(path)?;
            let table: toml::Table = toml::from_str(&content)?;
            Ok(serde_json::to_value(table)?)
        }
        other => Err(LoadError::InvalidArgument(format!(
            "unsupported keyword mapping format: {other:?}"
        ))),
    }
}

type Aliases<'d> = Box<dyn Iterator<Item = Result<&'d str, LoadError>> + 'd>;

/// Validates the shape of a value-to-aliases mapping up to the alias lists.
/// Individual aliases are checked lazily.
fn alias_lists(dict: &Value) -> Result<Vec<(String, Aliases<'_>)>, LoadError> {
    let Value::Object(map) = dict else {
        return Err(LoadError::InvalidArgument(
            "keyword mapping should be an object".to_string(),
        ));
    };

    map.iter()
        .map(|(value, aliases)| {
            let Value::Array(aliases) = aliases else {
                return Err(LoadError::InvalidArgument(format!(
                    "value of key {value} should be a list"
                )));
            };
            let value_name = value.clone();
            let iter: Aliases<'_> = Box::new(aliases.iter().map(move |alias| {
                alias.as_str().ok_or_else(|| {
                    LoadError::InvalidArgument(format!(
                        "aliases of key {value_name} should be strings"
                    ))
                })
            }));
            Ok((value.clone(), iter))
        })
        .collect()
}

fn parse_line(line: &str) -> Result<(&str, Option<&str>), &'static str> {
    let mut parts = line.split(VALUE_SEPARATOR);
    let keyword = parts.next().unwrap_or("").trim();
    let value = parts.next().map(str::trim);
    if parts.next().is_some() {
        return Err("expected at most one '=>' separator");
    }
    Ok((keyword, value.filter(|v| !v.is_empty())))
}
