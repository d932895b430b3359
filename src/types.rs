use std::collections::HashMap;

use crate::errors::{Error, Result};

/// Return a 'minimal' representation of the given number
pub fn fstr(x: f32) -> String {
    if x == (x as i32) as f32 {
        return (x as i32).to_string();
    }
    let result = format!("{x:.3}");
    if result.contains('.') {
        result.trim_end_matches('0').trim_end_matches('.').into()
    } else {
        result
    }
}

/// Parse a string to a finite f32; `nan` and `inf` are rejected
pub fn strp(s: &str) -> Result<f32> {
    let value: f32 = s
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("float '{s}': {e}")))?;
    if !value.is_finite() {
        return Err(Error::Parse(format!("float '{s}': not a finite number")));
    }
    Ok(value)
}

/// Parse a length attribute; bare numbers only, though a `px` suffix is allowed
pub fn strp_length(s: &str) -> Result<f32> {
    let s = s.trim();
    strp(s.strip_suffix("px").unwrap_or(s))
}

/// Returns iterator over whitespace-or-comma separated values
pub fn attr_split(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split_whitespace()
        .flat_map(|v| v.split(','))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Element attributes by name.
///
/// Re-inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap {
    attrs: HashMap<String, String>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut am = Self::new();
        for (k, v) in iter {
            am.insert(k, v);
        }
        am
    }
}
