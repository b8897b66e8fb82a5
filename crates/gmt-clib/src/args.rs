//! Building GMT argument strings from keyword options.

use std::collections::BTreeMap;

/// Value attached to a single-letter (or short) GMT option.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// Bare flag: `-T`.
    Flag,
    /// Option with a value: `-X12c`.
    Value(String),
    /// Option given once per entry: `-Bxa -Bya`.
    Repeated(Vec<String>),
    /// Option present in the map but not emitted.
    Off,
}

impl From<bool> for ArgValue {
    fn from(on: bool) -> Self {
        if on {
            ArgValue::Flag
        } else {
            ArgValue::Off
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Value(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Value(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Value(value.to_string())
    }
}

impl From<Vec<String>> for ArgValue {
    fn from(values: Vec<String>) -> Self {
        ArgValue::Repeated(values)
    }
}

/// Ordered option map. Keys are rendered in sorted order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs(BTreeMap<String, ArgValue>);

impl Kwargs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ArgValue> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ArgValue)> {
        self.0.iter()
    }
}

/// Render options as a GMT argument string.
///
/// Values holding whitespace or quote characters are quoted so that
/// [`split_args`] gives them back as a single argument.
///
/// ```
/// use gmt_clib::args::{build_arg_string, Kwargs};
///
/// let kwargs = Kwargs::new().with("X", "12c").with("T", true);
/// assert_eq!(build_arg_string(&kwargs), "-T -X12c");
/// ```
pub fn build_arg_string(kwargs: &Kwargs) -> String {
    let mut parts = Vec::new();
    for (key, value) in kwargs.iter() {
        match value {
            ArgValue::Flag => parts.push(format!("-{}", key)),
            ArgValue::Value(v) => parts.push(format!("-{}{}", key, quote_if_needed(v))),
            ArgValue::Repeated(values) => {
                parts.extend(
                    values
                        .iter()
                        .map(|v| format!("-{}{}", key, quote_if_needed(v))),
                );
            }
            ArgValue::Off => {}
        }
    }
    parts.join(" ")
}

/// Prefix positional arguments (file names) to the option string.
pub fn with_positional(positional: &[&str], kwargs: &Kwargs) -> String {
    let mut parts: Vec<String> = positional.iter().map(|p| quote_if_needed(p)).collect();
    let options = build_arg_string(kwargs);
    if !options.is_empty() {
        parts.push(options);
    }
    parts.join(" ")
}

/// Quote `arg` for [`split_args`]. Double quotes inside the value are
/// emitted as `'"'` segments, which join the surrounding token.
fn quote_if_needed(arg: &str) -> String {
    if !arg
        .chars()
        .any(|c| c.is_whitespace() || c == '"' || c == '\'')
    {
        return arg.to_string();
    }

    let mut out = String::with_capacity(arg.len() + 2);
    let mut open = false;
    for c in arg.chars() {
        if c == '"' {
            if open {
                out.push('"');
                open = false;
            }
            out.push_str("'\"'");
        } else {
            if !open {
                out.push('"');
                open = true;
            }
            out.push(c);
        }
    }
    if open {
        out.push('"');
    }
    out
}

/// Split an argument string into argv, honoring single and double quotes.
pub fn split_args(args: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in args.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    out.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        out.push(current);
    }
    out
}
