/// Accepted shapes for a ticker-list style argument.
///
/// Call sites take `impl Into<ArgList>` so a bare string, a csv string, or an
/// already-built list all work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgList {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for ArgList {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for ArgList {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ArgList {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<Vec<&str>> for ArgList {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for ArgList {
    fn from(value: &[&str]) -> Self {
        Self::Many(value.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// Parses a convenience argument into a list of strings.
///
/// A csv string (`"a,b,c"`) is split on commas with each piece trimmed, a
/// plain string becomes a one-element list, and a list passes through
/// unchanged. Element contents are not validated.
pub fn parse_arg(arg: impl Into<ArgList>) -> Vec<String> {
    match arg.into() {
        ArgList::Single(value) => {
            let trimmed = value.trim();
            if trimmed.contains(',') {
                trimmed.split(',').map(|piece| piece.trim().to_owned()).collect()
            } else {
                vec![trimmed.to_owned()]
            }
        }
        ArgList::Many(values) => values,
    }
}
