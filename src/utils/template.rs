/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! `{placeholder}` templates.
//!
//! The same syntax drives two things: endpoint path templates such as
//! `/v3/accounts/{accountID}/positions/{instrument}/close`, and the
//! human-readable name and summary formats of every entity.

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use url::Url;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_.]*)\}").expect("placeholder regex is valid")
});

static SEGMENT_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://segment.invalid/").expect("segment base url is valid"));

/// Percent-encodes one path segment; `?`, `#`, `%` and spaces cannot leak out of it
fn encode_segment(value: &str) -> String {
    let mut url = SEGMENT_BASE.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().push(value);
    }
    url.path().trim_start_matches('/').to_string()
}

/// Returns the placeholder names of a template, in order of appearance
#[must_use]
pub fn placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Renders a template, asking `lookup` for each placeholder.
///
/// Placeholders the lookup cannot resolve render as an empty string.
pub fn render_template<F>(template: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| lookup(&caps[1]).unwrap_or_default())
        .into_owned()
}

/// Renders a template against a JSON object; dotted names walk nested objects
#[must_use]
pub fn render_json_template(template: &str, value: &Value) -> String {
    render_template(template, |name| {
        let found = name
            .split('.')
            .try_fold(value, |current, key| current.get(key))?;
        match found {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    })
}

/// Expands an endpoint path template.
///
/// Every placeholder must be supplied with a non-empty value that does not
/// contain `/` and is not `.` or `..`; anything else is a caller contract
/// violation. Values are percent-encoded as single path segments.
///
/// # Examples
/// ```
/// use v20_client::utils::template::expand_path;
/// let path = expand_path(
///     "/v3/accounts/{accountID}/positions/{instrument}",
///     &[("accountID", "101-004-1-001"), ("instrument", "EUR_USD")],
/// ).unwrap();
/// assert_eq!(path, "/v3/accounts/101-004-1-001/positions/EUR_USD");
/// ```
pub fn expand_path(template: &str, params: &[(&str, &str)]) -> Result<String, AppError> {
    for name in placeholders(template) {
        match params.iter().find(|(key, _)| *key == name) {
            None => {
                return Err(AppError::InvalidInput(format!(
                    "missing path parameter {name} for {template}"
                )));
            }
            Some((_, value))
                if value.is_empty() || value.contains('/') || matches!(*value, "." | "..") =>
            {
                return Err(AppError::InvalidInput(format!(
                    "invalid value for path parameter {name}: {value:?}"
                )));
            }
            Some(_) => {}
        }
    }

    Ok(render_template(template, |name| {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| encode_segment(value))
    }))
}
