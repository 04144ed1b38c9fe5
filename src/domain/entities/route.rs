use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub route_index: usize,
    pub summary: String,
    pub distance: String,
    pub duration: String,
    pub steps: Vec<RouteStep>,
    pub polyline: String,
}

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid regex"));

/// Removes markup tags; providers embed them in step text. A `<` that never
/// closes is kept as text.
pub fn strip_html_tags(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}
