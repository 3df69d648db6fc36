//! URL helpers for the repository API.
//!
//! Repository URLs follow `/<namespace>/<project>/<blob|tree>/<ref>/<path>`.

/// Query parameter asking the API for a JSON description.
const JSON_FORMAT_QUERY: &str = "format=json";

/// URL of the directory containing a blob or tree URL.
///
/// Drops the last path segment and turns the last remaining `blob`
/// segment into `tree`.
pub fn parent_tree_url(url: &str) -> String {
    let mut segments: Vec<&str> = url.split('/').collect();
    segments.pop();

    if let Some(index) = segments.iter().rposition(|s| *s == "blob") {
        segments[index] = "tree";
    }

    segments.join("/")
}

/// Append the JSON format query to a URL.
pub fn with_json_format(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, JSON_FORMAT_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_of_blob() {
        assert_eq!(
            parent_tree_url("/group/project/blob/master/lib/a.rb"),
            "/group/project/tree/master/lib"
        );
    }

    #[test]
    fn test_parent_of_tree() {
        assert_eq!(
            parent_tree_url("/group/project/tree/master/lib/util"),
            "/group/project/tree/master/lib"
        );
    }

    #[test]
    fn test_parent_of_top_level_blob() {
        assert_eq!(
            parent_tree_url("/group/project/blob/master/README.md"),
            "/group/project/tree/master"
        );
    }

    #[test]
    fn test_only_last_blob_segment_renamed() {
        assert_eq!(
            parent_tree_url("/blob/project/blob/master/x"),
            "/blob/project/tree/master"
        );
    }

    #[test]
    fn test_with_json_format() {
        assert_eq!(with_json_format("/p/tree/master"), "/p/tree/master?format=json");
        assert_eq!(
            with_json_format("/p/tree/master?ref_type=heads"),
            "/p/tree/master?ref_type=heads&format=json"
        );
    }
}
