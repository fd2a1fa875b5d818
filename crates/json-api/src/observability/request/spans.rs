//! Route labels for spans and metrics.

use uuid::Uuid;

/// Replace UUID path segments with `{uuid}` so labels stay low-cardinality.
pub(super) fn normalise_path(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_collapsed() {
        let path = format!("/admin/client-requests/{}/approve", Uuid::now_v7());

        assert_eq!(normalise_path(&path), "/admin/client-requests/{uuid}/approve");
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(normalise_path("/"), "/");
        assert_eq!(normalise_path("/client/signup"), "/client/signup");
    }
}
