//! Resource resolution from path and query parameters.

use std::collections::HashMap;

/// Logical resources served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Health,
    Clients,
    Creators,
    Templates,
    Proposals,
    Generate,
    /// Discoverability index; also the home of every unmatched GET.
    Index,
}

impl Resource {
    /// Endpoint names advertised by the index response.
    pub const AVAILABLE: [&'static str; 6] = [
        "health",
        "clients",
        "creators",
        "templates",
        "proposals",
        "generate",
    ];

    fn from_name(name: &str) -> Self {
        match name {
            "health" => Resource::Health,
            "clients" => Resource::Clients,
            "creators" => Resource::Creators,
            "templates" => Resource::Templates,
            "proposals" => Resource::Proposals,
            "generate" => Resource::Generate,
            _ => Resource::Index,
        }
    }
}

/// Resolve the logical resource for a request.
///
/// Precedence, highest first:
/// 1. `endpoint` query parameter
/// 2. `path` query parameter
/// 3. trailing path segment (`/api/creators` → `creators`)
/// 4. default → Index
pub fn resolve_resource(path: &str, params: &HashMap<String, String>) -> Resource {
    if let Some(name) = params.get("endpoint") {
        return Resource::from_name(name);
    }
    if let Some(name) = params.get("path") {
        return Resource::from_name(name);
    }
    match trailing_segment(path) {
        Some(segment) => Resource::from_name(segment),
        None => Resource::Index,
    }
}

/// Last non-empty path segment, ignoring the `/api` mount point.
fn trailing_segment(path: &str) -> Option<&str> {
    let segment = path.trim_matches('/').rsplit('/').next()?;
    if segment.is_empty() || segment == "api" {
        None
    } else {
        Some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_path_segment_resolution() {
        assert_eq!(
            resolve_resource("/api/creators", &params(&[])),
            Resource::Creators
        );
        assert_eq!(
            resolve_resource("/api/health", &params(&[])),
            Resource::Health
        );
        assert_eq!(
            resolve_resource("/api/clients/", &params(&[])),
            Resource::Clients
        );
    }

    #[test]
    fn test_query_aliases_are_equivalent() {
        let by_path = resolve_resource("/api/creators", &params(&[]));
        let by_endpoint = resolve_resource("/api", &params(&[("endpoint", "creators")]));
        let by_path_param = resolve_resource("/api", &params(&[("path", "creators")]));

        assert_eq!(by_path, Resource::Creators);
        assert_eq!(by_endpoint, by_path);
        assert_eq!(by_path_param, by_path);
    }

    #[test]
    fn test_endpoint_param_beats_path_param() {
        let resource = resolve_resource(
            "/api",
            &params(&[("endpoint", "clients"), ("path", "creators")]),
        );
        assert_eq!(resource, Resource::Clients);
    }

    #[test]
    fn test_path_param_beats_trailing_segment() {
        let resource = resolve_resource("/api/creators", &params(&[("path", "templates")]));
        assert_eq!(resource, Resource::Templates);
    }

    #[test]
    fn test_root_and_bare_api_resolve_to_index() {
        assert_eq!(resolve_resource("/", &params(&[])), Resource::Index);
        assert_eq!(resolve_resource("/api", &params(&[])), Resource::Index);
        assert_eq!(resolve_resource("/api/", &params(&[])), Resource::Index);
    }

    #[test]
    fn test_unknown_segment_resolves_to_index() {
        assert_eq!(
            resolve_resource("/api/widgets", &params(&[])),
            Resource::Index
        );
        assert_eq!(
            resolve_resource("/api", &params(&[("endpoint", "widgets")])),
            Resource::Index
        );
    }
}
