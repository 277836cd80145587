#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    CreateEmployee,
    FetchEmployee,
    MethodNotAllowed,
    UnknownResource,
}

/// Maps a canonical `(method, path)` pair onto the employee resource. The
/// resource matches an empty path or any path ending in `/employee`; stage
/// prefixes added by the gateway are tolerated that way. Verbs compare
/// exactly; gateways normalize them to uppercase.
pub fn resolve_route(method: Option<&str>, path: &str) -> RouteDecision {
    if !(path.is_empty() || path.ends_with("/employee")) {
        return RouteDecision::UnknownResource;
    }

    match method {
        Some("POST") => RouteDecision::CreateEmployee,
        Some("GET") => RouteDecision::FetchEmployee,
        _ => RouteDecision::MethodNotAllowed,
    }
}
