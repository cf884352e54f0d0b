use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Skips the gate entirely (static assets, probes, JSON API).
    Excluded,
    /// Only for signed-out visitors, e.g. the login page.
    PublicOnly,
    Protected,
    Public,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteConfigError {
    #[error("route pattern `{0}` must start with '/'")]
    MissingLeadingSlash(String),

    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePatterns {
    pub excluded: Vec<String>,
    pub public_only: Vec<String>,
    pub protected: Vec<String>,
}

impl Default for RoutePatterns {
    fn default() -> Self {
        fn owned(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        Self {
            excluded: owned(&["/healthz", "/metrics", "/static/**", "/favicon.ico", "/api/**"]),
            public_only: owned(&["/login"]),
            protected: owned(&[
                "/",
                "/dashboard",
                "/dashboard/**",
                "/users",
                "/users/**",
                "/products",
                "/products/**",
            ]),
        }
    }
}

/// Classifies request paths. Precedence: excluded, public-only, protected,
/// then public for anything unmatched.
#[derive(Clone, Debug)]
pub struct RouteMatcher {
    excluded: GlobSet,
    public_only: GlobSet,
    protected: GlobSet,
}

impl RouteMatcher {
    pub fn new(patterns: &RoutePatterns) -> Result<Self, RouteConfigError> {
        Ok(Self {
            excluded: build_set(&patterns.excluded)?,
            public_only: build_set(&patterns.public_only)?,
            protected: build_set(&patterns.protected)?,
        })
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        let path = normalize_path(path);
        if self.excluded.is_match(&path) {
            RouteClass::Excluded
        } else if self.public_only.is_match(&path) {
            RouteClass::PublicOnly
        } else if self.protected.is_match(&path) {
            RouteClass::Protected
        } else {
            RouteClass::Public
        }
    }
}

fn build_set(patterns: &[String]) -> Result<GlobSet, RouteConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Request paths always carry a leading slash; a pattern without one can never match.
        if !pattern.starts_with('/') {
            return Err(RouteConfigError::MissingLeadingSlash(pattern.clone()));
        }
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|source| RouteConfigError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| RouteConfigError::InvalidGlob {
        pattern: patterns.join(","),
        source,
    })
}

/// Ensures a leading slash and drops trailing slashes (except for the root).
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
#[path = "../tests/session/routes_tests.rs"]
mod tests;
