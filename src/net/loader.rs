//! Class list loading: manifest fetch with probe-based fallback.

use reqwest::blocking::Client;
use serde::Deserialize;

use super::prober;
use crate::nav;

pub const MANIFEST_PATH: &str = "classes-list.json";

/// Names tried when the manifest cannot be loaded. The fallback can
/// only ever rediscover names on this list.
pub const FALLBACK_CANDIDATES: [&str; 5] = [
    "Turma-A-2024",
    "Turma-B-2024",
    "Turma-C-2024",
    "Turma-Avancada-2024",
    "Turma-Iniciantes-2024",
];

#[derive(Debug, Deserialize)]
struct Manifest {
    classes: Vec<String>,
}

/// How the class list was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Parsed from the manifest.
    Manifest,
    /// Manifest failed; list is the subset of candidates that probed OK.
    Probed,
    /// Manifest and every probe failed; list is the raw candidate set.
    Assumed,
}

/// Error while fetching or parsing the manifest. Consumed inside
/// [`load_classes`]; callers only ever see a list.
#[derive(Debug)]
enum LoadError {
    Network(String),
    Http(u16),
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {}", msg),
            LoadError::Http(code) => write!(f, "HTTP {}", code),
            LoadError::Parse(msg) => write!(f, "parse error: {}", msg),
        }
    }
}

/// Load the class list from `{base_url}/classes-list.json`. Never fails
/// outward: a manifest error is logged and recovered by probing the
/// built-in candidates instead.
pub fn load_classes(http: &Client, base_url: &str) -> (Vec<String>, ListSource) {
    match fetch_manifest(http, base_url) {
        Ok(classes) => {
            log::info!("Loaded {} classes from manifest", classes.len());
            (classes, ListSource::Manifest)
        }
        Err(e) => {
            log::error!("Failed to load class manifest: {}", e);
            detect_classes(|url| prober::exists(http, url), base_url)
        }
    }
}

fn fetch_manifest(http: &Client, base_url: &str) -> Result<Vec<String>, LoadError> {
    let url = format!("{}/{}", base_url, MANIFEST_PATH);
    let response = http
        .get(&url)
        .send()
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Http(response.status().as_u16()));
    }

    let manifest: Manifest = response
        .json()
        .map_err(|e| LoadError::Parse(e.to_string()))?;
    Ok(manifest.classes)
}

/// Probe the candidate pages one at a time. Sequential on purpose: one
/// request in flight keeps the request budget flat, at the cost of
/// latency proportional to the candidate count. If nothing probes clean
/// the full candidate list is returned as a last-resort guess.
pub fn detect_classes(
    mut exists: impl FnMut(&str) -> bool,
    base_url: &str,
) -> (Vec<String>, ListSource) {
    let mut found = Vec::new();
    for name in FALLBACK_CANDIDATES {
        if exists(&nav::page_url(base_url, name)) {
            found.push(name.to_string());
        }
    }

    if found.is_empty() {
        log::warn!("No candidate page responded; assuming the full candidate list");
        let all = FALLBACK_CANDIDATES.iter().map(|s| s.to_string()).collect();
        (all, ListSource::Assumed)
    } else {
        log::info!("Detected {} classes by probing", found.len());
        (found, ListSource::Probed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;

    #[test]
    fn manifest_order_is_preserved() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/classes-list.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "classes": ["Turma-A-2024", "Turma-B-2024"]
                }));
        });

        let http = crate::net::http_client();
        let (classes, source) = load_classes(&http, &server.base_url());

        assert_eq!(classes, vec!["Turma-A-2024", "Turma-B-2024"]);
        assert_eq!(source, ListSource::Manifest);
        mock.assert();
    }

    #[test]
    fn manifest_404_falls_back_to_probing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/classes-list.json");
            then.status(404);
        });
        // Only one candidate page exists.
        server.mock(|when, then| {
            when.method(HEAD).path("/classes/Turma-A-2024.html");
            then.status(200);
        });

        let http = crate::net::http_client();
        let (classes, source) = load_classes(&http, &server.base_url());

        assert_eq!(classes, vec!["Turma-A-2024"]);
        assert_eq!(source, ListSource::Probed);
    }

    #[test]
    fn malformed_manifest_falls_back_to_probing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/classes-list.json");
            then.status(200).body("not json at all");
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/classes/Turma-B-2024.html");
            then.status(200);
        });

        let http = crate::net::http_client();
        let (classes, source) = load_classes(&http, &server.base_url());

        assert_eq!(classes, vec!["Turma-B-2024"]);
        assert_eq!(source, ListSource::Probed);
    }

    #[test]
    fn total_failure_assumes_the_full_candidate_list() {
        // No mocks at all: manifest and every probe return 404.
        let server = MockServer::start();

        let http = crate::net::http_client();
        let (classes, source) = load_classes(&http, &server.base_url());

        assert_eq!(classes, FALLBACK_CANDIDATES.to_vec());
        assert_eq!(source, ListSource::Assumed);
    }

    #[test]
    fn probes_run_in_candidate_order() {
        let mut probed = Vec::new();
        let (classes, source) = detect_classes(
            |url| {
                probed.push(url.to_string());
                url.ends_with("Turma-C-2024.html")
            },
            "https://escola.example",
        );

        let expected: Vec<String> = FALLBACK_CANDIDATES
            .iter()
            .map(|name| format!("https://escola.example/classes/{}.html", name))
            .collect();
        assert_eq!(probed, expected);
        assert_eq!(classes, vec!["Turma-C-2024"]);
        assert_eq!(source, ListSource::Probed);
    }

    #[test]
    fn detection_keeps_candidate_order() {
        let (classes, _) = detect_classes(
            |url| !url.contains("Turma-B-2024"),
            "https://escola.example",
        );
        assert_eq!(
            classes,
            vec![
                "Turma-A-2024",
                "Turma-C-2024",
                "Turma-Avancada-2024",
                "Turma-Iniciantes-2024"
            ]
        );
    }
}
