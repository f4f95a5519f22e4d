use reqwest::blocking::Client;

/// Check whether a resource exists, by HEAD request so no body is
/// transferred. Never propagates an error: any transport failure or
/// non-success status reads as "does not exist".
pub fn exists(http: &Client, url: &str) -> bool {
    match http.head(url).send() {
        Ok(response) => response.status().is_success(),
        Err(e) => {
            log::debug!("Probe of {} failed: {}", url, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;

    #[test]
    fn ok_response_means_exists() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(HEAD).path("/classes/Turma-A-2024.html");
            then.status(200);
        });

        let http = crate::net::http_client();
        assert!(exists(&http, &server.url("/classes/Turma-A-2024.html")));
        mock.assert();
    }

    #[test]
    fn not_found_means_missing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(HEAD).path("/classes/Turma-X.html");
            then.status(404);
        });

        let http = crate::net::http_client();
        assert!(!exists(&http, &server.url("/classes/Turma-X.html")));
    }

    #[test]
    fn transport_error_means_missing() {
        // Nothing is listening on this port.
        let http = crate::net::http_client();
        assert!(!exists(&http, "http://127.0.0.1:1/classes/Turma-A-2024.html"));
    }
}
