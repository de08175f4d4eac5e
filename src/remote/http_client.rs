use super::*;

/// Percent-encode an identifier used as a single path segment, so that
/// `namespace/name` project paths and slashed branch names survive URL
/// routing.
pub(super) fn encode_path(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

impl GitlabClient {
    pub(super) fn api(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub(super) fn get(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .get(self.api(path))
            .header("PRIVATE-TOKEN", &self.config.token)
    }

    pub(super) fn post(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .post(self.api(path))
            .header("PRIVATE-TOKEN", &self.config.token)
    }

    pub(super) fn put(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .put(self.api(path))
            .header("PRIVATE-TOKEN", &self.config.token)
    }

    pub(super) fn delete(&self, path: &str) -> reqwest::blocking::RequestBuilder {
        self.client
            .delete(self.api(path))
            .header("PRIVATE-TOKEN", &self.config.token)
    }

    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!(
                "unauthorized (token invalid/expired; pass --token or set GITLABCTL_TOKEN)"
            );
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (the token cannot {label}; check its scopes and your role)");
        }
        resp.error_for_status()
            .with_context(|| format!("{label} status"))
    }

    /// Variant of [`ensure_ok`] for existence probes: 404 is a negative
    /// answer, not an error.
    pub(super) fn probe(&self, path: &str, label: &str) -> Result<Option<serde_json::Value>> {
        let resp = self.get(path).send().with_context(|| label.to_string())?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let value = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {label} response"))?;
        Ok(Some(value))
    }
}

#[cfg(test)]
#[path = "../tests/http_client_tests.rs"]
mod tests;
