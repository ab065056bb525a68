//! Internal and external hyperlink checks
//!
//! Internal links are judged by a text-presence heuristic: the visible label of
//! a non-TOC anchor link should appear somewhere in the body text. External
//! links are resolved through the relationship part and probed with HEAD.

use std::time::Duration;

use async_trait::async_trait;

use crate::docx::{hyperlinks, Document, DocxArchive, Relationships, XmlElement};

/// Report labels of non-TOC anchor links that do not occur in the body text
pub fn check_internal_links(root: &XmlElement, document: &Document) -> Vec<String> {
    let all_text = document.full_text_lowercase();

    hyperlinks(root)
        .into_iter()
        .filter(|link| link.anchor.is_some() && !link.is_toc())
        .filter_map(|link| {
            let label = link.text.trim();
            if label.is_empty() || all_text.contains(&label.to_lowercase()) {
                None
            } else {
                Some(format!(
                    "Broken link: \"{}\" does not appear anywhere in document",
                    label
                ))
            }
        })
        .collect()
}

/// An external hyperlink ready to probe, or the reason it could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalTarget {
    Url(String),
    Unresolved(String),
}

/// Resolve every `r:id` hyperlink to its target URL
///
/// Only `http…` targets are kept. A relationship part that cannot be read
/// yields one [`ExternalTarget::Unresolved`] per link that needed it.
pub fn collect_external_targets(root: &XmlElement, archive: &DocxArchive) -> Vec<ExternalTarget> {
    let links: Vec<_> = hyperlinks(root)
        .into_iter()
        .filter_map(|link| link.relationship_id)
        .collect();
    if links.is_empty() {
        return Vec::new();
    }

    let relationships = Relationships::from_archive(archive).map_err(|e| e.to_string());

    links
        .iter()
        .filter_map(|id| match &relationships {
            Ok(rels) => rels
                .get(id)
                .map(|rel| rel.target.as_str())
                .filter(|target| target.starts_with("http"))
                .map(|target| ExternalTarget::Url(target.to_string())),
            Err(e) => Some(ExternalTarget::Unresolved(e.clone())),
        })
        .collect()
}

/// Something that can tell whether a URL answers
#[async_trait]
pub trait LinkProbe: Send + Sync {
    /// Final HTTP status of a HEAD request, following redirects.
    /// `Err` carries the transport error message.
    async fn head_status(&self, url: &str) -> Result<u16, String>;
}

/// HEAD requests over reqwest
pub struct HttpLinkProbe {
    client: reqwest::Client,
}

impl HttpLinkProbe {
    pub fn new(timeout: Duration, max_redirects: usize) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(max_redirects))
            .user_agent(concat!("docx-compliance-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpLinkProbe {
    async fn head_status(&self, url: &str) -> Result<u16, String> {
        self.client
            .head(url)
            .send()
            .await
            .map(|response| response.status().as_u16())
            .map_err(|e| e.to_string())
    }
}

/// Probe each target in turn. No retries.
pub async fn check_external_links(targets: &[ExternalTarget], probe: &dyn LinkProbe) -> Vec<String> {
    let mut issues = Vec::new();

    for target in targets {
        match target {
            ExternalTarget::Url(url) => match probe.head_status(url).await {
                Ok(status) if status >= 400 => {
                    tracing::debug!(url = %url, status, "External link broken");
                    issues.push(format!("Broken link: {} (HTTP {})", url, status));
                }
                Ok(status) => {
                    tracing::debug!(url = %url, status, "External link ok");
                }
                Err(e) => {
                    tracing::debug!(url = %url, error = %e, "External link unreachable");
                    issues.push(format!("Invalid link: {} ({})", url, e));
                }
            },
            ExternalTarget::Unresolved(e) => {
                issues.push(format!(
                    "Could not resolve external link relationships: {}",
                    e
                ));
            }
        }
    }

    issues
}

/// Canned responses for tests
#[cfg(test)]
pub struct MockProbe {
    pub responses: std::collections::HashMap<String, Result<u16, String>>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockProbe {
    pub fn new(responses: &[(&str, Result<u16, String>)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(url, r)| (url.to_string(), r.clone()))
                .collect(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl LinkProbe for MockProbe {
    async fn head_status(&self, url: &str) -> Result<u16, String> {
        self.calls.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err("unexpected url".to_string()))
    }
}
