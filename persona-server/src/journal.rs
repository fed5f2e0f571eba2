//! Best-effort logging of chat exchanges to a form webhook.
//!
//! The journal posts each question/answer pair to an externally configured
//! endpoint, one form submission per exchange. The call is strictly
//! fire-and-forget: every failure is reported to local diagnostics and then
//! dropped, so the HTTP response already on its way to the caller is never
//! changed by a logging problem.

use chrono::Utc;
use tracing::{debug, warn};

/// Form field identifiers the webhook expects.
///
/// The receiving form owns these names, so they are deployment
/// configuration rather than a protocol contract.
#[derive(Clone, Debug)]
pub struct FieldMap {
    pub question: String,
    pub answer: String,
    pub timestamp: String,
    pub error: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            question: "question".into(),
            answer: "answer".into(),
            timestamp: "timestamp".into(),
            error: "error".into(),
        }
    }
}

/// One exchange as it is journaled.
///
/// `answer` is whatever the caller is about to receive, so on completion
/// failure it holds the fallback text while `error` carries the detail.
#[derive(Clone, Copy, Debug)]
pub struct Interaction<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub error: Option<&'a str>,
}

struct Webhook {
    url: String,
    fields: FieldMap,
}

/// Sink for [`Interaction`] records.
pub struct Journal {
    webhook: Option<Webhook>,
    http: reqwest::Client,
}

impl Journal {
    /// Journal posting to `url`, or a no-op journal when `url` is `None`.
    pub fn new(url: Option<String>, fields: FieldMap) -> Self {
        let webhook = url.map(|url| Webhook { url, fields });
        Self {
            webhook,
            http: reqwest::Client::new(),
        }
    }

    /// Journal that drops every record.
    pub fn disabled() -> Self {
        Self::new(None, FieldMap::default())
    }

    pub fn enabled(&self) -> bool {
        self.webhook.is_some()
    }

    /// Post one record to the webhook. Never fails past this function.
    pub async fn record(&self, interaction: Interaction<'_>) {
        let webhook = match &self.webhook {
            Some(webhook) => webhook,
            None => return,
        };

        let timestamp = Utc::now().to_rfc3339();
        let mut form = vec![
            (webhook.fields.timestamp.as_str(), timestamp.as_str()),
            (webhook.fields.question.as_str(), interaction.question),
            (webhook.fields.answer.as_str(), interaction.answer),
        ];
        if let Some(detail) = interaction.error {
            form.push((webhook.fields.error.as_str(), detail));
        }

        match self.http.post(&webhook.url).form(&form).send().await {
            Ok(resp) if resp.status().is_success() => {
                debug!("exchange journaled to webhook");
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "webhook rejected journal entry");
            }
            Err(e) => {
                warn!(error = %e, "failed to reach journal webhook");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::HttpMockRequest;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    fn body_lacks_error_field(req: &HttpMockRequest) -> bool {
        req.body
            .as_ref()
            .map(|b| !std::str::from_utf8(b).unwrap_or_default().contains("error="))
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn records_are_posted_as_form_fields() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/log")
                .body_contains("question=who+are+you%3F")
                .body_contains("answer=a+test")
                .body_contains("timestamp=");
            then.status(200);
        });

        let journal = Journal::new(
            Some(format!("{}/log", server.base_url())),
            FieldMap::default(),
        );
        journal
            .record(Interaction {
                question: "who are you?",
                answer: "a test",
                error: None,
            })
            .await;
        mock.assert();
    }

    #[tokio::test]
    async fn error_field_is_omitted_on_success() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/log").matches(body_lacks_error_field);
            then.status(200);
        });

        let journal = Journal::new(
            Some(format!("{}/log", server.base_url())),
            FieldMap::default(),
        );
        journal
            .record(Interaction {
                question: "q",
                answer: "a",
                error: None,
            })
            .await;
        mock.assert();
    }

    #[tokio::test]
    async fn custom_field_names_are_used() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/log")
                .body_contains("entry.101=q")
                .body_contains("entry.102=a")
                .body_contains("entry.104=boom");
            then.status(200);
        });

        let fields = FieldMap {
            question: "entry.101".into(),
            answer: "entry.102".into(),
            timestamp: "entry.103".into(),
            error: "entry.104".into(),
        };
        let journal = Journal::new(Some(format!("{}/log", server.base_url())), fields);
        journal
            .record(Interaction {
                question: "q",
                answer: "a",
                error: Some("boom"),
            })
            .await;
        mock.assert();
    }

    #[tokio::test]
    async fn webhook_failures_are_swallowed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/log");
            then.status(500);
        });

        let journal = Journal::new(
            Some(format!("{}/log", server.base_url())),
            FieldMap::default(),
        );
        // Returns normally even though the webhook rejected the record.
        journal
            .record(Interaction {
                question: "q",
                answer: "a",
                error: None,
            })
            .await;
    }

    #[tokio::test]
    async fn unreachable_webhook_is_swallowed() {
        // Nothing listens on port 9, so the POST fails to connect.
        let journal = Journal::new(Some("http://127.0.0.1:9/log".into()), FieldMap::default());
        journal
            .record(Interaction {
                question: "q",
                answer: "a",
                error: None,
            })
            .await;
    }

    #[tokio::test]
    async fn disabled_journal_is_a_no_op() {
        let journal = Journal::disabled();
        assert!(!journal.enabled());
        journal
            .record(Interaction {
                question: "q",
                answer: "a",
                error: None,
            })
            .await;
    }
}
