//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;

use svcboard_domain::error::{ApiError, DomError};

use crate::ports::{
    HttpRequest, HttpResponse, HttpTransport, PageNavigator, ServiceForm, ServiceListView,
};

/// What the fake registry does with the next request.
pub enum Scripted {
    /// Status line and body both arrive.
    Respond(HttpResponse),
    /// Status line arrives, then the body stream breaks.
    BrokenBody(u16),
    /// No response at all.
    Fail(ApiError),
}

impl Scripted {
    fn settle(self, read_body: bool) -> Result<HttpResponse, ApiError> {
        match self {
            Self::Respond(response) if read_body => Ok(response),
            Self::Respond(response) => Ok(HttpResponse {
                status: response.status,
                body: String::new(),
            }),
            Self::BrokenBody(status) if !read_body => Ok(HttpResponse {
                status,
                body: String::new(),
            }),
            Self::BrokenBody(_) => Err(ApiError::Transport {
                message: "body stream interrupted".to_string(),
            }),
            Self::Fail(err) => Err(err),
        }
    }
}

pub fn reply(status: u16, body: &str) -> Scripted {
    Scripted::Respond(HttpResponse {
        status,
        body: body.to_string(),
    })
}

pub fn broken_body(status: u16) -> Scripted {
    Scripted::BrokenBody(status)
}

pub fn transport_error() -> Scripted {
    Scripted::Fail(ApiError::Transport {
        message: "connection refused".to_string(),
    })
}

/// Records every request and answers with scripted replies in order.
#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<VecDeque<Scripted>>,
}

impl RecordingTransport {
    pub fn replying(replies: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            replies: RefCell::new(replies.into_iter().collect()),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for RecordingTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        let read_body = request.read_body;
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(transport_error)
            .settle(read_body);
        async move {
            // Suspend once so concurrent submissions interleave like real fetches.
            tokio::task::yield_now().await;
            reply
        }
    }
}

/// Collects appended items; may start with pre-existing items.
#[derive(Default)]
pub struct RecordingList {
    items: RefCell<Vec<String>>,
    fail_after: Option<usize>,
}

impl RecordingList {
    pub fn with_items(items: &[&str]) -> Self {
        Self {
            items: RefCell::new(items.iter().map(ToString::to_string).collect()),
            fail_after: None,
        }
    }

    /// Reject appends once the list holds `len` items.
    pub fn failing_after(len: usize) -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            fail_after: Some(len),
        }
    }

    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }
}

impl ServiceListView for RecordingList {
    fn append_item(&self, text: &str) -> Result<(), DomError> {
        let mut items = self.items.borrow_mut();
        if self.fail_after.is_some_and(|limit| items.len() >= limit) {
            return Err(DomError::Js {
                message: "appendChild rejected".to_string(),
            });
        }
        items.push(text.to_string());
        Ok(())
    }
}

/// Form with fixed input values.
pub struct FixedForm {
    pub url: String,
    pub name: String,
}

impl FixedForm {
    pub fn new(url: &str, name: &str) -> Self {
        Self {
            url: url.to_string(),
            name: name.to_string(),
        }
    }
}

impl ServiceForm for FixedForm {
    fn url(&self) -> Result<String, DomError> {
        Ok(self.url.clone())
    }

    fn name(&self) -> Result<String, DomError> {
        Ok(self.name.clone())
    }
}

/// Form whose inputs are missing from the page.
pub struct MissingForm;

impl ServiceForm for MissingForm {
    fn url(&self) -> Result<String, DomError> {
        Err(DomError::MissingElement {
            selector: "#url".to_string(),
        })
    }

    fn name(&self) -> Result<String, DomError> {
        Err(DomError::MissingElement {
            selector: "#url-name".to_string(),
        })
    }
}

/// Counts reloads.
#[derive(Default)]
pub struct CountingNavigator {
    reloads: Cell<usize>,
}

impl CountingNavigator {
    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl PageNavigator for CountingNavigator {
    fn reload(&self) -> Result<(), DomError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}
