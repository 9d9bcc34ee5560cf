//! In-memory stand-ins for browser collaborators, shared by unit tests.
//!
//! Each fake is a cheap `Clone` over shared state so a test can hand one copy
//! to the code under test and inspect another.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::Rc;

use crate::modal::ModalError;
use crate::modal::manual::ModalDom;
use crate::net::error::TransportError;
use crate::net::transport::{HttpRequest, HttpResponse, Transport};
use crate::state::credentials::CredentialStore;
use crate::util::browser::Browser;

#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    inner: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryCredentials {
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.store(token);
        store
    }

    /// Add unrelated persisted state so tests can observe a full clear.
    pub fn put_extra(&self, key: &str, value: &str) {
        self.inner.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl CredentialStore for MemoryCredentials {
    fn token(&self) -> Option<String> {
        crate::state::credentials::normalize_token(self.inner.borrow().get("token").cloned())
    }

    fn store(&self, token: &str) {
        self.inner.borrow_mut().insert("token".to_owned(), token.to_owned());
    }

    fn clear_all(&self) {
        self.inner.borrow_mut().clear();
    }
}

#[derive(Clone, Debug)]
pub struct RecordingBrowser {
    path: Rc<RefCell<String>>,
    redirects: Rc<RefCell<Vec<String>>>,
    prompts: Rc<RefCell<Vec<String>>>,
    answer: bool,
}

impl RecordingBrowser {
    pub fn at(path: &str) -> Self {
        Self {
            path: Rc::new(RefCell::new(path.to_owned())),
            redirects: Rc::default(),
            prompts: Rc::default(),
            answer: false,
        }
    }

    /// Answer every confirmation prompt with `answer`.
    pub fn answering(mut self, answer: bool) -> Self {
        self.answer = answer;
        self
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn redirect(&self, href: &str) {
        self.redirects.borrow_mut().push(href.to_owned());
        *self.path.borrow_mut() = format!("/{href}");
    }

    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_owned());
        self.answer
    }
}

/// Transport replaying queued outcomes and recording every request.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn respond(self, status: u16, content_type: Option<&str>, body: &str) -> Self {
        self.outcomes.borrow_mut().push_back(Ok(HttpResponse {
            status,
            content_type: content_type.map(str::to_owned),
            content_length: Some(body.len().to_string()),
            body: body.to_owned(),
        }));
        self
    }

    pub fn respond_json(self, status: u16, body: &str) -> Self {
        self.respond(status, Some("application/json"), body)
    }

    pub fn fail(self, err: TransportError) -> Self {
        self.outcomes.borrow_mut().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".to_owned())))
    }
}

#[derive(Debug, Default)]
struct DomState {
    overlays: Vec<String>,
    shown: BTreeSet<String>,
    body_modal_open: bool,
    backdrops: Vec<String>,
    failing_hides: BTreeSet<String>,
}

/// DOM double tracking overlays, the body marker, and backdrop elements.
#[derive(Clone, Debug, Default)]
pub struct FakeModalDom {
    state: Rc<RefCell<DomState>>,
}

impl FakeModalDom {
    pub fn with_overlays(ids: &[&str]) -> Self {
        let dom = Self::default();
        dom.state.borrow_mut().overlays = ids.iter().map(|id| (*id).to_owned()).collect();
        dom
    }

    /// Make every attempt to hide `id` through `set_overlay_shown` fail once.
    pub fn fail_next_hide(&self, id: &str) {
        self.state.borrow_mut().failing_hides.insert(id.to_owned());
    }

    pub fn backdrops(&self) -> Vec<String> {
        self.state.borrow().backdrops.clone()
    }

    pub fn body_modal_open(&self) -> bool {
        self.state.borrow().body_modal_open
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.state.borrow().shown.contains(id)
    }
}

impl ModalDom for FakeModalDom {
    fn has_overlay(&self, id: &str) -> bool {
        self.state.borrow().overlays.iter().any(|o| o == id)
    }

    fn overlay_shown(&self, id: &str) -> bool {
        self.is_shown(id)
    }

    fn set_overlay_shown(&self, id: &str, shown: bool) -> Result<(), ModalError> {
        let mut state = self.state.borrow_mut();
        if !shown && state.failing_hides.remove(id) {
            return Err(ModalError::Dom(format!("cannot hide {id}")));
        }
        if shown {
            state.shown.insert(id.to_owned());
        } else {
            state.shown.remove(id);
        }
        Ok(())
    }

    fn set_body_modal_open(&self, open: bool) -> Result<(), ModalError> {
        self.state.borrow_mut().body_modal_open = open;
        Ok(())
    }

    fn append_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError> {
        self.state.borrow_mut().backdrops.push(backdrop_id.to_owned());
        Ok(())
    }

    fn remove_backdrop(&self, backdrop_id: &str) -> Result<(), ModalError> {
        let mut state = self.state.borrow_mut();
        if let Some(pos) = state.backdrops.iter().position(|b| b == backdrop_id) {
            state.backdrops.remove(pos);
        }
        Ok(())
    }

    fn visible_overlays(&self) -> Vec<String> {
        let state = self.state.borrow();
        state
            .overlays
            .iter()
            .filter(|id| state.shown.contains(*id))
            .cloned()
            .collect()
    }
}
