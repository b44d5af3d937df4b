//! Host services for the terminal demo.
//!
//! Requests are queued and answered by the event loop: capabilities are
//! granted at once, choosers open a path prompt at the bottom of the screen.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use log::debug;
use settings_view::host::{Capability, ChooserRequest, HostServices, RequestToken};

#[derive(Debug, Clone)]
pub enum HostRequest {
    Capability(RequestToken, Capability),
    Chooser(RequestToken, ChooserRequest),
}

/// Queue of host requests shared with the event loop.
#[derive(Debug, Clone, Default)]
pub struct TerminalHost {
    queue: Arc<Mutex<VecDeque<HostRequest>>>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the oldest unanswered request.
    pub fn next_request(&self) -> Option<HostRequest> {
        self.queue.lock().ok()?.pop_front()
    }

    fn push(&self, request: HostRequest) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(request);
        }
    }
}

impl HostServices for TerminalHost {
    fn request_capability(&self, token: RequestToken, capability: &Capability) {
        debug!("Host queued capability '{}' ({})", capability, token);
        self.push(HostRequest::Capability(token, capability.clone()));
    }

    fn launch_chooser(&self, token: RequestToken, request: &ChooserRequest) {
        debug!("Host queued chooser for '{}' ({})", request.mime_type, token);
        self.push(HostRequest::Chooser(token, request.clone()));
    }
}
