//! Asynchronous requests to the host: capability grants and file choosers.
//!
//! The host answers some requests later, possibly after the component that
//! asked has been torn down and rebuilt. Every request therefore carries a
//! [`RequestToken`]; the host hands the token back with the result, and a
//! result whose token is no longer pending is dropped instead of being
//! applied to whatever item happens to sit at the old position.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use uuid::Uuid;

use crate::item::ResourceUri;

/// Named capability the host may grant or refuse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Capability(Cow<'static, str>);

impl Capability {
    /// Read access to shared storage, required by the file chooser.
    pub const READ_STORAGE: Capability = Capability(Cow::Borrowed("storage.read"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn read_storage() -> Self {
        Self::READ_STORAGE
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the host's file chooser should offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChooserRequest {
    /// Mime filter, e.g. `image/*`.
    pub mime_type: String,
    /// Resource to start browsing from, if one was chosen before.
    pub initial_uri: Option<ResourceUri>,
}

/// Correlates an asynchronous host request with its result.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RequestToken(Uuid);

impl RequestToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RequestToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Services the host provides for permission prompts and file choosing.
///
/// Implementations start the interaction and return immediately. The result
/// is delivered later through [`HostBridge::complete_capability`] or
/// [`HostBridge::complete_chooser`] with the same token.
pub trait HostServices: Send + Sync {
    /// Ask the user (or policy) for a capability.
    fn request_capability(&self, token: RequestToken, capability: &Capability);

    /// Open the file chooser.
    fn launch_chooser(&self, token: RequestToken, request: &ChooserRequest);
}

type CapabilityCallback = Box<dyn FnOnce(bool) + Send>;
type ChooserCallback = Box<dyn FnOnce(Option<ResourceUri>) + Send>;

enum Pending {
    Capability(CapabilityCallback),
    Chooser(ChooserCallback),
}

#[derive(Default)]
struct BridgeInner {
    host: Option<Arc<dyn HostServices>>,
    pending: HashMap<RequestToken, Pending>,
}

/// Issues host requests and routes their results back to the requester.
///
/// Cloning is cheap; clones share the registered host and pending requests.
#[derive(Clone, Default)]
pub struct HostBridge {
    inner: Arc<Mutex<BridgeInner>>,
}

impl HostBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the host that serves requests.
    pub fn register(&self, host: Arc<dyn HostServices>) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.host = Some(host);
        }
    }

    pub fn is_registered(&self) -> bool {
        self.inner
            .lock()
            .map(|guard| guard.host.is_some())
            .unwrap_or(false)
    }

    /// Ask the host for `capability`; `on_result` receives the grant.
    ///
    /// Returns `None` when no host is registered; `on_result` is then dropped
    /// without being called.
    pub fn request_capability<F>(&self, capability: &Capability, on_result: F) -> Option<RequestToken>
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let (token, host) = self.enqueue(Pending::Capability(Box::new(on_result)))?;
        debug!("Requesting capability '{}' ({})", capability, token);
        host.request_capability(token, capability);
        Some(token)
    }

    /// Open the host's chooser; `on_result` receives the pick, or `None` when
    /// the user cancelled.
    pub fn launch_chooser<F>(&self, request: &ChooserRequest, on_result: F) -> Option<RequestToken>
    where
        F: FnOnce(Option<ResourceUri>) + Send + 'static,
    {
        let (token, host) = self.enqueue(Pending::Chooser(Box::new(on_result)))?;
        debug!("Launching chooser for '{}' ({})", request.mime_type, token);
        host.launch_chooser(token, request);
        Some(token)
    }

    /// Deliver a capability result. Returns false if `token` is not pending.
    pub fn complete_capability(&self, token: RequestToken, granted: bool) -> bool {
        match self.take(token) {
            Some(Pending::Capability(callback)) => {
                callback(granted);
                true
            }
            Some(Pending::Chooser(_)) => {
                warn!("Token {} belongs to a chooser request, not a capability request", token);
                false
            }
            None => false,
        }
    }

    /// Deliver a chooser result. Returns false if `token` is not pending.
    pub fn complete_chooser(&self, token: RequestToken, chosen: Option<ResourceUri>) -> bool {
        match self.take(token) {
            Some(Pending::Chooser(callback)) => {
                callback(chosen);
                true
            }
            Some(Pending::Capability(_)) => {
                warn!("Token {} belongs to a capability request, not a chooser request", token);
                false
            }
            None => false,
        }
    }

    /// Forget every pending request. Late results for them are ignored.
    pub fn cancel_all(&self) -> usize {
        let Ok(mut guard) = self.inner.lock() else {
            return 0;
        };
        let count = guard.pending.len();
        guard.pending.clear();
        if count > 0 {
            debug!("Cancelled {} pending host request(s)", count);
        }
        count
    }

    pub fn pending_count(&self) -> usize {
        self.inner.lock().map(|guard| guard.pending.len()).unwrap_or(0)
    }

    fn enqueue(&self, pending: Pending) -> Option<(RequestToken, Arc<dyn HostServices>)> {
        let mut guard = self.inner.lock().ok()?;
        let Some(host) = guard.host.clone() else {
            warn!("No host registered; dropping request");
            return None;
        };
        let token = RequestToken::new();
        guard.pending.insert(token, pending);
        // The host may answer synchronously, so the lock is released before calling it.
        Some((token, host))
    }

    fn take(&self, token: RequestToken) -> Option<Pending> {
        let pending = self.inner.lock().ok()?.pending.remove(&token);
        if pending.is_none() {
            debug!("Ignoring result for unknown or stale token {}", token);
        }
        pending
    }
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("registered", &self.is_registered())
            .field("pending", &self.pending_count())
            .finish()
    }
}
