//! Registered observers and their site-scope filter.

use crate::payload::Payload;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Observer invoked with each delivered payload.
pub type Callback = Arc<dyn Fn(&Payload) + Send + Sync>;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Registration identity, unique per bus.
pub(crate) struct SubscriberId(pub(crate) u64);

#[derive(Clone)]
pub(crate) struct Subscriber {
    id: SubscriberId,
    site_scope: Option<String>,
    callback: Callback,
}

impl Subscriber {
    pub(crate) fn new(id: SubscriberId, site_scope: Option<&str>, callback: Callback) -> Self {
        Self {
            id,
            site_scope: site_scope.map(str::to_string),
            callback,
        }
    }

    pub(crate) fn id(&self) -> SubscriberId {
        self.id
    }

    pub(crate) fn site_scope(&self) -> Option<&str> {
        self.site_scope.as_deref()
    }

    /// Unscoped subscribers accept everything; scoped ones only their own site.
    pub(crate) fn accepts(&self, payload: &Payload) -> bool {
        match self.site_scope.as_deref() {
            None => true,
            Some(scope) => payload.site_id() == Some(scope),
        }
    }

    pub(crate) fn deliver(&self, payload: &Payload) {
        (self.callback)(payload)
    }
}

impl Debug for Subscriber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("id", &self.id)
            .field("site_scope", &self.site_scope)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Subscriber, SubscriberId};
    use crate::payload::Payload;
    use serde_json::json;
    use std::sync::Arc;

    fn subscriber(site_scope: Option<&str>) -> Subscriber {
        Subscriber::new(SubscriberId(1), site_scope, Arc::new(|_| {}))
    }

    #[test]
    fn unscoped_subscriber_accepts_any_payload() {
        let subscriber = subscriber(None);

        assert!(subscriber.accepts(&Payload::empty()));
        assert!(subscriber.accepts(&Payload::new(json!({ "siteId": "a" }))));
    }

    #[test]
    fn scoped_subscriber_requires_matching_site() {
        let subscriber = subscriber(Some("site-1"));

        assert!(subscriber.accepts(&Payload::new(json!({ "siteId": "site-1" }))));
        assert!(!subscriber.accepts(&Payload::new(json!({ "siteId": "site-2" }))));
        assert!(!subscriber.accepts(&Payload::new(json!({ "courseId": 3 }))));
        assert!(!subscriber.accepts(&Payload::empty()));
    }
}
