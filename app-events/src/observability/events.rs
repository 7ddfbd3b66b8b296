//! Canonical structured event names used across `app-events`.

// Subscription lifecycle events.
pub const SUBSCRIBE_OK: &str = "subscribe_ok";
pub const SUBSCRIBE_REPLAY: &str = "subscribe_replay";
pub const UNSUBSCRIBE_OK: &str = "unsubscribe_ok";

// Trigger and delivery events.
pub const CHANNEL_NAME_REJECTED: &str = "channel_name_rejected";
pub const PUBLISH_OK: &str = "publish_ok";
pub const PUBLISH_REJECTED: &str = "publish_rejected";
pub const PUBLISH_ONCE_STORED: &str = "publish_once_stored";
pub const PUBLISH_ONCE_IGNORED: &str = "publish_once_ignored";
pub const DELIVERY: &str = "delivery";
pub const CHANNEL_KIND_MISMATCH: &str = "channel_kind_mismatch";
pub const TYPED_DECODE_FAILED: &str = "typed_decode_failed";
