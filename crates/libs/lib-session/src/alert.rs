//! User-visible alerts.

/// Blocking notification surface (`window.alert` in the browser).
///
/// Only used when the user explicitly clicks "Connect" and no wallet is
/// installed. Every other failure is logged instead.
pub trait AlertSink {
    fn alert(&self, message: &str);
}
