//! Fault-isolating callback dispatch
//!
//! Scripted events are written independently of each other. One broken zone
//! script must not stop the rest of the frame, so every callback runs through
//! [`dispatch`]: an `Err` or a panic is logged with the source id and
//! swallowed.

use crate::error::{HandlerError, HandlerResult};
use std::panic::{self, AssertUnwindSafe};

/// Run a callback, logging and swallowing any failure.
///
/// Returns `true` if the callback completed successfully.
pub fn dispatch<F>(source: &str, f: F) -> bool
where
    F: FnOnce() -> HandlerResult,
{
    dispatch_with(source, f).is_some()
}

/// Run a value-producing callback, logging and swallowing any failure.
pub fn dispatch_with<F, R>(source: &str, f: F) -> Option<R>
where
    F: FnOnce() -> Result<R, HandlerError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            log::warn!("[{}] {}", source, error);
            None
        }
        Err(payload) => {
            let error = HandlerError::Panicked(panic_message(payload.as_ref()));
            log::warn!("[{}] {}", source, error);
            None
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_dispatch_success() {
        let count = AtomicU32::new(0);
        assert!(dispatch("test", || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_swallows_error() {
        assert!(!dispatch("zone:broken", || Err(HandlerError::failed("boom"))));
    }

    #[test]
    fn test_dispatch_swallows_panic() {
        let survived = dispatch("zone:panics", || panic!("script exploded"));
        assert!(!survived);

        // Dispatch keeps working afterwards
        assert!(dispatch("zone:fine", || Ok(())));
    }

    #[test]
    fn test_dispatch_with_value() {
        assert_eq!(dispatch_with("calc", || Ok(42)), Some(42));
        assert_eq!(
            dispatch_with::<_, u32>("calc", || Err(HandlerError::failed("nope"))),
            None
        );
    }
}
