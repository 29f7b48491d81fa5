//! Global logging module
//!
//! Provides a process-wide logger installed once at startup, a thread-scoped
//! override for embedding and tests, and the support functions behind the
//! logging macros. When no logger is installed every log call is a no-op.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static SCOPED_LOGGER: RefCell<Option<Arc<LoggingService>>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize the global logger from runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

// ============================================================================
// ACCESS
// ============================================================================

/// Run `f` with `service` receiving every event logged on this thread
pub fn with_scoped_logger<F, R>(service: Arc<LoggingService>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _restore = ScopeGuard {
        previous: SCOPED_LOGGER.with(|slot| slot.borrow_mut().replace(service)),
    };
    f()
}

/// Puts the outer scoped logger back when a scope ends, unwinding included
struct ScopeGuard {
    previous: Option<Arc<LoggingService>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        SCOPED_LOGGER.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Active logger for the current thread: scoped override first, then global
pub fn current_logger() -> Option<Arc<LoggingService>> {
    SCOPED_LOGGER
        .with(|slot| slot.borrow().clone())
        .or_else(|| GLOBAL_LOGGER.get().cloned())
}

/// Whether a debug event would reach any logger
pub fn debug_enabled() -> bool {
    current_logger().is_some_and(|logger| logger.should_log(LogLevel::Debug))
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Backs `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let Some(logger) = current_logger() else {
        return;
    };

    let mut event = LogEvent::error(code, message);
    if let Some(s) = span {
        event = event.with_span(s);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Backs `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = current_logger() else {
        return;
    };

    let mut event = LogEvent::success(code, message);
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Backs `log_info!`, `log_warning!`, and `log_debug!`
pub fn log_with_level(level: LogLevel, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = current_logger() else {
        return;
    };

    let mut event = match level {
        LogLevel::Error => LogEvent::error(codes::system::INTERNAL_ERROR, message),
        LogLevel::Warning => LogEvent::warning(message),
        LogLevel::Info => LogEvent::info(message),
        LogLevel::Debug => LogEvent::debug(message),
    };
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_service(level: LogLevel) -> (Arc<LoggingService>, Arc<MemoryLogger>) {
        let memory = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(memory.clone(), level));
        (service, memory)
    }

    #[test]
    fn test_macros_reach_scoped_logger() {
        let (service, memory) = memory_service(LogLevel::Debug);

        with_scoped_logger(service, || {
            crate::log_error!(codes::lexical::INVALID_CHARACTER, "bad", "character" => '#');
            crate::log_success!(codes::success::TOKENIZATION_COMPLETE, "done", "tokens" => 3);
            crate::log_info!("info");
            crate::log_warning!("warning", "reason" => "test");
            crate::log_debug!("debug", "value" => 1);
        });

        let events = memory.get_events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].context.get("character").map(String::as_str), Some("#"));
        assert_eq!(events[1].context.get("tokens").map(String::as_str), Some("3"));
        assert!(events[3].is_warning());
        assert!(events[4].is_debug());
    }

    #[test]
    fn test_debug_suppressed_below_level() {
        let (service, memory) = memory_service(LogLevel::Info);

        with_scoped_logger(service, || {
            assert!(!debug_enabled());
            crate::log_debug!("hidden");
        });

        assert_eq!(memory.event_count(), 0);
    }

    #[test]
    fn test_scope_is_restored() {
        let (service, _memory) = memory_service(LogLevel::Debug);
        with_scoped_logger(service, || {
            assert!(current_logger().is_some());
        });
        let restored = SCOPED_LOGGER.with(|slot| slot.borrow().is_none());
        assert!(restored);
    }

    #[test]
    fn test_scope_is_restored_after_panic() {
        let (outer, outer_memory) = memory_service(LogLevel::Debug);
        let (inner, inner_memory) = memory_service(LogLevel::Debug);

        with_scoped_logger(outer, || {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                with_scoped_logger(inner, || panic!("scanner blew up"))
            }));
            assert!(result.is_err());
            crate::log_info!("after panic");
        });

        assert_eq!(outer_memory.event_count(), 1);
        assert_eq!(inner_memory.event_count(), 0);
        let restored = SCOPED_LOGGER.with(|slot| slot.borrow().is_none());
        assert!(restored);
    }
}
