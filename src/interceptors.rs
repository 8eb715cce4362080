//! Request/response hooks that log the pipeline without altering it.
//!
//! The base client calls these synchronously around every transport call.
//! Each hook emits exactly one structured event through the client's
//! [`Logger`] and hands its input back untouched, so the value (or error)
//! reaching the caller is the one the transport produced.
//!
//! | Hook | Level | When |
//! |---|---|---|
//! | [`on_cache_hit`] | DEBUG | fresh cache entry found, no request sent |
//! | [`on_request`] | INFO | request about to go out |
//! | [`on_request_error`] | ERROR | invalid input or network failure |
//! | [`on_response`] | INFO | 2xx response received |
//! | [`on_response_error`] | ERROR | non-2xx status or undecodable body |

use crate::logger::Logger;
use crate::{Error, RawResponse};
use http::Method;
use std::time::{Duration, Instant};
use tracing::Level;

/// What is being requested, carried through every hook of one call.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The HTTP method.
    pub method: Method,
    /// The resolved URL, or the caller's path when no URL could be built.
    pub target: String,
    started: Instant,
}

impl RequestContext {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            started: Instant::now(),
        }
    }

    /// Time since the context was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

pub fn on_cache_hit(ctx: RequestContext, logger: &Logger) -> RequestContext {
    logger.emit(Level::DEBUG, || {
        tracing::debug!(method = %ctx.method, url = %ctx.target, "Cache hit");
    });
    ctx
}

pub fn on_request(ctx: RequestContext, logger: &Logger) -> RequestContext {
    logger.emit(Level::INFO, || {
        tracing::info!(method = %ctx.method, url = %ctx.target, "Sending HTTP request");
    });
    ctx
}

pub fn on_request_error(error: Error, ctx: &RequestContext, logger: &Logger) -> Error {
    logger.emit(Level::ERROR, || {
        tracing::error!(
            method = %ctx.method,
            url = %ctx.target,
            error = %error,
            timeout = error.is_timeout(),
            "Request failed"
        );
    });
    error
}

pub fn on_response(response: RawResponse, ctx: &RequestContext, logger: &Logger) -> RawResponse {
    logger.emit(Level::INFO, || {
        tracing::info!(
            method = %ctx.method,
            url = %ctx.target,
            status = response.status.as_u16(),
            latency_ms = response.latency.as_millis(),
            "Received HTTP response"
        );
    });
    response
}

pub fn on_response_error(error: Error, ctx: &RequestContext, logger: &Logger) -> Error {
    let latency_ms = ctx.elapsed().as_millis();
    logger.emit(Level::ERROR, || match error.status() {
        Some(status) => tracing::error!(
            method = %ctx.method,
            url = %ctx.target,
            status = status.as_u16(),
            latency_ms = latency_ms,
            error = %error,
            "Response error"
        ),
        None => tracing::error!(
            method = %ctx.method,
            url = %ctx.target,
            latency_ms = latency_ms,
            error = %error,
            "Response error"
        ),
    });
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use http::StatusCode;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::level_filters::LevelFilter;
    use tracing::{Dispatch, Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug, Clone)]
    struct Captured {
        level: Level,
        fields: Vec<(String, String)>,
    }

    impl Captured {
        fn field(&self, name: &str) -> Option<&str> {
            self.fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<Captured>>>,
    }

    struct FieldVisitor(Vec<(String, String)>);

    impl Visit for FieldVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor(Vec::new());
            event.record(&mut visitor);
            self.events.lock().unwrap().push(Captured {
                level: *event.metadata().level(),
                fields: visitor.0,
            });
        }
    }

    fn capturing_logger(enabled: bool, level: LevelFilter) -> (Logger, Arc<Mutex<Vec<Captured>>>) {
        let layer = CaptureLayer::default();
        let events = layer.events.clone();
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layer));
        let logger = Logger::new(&LoggingConfig {
            enabled,
            level,
            destination: Some(dispatch),
        });
        (logger, events)
    }

    fn ctx() -> RequestContext {
        RequestContext::new(Method::GET, "https://pokeapi.co/api/v2/berry/cheri")
    }

    #[test]
    fn test_on_request_logs_method_and_url() {
        let (logger, events) = capturing_logger(true, LevelFilter::TRACE);

        let returned = on_request(ctx(), &logger);

        assert_eq!(returned.target, "https://pokeapi.co/api/v2/berry/cheri");
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::INFO);
        assert_eq!(events[0].field("method"), Some("GET"));
        assert_eq!(
            events[0].field("url"),
            Some("https://pokeapi.co/api/v2/berry/cheri")
        );
        assert_eq!(events[0].field("message"), Some("Sending HTTP request"));
    }

    #[test]
    fn test_on_response_passes_response_through() {
        let (logger, events) = capturing_logger(true, LevelFilter::TRACE);
        let response = RawResponse::new(
            "{\"id\":1}".to_string(),
            StatusCode::OK,
            Duration::from_millis(12),
        );

        let returned = on_response(response, &ctx(), &logger);

        assert_eq!(returned.body, "{\"id\":1}");
        assert_eq!(returned.status, StatusCode::OK);
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("status"), Some("200"));
        assert_eq!(events[0].field("latency_ms"), Some("12"));
    }

    #[test]
    fn test_on_response_error_returns_same_error() {
        let (logger, events) = capturing_logger(true, LevelFilter::TRACE);
        let error = Error::NotFound {
            url: "https://pokeapi.co/api/v2/berry/nope".to_string(),
        };

        let returned = on_response_error(error, &ctx(), &logger);

        assert!(matches!(returned, Error::NotFound { ref url } if url.ends_with("/berry/nope")));
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::ERROR);
        assert_eq!(events[0].field("status"), Some("404"));
    }

    #[test]
    fn test_on_request_error_without_status() {
        let (logger, events) = capturing_logger(true, LevelFilter::TRACE);
        let error = Error::InvalidArgument("id must be positive, got -1".to_string());

        let returned = on_request_error(error, &ctx(), &logger);

        assert!(matches!(returned, Error::InvalidArgument(_)));
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].field("timeout"), Some("false"));
        assert!(events[0].field("status").is_none());
    }

    #[test]
    fn test_cache_hit_is_debug_only() {
        let (logger, events) = capturing_logger(true, LevelFilter::INFO);

        on_cache_hit(ctx(), &logger);
        assert!(events.lock().unwrap().is_empty());

        let (logger, events) = capturing_logger(true, LevelFilter::DEBUG);
        on_cache_hit(ctx(), &logger);
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, Level::DEBUG);
    }

    #[test]
    fn test_disabled_logger_emits_nothing() {
        let (logger, events) = capturing_logger(false, LevelFilter::TRACE);

        let ctx = on_request(ctx(), &logger);
        on_cache_hit(ctx.clone(), &logger);
        on_response_error(
            Error::HttpStatus {
                status: StatusCode::BAD_GATEWAY,
                raw_response: String::new(),
            },
            &ctx,
            &logger,
        );

        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_destinations_are_isolated() {
        let (first, first_events) = capturing_logger(true, LevelFilter::TRACE);
        let (_second, second_events) = capturing_logger(true, LevelFilter::TRACE);

        on_request(ctx(), &first);

        assert_eq!(first_events.lock().unwrap().len(), 1);
        assert!(second_events.lock().unwrap().is_empty());
    }
}
