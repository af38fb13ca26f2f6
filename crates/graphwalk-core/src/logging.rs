use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Emit a trace event carrying the time since `$start`.
///
/// Traversal entry points call this on completion, e.g.
/// `trace_time!(started, "bfs", steps = traversal.total_steps)`.
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr $(, $field:ident = $value:expr)* $(,)?) => {
        tracing::trace!(
            operation = $name,
            elapsed_us = $start.elapsed().as_micros() as u64,
            $($field = $value,)*
            "timing"
        )
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "debug",
        (false, None) => "warn",
        (_, Some(level)) => level,
    };

    init_with_level(level, log_json)
}

/// Build the filter directive for a bare level or a full directive string.
fn directive_for(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        // The core crate logs under its own target; keep both in step.
        format!("graphwalk={level},graphwalk_core={level}")
    }
}

/// Span lifecycle events to report.
///
/// Each traversal runs inside one instrumented span, so its close event
/// carries the run's busy time. JSON output reports closes; compact output
/// stays event-only.
fn span_events(log_json: bool) -> FmtSpan {
    if log_json {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHWALK_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(directive_for(level)));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_span_events(span_events(log_json));

    let registry = tracing_subscriber::registry().with(filter);
    if log_json {
        // Flatten fields so `start` and `nodes` sit beside the message.
        registry
            .with(
                layer
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()?;
    } else {
        registry.with(layer.compact().with_target(false)).try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_for_bare_level() {
        assert_eq!(
            directive_for("debug"),
            "graphwalk=debug,graphwalk_core=debug"
        );
    }

    #[test]
    fn test_directive_for_full_directive() {
        assert_eq!(directive_for("graphwalk_core=trace"), "graphwalk_core=trace");
    }

    #[test]
    fn test_span_events_close_only_for_json() {
        assert_eq!(span_events(true), FmtSpan::CLOSE);
        assert_eq!(span_events(false), FmtSpan::NONE);
    }
}
