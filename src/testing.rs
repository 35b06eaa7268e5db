//! Test logger: forwards to `env_logger` and keeps every record so tests can
//! check what an operation logged. Tests give their `FileUtilities` a unique log
//! target and read back only the lines on that target.

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CapturedLine {
    pub level: Level,
    pub message: String,
}

static LINES: Mutex<Vec<(String, CapturedLine)>> = Mutex::new(Vec::new());
static INIT: Once = Once::new();

struct CapturingLogger {
    inner: env_logger::Logger,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut lines) = LINES.lock() {
            lines.push((
                record.target().to_string(),
                CapturedLine {
                    level: record.level(),
                    message: record.args().to_string(),
                },
            ));
        }
        self.inner.log(record);
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub(crate) fn init_test_logger() {
    INIT.call_once(|| {
        let inner = env_logger::Builder::from_default_env()
            .is_test(true)
            .build();
        if log::set_boxed_logger(Box::new(CapturingLogger { inner })).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Lines logged on `target` at `level`, in emission order.
pub(crate) fn captured(target: &str, level: Level) -> Vec<String> {
    LINES
        .lock()
        .map(|lines| {
            lines
                .iter()
                .filter(|(t, line)| t == target && line.level == level)
                .map(|(_, line)| line.message.clone())
                .collect()
        })
        .unwrap_or_default()
}
