use crate::error::ClinvarResult;
use log;
use std::{
    cell::RefCell,
    fmt::{Binary, Display},
    sync::Once,
};

pub type Result<T> = ClinvarResult<T>;

#[allow(unused)]
static INIT_LOG: Once = Once::new();

thread_local! {
    static CAPTURED_WARNINGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Test logger: forwards to env_logger and keeps this thread's warnings.
struct CapturingLogger {
    inner: env_logger::Logger,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(&self.inner, metadata)
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Warn {
            CAPTURED_WARNINGS.with(|w| w.borrow_mut().push(record.args().to_string()));
        }
        log::Log::log(&self.inner, record);
    }

    fn flush(&self) {
        log::Log::flush(&self.inner);
    }
}

#[allow(unused)]
pub fn init_logger() {
    INIT_LOG.call_once(|| {
        let inner = env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .build();
        if log::set_boxed_logger(Box::new(CapturingLogger { inner })).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

/// Drains the warnings logged on the current thread since the last call.
#[allow(unused)]
pub fn take_warnings() -> Vec<String> {
    CAPTURED_WARNINGS.with(|w| std::mem::take(&mut *w.borrow_mut()))
}

pub fn handle_error_and_exit(err: impl Display) -> ! {
    log::error!("{err}");
    eprintln!("Error: {err}");
    std::process::exit(1);
}

pub fn log_warning<T>(err: impl Display, default: T) -> T {
    log::warn!("{err}");
    default
}

pub fn format_number_with_commas<T>(n: T) -> String
where
    T: Display + Binary,
{
    let s = n.to_string();
    let (sign, digits) = s.strip_prefix('-').map_or(("", s.as_str()), |d| ("-", d));

    if let 0..=3 = digits.len() {
        return s;
    }

    let mut result = String::with_capacity(digits.len() + (digits.len() - 1) / 3 + sign.len());
    for (digit_count, c) in digits.chars().rev().enumerate() {
        if digit_count > 0 && digit_count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result = result.chars().rev().collect();
    if !sign.is_empty() {
        result.insert_str(0, sign);
    }

    result
}
