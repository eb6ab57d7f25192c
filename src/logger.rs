//! Console logging. Every line is `[LEVEL][MM-DD HH:MM:SS.mmm] message`,
//! timestamps in UTC.

use std::sync::OnceLock;

/// Switches on [`event!`] output when set, whatever its value.
pub const EVENTS_ENV: &str = "LOG_SENTINEL_EVENTS";

/// Looked up on first use only.
pub fn events_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os(EVENTS_ENV).is_some())
}

/// One formatted log line. `colour` is an ANSI SGR code applied to the
/// level and timestamp prefix only.
pub fn line(colour: &str, level: &str, message: &str) -> String {
    let tag = format!("[{level}]");
    format!(
        "\x1b[{colour}m{tag:<7}[{}]\x1b[0m {message}",
        chrono::Utc::now().format("%m-%d %H:%M:%S%.3f")
    )
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("{}", $crate::logger::line("32", "INFO", &format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("{}", $crate::logger::line("33", "LOG", &format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        println!("{}", $crate::logger::line("35", "WARN", &format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("{}", $crate::logger::line("31", "ERROR", &format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!("{}", $crate::logger::line("1;31", "FATAL", &format!($($arg)*)))
    };
}

/// Conjunction warnings against one guarded asset, as `<asset>: message`.
///
/// `alert!(report.asset() => "{} km", distance)`
#[macro_export]
macro_rules! alert {
    ($asset:expr => $($arg:tt)*) => {
        println!(
            "{}",
            $crate::logger::line("1;31", "ALERT", &format!("{}: {}", $asset, format_args!($($arg)*)))
        )
    };
}

/// Per-sample diagnostics, see [`EVENTS_ENV`].
#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            println!("{}", $crate::logger::line("36", "EVENT", &format!($($arg)*)))
        }
    };
}
