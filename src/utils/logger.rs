#[cfg(feature = "logger")]
use crate::errors::prelude::*;

#[cfg(feature = "logger")]
use env_logger::Builder;
#[cfg(feature = "logger")]
use log::LevelFilter;
#[cfg(feature = "logger")]
use std::env;
#[cfg(feature = "logger")]
use std::io::Write;

/// `env_logger` backend for applications and tests that do not install
/// their own `log` implementation.
#[cfg(feature = "logger")]
pub struct CryptoDefaultLogger;

#[cfg(feature = "logger")]
impl CryptoDefaultLogger {
    /// Installs the logger. `pattern` uses `RUST_LOG` syntax and falls back
    /// to the `RUST_LOG` variable; everything is off when neither is set.
    pub fn init(pattern: Option<String>) -> UrsaCryptoResult<()> {
        let pattern = pattern.or_else(|| env::var("RUST_LOG").ok());

        Builder::new()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{:>5}|{:<30}|{:>35}:{:<4}| {}",
                    record.level(),
                    record.target(),
                    record.file().unwrap_or(""),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .filter(None, LevelFilter::Off)
            .parse_filters(pattern.as_deref().unwrap_or(""))
            .try_init()?;

        Ok(())
    }
}

/// Hides secret values from log output in release builds.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! secret {
    ($val:expr) => {{
        $val
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! secret {
    ($val:expr) => {{
        "_"
    }};
}
