use std::io::Write;

use chrono::Utc;
use colored::{Color, Colorize as _};
use env_logger::{Builder, Env};
use log::{Level, LevelFilter};

/// Crates whose debug output would drown the notification log.
const NOISY_TARGETS: [&str; 4] = ["hyper_util", "reqwest", "rustls", "h2"];

/// Sets up colored stderr logging. `RUST_LOG` wins over `verbosity`.
pub fn init(verbosity: u8) {
    let mut builder = Builder::new();

    for target in NOISY_TARGETS {
        builder.filter_module(target, LevelFilter::Warn);
    }
    builder.parse_env(Env::default().default_filter_or(default_filter(verbosity)));

    builder.format(|f, record| {
        let time = Utc::now().format("%H:%M:%S%.3f").to_string().dimmed();
        let color = color_by_level(record.level());
        let level = format!("{:<5}", record.level()).color(color).bold();
        let message = record.args().to_string();

        if record.level() <= Level::Info {
            writeln!(f, "{time} {level} {message}")
        } else {
            let target = record.target().dimmed();
            writeln!(f, "{time} {level} {target}: {message}")
        }
    });

    builder.init();
}

const fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 if cfg!(debug_assertions) => "debug",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

const fn color_by_level(level: Level) -> Color {
    match level {
        Level::Trace => Color::Magenta,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}
