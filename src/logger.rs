use log::{Level, LevelFilter, Metadata, Record};
use std::io::{self, Write};

static STDOUT_LOGGER: StdoutLogger = StdoutLogger;
struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

pub fn setup() {
    _ = log::set_logger(&STDOUT_LOGGER);
    _ = log::set_max_level(LevelFilter::Info);
}
