use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// colog's formatter on an env_logger builder; module filters from `RUST_LOG` still apply
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level);
        builder.init();
    }
}
