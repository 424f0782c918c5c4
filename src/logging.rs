use std::io::Write;

use env_logger::{Builder, Env};

/// Install a timestamped `env_logger` for native hosts. `RUST_LOG`
/// overrides the `info` default.
pub fn init_logger() {
    builder().init();
}

/// Logger for tests; safe to call from every test.
pub fn init_test_logger() {
    let _ = builder().is_test(true).try_init();
}

fn builder() -> Builder {
    let env = Env::default().default_filter_or("info");
    let mut builder = Builder::from_env(env);
    builder.format(|buf, record| {
        let now = chrono::Local::now();
        writeln!(
            buf,
            "{} [{}] {}",
            now.format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });
    builder
}
