use log::LevelFilter;

// The backend is installed with everything enabled; `log::set_max_level`
// then does the filtering so a later call can change the level.
cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn install_backend() -> Result<(), log::SetLoggerError> {
            console_log::init_with_level(log::Level::Trace)
        }
    } else {
        fn install_backend() -> Result<(), log::SetLoggerError> {
            env_logger::Builder::new()
                .filter_level(LevelFilter::Trace)
                .is_test(cfg!(test))
                .try_init()
        }
    }
}

/// Installs the browser console logger (stderr natively). Calling it again
/// only changes the level.
pub fn init(level: LevelFilter) {
    if install_backend().is_err() {
        log::debug!("logger already installed, updating level to {}", level);
    }
    log::set_max_level(level);
}
