use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Store listings are not published yet, badges link to placeholders.
pub fn app_store_url() -> &'static str {
    "#"
}

pub fn play_store_url() -> &'static str {
    "#"
}
