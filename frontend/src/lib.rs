mod api;
mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Browser entry point: logging, panic hook, runtime config, then the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    log::info!("Starting LeaveHub frontend");

    // Config resolves in the background; API calls await it on first use.
    leptos::spawn_local(config::init());

    router::mount_app();
}
