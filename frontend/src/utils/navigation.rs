//! Browser-level navigation that sits outside the router: hard redirects,
//! history back and reloads.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Assign(String),
    Replace(String),
    Back,
    Reload,
}

#[cfg(target_arch = "wasm32")]
fn perform(nav: Navigation) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let result = match &nav {
        Navigation::Assign(path) => window.location().set_href(path),
        Navigation::Replace(path) => window.location().replace(path),
        Navigation::Back => window.history().and_then(|history| history.back()),
        Navigation::Reload => window.location().reload(),
    };
    if result.is_err() {
        log::error!("navigation {:?} failed", nav);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HISTORY: std::cell::RefCell<Vec<Navigation>> = const { std::cell::RefCell::new(Vec::new()) };
}

// Host builds have no window; record the request so tests can observe it.
#[cfg(not(target_arch = "wasm32"))]
fn perform(nav: Navigation) {
    HISTORY.with(|history| history.borrow_mut().push(nav));
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn take_recorded() -> Vec<Navigation> {
    HISTORY.with(|history| std::mem::take(&mut *history.borrow_mut()))
}

pub fn assign_location(path: &str) {
    log::debug!("navigating to {}", path);
    perform(Navigation::Assign(path.to_string()));
}

pub fn replace_location(path: &str) {
    log::debug!("replacing location with {}", path);
    perform(Navigation::Replace(path.to_string()));
}

pub fn go_back() {
    perform(Navigation::Back);
}

pub fn reload() {
    perform(Navigation::Reload);
}
