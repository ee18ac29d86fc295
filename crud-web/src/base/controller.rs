use std::cell::RefCell;

use log::{debug, error, warn};

use super::config::PageConfig;
use super::error::CrudError;

/// Page-level controller shared by every component on a page.
///
/// Components only consume this contract; navigation, translation and view
/// identity are resolved here.
pub trait MainController {
    /// `url` is whatever the component currently holds, possibly nothing.
    fn go_to_page(&self, url: Option<&str>);
    fn translation(&self, key: &str) -> String;
    fn plugin_identifier(&self) -> String;
    fn view_name(&self) -> String;
}

pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), CrudError>;
}

/// Navigates by assigning `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), CrudError> {
        let window = web_sys::window().ok_or_else(|| {
            CrudError::Navigation("window is not available".to_string())
        })?;
        window.location().set_href(url).map_err(|err| {
            CrudError::Navigation(
                err.as_string()
                    .unwrap_or_else(|| format!("failed to open {}", url)),
            )
        })
    }
}

pub struct PageController<N: Navigator> {
    config: PageConfig,
    navigator: N,
    current_url: RefCell<String>,
    previous_url: RefCell<String>,
}

impl<N: Navigator> PageController<N> {
    pub fn new(config: PageConfig, navigator: N) -> Self {
        let home_url = config.home_url().to_string();
        Self {
            config,
            navigator,
            current_url: RefCell::new(home_url.clone()),
            previous_url: RefCell::new(home_url),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn current_url(&self) -> String {
        self.current_url.borrow().clone()
    }

    pub fn previous_url(&self) -> String {
        self.previous_url.borrow().clone()
    }
}

impl PageController<BrowserNavigator> {
    pub fn for_browser(config: PageConfig) -> Self {
        Self::new(config, BrowserNavigator)
    }
}

impl<N: Navigator> MainController for PageController<N> {
    fn go_to_page(&self, url: Option<&str>) {
        let Some(url) = url else {
            warn!("No page url to navigate to, staying on the current page");
            return;
        };
        debug!("Navigating to {}", url);
        match self.navigator.navigate(url) {
            Ok(()) => {
                let left = self.current_url.replace(url.to_string());
                *self.previous_url.borrow_mut() = left;
            }
            Err(err) => error!("Failed to navigate to {}: {}", url, err),
        }
    }

    fn translation(&self, key: &str) -> String {
        match self.config.translation(key) {
            Some(text) => text.to_string(),
            None => {
                warn!("Missing translation for {}", key);
                key.to_string()
            }
        }
    }

    fn plugin_identifier(&self) -> String {
        self.config.plugin_identifier().to_string()
    }

    fn view_name(&self) -> String {
        self.config.view_name().to_string()
    }
}
