pub mod config;
pub mod controller;
pub mod error;

pub use config::PageConfig;
pub use controller::{
    BrowserNavigator, MainController, Navigator, PageController,
};
pub use error::CrudError;
