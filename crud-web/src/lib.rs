pub(crate) mod helpers;
pub(crate) mod vars;

pub mod app;
pub mod base;
pub mod components;

pub use base::{MainController, PageConfig, PageController};
pub use components::elements::{LinkButton, LinkButtonView};
pub use components::{ComponentBase, ComponentValue, FormComponent};
