mod component;

pub mod elements;

pub use component::{ComponentBase, ComponentValue, FormComponent};
