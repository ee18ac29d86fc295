mod translation_key;

pub use translation_key::label_translation_key;
