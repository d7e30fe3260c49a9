pub mod dictionary;
pub mod error;
pub mod loader;
pub mod messages;

pub use dictionary::{Dictionary, Section};
pub use error::{Error, Result};
pub use loader::{
    DICTIONARY_FILE_NAME, DictionarySource, LoadedDictionary, dictionary_path, load,
};
