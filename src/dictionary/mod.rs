// Catalog module - subjects, dictionaries and their word mappings

mod model;
mod slug;

pub use model::{
    staging_key, validate_description, validate_title, Dictionary, DictionaryError, Subject,
    SubjectError, Words, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
};
pub use slug::slugify;
