// Text processing: language resources and tokenization.

pub mod resources;
pub mod tokenizer;
