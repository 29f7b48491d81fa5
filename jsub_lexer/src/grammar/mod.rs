pub mod keywords;

pub use keywords::{Keyword, LexicalSets};
