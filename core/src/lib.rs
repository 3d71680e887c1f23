pub mod designos;
pub mod llm;

pub mod error;
