// src/core.rs
pub mod counter;
pub mod emitter;
pub mod ranker;
pub mod table;
pub mod tokenizer;
pub mod vocabulary;
