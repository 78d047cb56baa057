pub mod argument;
pub mod dispatch;
pub mod tokenizer;
