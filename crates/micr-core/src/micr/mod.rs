pub mod checksum;
pub mod tokenizer;
