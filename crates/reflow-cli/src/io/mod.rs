pub mod jsonl;
pub mod text;
