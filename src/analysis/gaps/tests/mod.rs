mod common;
mod structure;
