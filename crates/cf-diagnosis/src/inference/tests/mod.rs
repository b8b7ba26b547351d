mod common;
mod formatting;
mod scoring;
