//! Main module for sprig library functionality

pub mod lexer;
pub mod parser;
pub mod processor;
