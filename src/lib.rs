pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod printer;
pub mod template;
pub mod writer;
