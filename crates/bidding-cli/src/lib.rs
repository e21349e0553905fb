pub mod logging;
pub mod repl;
pub mod report;
pub mod terminal;
