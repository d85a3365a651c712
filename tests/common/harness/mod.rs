//! Test harness for driving the `nbsite` binary against a temp project.

mod command;
mod env;

pub use command::NbsiteCommand;
pub use env::TestSite;
