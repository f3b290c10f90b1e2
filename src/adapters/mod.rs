pub mod archive;
pub mod command_runner;
pub mod local_fs;

pub use command_runner::SystemCommandRunner;
