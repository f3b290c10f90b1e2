pub mod install;
pub mod launcher;
pub mod merge;
pub mod port;
pub mod prerequisites;
pub mod unpack;
