// Application layer: command handlers, query services and the state the
// (external) web framework drives them through.

pub mod api;
pub mod application;
