//! Protocol Tests
//!
//! Parser, dispatcher and line codec, without any sockets.

mod command_tests;
mod dispatch_tests;
