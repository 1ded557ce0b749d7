//! HTTP client wiring and the stress tester.
mod client;
mod tester;


pub use tester::Tester;
