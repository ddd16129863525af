#[macro_use]
extern crate log;

mod tracker;
pub use tracker::{demo_packets, summarize};
