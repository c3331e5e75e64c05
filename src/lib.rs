//! wasteland: walk a cyclic left/right instruction tape through a labeled
//! node network and count the steps from a start node to a terminal node.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
