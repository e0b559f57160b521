//! Infrastructure: the rule catalog port, its static adapter and the
//! requirement memo cache.

pub mod cache;
pub mod catalog;
pub mod ports;
