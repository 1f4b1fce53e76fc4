pub mod classify;
pub mod endpoints;
pub mod heuristic;
pub mod localize;
pub mod parsers;
pub mod resolve;
pub mod schedule;
