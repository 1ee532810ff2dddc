//! Style Collection Feature - style sheet tree + DOM map → style contract

pub mod collector;

pub use collector::StyleCollector;
