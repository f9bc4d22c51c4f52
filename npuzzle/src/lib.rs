#![doc = include_str!("../README.md")]

pub mod board;
pub mod error;
pub mod min_pq;
pub mod search_node;
pub mod solver;
pub mod stats;
