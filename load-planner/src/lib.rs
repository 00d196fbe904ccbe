//! Freight load planner server.
//!
//! A web application that answers: "I'm a truck in this city today,
//! which loads should I chain to make money and still get home?"

pub mod cache;
pub mod distance;
pub mod domain;
pub mod loadboard;
pub mod planner;
pub mod web;
