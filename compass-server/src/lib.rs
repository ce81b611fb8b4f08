//! Restroom compass server.
//!
//! A web application that answers: "where is the nearest restroom,
//! and which way do I walk to get there?"

pub mod catalog;
pub mod domain;
pub mod geo;
pub mod resolver;
pub mod web;
