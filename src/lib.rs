//! Skilldeck - Skill Collection Management Service
//!
//! This crate implements a backend for user-owned skill sets: named
//! collections of skills, each carrying a vote count and a deduplicated
//! set of normalized tags.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
