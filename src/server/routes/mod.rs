//! Front-end route handlers

pub mod data;
pub mod health;
pub mod pages;
