//! Runway video generation relay
//!
//! This library provides the core functionality for the video-relay service,
//! which records image-to-video requests in Xano, forwards them to Runway,
//! and writes the outcome back to Xano.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
