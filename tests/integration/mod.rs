//! Integration Tests Module
//!
//! Drives a real planner server on a loopback port with a scripted model,
//! the presentation adapter against it, and the chat-completions provider
//! against a stub upstream.

// Shared fixtures: scripted provider and server spawning
mod support;

// Planner endpoint over HTTP
mod planner_endpoint_test;

// Plan adapter, controller and view against live and failing servers
mod presentation_test;


// Configuration loading from files and environment
mod config_test;
