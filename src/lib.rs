//! # GradPlan Rust Backend
//!
//! Degree-plan scheduling engine for university course catalogs.
//!
//! This crate assigns a degree's required courses to academic terms so a
//! student finishes within a bounded horizon, honoring prerequisite ordering
//! and a per-term credit cap. The planner is a single deterministic greedy
//! pass: it never backtracks and makes no optimality claim, but it always
//! returns a complete plan and reports what it could not place as warnings.
//!
//! ## Features
//!
//! - **Catalog Loading**: Parse degree catalogs from JSON format
//! - **Term Sequencing**: Generate alternating Fall/Spring term skeletons
//! - **Placement**: Greedy prerequisite- and credit-aware course placement
//! - **Consistency Audit**: Post-placement prerequisite-order checks
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Public data model shared by the engine and the HTTP surface
//! - [`models`]: Term label value types and catalog JSON parsing
//! - [`scheduler`]: Term sequencer and placement engine (the core)
//! - [`catalogs`]: Catalog repository trait and in-memory store
//! - [`services`]: High-level planning orchestration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The core (`scheduler`) is purely synchronous and side-effect-free: it
//! receives a fully-constructed [`api::DegreeCatalog`] and never touches the
//! filesystem or network itself.

pub mod api;

pub mod catalogs;
pub mod models;

pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
