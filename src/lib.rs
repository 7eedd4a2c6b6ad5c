// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Staff-Provisioner: one-shot staff account setup for a restaurant tenant
//!
//! This crate provisions the kitchen-display and floor-captain accounts of
//! a single tenant: identity accounts, Firestore profile documents, and
//! the tenant's staff membership records.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
