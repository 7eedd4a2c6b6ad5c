// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for provisioning.

pub mod staff;
pub mod tenant;
pub mod user;

pub use staff::StaffMembership;
pub use tenant::Tenant;
pub use user::{StaffRole, UserProfile, UserSpec};
