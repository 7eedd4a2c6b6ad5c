// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - identity access and the provisioning workflow.

pub mod identity;
pub mod provisioner;

pub use identity::{IdentityClient, IdentityRecord};
pub use provisioner::{credential_sheet, ProvisionOutcome, Provisioner};
