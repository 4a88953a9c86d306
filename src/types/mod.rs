//! Wire types shared by the wizard, the backend client and the mock backend.
//!
//! Field names follow the backend's JSON contract, so some structs use
//! camelCase (wizard payloads) and others snake_case (launch endpoints).

mod deployment;
mod launch;
mod platform;
mod product;

pub use deployment::{DeployPhase, DeploymentStatus};
pub use launch::{
    DeployResponse, LaunchRequest, NotifyRequest, ProductGenerationRequest,
    ProductGenerationResponse, ValidationResult,
};
pub use platform::{Platform, PlatformList};
pub use product::GeneratedProduct;
