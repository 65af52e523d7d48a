//! Resource facades
//!
//! One facade per API resource, obtained from [`crate::Client`]. Each
//! facade validates identifiers locally, then issues a single JSON:API
//! request through the shared transport. Resources are
//! [`Resource`](crate::jsonapi::Resource) objects with typed attributes.
//!
//! Plans, applies and cost estimates expose their growing log through
//! [`LogReader`](crate::logs::LogReader); policy check output is fetched
//! once the check has been evaluated.

mod applies;
mod cost_estimates;
mod organizations;
mod plans;
mod policy_checks;
mod runs;
mod timestamps;
mod variables;
mod workspaces;

pub use applies::{Applies, Apply, ApplyAttributes, ApplyStatus};
pub use cost_estimates::{CostEstimate, CostEstimateAttributes, CostEstimateStatus, CostEstimates};
pub use organizations::{
    Organization, OrganizationAttributes, OrganizationCreateOptions, OrganizationUpdateOptions,
    Organizations,
};
pub use plans::{Plan, PlanAttributes, PlanStatus, Plans};
pub use policy_checks::{
    PolicyActions, PolicyCheck, PolicyCheckAttributes, PolicyChecks, PolicyPermissions,
    PolicyResult, PolicyScope, PolicyStatus, POLICY_POLL_INTERVAL,
};
pub use runs::{Run, RunAttributes, RunCreateOptions, RunStatus, Runs};
pub use timestamps::StatusTimestamps;
pub use variables::{
    Variable, VariableAttributes, VariableCategory, VariableCreateOptions, VariableUpdateOptions,
    Variables,
};
pub use workspaces::{
    Workspace, WorkspaceAttributes, WorkspaceCreateOptions, WorkspaceListOptions,
    WorkspaceUpdateOptions, Workspaces,
};

#[cfg(test)]
mod tests;
