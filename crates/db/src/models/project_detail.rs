//! Composite read model for the project detail page.

use serde::Serialize;

use crate::models::document::Document;
use crate::models::manufacturing_plan::ManufacturingPlan;
use crate::models::material::Material;
use crate::models::milestone::Milestone;
use crate::models::project::Project;
use crate::models::team_member::TeamMember;

/// A project together with every child collection. Lists are empty, never
/// absent, when the project has no rows of that kind.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub milestones: Vec<Milestone>,
    pub materials: Vec<Material>,
    pub documents: Vec<Document>,
    pub team_members: Vec<TeamMember>,
    pub manufacturing_plans: Vec<ManufacturingPlan>,
}
