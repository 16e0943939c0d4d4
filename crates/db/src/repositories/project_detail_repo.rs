//! Read-side aggregation of a project with all of its child records.

use foundry_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project_detail::ProjectDetail;
use crate::repositories::{
    DocumentRepo, ManufacturingPlanRepo, MaterialRepo, MilestoneRepo, ProjectRepo, TeamMemberRepo,
};

/// Loads [`ProjectDetail`] view models.
pub struct ProjectDetailRepo;

impl ProjectDetailRepo {
    /// Load a project and its five child collections.
    ///
    /// Returns `None` without touching the child tables when the project does
    /// not exist. The child queries run concurrently; the first failure fails
    /// the whole load.
    pub async fn load(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = ProjectRepo::find_by_id(pool, project_id).await? else {
            return Ok(None);
        };

        let (milestones, materials, documents, team_members, manufacturing_plans) = tokio::try_join!(
            MilestoneRepo::list_by_project(pool, project_id),
            MaterialRepo::list_by_project(pool, project_id),
            DocumentRepo::list_by_project(pool, project_id),
            TeamMemberRepo::list_by_project(pool, project_id),
            ManufacturingPlanRepo::list_by_project(pool, project_id),
        )?;

        tracing::debug!(
            project_id,
            milestones = milestones.len(),
            materials = materials.len(),
            documents = documents.len(),
            team_members = team_members.len(),
            manufacturing_plans = manufacturing_plans.len(),
            "Loaded project detail",
        );

        Ok(Some(ProjectDetail {
            project,
            milestones,
            materials,
            documents,
            team_members,
            manufacturing_plans,
        }))
    }
}
