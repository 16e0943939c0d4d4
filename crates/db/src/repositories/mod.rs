//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod document_repo;
pub mod manufacturing_plan_repo;
pub mod material_repo;
pub mod milestone_repo;
pub mod project_detail_repo;
pub mod project_repo;
pub mod team_member_repo;

pub use document_repo::DocumentRepo;
pub use manufacturing_plan_repo::ManufacturingPlanRepo;
pub use material_repo::MaterialRepo;
pub use milestone_repo::MilestoneRepo;
pub use project_detail_repo::ProjectDetailRepo;
pub use project_repo::ProjectRepo;
pub use team_member_repo::TeamMemberRepo;
