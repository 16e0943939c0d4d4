//! Submitted HTML forms and their conversion into store DTOs.
//!
//! Every field arrives as optional text. Required fields are checked for
//! presence; blank optional fields are stored as `NULL`.

use foundry_core::error::CoreError;
use foundry_core::validation::{optional_integer, optional_text, require_non_empty};
use foundry_db::models::manufacturing_plan::CreateManufacturingPlan;
use foundry_db::models::material::CreateMaterial;
use foundry_db::models::milestone::CreateMilestone;
use foundry_db::models::project::{CreateProject, UpdateProject};
use foundry_db::models::team_member::CreateTeamMember;
use serde::Deserialize;

use crate::multipart::MultipartForm;

// ---------------------------------------------------------------------------
// Projects (multipart, see handlers::project)
// ---------------------------------------------------------------------------

/// Text fields of the project create/edit form.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

impl ProjectForm {
    pub fn from_multipart(form: &MultipartForm) -> Result<Self, CoreError> {
        Ok(Self {
            name: require_non_empty("name", form.text("name"))?,
            description: optional_text(form.owned("description")),
            start_date: optional_text(form.owned("start_date")),
            end_date: optional_text(form.owned("end_date")),
            status: optional_text(form.owned("status")),
        })
    }

    pub fn into_create(self, cover_image: Option<String>) -> CreateProject {
        CreateProject {
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            cover_image,
        }
    }

    /// Blank optional fields become `None`, which keeps the stored value.
    pub fn into_update(self, cover_image: Option<String>) -> UpdateProject {
        UpdateProject {
            name: Some(self.name),
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            cover_image,
        }
    }
}

// ---------------------------------------------------------------------------
// Child records (urlencoded)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct MilestoneForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

impl MilestoneForm {
    pub fn into_create(self) -> Result<CreateMilestone, CoreError> {
        Ok(CreateMilestone {
            title: require_non_empty("title", self.title.as_deref())?,
            description: optional_text(self.description),
            due_date: optional_text(self.due_date),
            status: optional_text(self.status),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MaterialForm {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub status: Option<String>,
}

impl MaterialForm {
    pub fn into_create(self) -> Result<CreateMaterial, CoreError> {
        Ok(CreateMaterial {
            name: require_non_empty("name", self.name.as_deref())?,
            quantity: optional_integer("quantity", self.quantity.as_deref())?,
            unit: optional_text(self.unit),
            status: optional_text(self.status),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamMemberForm {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

impl TeamMemberForm {
    pub fn into_create(self) -> Result<CreateTeamMember, CoreError> {
        Ok(CreateTeamMember {
            name: require_non_empty("name", self.name.as_deref())?,
            role: optional_text(self.role),
            email: optional_text(self.email),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ManufacturingPlanForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
}

impl ManufacturingPlanForm {
    pub fn into_create(self) -> Result<CreateManufacturingPlan, CoreError> {
        Ok(CreateManufacturingPlan {
            title: require_non_empty("title", self.title.as_deref())?,
            description: optional_text(self.description),
            start_date: optional_text(self.start_date),
            end_date: optional_text(self.end_date),
            status: optional_text(self.status),
        })
    }
}
