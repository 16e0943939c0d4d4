//! Route definitions for projects and their child records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{document, manufacturing_plan, material, milestone, project, team_member};
use crate::state::AppState;

/// Page and form routes.
///
/// ```text
/// GET    /                                   -> project::list
/// GET    /projects/new                       -> project::new_form
/// POST   /projects                           -> project::create
/// GET    /projects/{id}                      -> project::show
/// POST   /projects/{id}                      -> project::update
/// GET    /projects/{id}/edit                 -> project::edit_form
/// POST   /projects/{id}/delete               -> project::delete
///
/// POST   /projects/{id}/milestones           -> milestone::create
/// POST   /projects/{id}/materials            -> material::create
/// POST   /projects/{id}/documents            -> document::create
/// POST   /projects/{id}/team-members         -> team_member::create
/// POST   /projects/{id}/manufacturing-plans  -> manufacturing_plan::create
///
/// POST   /projects/{id}/<collection>/{record_id}/delete -> <collection>::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/projects", post(project::create))
        .route("/projects/new", get(project::new_form))
        .route("/projects/{id}", get(project::show).post(project::update))
        .route("/projects/{id}/edit", get(project::edit_form))
        .route("/projects/{id}/delete", post(project::delete))
        .route("/projects/{id}/milestones", post(milestone::create))
        .route("/projects/{id}/materials", post(material::create))
        .route("/projects/{id}/documents", post(document::create))
        .route("/projects/{id}/team-members", post(team_member::create))
        .route(
            "/projects/{id}/manufacturing-plans",
            post(manufacturing_plan::create),
        )
        .route(
            "/projects/{id}/milestones/{record_id}/delete",
            post(milestone::delete),
        )
        .route(
            "/projects/{id}/materials/{record_id}/delete",
            post(material::delete),
        )
        .route(
            "/projects/{id}/documents/{record_id}/delete",
            post(document::delete),
        )
        .route(
            "/projects/{id}/team-members/{record_id}/delete",
            post(team_member::delete),
        )
        .route(
            "/projects/{id}/manufacturing-plans/{record_id}/delete",
            post(manufacturing_plan::delete),
        )
}
