use utoipa::{Modify, OpenApi};

use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::features::users::models as users_models;
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Tickets
        tickets_handlers::create_ticket,
        tickets_handlers::get_ticket,
        tickets_handlers::assign_ticket,
    ),
    components(
        schemas(
            // Users
            users_models::User,
            // Tickets
            tickets_models::Priority,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::AssignTicketDto,
            tickets_dtos::TicketCreatedDto,
            tickets_dtos::TicketResponseDto,
            ApiResponse<tickets_dtos::TicketCreatedDto>,
            ApiResponse<tickets_dtos::TicketResponseDto>,
        )
    ),
    tags(
        (name = "tickets", description = "Ticket creation and assignment"),
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_ticket_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/tickets"));
        assert!(doc.paths.paths.contains_key("/api/tickets/{id}"));
        assert!(doc.paths.paths.contains_key("/api/tickets/{id}/assignee"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();

        SwaggerInfoModifier {
            title: "Desk".to_string(),
            version: "9.9.9".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Desk");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Internal"));
    }
}
