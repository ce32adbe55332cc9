// Route path constants - single source of truth for all served paths

pub const HOME: &str = "/";
pub const WILL: &str = "/will";

// Only mounted when API docs are enabled
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
