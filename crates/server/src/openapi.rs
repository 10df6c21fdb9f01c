use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct MessageDoc {
    #[schema(example = "user not found")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserDoc {
    #[schema(example = "John")]
    pub name: Option<String>,
    #[schema(example = "john@x.com")]
    pub email: Option<String>,
    #[serde(rename = "phone number")]
    pub phone_number: Option<String>,
    pub role: Option<String>,
    pub schedule: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AnimalDoc {
    #[schema(example = "rabbit")]
    pub name: Option<String>,
    #[schema(example = 3)]
    pub age: Option<i64>,
    #[schema(example = "female")]
    pub gender: Option<String>,
    #[schema(example = "mamals")]
    pub species: Option<String>,
    #[serde(rename = "special requirements")]
    #[schema(example = "Needs medication")]
    pub special_requirements: Option<String>,
}

/// Body accepted by create and update; which shape applies depends on `{resource}`.
#[derive(Serialize, ToSchema)]
#[serde(untagged)]
pub enum RecordInputDoc {
    User(UserDoc),
    Animal(AnimalDoc),
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::records::list_records,
        crate::routes::records::get_record,
        crate::routes::records::create_record,
        crate::routes::records::update_record,
        crate::routes::records::delete_record,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            UserDoc,
            AnimalDoc,
            RecordInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "records")
    )
)]
pub struct ApiDoc;
