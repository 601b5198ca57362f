use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct TitleDoc { pub title: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieInputDoc {
    pub name: String,
    pub synopsis: Option<String>,
    pub trailer: Option<String>,
    #[schema(example = "2019-08-29")]
    pub release_date: Option<String>,
    pub box_office: Option<f64>,
    /// path relative to the static directory
    pub poster: Option<String>,
    pub gender: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDoc {
    pub id: Uuid,
    pub name: String,
    pub synopsis: Option<String>,
    pub trailer: Option<String>,
    #[schema(example = "2019-08-29")]
    pub release_date: Option<String>,
    pub box_office: Option<f64>,
    pub poster: Option<String>,
    pub gender: Option<String>,
    /// public URL of the poster
    pub full_path: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoviePageDoc {
    pub movies: Vec<MovieDoc>,
    pub tot_items: u64,
}

#[derive(Serialize, ToSchema)]
pub struct MovieListDoc { pub data: MoviePageDoc }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct CreateUserDoc { pub name: String, pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
pub struct UpdateUserDoc { pub id: Uuid, pub name: String, pub email: String, pub password: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::movies::list,
        crate::routes::movies::get,
        crate::routes::movies::get_by_name,
        crate::routes::movies::create,
        crate::routes::movies::update,
        crate::routes::movies::delete,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::update,
    ),
    components(
        schemas(
            HealthResponse,
            TitleDoc,
            ErrorDoc,
            MovieInputDoc,
            MovieDoc,
            MoviePageDoc,
            MovieListDoc,
            UserDoc,
            CreateUserDoc,
            UpdateUserDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "movies"),
        (name = "users")
    )
)]
pub struct ApiDoc;
