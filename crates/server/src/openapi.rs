use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "UPPERCASE")]
pub enum SodaTypeDoc { Lager, Malzbier, Witbier, Weiss, Ale, Ipa, Stout }

#[derive(ToSchema)]
pub struct SodaDoc {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub max: i32,
    pub quantity: i32,
    #[schema(rename = "type")]
    pub soda_type: SodaTypeDoc,
}

#[derive(ToSchema)]
pub struct SodaInputDoc {
    /// 1..=200 characters, unique
    pub name: String,
    /// 1..=200 characters
    pub brand: String,
    /// 1..=500
    pub max: i32,
    /// 0..=100, never above `max`
    pub quantity: i32,
    #[schema(rename = "type")]
    pub soda_type: SodaTypeDoc,
}

#[derive(ToSchema)]
pub struct QuantityInputDoc {
    /// Positive amount to add to the stock
    pub quantity: i32,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub code: Option<u16>,
    pub details: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::sodas::create,
        crate::routes::sodas::find_by_name,
        crate::routes::sodas::list,
        crate::routes::sodas::delete_by_id,
        crate::routes::sodas::increment,
    ),
    components(
        schemas(
            HealthResponse,
            SodaTypeDoc,
            SodaDoc,
            SodaInputDoc,
            QuantityInputDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "sodas")
    )
)]
pub struct ApiDoc;
