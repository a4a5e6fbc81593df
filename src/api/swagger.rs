use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Travel Tide API",
        version = "2.0.0",
        description = "Complete API documentation for Travel Tide. \n\n**Features:**\n- Tourist spot catalog for Southeast Asia\n- Country catalog\n- Personal spot lists keyed by owner email\n- Health monitoring",
        contact(
            name = "Travel Tide Team",
            email = "support@travel-tide.com"
        )
    ),
    paths(
        // Tourist spots
        crate::api::tourist_spots::get_tourist_spots,
        crate::api::tourist_spots::get_spots_by_country,
        crate::api::tourist_spots::get_tourist_spot,
        crate::api::tourist_spots::create_tourist_spot,
        crate::api::tourist_spots::delete_tourist_spot,

        // Countries
        crate::api::countries::get_countries,

        // My list
        crate::api::my_list::get_my_list,
        crate::api::my_list::get_my_list_spot,
        crate::api::my_list::update_my_list_spot,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Tourist Spots", description = "Tourist spot catalog endpoints. List, filter by country, create and delete spots."),
        (name = "Countries", description = "Country catalog endpoints for the Southeast Asia collection."),
        (name = "My List", description = "Personal list endpoints. Spots saved by a user, keyed by the email query parameter."),
        (name = "Health", description = "Health check endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
