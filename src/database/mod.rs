use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(uri).await?;

        // Stable API V1 em modo estrito, como o deployment Atlas espera
        let server_api = ServerApi::builder()
            .version(ServerApiVersion::V1)
            .strict(true)
            .deprecation_errors(true)
            .build();
        client_options.server_api = Some(server_api);

        // Connection pool otimizado
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts otimizados
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;
        let db = client.database(database);

        // Ping before accepting traffic
        client.database("admin").run_command(doc! { "ping": 1 }).await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes backing the filtered lookups.
    async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let spots = self.db.collection::<mongodb::bson::Document>("touristSpot");

        // Index for touristSpot: (country) - for the by-country lookup
        let country_index = IndexModel::builder().keys(doc! { "country": 1 }).build();

        match spots.create_index(country_index).await {
            Ok(_) => log::info!("   ✅ Index created: touristSpot(country)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for touristSpot: (userEmail) - for the my-list lookup
        let owner_index = IndexModel::builder().keys(doc! { "userEmail": 1 }).build();

        match spots.create_index(owner_index).await {
            Ok(_) => log::info!("   ✅ Index created: touristSpot(userEmail)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    /// Check if the connection is healthy
    pub async fn health_check(&self) -> Result<(), mongodb::error::Error> {
        self.client.database("admin").run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
impl MongoDB {
    /// Handle backed by a lazy client; nothing connects until an operation
    /// actually runs, so router tests can use it without a server.
    pub async fn lazy(database: &str) -> Self {
        let client_options = ClientOptions::parse("mongodb://localhost:27017")
            .await
            .expect("static test URI parses");
        let client = Client::with_options(client_options).expect("lazy client");
        let db = client.database(database);
        Self { client, db }
    }
}
