//! Common test utilities for account-service integration tests.

use account_service::config::AppConfig;
use account_service::startup::Application;
use std::sync::Once;

pub const CUSTOMER_ID_HEADER: &str = "X-Customer-ID";

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,account_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application on a random port with its own isolated store.
    pub async fn spawn() -> Self {
        init_tracing();

        let config = AppConfig {
            port: 0,
            service_name: "account-service-test".to_string(),
            log_level: "debug".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the HTTP server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, client }
    }

    /// POST /account with the given identifier and name.
    pub async fn create_account(&self, identifier: &str, name: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/account", self.address))
            .json(&serde_json::json!({ "identifier": identifier, "name": name }))
            .send()
            .await
            .expect("Failed to execute create account request")
    }

    /// GET any path with the customer identifier header set.
    pub async fn get_as(&self, path: &str, identifier: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .header(CUSTOMER_ID_HEADER, identifier)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST /deposit for the given customer.
    pub async fn deposit(&self, identifier: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/deposit", self.address))
            .header(CUSTOMER_ID_HEADER, identifier)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute deposit request")
    }

    /// POST /withdraw for the given customer.
    pub async fn withdraw(&self, identifier: &str, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/withdraw", self.address))
            .header(CUSTOMER_ID_HEADER, identifier)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute withdraw request")
    }

    /// GET /balance and unwrap the numeric balance.
    pub async fn balance(&self, identifier: &str) -> f64 {
        let body: serde_json::Value = self
            .get_as("/balance", identifier)
            .await
            .json()
            .await
            .expect("Failed to parse balance response");
        body["balance"].as_f64().expect("balance is not a number")
    }

    /// GET /statement and unwrap the entry array.
    pub async fn statement(&self, identifier: &str) -> Vec<serde_json::Value> {
        let body: serde_json::Value = self
            .get_as("/statement", identifier)
            .await
            .json()
            .await
            .expect("Failed to parse statement response");
        body.as_array().expect("statement is not an array").clone()
    }
}
