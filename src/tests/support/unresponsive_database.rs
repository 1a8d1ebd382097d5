use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::net::TcpListener;

/// A pool pointed at a local socket that accepts connections and never
/// answers the Postgres handshake, so every call hangs until the caller
/// gives up.
pub async fn unresponsive_database() -> DatabaseConnection {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(port)
        .username("postgres")
        .password("unused")
        .database("postgres");

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy_with(options);

    SqlxPostgresConnector::from_sqlx_postgres_pool(pool)
}
