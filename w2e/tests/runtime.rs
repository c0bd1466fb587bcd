use w2e::prelude::*;

fn test_settings(dir: &tempfile::TempDir) -> Settings {
    let path = dir.path().join("app.sqlite3");
    Settings::from_vars(vec![
        ("DB_TYPE".to_string(), "sqlite".to_string()),
        ("SQLITE_DB_PATH".to_string(), path.to_string_lossy().into_owned()),
    ])
    .unwrap()
}

fn schema(settings: &Settings) -> SchemaRegistry {
    SchemaRegistry::for_settings(settings).register(
        TableDef::new("dishes")
            .column(ColumnDef::new("id", SqlType::BigInt).primary_key().auto_increment())
            .column(ColumnDef::new("name", SqlType::VarChar(255)).unique())
            .with_timestamps(),
    )
}

#[tokio::test]
async fn start_wires_pool_schema_and_clients() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir);
    let schema = schema(&settings);

    let ctx = AppContext::start(settings, &schema).await.unwrap();

    assert_eq!(ctx.db.backend(), DbType::Sqlite);
    assert_eq!(ctx.auth_redis.get_connection_info().redis.db, 0);
    assert_eq!(ctx.cache_redis.get_connection_info().redis.db, 1);

    let mut session = ctx.db.begin().await.unwrap();
    let tables: i64 = session
        .fetch_scalar("SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'dishes'")
        .await
        .unwrap();
    session.rollback().await.unwrap();
    assert_eq!(tables, 1);

    ctx.shutdown().await;
}

#[tokio::test]
async fn token_signer_is_the_deferred_failure_point() {
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(&dir);
    let schema = schema(&settings);

    // Startup succeeds without JWT_SECRET...
    let ctx = AppContext::start(settings, &schema).await.unwrap();

    // ...and only the token operation reports it.
    assert!(matches!(
        ctx.token_signer(),
        Err(SecurityError::MissingSecret)
    ));

    ctx.shutdown().await;
}
