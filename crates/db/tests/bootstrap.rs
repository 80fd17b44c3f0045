use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test]
async fn test_full_bootstrap(pool: PgPool) {
    trackco_db::health_check(&pool).await.unwrap();

    for table in ["widgets", "nps"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Re-running migrations on an up-to-date database is a no-op.
#[sqlx::test]
async fn test_run_migrations_is_idempotent(pool: PgPool) {
    trackco_db::run_migrations(&pool).await.unwrap();
}

/// The color column carries the widget default at the schema level too.
#[sqlx::test]
async fn test_color_column_default(pool: PgPool) {
    let (default,): (Option<String>,) = sqlx::query_as(
        "SELECT column_default::text
         FROM information_schema.columns
         WHERE table_name = 'widgets' AND column_name = 'color'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let default = default.expect("widgets.color should have a default");
    assert!(
        default.contains("#e5e7eb"),
        "unexpected widgets.color default: {default}"
    );
}
