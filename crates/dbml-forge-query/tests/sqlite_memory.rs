use dbml_forge_query::{execute_query, QueryError, QueryParam};
use sqlx::{Connection, Executor, SqliteConnection};

#[derive(Debug, PartialEq, sqlx::FromRow)]
struct Dummy {
    id: i64,
    name: String,
}

async fn seeded() -> SqliteConnection {
    let mut conn = SqliteConnection::connect("sqlite::memory:").await.unwrap();
    conn.execute(
        "CREATE TABLE dummy (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
         INSERT INTO dummy (id, name) VALUES (1, 'John Doe'), (2, 'Jane Doe'), (3, 'Max Mustermann');",
    )
    .await
    .unwrap();
    conn
}

#[tokio::test]
async fn literal_query_returns_matching_rows() {
    let mut conn = seeded().await;
    let rows: Vec<Dummy> = execute_query(
        "SELECT id, name FROM dummy WHERE name LIKE '%Doe%' ORDER BY id",
        &[],
        &mut conn,
    )
    .await
    .unwrap();
    assert_eq!(
        rows,
        vec![
            Dummy { id: 1, name: "John Doe".into() },
            Dummy { id: 2, name: "Jane Doe".into() },
        ]
    );
}

#[tokio::test]
async fn positional_params_are_bound_in_order() {
    let mut conn = seeded().await;
    let rows: Vec<Dummy> = execute_query(
        "SELECT id, name FROM dummy WHERE id >= ? AND name LIKE ? ORDER BY id",
        &[QueryParam::from(2i64), QueryParam::from("%Doe%")],
        &mut conn,
    )
    .await
    .unwrap();
    assert_eq!(rows, vec![Dummy { id: 2, name: "Jane Doe".into() }]);
}

#[tokio::test]
async fn no_rows_is_empty_vec() {
    let mut conn = seeded().await;
    let rows: Vec<Dummy> = execute_query(
        "SELECT id, name FROM dummy WHERE id = ?",
        &[QueryParam::Integer(99)],
        &mut conn,
    )
    .await
    .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn invalid_sql_fails_to_prepare() {
    let mut conn = seeded().await;
    let err = execute_query::<Dummy>("SELECT id, name FROM missing_table", &[], &mut conn)
        .await
        .unwrap_err();
    assert!(matches!(err, QueryError::Prepare(_)), "got {err:?}");
}

#[tokio::test]
async fn row_shape_mismatch_fails_to_populate() {
    let mut conn = seeded().await;
    let err = execute_query::<Dummy>("SELECT id FROM dummy ORDER BY id", &[], &mut conn)
        .await
        .unwrap_err();
    assert!(
        matches!(err, QueryError::Populate { row: 0, .. }),
        "got {err:?}"
    );
}
