//! Test context backed by an in-memory SQLite database.
//!
//! Tests create a [`TestContext`] through the `test_setup_with_tables!` and
//! `test_setup_with_app_tables!` macros, then use the fixture accessors
//! (`context.user()`, `context.catalog()`) to insert rows.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Convert the database connection into any type constructible from it.
    ///
    /// This allows conversion to the server's `AppState` without creating a
    /// circular dependency between the test-utils crate and the main crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let context = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            context.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(context)
        }.await
    }};
}

/// Creates a [`TestContext`] with every table of the application schema.
#[macro_export]
macro_rules! test_setup_with_app_tables {
    () => {{
        async {
            let context = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Starship),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
                schema.create_table_from_entity(entity::prelude::FavoriteStarship),
            ];
            context.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(context)
        }
        .await
    }};
}
