#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use uuid::Uuid;

    use lokal_core::domain::Post;
    use lokal_core::ports::PostStore;

    use crate::database::entity::post;
    use crate::database::postgres_store::PostgresPostStore;

    fn post_model(id: Uuid, user_id: Uuid, title: &str, content: &str) -> post::Model {
        post::Model {
            id,
            user_id,
            title: title.to_owned(),
            content: content.to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn find_post_by_id() {
        let post_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, user_id, "Test Post", "Content")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result: Option<Post> = store.find_by_id(post_id).await.unwrap();

        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.id, post_id);
    }

    #[tokio::test]
    async fn list_returns_window_and_filtered_total() {
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(13)]])
            .append_query_results([vec![
                post_model(Uuid::new_v4(), owner, "newest", "a"),
                post_model(Uuid::new_v4(), owner, "older", "b"),
            ]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let (rows, total) = store.list(Some(owner), 0, 2).await.unwrap();
        assert_eq!(total, 13);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "newest");
    }

    #[tokio::test]
    async fn update_owned_rewrites_title_and_content() {
        let post_id = Uuid::new_v4();
        let owner = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(post_id, owner, "before", "old body")]])
            .append_query_results([vec![post_model(post_id, owner, "after", "new body")]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let updated = store
            .update_owned(post_id, owner, "after", "new body")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "after");
        assert_eq!(updated.content, "new body");
        assert_eq!(updated.id, post_id);
    }

    #[tokio::test]
    async fn update_owned_misses_when_scoped_select_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<post::Model>::new()])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let result = store
            .update_owned(Uuid::new_v4(), Uuid::new_v4(), "title", "body")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_owned_reports_whether_a_row_went_away() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let store = PostgresPostStore::new(db);

        assert!(store.delete_owned(Uuid::new_v4(), Uuid::new_v4()).await.unwrap());
        assert!(!store.delete_owned(Uuid::new_v4(), Uuid::new_v4()).await.unwrap());
    }
}
