//! PostgreSQL store implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use lokal_core::domain::{Post, User};
use lokal_core::error::RepoError;
use lokal_core::ports::{PostStore, UserStore};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// PostgreSQL post store.
///
/// Ownership scoping happens inside the queries themselves: a mutation with a
/// non-matching owner touches zero rows, which reads the same as a missing id.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn list(
        &self,
        owner: Option<Uuid>,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Post>, u64), RepoError> {
        let mut query = PostEntity::find();
        if let Some(owner) = owner {
            query = query.filter(post::Column::UserId.eq(owner));
        }

        // Count and fetch are two round-trips on the same pool; the window
        // itself is a single bounded SELECT, so a page can never contain
        // duplicated or missing rows.
        let total = query.clone().count(&self.db).await.map_err(query_err)?;

        let rows = query
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok((rows.into_iter().map(Into::into).collect(), total))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = new_post.into();
        let model = active.insert(&self.db).await.map_err(query_err)?;

        Ok(model.into())
    }

    async fn update_owned(
        &self,
        id: Uuid,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, RepoError> {
        let found = PostEntity::find_by_id(id)
            .filter(post::Column::UserId.eq(owner))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        let Some(model) = found else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.title = Set(title.to_owned());
        active.content = Set(content.to_owned());

        // The row can disappear between the scoped select and the update;
        // that still reads as "not found" rather than a storage failure.
        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(query_err(e)),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner: Uuid) -> Result<bool, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::UserId.eq(owner))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.rows_affected > 0)
    }
}

/// PostgreSQL user store.
pub struct PostgresUserStore {
    db: DbConn,
}

impl PostgresUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = match email.find('@') {
            Some(at_pos) => {
                let (local, domain) = email.split_at(at_pos);
                if local.len() > 1 {
                    format!("{}***{}", &local[..1], domain)
                } else {
                    format!("***{domain}")
                }
            }
            None => "***".to_string(),
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_user: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = new_user.into();
        let model = active.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Email already registered".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }
}
