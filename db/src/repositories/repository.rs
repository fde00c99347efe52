use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use std::future::Future;
use std::pin::Pin;

/// Row-level persistence shared by every entity repository.
///
/// Implementors only provide the connection; the basic CRUD round trips come
/// for free. Queries specific to an entity live on the implementing type.
pub trait Repository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Sync + Send + 'static + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    fn db(&self) -> &DatabaseConnection;

    fn create(
        &self,
        active_model: E::ActiveModel,
    ) -> Pin<Box<dyn Future<Output = Result<E::Model, DbErr>> + Send + '_>> {
        Box::pin(async move { active_model.insert(self.db()).await })
    }

    fn update(
        &self,
        active_model: E::ActiveModel,
    ) -> Pin<Box<dyn Future<Output = Result<E::Model, DbErr>> + Send + '_>> {
        Box::pin(async move { active_model.update(self.db()).await })
    }

    /// Deletes by primary key and reports how many rows were removed.
    fn delete(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Pin<Box<dyn Future<Output = Result<u64, DbErr>> + Send + '_>> {
        let statement = E::delete_by_id(id);
        Box::pin(async move {
            let result = statement.exec(self.db()).await?;
            Ok(result.rows_affected)
        })
    }

    fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Pin<Box<dyn Future<Output = Result<Option<E::Model>, DbErr>> + Send + '_>> {
        let query = E::find_by_id(id);
        Box::pin(async move { query.one(self.db()).await })
    }
}
