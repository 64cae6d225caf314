//! In-memory `ProductRepository` for local development and tests.
//!
//! Mirrors the PostgreSQL adapter's observable contract: names are unique,
//! listing follows insertion order, and timestamps are assigned here. State is
//! lost when the process exits.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductChanges, ProductDraft, ProductId};

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_taken(products: &[Product], name: &str, except: Option<&ProductId>) -> bool {
    products
        .iter()
        .any(|product| product.name == name && Some(&product.id) != except)
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, ProductRepositoryError> {
        let mut products = self.products.write().await;
        let name = draft.fields().name();
        if name_taken(&products, name, None) {
            return Err(ProductRepositoryError::duplicate_name(name));
        }
        let product = Product::from_draft(ProductId::random(), draft, Utc::now());
        products.push(product.clone());
        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn find(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|product| &product.id == id).cloned())
    }

    async fn update(
        &self,
        id: &ProductId,
        changes: &ProductChanges,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        let mut products = self.products.write().await;
        let name = changes.fields().name();
        if name_taken(&products, name, Some(id)) {
            return Err(ProductRepositoryError::duplicate_name(name));
        }
        let Some(product) = products.iter_mut().find(|product| &product.id == id) else {
            return Ok(None);
        };
        product.apply(changes, Utc::now());
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let mut products = self.products.write().await;
        let position = products.iter().position(|product| &product.id == id);
        Ok(position.map(|index| products.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryProductRepository {
        InMemoryProductRepository::new()
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft::try_new(name, Some("desc".into()), 4.5, "http://x/y.png")
            .expect("valid draft")
    }

    #[rstest]
    #[tokio::test]
    async fn insert_then_find_round_trips(repo: InMemoryProductRepository) {
        let created = repo.insert(&draft("Widget")).await.expect("insert");
        let found = repo.find(&created.id).await.expect("find");
        assert_eq!(found, Some(created));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_names_are_rejected(repo: InMemoryProductRepository) {
        repo.insert(&draft("Widget")).await.expect("first insert");
        let err = repo
            .insert(&draft("Widget"))
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err, ProductRepositoryError::duplicate_name("Widget"));
    }

    #[rstest]
    #[tokio::test]
    async fn list_preserves_insertion_order(repo: InMemoryProductRepository) {
        for name in ["b", "a", "c"] {
            repo.insert(&draft(name)).await.expect("insert");
        }
        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|product| product.name)
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_own_name_but_rejects_anothers(repo: InMemoryProductRepository) {
        let widget = repo.insert(&draft("Widget")).await.expect("insert widget");
        repo.insert(&draft("Gadget")).await.expect("insert gadget");

        let same_name = ProductChanges::try_new("Widget", None, 1.0, "img").expect("valid");
        let updated = repo
            .update(&widget.id, &same_name)
            .await
            .expect("update")
            .expect("present");
        assert_eq!(updated.price, 1.0);
        assert_eq!(updated.created_at, widget.created_at);

        let clash = ProductChanges::try_new("Gadget", None, 1.0, "img").expect("valid");
        let err = repo
            .update(&widget.id, &clash)
            .await
            .expect_err("clash rejected");
        assert_eq!(err, ProductRepositoryError::duplicate_name("Gadget"));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_ids_yield_none(repo: InMemoryProductRepository) {
        let id = ProductId::random();
        let changes = ProductChanges::try_new("Ghost", None, 1.0, "img").expect("valid");
        assert!(repo.find(&id).await.expect("find").is_none());
        assert!(repo.update(&id, &changes).await.expect("update").is_none());
        assert!(repo.delete(&id).await.expect("delete").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn delete_returns_prior_representation(repo: InMemoryProductRepository) {
        let created = repo.insert(&draft("Widget")).await.expect("insert");
        let deleted = repo.delete(&created.id).await.expect("delete");
        assert_eq!(deleted, Some(created.clone()));
        assert!(repo.find(&created.id).await.expect("find").is_none());
    }
}
