use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{next_update_timestamp, Form, PasswordHash, User};
use crate::repo::{FormStore, StoreError, UpsertOutcome, UserStore};

/// In-memory store for testing and local development.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    forms: Arc<Mutex<HashMap<String, Form>>>,
    users: Arc<Mutex<HashMap<String, User>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, StoreError> {
    mutex.lock().map_err(|_| StoreError::Poisoned)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a form as-is.
    pub fn insert_form(&self, form: Form) -> Result<(), StoreError> {
        lock(&self.forms)?.insert(form.id.clone(), form);
        Ok(())
    }

    pub fn user_count(&self) -> Result<usize, StoreError> {
        Ok(lock(&self.users)?.len())
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn get_form(&self, id: &str) -> Result<Option<Form>, StoreError> {
        Ok(lock(&self.forms)?.get(id).cloned())
    }

    async fn set_published(
        &self,
        id: &str,
        is_published: bool,
    ) -> Result<Option<Form>, StoreError> {
        let mut forms = lock(&self.forms)?;
        let Some(form) = forms.get_mut(id) else {
            return Ok(None);
        };
        form.is_published = is_published;
        form.updated_at = next_update_timestamp(form.updated_at);
        Ok(Some(form.clone()))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?.get(email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(lock(&self.users)?.values().find(|u| u.id == id).cloned())
    }

    async fn upsert_credentials(
        &self,
        email: &str,
        name: &str,
        password_hash: &PasswordHash,
    ) -> Result<(User, UpsertOutcome), StoreError> {
        let mut users = lock(&self.users)?;
        if let Some(user) = users.get_mut(email) {
            user.password_hash = password_hash.clone();
            user.updated_at = next_update_timestamp(user.updated_at);
            return Ok((user.clone(), UpsertOutcome::Updated));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: Some(name.to_string()),
            password_hash: password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(email.to_string(), user.clone());
        Ok((user, UpsertOutcome::Created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(tag: &str) -> PasswordHash {
        PasswordHash::from_phc(format!("$argon2id$v=19$c2FsdA${tag}")).unwrap()
    }

    #[tokio::test]
    async fn test_set_published_updates_flag_and_timestamp() {
        let store = MemoryStore::new();
        let form = Form::new("abc123", "Feedback");
        let before = form.updated_at;
        store.insert_form(form).unwrap();

        let updated = store.set_published("abc123", true).await.unwrap().unwrap();
        assert!(updated.is_published);
        assert!(updated.updated_at > before);

        let loaded = store.get_form("abc123").await.unwrap().unwrap();
        assert_eq!(loaded, updated);
    }

    #[tokio::test]
    async fn test_set_published_on_missing_form() {
        let store = MemoryStore::new();
        assert!(store.set_published("nope", true).await.unwrap().is_none());
        assert!(store.get_form("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_creates_then_updates_hash_only() {
        let store = MemoryStore::new();

        let (created, outcome) = store
            .upsert_credentials("ada@example.com", "Ada", &hash("one"))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Created);
        assert_eq!(created.name.as_deref(), Some("Ada"));

        let (updated, outcome) = store
            .upsert_credentials("ada@example.com", "Someone Else", &hash("two"))
            .await
            .unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_deref(), Some("Ada"));
        assert_eq!(updated.password_hash, hash("two"));
        assert_eq!(store.user_count().unwrap(), 1);

        let by_id = store.find_user_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ada@example.com");
    }
}
