pub mod config;
pub mod models;
pub mod repo;

mod memory;
pub use memory::MemoryStore;

pub use config::{Locale, ParseSettingError, SiteSettings, Theme};
pub use models::{normalize_email, Form, PasswordHash, User, UserInfo};
pub use repo::{FormStore, StoreError, UpsertOutcome, UserStore};
