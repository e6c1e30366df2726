//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use user_directory_client::{Address, ClientError, Company, Geo, Result, UserDirectory, UserRecord};

use crate::traits::ConfirmPrompt;

// ===== MockUserDirectory =====

/// Operation recorded by [`MockUserDirectory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(u64),
    Create(UserRecord),
    Update(u64, UserRecord),
    Delete(u64),
}

/// Operation a failure can be injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

/// In-memory user directory.
///
/// Behaves like the public API: writes are echoed back but never persisted,
/// so a deleted record can still be fetched afterwards.
pub struct MockUserDirectory {
    users: RwLock<BTreeMap<u64, UserRecord>>,
    failures: RwLock<BTreeMap<Operation, ClientError>>,
    calls: RwLock<Vec<Call>>,
    next_id: u64,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let store: BTreeMap<u64, UserRecord> = users
            .into_iter()
            .filter_map(|u| u.id.map(|id| (id, u)))
            .collect();
        let next_id = store.keys().max().map_or(1, |max| max + 1);
        Self {
            users: RwLock::new(store),
            failures: RwLock::new(BTreeMap::new()),
            calls: RwLock::new(Vec::new()),
            next_id,
        }
    }

    /// Make every call of `operation` fail with `error`.
    pub async fn fail(&self, operation: Operation, error: ClientError) {
        self.failures.write().await.insert(operation, error);
    }

    pub async fn recover(&self, operation: Operation) {
        self.failures.write().await.remove(&operation);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.read().await.clone()
    }

    pub async fn contains(&self, id: u64) -> bool {
        self.users.read().await.contains_key(&id)
    }

    async fn record(&self, call: Call, operation: Operation) -> Result<()> {
        self.calls.write().await.push(call);
        match self.failures.read().await.get(&operation) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn list_records(&self) -> Result<Vec<UserRecord>> {
        self.record(Call::List, Operation::List).await?;
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get_record(&self, record_id: u64) -> Result<UserRecord> {
        self.record(Call::Get(record_id), Operation::Get).await?;
        self.users
            .read()
            .await
            .get(&record_id)
            .cloned()
            .ok_or(ClientError::NotFound { record_id })
    }

    async fn create_record(&self, record: &UserRecord) -> Result<UserRecord> {
        self.record(Call::Create(record.clone()), Operation::Create)
            .await?;
        Ok(UserRecord {
            id: Some(self.next_id),
            ..record.clone()
        })
    }

    async fn update_record(&self, record_id: u64, record: &UserRecord) -> Result<UserRecord> {
        self.record(Call::Update(record_id, record.clone()), Operation::Update)
            .await?;
        Ok(UserRecord {
            id: Some(record_id),
            ..record.clone()
        })
    }

    async fn delete_record(&self, record_id: u64) -> Result<()> {
        self.record(Call::Delete(record_id), Operation::Delete)
            .await
    }
}

// ===== StaticPrompt =====

/// Prompt with a fixed answer that remembers whether it was asked.
pub struct StaticPrompt {
    answer: bool,
    asked: AtomicBool,
}

impl StaticPrompt {
    pub fn accept() -> Self {
        Self {
            answer: true,
            asked: AtomicBool::new(false),
        }
    }

    pub fn decline() -> Self {
        Self {
            answer: false,
            asked: AtomicBool::new(false),
        }
    }

    pub fn was_asked(&self) -> bool {
        self.asked.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfirmPrompt for StaticPrompt {
    async fn confirm(&self, _message: &str) -> bool {
        self.asked.store(true, Ordering::SeqCst);
        self.answer
    }
}

// ===== Fixtures =====

/// Minimal valid user.
pub fn test_user(id: u64, name: &str) -> UserRecord {
    UserRecord {
        id: Some(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: format!("555-000{id}"),
        ..UserRecord::default()
    }
}

/// User with every optional group filled in.
pub fn full_user(id: u64) -> UserRecord {
    UserRecord {
        id: Some(id),
        name: "Leanne Graham".to_string(),
        username: Some("Bret".to_string()),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: Some("hildegard.org".to_string()),
        address: Some(Address {
            street: Some("Kulas Light".to_string()),
            suite: Some("Apt. 556".to_string()),
            city: Some("Gwenborough".to_string()),
            zipcode: Some("92998-3874".to_string()),
            geo: Some(Geo {
                lat: Some("-37.3159".to_string()),
                lng: Some("81.1496".to_string()),
            }),
        }),
        company: Some(Company {
            name: Some("Romaguera-Crona".to_string()),
            catch_phrase: Some("Multi-layered client-server neural-net".to_string()),
            bs: Some("harness real-time e-markets".to_string()),
        }),
    }
}

/// Directory seeded with three users (ids 1..=3).
pub fn seeded_directory() -> MockUserDirectory {
    MockUserDirectory::with_users(vec![
        full_user(1),
        test_user(2, "Ervin"),
        test_user(3, "Clementine"),
    ])
}

/// Transport failure used by failure-path tests.
pub fn network_down() -> ClientError {
    ClientError::NetworkError {
        detail: "connection refused".to_string(),
    }
}
