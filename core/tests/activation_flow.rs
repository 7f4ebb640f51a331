//! End-to-end registration/activation scenarios against the in-memory
//! repository, mirroring the full lifecycle a caller drives through the
//! service boundary.

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use reg_core::errors::DomainError;
use reg_core::repositories::account::{AccountRepository, MockAccountRepository};
use reg_core::services::password::PasswordHasher;
use reg_core::services::registration::{
    EmailNotifier, RegistrationConfig, RegistrationService,
};

/// Notifier that captures the delivered code and can simulate an outage
struct CapturingNotifier {
    delivered: Mutex<Vec<String>>,
    available: Mutex<bool>,
}

impl CapturingNotifier {
    fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            available: Mutex::new(true),
        }
    }

    fn set_available(&self, available: bool) {
        *self.available.lock().unwrap() = available;
    }

    fn last_code(&self) -> Option<String> {
        self.delivered.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl EmailNotifier for CapturingNotifier {
    async fn send_activation_code(&self, _email: &str, code: &str) -> bool {
        if !*self.available.lock().unwrap() {
            return false;
        }
        self.delivered.lock().unwrap().push(code.to_string());
        true
    }
}

// bcrypt's minimum cost; the crate does not export it publicly.
const MIN_COST: u32 = 4;

fn build_service() -> (
    RegistrationService<MockAccountRepository, CapturingNotifier>,
    Arc<MockAccountRepository>,
    Arc<CapturingNotifier>,
) {
    let repository = Arc::new(MockAccountRepository::new());
    let notifier = Arc::new(CapturingNotifier::new());
    let service = RegistrationService::with_hasher(
        Arc::clone(&repository),
        Arc::clone(&notifier),
        PasswordHasher::with_cost(MIN_COST),
        RegistrationConfig::default(),
    );
    (service, repository, notifier)
}

#[tokio::test]
async fn full_activation_lifecycle() {
    let (service, repository, notifier) = build_service();

    // Register succeeds and delivers a code out of band
    service.register("a@x.com", "password1").await.unwrap();
    let actual_code = notifier.last_code().expect("code must have been delivered");

    // A guessed code that does not match the generated one is rejected
    let guessed = if actual_code == "0000" { "1234" } else { "0000" };
    let rejected = service.activate("a@x.com", "password1", guessed).await;
    assert!(matches!(rejected, Err(DomainError::InvalidCredentialsOrCode)));

    let pending = repository.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(!pending.is_active);

    // The actual code, submitted within its lifetime, activates the account
    service
        .activate("a@x.com", "password1", &actual_code)
        .await
        .unwrap();
    let active = repository.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(active.is_active);

    // Activation is absorbing: any further attempt succeeds, code or not
    service.activate("a@x.com", "password1", "0000").await.unwrap();
    service.activate("a@x.com", "whatever", guessed).await.unwrap();
}

#[tokio::test]
async fn registration_survives_notifier_outage() {
    let (service, repository, notifier) = build_service();
    notifier.set_available(false);

    let result = service.register("a@x.com", "password1").await.unwrap();
    assert!(!result.notification_sent);

    // Account and code were committed before the send was attempted
    let account = repository.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(!account.is_active);
    let code = repository
        .find_latest_code(account.id)
        .await
        .unwrap()
        .expect("code persisted despite notifier outage");

    // The persisted code still activates the account once known
    service
        .activate("a@x.com", "password1", &code.code)
        .await
        .unwrap();
    assert!(
        repository
            .find_by_email("a@x.com")
            .await
            .unwrap()
            .unwrap()
            .is_active
    );
}

#[tokio::test]
async fn concurrent_registration_yields_single_account() {
    let (service, repository, _) = build_service();
    let service = Arc::new(service);

    let tasks: Vec<_> = (0..4)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.register("a@x.com", &format!("password{}", i)).await })
        })
        .collect();

    let mut successes = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => successes += 1,
            Err(DomainError::Conflict) => conflicts += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    // The uniqueness constraint is the only coordination: exactly one wins
    assert_eq!(successes, 1);
    assert_eq!(conflicts, 3);
    assert_eq!(repository.account_count().await, 1);
}
