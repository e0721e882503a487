use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            name: command.name,
            email: command.email,
            phone_number: command.phone_number,
            address: command.address,
            password_hash,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::NotFound(email.to_string()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.repository.list_all().await
    }

    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if let Some(new_name) = command.name {
            user.name = new_name;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_phone_number) = command.phone_number {
            user.phone_number = new_phone_number;
        }

        if let Some(new_address) = command.address {
            user.address = new_address;
        }

        self.repository.update(user).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        self.repository.delete(id).await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
            async fn list_all(&self) -> Result<Vec<User>, UserError>;
            async fn update(&self, user: User) -> Result<User, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            name: "Ann".to_string(),
            email: EmailAddress::new("ann@x.com".to_string()).unwrap(),
            phone_number: "555".to_string(),
            address: "1 St".to_string(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_user_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.name == "Ann"
                    && user.email.as_str() == "ann@x.com"
                    && user.password_hash.starts_with("$argon2")
                    && user.password_hash != "pw"
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(
            "Ann".to_string(),
            EmailAddress::new("ann@x.com".to_string()).unwrap(),
            "555".to_string(),
            "1 St".to_string(),
            "pw".to_string(),
        );

        let user = service.create_user(command).await.unwrap();
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let command = CreateUserCommand::new(
            "Ann".to_string(),
            EmailAddress::new("ann@x.com".to_string()).unwrap(),
            "555".to_string(),
            "1 St".to_string(),
            "pw".to_string(),
        );

        let result = service.create_user(command).await;
        assert!(matches!(
            result.unwrap_err(),
            UserError::EmailAlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_email_success() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        let returned = test_user(user_id);
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "ann@x.com")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("ann@x.com".to_string()).unwrap();
        let user = service.get_user_by_email(&email).await.unwrap();
        assert_eq!(user.id, user_id);
    }

    #[tokio::test]
    async fn test_get_user_by_email_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let email = EmailAddress::new("ghost@x.com".to_string()).unwrap();
        let result = service.get_user_by_email(&email).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_user_partial_fields() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        let existing = test_user(user_id);
        repository
            .expect_find_by_id()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        repository
            .expect_update()
            .withf(|user| {
                // Untouched fields survive a partial update
                user.name == "Anna" && user.email.as_str() == "ann@x.com"
            })
            .times(1)
            .returning(Ok);

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            name: Some("Anna".to_string()),
            email: None,
            phone_number: None,
            address: None,
        };

        let updated = service.update_user(&user_id, command).await.unwrap();
        assert_eq!(updated.name, "Anna");
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let command = UpdateUserCommand {
            name: Some("Anna".to_string()),
            email: None,
            phone_number: None,
            address: None,
        };

        let result = service.update_user(&UserId::new(), command).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_user_returns_deleted_record() {
        let mut repository = MockTestUserRepository::new();

        let user_id = UserId::new();
        let existing = test_user(user_id);
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_delete()
            .withf(move |id| *id == user_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = UserService::new(Arc::new(repository));

        let deleted = service.delete_user(&user_id).await.unwrap();
        assert_eq!(deleted.name, "Ann");
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let result = service.delete_user(&UserId::new()).await;
        assert!(matches!(result.unwrap_err(), UserError::NotFound(_)));
    }
}
