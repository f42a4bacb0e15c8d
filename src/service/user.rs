//! User orchestration: validation, uniqueness pre-checks, password stripping.

use crate::error::AppError;
use crate::models::User;
use crate::repo::{UserLookupKey, UserRepository};
use crate::validation::{
    are_valid_strings, is_valid_id, is_valid_str, validate, NEW_USER_RULES, UPDATE_USER_RULES,
};

pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// All users, passwords stripped. An empty table is a `NotFound`, not an
    /// empty success.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = self.repo.get_all().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("no users exist".into()));
        }
        Ok(users.into_iter().map(User::without_password).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<User, AppError> {
        if !is_valid_id(id) {
            return Err(AppError::BadRequest(format!("{id} is not a valid user id")));
        }
        let user = self
            .repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;
        Ok(user.without_password())
    }

    pub async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        if !is_valid_str(username) {
            return Err(AppError::BadRequest("username must not be blank".into()));
        }
        let user = self
            .repo
            .get_by_unique_key(UserLookupKey::Username, username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{username}'")))?;
        Ok(user.without_password())
    }

    pub async fn is_username_available(&self, username: &str) -> Result<bool, AppError> {
        Ok(self
            .repo
            .get_by_unique_key(UserLookupKey::Username, username)
            .await?
            .is_none())
    }

    pub async fn is_email_available(&self, email: &str) -> Result<bool, AppError> {
        Ok(self
            .repo
            .get_by_unique_key(UserLookupKey::Email, email)
            .await?
            .is_none())
    }

    /// Register a user. The availability checks give callers a precise 409,
    /// but they race with concurrent registrations; the store's unique
    /// constraints are the enforcement point and surface as `Conflict` too.
    pub async fn add(&self, new_user: User) -> Result<User, AppError> {
        validate(&new_user, NEW_USER_RULES)?;
        if !self.is_username_available(&new_user.username).await? {
            return Err(AppError::Conflict(format!(
                "username '{}' is already taken",
                new_user.username
            )));
        }
        if !self.is_email_available(&new_user.email).await? {
            return Err(AppError::Conflict(format!(
                "email '{}' is already registered",
                new_user.email
            )));
        }
        let created = self.repo.add(new_user).await?;
        Ok(created.without_password())
    }

    pub async fn update(&self, updated: User) -> Result<bool, AppError> {
        validate(&updated, UPDATE_USER_RULES)?;
        self.repo.update(&updated).await
    }

    /// Declared but deliberately unimplemented; kept as an explicit 501.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        if !is_valid_id(id) {
            return Err(AppError::BadRequest(format!("{id} is not a valid user id")));
        }
        Err(AppError::NotImplemented("user deletion"))
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        if !are_valid_strings(&[username, password]) {
            return Err(AppError::BadRequest(
                "username and password must not be blank".into(),
            ));
        }
        let user = self
            .repo
            .get_by_credentials(username, password)
            .await?
            .ok_or(AppError::Authentication)?;
        Ok(user.without_password())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::CrudRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_users() -> Vec<User> {
        [
            (1, "aanderson", "Alice", "Anderson", "aanderson@revature.com", "Admin"),
            (2, "bbailey", "Bob", "Bailey", "bbailey@revature.com", "User"),
            (3, "ccountryman", "Charlie", "Countryman", "ccountryman@revature.com", "User"),
            (4, "ddavis", "Daniel", "Davis", "ddavis@revature.com", "User"),
            (5, "eeinstein", "Emily", "Einstein", "eeinstein@revature.com", "User"),
        ]
        .into_iter()
        .map(|(id, username, first, last, email, role)| User {
            id,
            username: username.into(),
            password: Some("password".into()),
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            role: role.into(),
        })
        .collect()
    }

    /// Canned-data repository double; counts calls so tests can assert the
    /// service short-circuited before data access.
    struct FakeUserRepo {
        users: Vec<User>,
        calls: AtomicUsize,
        fail: bool,
        conflict_on_add: bool,
    }

    impl FakeUserRepo {
        fn with_users(users: Vec<User>) -> Self {
            Self { users, calls: AtomicUsize::new(0), fail: false, conflict_on_add: false }
        }

        fn empty() -> Self {
            Self::with_users(Vec::new())
        }

        fn failing() -> Self {
            Self { users: Vec::new(), calls: AtomicUsize::new(0), fail: true, conflict_on_add: false }
        }

        fn conflicting_on_add(users: Vec<User>) -> Self {
            Self { users, calls: AtomicUsize::new(0), fail: false, conflict_on_add: true }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn tick(&self) -> Result<(), AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(AppError::Internal(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CrudRepository<User> for FakeUserRepo {
        async fn get_all(&self) -> Result<Vec<User>, AppError> {
            self.tick()?;
            Ok(self.users.clone())
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
            self.tick()?;
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }

        async fn add(&self, new: User) -> Result<User, AppError> {
            self.tick()?;
            if self.conflict_on_add {
                // What the Pg repository produces for a 23505 race.
                return Err(AppError::Conflict(
                    "a record with the same unique value already exists".into(),
                ));
            }
            Ok(User { id: self.users.len() as i64 + 1, ..new })
        }

        async fn update(&self, _updated: &User) -> Result<bool, AppError> {
            self.tick()?;
            Ok(true)
        }

        async fn delete_by_id(&self, _id: i64) -> Result<bool, AppError> {
            self.tick()?;
            Ok(true)
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn get_by_unique_key(
            &self,
            key: UserLookupKey,
            value: &str,
        ) -> Result<Option<User>, AppError> {
            self.tick()?;
            Ok(self
                .users
                .iter()
                .find(|u| match key {
                    UserLookupKey::Username => u.username == value,
                    UserLookupKey::Email => u.email == value,
                })
                .cloned())
        }

        async fn get_by_credentials(
            &self,
            username: &str,
            password: &str,
        ) -> Result<Option<User>, AppError> {
            self.tick()?;
            Ok(self
                .users
                .iter()
                .find(|u| u.username == username && u.password.as_deref() == Some(password))
                .cloned())
        }
    }

    fn new_user(username: &str, email: &str) -> User {
        User {
            id: 0,
            username: username.into(),
            password: Some("password".into()),
            first_name: "Nobody".into(),
            last_name: "Nobodyson".into(),
            email: email.into(),
            role: "Customer".into(),
        }
    }

    #[tokio::test]
    async fn get_all_strips_passwords() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let result = sut.get_all().await.unwrap();

        assert_eq!(result.len(), 5);
        for user in &result {
            assert!(user.password.is_none());
            let json = serde_json::to_value(user).unwrap();
            assert!(json.get("password").is_none());
        }
    }

    #[tokio::test]
    async fn get_all_with_no_rows_is_not_found() {
        let sut = UserService::new(FakeUserRepo::empty());

        let err = sut.get_all().await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_id_returns_known_user_without_password() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let result = sut.get_by_id(1).await.unwrap();

        assert_eq!(result.id, 1);
        assert!(result.password.is_none());
    }

    #[tokio::test]
    async fn get_by_id_rejects_invalid_ids_before_data_access() {
        for bad in [0, -2] {
            let repo = FakeUserRepo::with_users(sample_users());
            let sut = UserService::new(repo);

            let err = sut.get_by_id(bad).await.unwrap_err();

            assert!(matches!(err, AppError::BadRequest(_)));
            assert_eq!(sut.repo.calls(), 0);
        }
    }

    #[tokio::test]
    async fn get_by_id_with_unknown_id_is_not_found() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.get_by_id(9999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn add_assigns_store_id_and_strips_password() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let result = sut.add(new_user("nnobody", "nnobody@revature.com")).await.unwrap();

        assert_eq!(result.id, 6);
        assert!(result.password.is_none());
    }

    #[tokio::test]
    async fn add_rejects_invalid_user_before_data_access() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.add(new_user("", "nnobody@revature.com")).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn add_with_taken_username_is_a_conflict() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.add(new_user("aanderson", "nnobody@revature.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn add_with_taken_email_is_a_conflict() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.add(new_user("nnobody", "aanderson@revature.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn add_losing_the_uniqueness_race_is_a_conflict() {
        // Both availability checks pass; the insert itself hits the store's
        // unique constraint.
        let sut = UserService::new(FakeUserRepo::conflicting_on_add(sample_users()));

        let err = sut.add(new_user("nnobody", "nnobody@revature.com")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_rejects_invalid_user() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));
        let mut user = sample_users().remove(0);
        user.id = 0;

        let err = sut.update(user).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn delete_rejects_invalid_id_without_data_access() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.delete_by_id(-2).await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn delete_with_valid_id_is_not_implemented() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.delete_by_id(9999).await.unwrap_err();

        assert!(matches!(err, AppError::NotImplemented(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn authenticate_with_wrong_password_fails() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.authenticate("aanderson", "forever").await.unwrap_err();

        assert!(matches!(err, AppError::Authentication));
    }

    #[tokio::test]
    async fn authenticate_with_blank_credentials_is_bad_request() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let err = sut.authenticate("", "password").await.unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(sut.repo.calls(), 0);
    }

    #[tokio::test]
    async fn authenticate_strips_password_on_success() {
        let sut = UserService::new(FakeUserRepo::with_users(sample_users()));

        let result = sut.authenticate("aanderson", "password").await.unwrap();

        assert_eq!(result.username, "aanderson");
        assert!(result.password.is_none());
    }

    #[tokio::test]
    async fn repository_failures_surface_as_internal() {
        let sut = UserService::new(FakeUserRepo::failing());

        let err = sut.get_all().await.unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
