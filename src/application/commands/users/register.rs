use super::UserCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
        forms::RegistrationForm,
    },
    domain::user::{AuthorProfile, NewUser, PasswordHash},
};

impl UserCommandService {
    /// Creates an account with the plain `user` role.
    pub async fn register(&self, form: RegistrationForm) -> ApplicationResult<AuthorDto> {
        let valid = form.validate()?;

        if self.user_repo.find_by_email(&valid.email).await?.is_some() {
            return Err(ApplicationError::invalid_field(
                "email",
                "There is already an account with this email",
            ));
        }

        let hashed = self.password_hasher.hash(&valid.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::register(
            valid.email,
            password_hash,
            valid.first_name,
            self.clock.now(),
        );
        let user = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(AuthorDto::from_profile(
            AuthorProfile { user, avatar: None },
            &self.uploads,
        ))
    }
}
