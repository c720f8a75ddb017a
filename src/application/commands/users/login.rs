use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthorDto, LoginResult, TokenSubject},
        error::{ApplicationError, ApplicationResult},
        forms::LoginForm,
    },
    domain::user::{AuthorProfile, Email, User, capabilities_for},
};

impl UserCommandService {
    pub async fn login(&self, form: LoginForm) -> ApplicationResult<LoginResult> {
        let email = Email::new(form.email)
            .map_err(|_| ApplicationError::unauthorized("invalid credentials"))?;
        let user = self.find_and_authenticate_user(&email, &form.password).await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
            roles: user.roles().clone(),
            capabilities: capabilities_for(user.roles()),
        };
        let token = self.token_manager.issue(subject).await?;

        let avatar = self.avatar_repo.find_by_user(user.id).await?;
        Ok(LoginResult {
            token,
            user: AuthorDto::from_profile(AuthorProfile { user, avatar }, &self.uploads),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
