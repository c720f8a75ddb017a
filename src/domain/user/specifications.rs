use crate::domain::user::value_objects::UserId;

pub struct CanFollowSpec {
    follower: UserId,
    followed: UserId,
}

impl CanFollowSpec {
    pub fn new(follower: UserId, followed: UserId) -> Self {
        Self { follower, followed }
    }

    pub fn is_satisfied(&self) -> bool {
        self.follower != self.followed
    }
}
