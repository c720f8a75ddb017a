use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_FOLLOW_SELF: &str = "user_follows_not_self_chk";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_CODE: &str = "categories_code_key";
const CNT_TAG_NAME: &str = "tags_name_key";
const CNT_TAG_CODE: &str = "tags_code_key";
const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_PHOTO_ARTICLE: &str = "photos_article_id_key";
const CNT_PHOTO_FILE: &str = "photos_file_key";
const CNT_AVATAR_USER: &str = "avatars_user_id_key";
const CNT_AVATAR_FILE: &str = "avatars_file_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_FOLLOW_SELF => {
                        DomainError::Validation("users cannot follow themselves".into())
                    }
                    CNT_CATEGORY_NAME => DomainError::Conflict("category name already used".into()),
                    CNT_CATEGORY_CODE => DomainError::Conflict("category code already used".into()),
                    CNT_TAG_NAME => DomainError::Conflict("tag name already used".into()),
                    CNT_TAG_CODE => DomainError::Conflict("tag code already used".into()),
                    CNT_ARTICLE_CATEGORY => {
                        // Raised both for a missing category on insert and for a
                        // category that still has articles on delete.
                        if db_err.message().contains("still referenced") {
                            DomainError::Conflict("category still contains articles".into())
                        } else {
                            DomainError::NotFound("category not found".into())
                        }
                    }
                    CNT_ARTICLE_AUTHOR => {
                        if db_err.message().contains("still referenced") {
                            DomainError::Conflict("user still owns articles".into())
                        } else {
                            DomainError::NotFound("author not found".into())
                        }
                    }
                    CNT_PHOTO_ARTICLE => DomainError::Conflict("article already has a photo".into()),
                    CNT_AVATAR_USER => DomainError::Conflict("user already has an avatar".into()),
                    CNT_PHOTO_FILE | CNT_AVATAR_FILE => {
                        DomainError::Conflict("stored file name already in use".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Escapes `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

pub(crate) fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("rust"), "%rust%");
    }
}
