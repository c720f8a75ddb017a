pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod media;
pub mod pagination;
pub mod search;
pub mod serde_time;
pub mod tags;
pub mod users;

pub use articles::{ArticleDto, ArticleFormView, ArticleFormValues, ArticleViewDto, CategoryArticlesDto, TagArticlesDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResult, TokenSubject};
pub use categories::{CategoryDeleteView, CategoryDto};
pub use comments::CommentDto;
pub use media::{AvatarDto, PhotoDto, StoredFileView};
pub use pagination::PaginatedResult;
pub use search::SearchResultsDto;
pub use tags::TagDto;
pub use users::{AuthorDto, AuthorSummaryDto, AuthorViewDto};
