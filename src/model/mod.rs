mod author;
mod category;
mod comment;
mod post;
mod user;

pub use self::author::Author;
pub use self::category::{Category, UnknownCategory};
pub use self::comment::{Comment, CommentDraft};
pub use self::post::{Post, PostDraft};
pub use self::user::User;
