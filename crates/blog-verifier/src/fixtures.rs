//! Synthetic blog post records.

use blog_core::domain::{Author, BlogPost};
use blog_core::ports::FixtureGenerator;
use blog_shared::dto::{AuthorDto, CreateBlogPostRequest};

/// One synthetic post: sentence title, paragraph content, random author,
/// creation time in the past.
pub fn generate_record(fixtures: &dyn FixtureGenerator) -> BlogPost {
    BlogPost::new(
        fixtures.sentence(),
        fixtures.paragraph(),
        Author::new(fixtures.first_name(), fixtures.last_name()),
        Some(fixtures.past_timestamp()),
    )
}

/// POST body for `post`. The id is left for the server to assign.
pub fn create_payload(post: &BlogPost) -> CreateBlogPostRequest {
    CreateBlogPostRequest {
        title: post.title.clone(),
        content: post.content.clone(),
        author: AuthorDto {
            first_name: post.author.first_name.clone(),
            last_name: post.author.last_name.clone(),
        },
        created: Some(post.created),
    }
}
