//! Domain records to response bodies, and forms to domain inputs.

use blogicum_core::domain::{
    Category, Comment, CommentEntry, Post, PostCard, PostDetail, PostDraft, ProfileChanges, User,
};
use blogicum_core::pagination::Page;
use blogicum_shared::Paginated;
use blogicum_shared::dto::{
    CategoryResponse, CommentForm, CommentResponse, PostDetailResponse, PostForm, PostResponse,
    ProfileForm, ProfileResponse, UserResponse,
};

pub fn category(category: &Category) -> CategoryResponse {
    CategoryResponse {
        id: category.id,
        title: category.title.clone(),
        slug: category.slug.clone(),
        description: category.description.clone(),
    }
}

pub fn post_card(card: PostCard) -> PostResponse {
    let PostCard {
        post,
        author_username,
        category: post_category,
        comment_count,
    } = card;

    PostResponse {
        id: post.id,
        title: post.title,
        text: post.text,
        pub_date: post.pub_date,
        is_published: post.is_published,
        author: author_username,
        category: post_category.as_ref().map(category),
        comment_count,
    }
}

pub fn page(page: Page<PostCard>) -> Paginated<PostResponse> {
    let total_pages = page.total_pages();
    let has_next = page.has_next();
    let has_previous = page.has_previous();
    let page = page.map(post_card);

    Paginated {
        items: page.items,
        page: page.number,
        total_pages,
        total_items: page.total_items,
        has_next,
        has_previous,
    }
}

pub fn comment(entry: CommentEntry) -> CommentResponse {
    CommentResponse {
        id: entry.comment.id,
        post_id: entry.comment.post_id,
        text: entry.comment.text,
        author: entry.author_username,
        created_at: entry.comment.created_at,
    }
}

pub fn post_detail(detail: PostDetail) -> PostDetailResponse {
    PostDetailResponse {
        post: post_card(detail.card),
        comments: detail.comments.into_iter().map(comment).collect(),
    }
}

pub fn profile(user: &User) -> ProfileResponse {
    ProfileResponse {
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        bio: user.bio.clone(),
        avatar_url: user.avatar_url.clone(),
        joined_at: user.created_at,
    }
}

pub fn account(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        bio: user.bio.clone(),
        avatar_url: user.avatar_url.clone(),
        created_at: user.created_at,
    }
}

pub fn profile_form(user: &User) -> ProfileForm {
    ProfileForm {
        username: user.username.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        bio: user.bio.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

pub fn profile_changes(form: ProfileForm) -> ProfileChanges {
    ProfileChanges {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        display_name: form.display_name,
        bio: form.bio,
        avatar_url: form.avatar_url,
    }
}

pub fn post_form(post: &Post) -> PostForm {
    PostForm {
        title: post.title.clone(),
        text: post.text.clone(),
        pub_date: Some(post.pub_date),
        category_id: post.category_id,
        is_published: post.is_published,
    }
}

pub fn draft(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        text: form.text,
        pub_date: form.pub_date,
        category_id: form.category_id,
        is_published: form.is_published,
    }
}

pub fn comment_form(comment: &Comment) -> CommentForm {
    CommentForm {
        text: comment.text.clone(),
    }
}
