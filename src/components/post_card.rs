//! Reusable row component for post list items.
//!
//! DESIGN
//! ======
//! Keeps post list presentation consistent across boards while centralizing
//! the link target format.

use leptos::prelude::*;

use crate::net::types::Post;

/// A clickable row representing a post in a board listing.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = format!("/post/{}", post.id);
    let comment_label = (post.comment_count > 0).then(|| format!("[{}]", post.comment_count));

    view! {
        <a class="post-card" href=href>
            <span class="post-card__title">
                {post.title}
                {comment_label.map(|label| view! { <span class="post-card__comments">{label}</span> })}
            </span>
            <span class="post-card__author">{post.author}</span>
            <span class="post-card__date">{post.created_at}</span>
        </a>
    }
}
