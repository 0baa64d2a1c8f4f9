//! Single comment row under a post.

use leptos::prelude::*;

use crate::net::types::Comment;

/// Renders one comment with author and timestamp.
#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    view! {
        <div class="comment-item">
            <div class="comment-item__meta">
                <span class="comment-item__author">{comment.author}</span>
                <span class="comment-item__date">{comment.created_at}</span>
            </div>
            <p class="comment-item__content">{comment.content}</p>
        </div>
    }
}
