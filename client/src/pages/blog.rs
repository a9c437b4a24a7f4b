//! Blog feed with category filter, search and pagination.
//!
//! Posts come from the catalog document. Filtering runs entirely in
//! `BlogState`; this page renders it and routes input into it.

use catalog::blog::{BlogPost, CATEGORIES, format_post_date};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::SiteConfig;
use crate::pages::titles::blog_title;
use crate::state::blog::BlogState;
use crate::state::site::SiteState;

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

pub const NO_POSTS_MESSAGE: &str = "No posts found. Try a different search or category.";

/// Absolute link to a post's static page.
pub fn post_href(post: &BlogPost) -> String {
    format!("/{}", post.href())
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let config = expect_context::<SiteConfig>();
    let blog = RwSignal::new(BlogState::default());
    let per_page = config.blog_page_size;

    let title = move || blog_title(&site.get().company_name());

    let on_search_input = move |ev: leptos::ev::Event| blog.update(|b| b.draft = event_target_value(&ev));
    let on_search_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            blog.update(BlogState::submit_search);
        }
    };

    let categories = CATEGORIES
        .iter()
        .map(|(value, label)| {
            let value = *value;
            view! {
                <button
                    class="category-btn"
                    class:active=move || blog.get().is_active_category(value)
                    on:click=move |_| blog.update(|b| b.select_category(value))
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    let feed = move || {
        let state = site.get();
        if state.loading {
            return view! { <p class="loading">"Loading posts..."</p> }.into_any();
        }
        let posts = state.catalog.map(|c| c.blog).unwrap_or_default();
        let filter = blog.get();
        let (page, pages) = filter.visible(&posts, per_page);
        if page.is_empty() {
            return view! { <p class="no-posts">{NO_POSTS_MESSAGE}</p> }.into_any();
        }
        let current = filter.page.min(pages);
        let cards = page.into_iter().map(|post| view! { <PostCard post=post.clone()/> }).collect_view();
        view! {
            <div class="blog-grid">{cards}</div>
            <Pagination current=current pages=pages blog=blog/>
        }
        .into_any()
    };

    view! {
        <Title text=title/>
        <section class="blog-header">
            <h1>"Blog"</h1>
            <p>"News, tutorials and updates from our team."</p>
        </section>
        <div class="blog-filters">
            <div class="category-filter">{categories}</div>
            <div class="search-box">
                <input
                    type="search"
                    placeholder="Search posts..."
                    prop:value=move || blog.get().draft
                    on:input=on_search_input
                    on:keydown=on_search_key
                />
                <button class="search-btn" on:click=move |_| blog.update(BlogState::submit_search)>
                    "Search"
                </button>
                <Show when=move || blog.get().is_filtered()>
                    <button class="clear-btn" on:click=move |_| blog.set(BlogState::default())>
                        "Clear filters"
                    </button>
                </Show>
            </div>
        </div>
        {feed}
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = post_href(&post);
    view! {
        <article class="blog-card">
            {(!post.image.is_empty()).then(|| view! { <img class="blog-card-image" src=post.image.clone() alt=post.title.clone()/> })}
            <div class="blog-card-content">
                <div class="blog-meta">
                    <span class="blog-category">{post.category.clone()}</span>
                    <span class="blog-date">{format_post_date(&post.date)}</span>
                </div>
                <h3 class="blog-title">
                    <a href=href.clone() rel="external">{post.title.clone()}</a>
                </h3>
                <p class="blog-excerpt">{post.excerpt.clone()}</p>
                <div class="blog-footer">
                    <span class="blog-author">{post.author.clone()}</span>
                    <a class="read-more" href=href rel="external">"Read More"</a>
                </div>
            </div>
        </article>
    }
}

/// Page buttons; hidden when everything fits on one page.
#[component]
fn Pagination(current: usize, pages: usize, blog: RwSignal<BlogState>) -> impl IntoView {
    (pages > 1).then(|| {
        view! {
            <nav class="pagination">
                <button
                    class="page-btn"
                    disabled=current <= 1
                    on:click=move |_| blog.update(|b| b.set_page(current.saturating_sub(1)))
                >
                    "Previous"
                </button>
                {(1..=pages)
                    .map(|page| {
                        view! {
                            <button
                                class="page-btn"
                                class:active=page == current
                                on:click=move |_| blog.update(|b| b.set_page(page))
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="page-btn"
                    disabled=current >= pages
                    on:click=move |_| blog.update(|b| b.set_page(current + 1))
                >
                    "Next"
                </button>
            </nav>
        }
    })
}
