//! Video cards with a YouTube player modal.
//!
//! DESIGN
//! ======
//! The player iframe exists only while the modal is open, so closing the modal
//! stops playback. Page scrolling is locked for the modal's lifetime.

use catalog::Video;
use leptos::prelude::*;

use crate::util::modal::close_on_escape;

#[cfg(test)]
#[path = "video_gallery_test.rs"]
mod video_gallery_test;

const PLAYER_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Autoplaying embed URL without related-video suggestions.
pub fn embed_url(youtube_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", urlencoding::encode(youtube_id))
}

/// Card thumbnail, falling back to YouTube's generated still.
pub fn thumbnail_url(video: &Video) -> String {
    if video.thumbnail.trim().is_empty() {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", urlencoding::encode(&video.youtube_id))
    } else {
        video.thumbnail.clone()
    }
}

#[component]
pub fn VideoGallery(videos: Vec<Video>) -> impl IntoView {
    let playing = RwSignal::new(None::<String>);
    let on_close = Callback::new(move |()| playing.set(None));

    view! {
        <section class="videos-section">
            <h2>"Videos"</h2>
            <div class="videos-grid">
                {videos
                    .into_iter()
                    .filter(|video| !video.youtube_id.trim().is_empty())
                    .map(|video| {
                        let id = video.youtube_id.clone();
                        view! {
                            <div class="video-card" on:click=move |_| playing.set(Some(id.clone()))>
                                <div class="video-thumbnail-container">
                                    <img src=thumbnail_url(&video) alt=video.title.clone() class="video-thumbnail"/>
                                    <div class="video-play-button">"▶"</div>
                                </div>
                                <div class="video-info">
                                    <h3 class="video-title">{video.title.clone()}</h3>
                                    <p class="video-description">{video.description.clone()}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {move || playing.get().map(|id| view! { <VideoModal youtube_id=id on_close=on_close/> })}
        </section>
    }
}

/// Closes on the close button, a backdrop click or Escape.
#[component]
fn VideoModal(youtube_id: String, on_close: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move || {
        if let Some(dialog) = dialog_ref.get() {
            if dialog.focus().is_err() {
                log::debug!("video modal could not take focus");
            }
        }
    });

    close_on_escape(on_close);
    lock_page_scroll(true);
    on_cleanup(|| lock_page_scroll(false));

    view! {
        <div class="video-modal visible" on:click=move |_| on_close.run(())>
            <div
                class="video-modal-content"
                node_ref=dialog_ref
                tabindex="0"
                on:click=|ev| ev.stop_propagation()
            >
                <button class="close-video-modal" title="Close video" on:click=move |_| on_close.run(())>
                    "×"
                </button>
                <div class="video-container">
                    <iframe src=embed_url(&youtube_id) allow=PLAYER_ALLOW allowfullscreen=true></iframe>
                </div>
            </div>
        </div>
    }
}

fn lock_page_scroll(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = document().body() else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        if body.style().set_property("overflow", value).is_err() {
            log::debug!("failed to toggle page scroll lock");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
