use crate::models::{Playlist, Video};
use std::collections::HashSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub query: String,
    pub loading: bool,
    pub on_input: Callback<String>,
    pub on_search: Callback<()>,
    pub on_automate: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct SelectionBarProps {
    pub selected_count: usize,
    pub playlists: Vec<Playlist>,
    pub on_add: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub selected: bool,
    pub on_toggle: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct VideoGridProps {
    pub videos: Vec<Video>,
    pub selection: HashSet<String>,
    pub on_toggle: Callback<String>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_input.emit(input_value);
        })
    };

    // Enter in the input submits the form.
    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    let on_automate = {
        let on_automate = props.on_automate.clone();
        Callback::from(move |_| on_automate.emit(()))
    };

    html! {
        <form onsubmit={on_submit} class="flex space-x-2 mb-6">
            <input
                type="text"
                class="flex-1 px-4 py-3 bg-gray-900 border border-gray-800 rounded-lg focus:outline-none focus:border-red-500"
                placeholder="Search YouTube videos..."
                value={props.query.clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-semibold transition disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Searching..." } else { "Search" } }
            </button>
            <button
                type="button"
                onclick={on_automate}
                class="px-6 py-3 bg-gray-800 hover:bg-gray-700 rounded-lg font-semibold transition"
            >
                {"+ Automate"}
            </button>
        </form>
    }
}

#[function_component(SelectionBar)]
pub fn selection_bar(props: &SelectionBarProps) -> Html {
    if props.selected_count == 0 {
        return html! {};
    }

    html! {
        <div class="mb-4 p-4 bg-gray-900 rounded-lg flex items-center justify-between">
            <span>{ format!("{} video(s) selected", props.selected_count) }</span>
            <div class="flex space-x-2">
                { for props.playlists.iter().map(|playlist| {
                    let on_add = props.on_add.clone();
                    let playlist_id = playlist.id.clone();
                    html! {
                        <button
                            key={playlist.id.clone()}
                            onclick={move |_| on_add.emit(playlist_id.clone())}
                            class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg text-sm transition"
                        >
                            { format!("Add to {}", playlist.name) }
                        </button>
                    }
                })}
            </div>
        </div>
    }
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let video_id = props.video.id.clone();
        Callback::from(move |_| on_toggle.emit(video_id.clone()))
    };

    let ring = if props.selected { "ring-2 ring-red-500" } else { "" };
    let video = &props.video;

    html! {
        <div
            class={classes!("bg-gray-900", "rounded-lg", "overflow-hidden", "hover:bg-gray-800", "transition", "cursor-pointer", ring)}
            {onclick}
        >
            <div class="relative">
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full aspect-video object-cover" />
                <div class="absolute bottom-2 right-2 bg-black bg-opacity-80 px-2 py-1 rounded text-xs">
                    { video.duration.clone() }
                </div>
            </div>
            <div class="p-3">
                <h3 class="font-semibold mb-1 line-clamp-2">{ video.title.clone() }</h3>
                <p class="text-sm text-gray-400">{ video.channel.clone() }</p>
                <p class="text-xs text-gray-500">{ format!("{} • {}", video.views, video.published_at) }</p>
            </div>
        </div>
    }
}

#[function_component(VideoGrid)]
pub fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4">
            { for props.videos.iter().map(|video| html! {
                <VideoCard
                    key={video.id.clone()}
                    video={video.clone()}
                    selected={props.selection.contains(&video.id)}
                    on_toggle={props.on_toggle.clone()}
                />
            })}
        </div>
    }
}
