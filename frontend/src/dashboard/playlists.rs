use crate::models::Playlist;
use crate::utils::{format_locale_date, format_video_count};
use web_sys::HtmlInputElement;
use yew::prelude::*;

// Videos previewed per playlist card
const PREVIEW_COUNT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct PlaylistsTabProps {
    pub playlists: Vec<Playlist>,
    pub on_create: Callback<String>,
    pub on_delete: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct PlaylistCardProps {
    pub playlist: Playlist,
    pub on_delete: Callback<String>,
}

#[function_component(PlaylistsTab)]
pub fn playlists_tab(props: &PlaylistsTabProps) -> Html {
    let name_input = use_state(String::new);

    let on_name_input = {
        let name_input = name_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            name_input.set(input_value);
        })
    };

    let on_submit = {
        let name_input = name_input.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            if name_input.trim().is_empty() {
                return;
            }
            on_create.emit((*name_input).clone());
            name_input.set(String::new());
        })
    };

    html! {
        <div>
            <form onsubmit={on_submit} class="flex space-x-2 mb-6">
                <input
                    type="text"
                    class="flex-1 px-4 py-3 bg-gray-900 border border-gray-800 rounded-lg focus:outline-none focus:border-red-500"
                    placeholder="New playlist name..."
                    value={(*name_input).clone()}
                    oninput={on_name_input}
                />
                <button
                    type="submit"
                    class="px-6 py-3 bg-red-600 hover:bg-red-700 rounded-lg font-semibold transition"
                >
                    {"Create Playlist"}
                </button>
            </form>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for props.playlists.iter().map(|playlist| html! {
                    <PlaylistCard
                        key={playlist.id.clone()}
                        playlist={playlist.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })}
            </div>
        </div>
    }
}

#[function_component(PlaylistCard)]
pub fn playlist_card(props: &PlaylistCardProps) -> Html {
    let playlist = &props.playlist;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let playlist_id = playlist.id.clone();
        Callback::from(move |_| on_delete.emit(playlist_id.clone()))
    };

    html! {
        <div class="bg-gray-900 rounded-lg p-4">
            <div class="flex items-start justify-between mb-3">
                <div>
                    <h3 class="font-semibold text-lg">{ playlist.name.clone() }</h3>
                    <p class="text-sm text-gray-400">
                        { format!("{} • created {}", format_video_count(playlist.videos.len()), format_locale_date(&playlist.created_at)) }
                    </p>
                </div>
                <button onclick={on_delete} class="text-gray-400 hover:text-red-500 transition">
                    {"🗑"}
                </button>
            </div>
            <div class="space-y-2">
                // Duplicates are allowed, so ids are not unique keys here.
                { for playlist.videos.iter().take(PREVIEW_COUNT).map(|video| html! {
                    <div class="flex space-x-2 text-sm">
                        <img src={video.thumbnail.clone()} alt="" class="w-20 h-12 object-cover rounded" />
                        <div class="flex-1 min-w-0">
                            <p class="truncate">{ video.title.clone() }</p>
                            <p class="text-xs text-gray-500">{ video.channel.clone() }</p>
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
