use crate::dashboard::action::DashboardAction;
use crate::dashboard::automations::{AutomationsTab, RuleRow};
use crate::dashboard::gate::CredentialGate;
use crate::dashboard::playlists::PlaylistsTab;
use crate::dashboard::state::{Dashboard, SearchPlan};
use crate::env_variable_utils::ENV;
use crate::models::Tab;
use crate::search::api::search_videos;
use crate::search::components::{SearchBar, SelectionBar, VideoGrid};
use crate::storage::{BrowserStorage, LocalStateStore};
use chrono::Utc;
use yew::prelude::*;

pub type BrowserDashboard = Dashboard<BrowserStorage>;

#[derive(Properties, PartialEq)]
pub struct StorageErrorProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component(StorageErrorBanner)]
pub fn storage_error_banner(props: &StorageErrorProps) -> Html {
    let Some(msg) = &props.message else {
        return html! {};
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="bg-red-900/40 border border-red-700 text-red-300 px-4 py-3 rounded mb-4 flex justify-between">
            <span>{ msg.clone() }</span>
            <button onclick={on_dismiss} class="ml-4 hover:text-white">{"✕"}</button>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let dashboard = use_reducer(|| {
        let seed = Utc::now().timestamp_millis() as u64;
        BrowserDashboard::load(LocalStateStore::new(BrowserStorage), seed)
    });

    let dispatch = |make: fn(String) -> DashboardAction| {
        let dashboard = dashboard.clone();
        Callback::from(move |value: String| dashboard.dispatch(make(value)))
    };

    let on_save_credential = dispatch(DashboardAction::SaveCredential);
    let on_query_input = dispatch(DashboardAction::SetQuery);
    let on_toggle_selection = dispatch(DashboardAction::ToggleSelection);
    let on_add_to_playlist = dispatch(DashboardAction::AddSelectionToPlaylist);
    let on_delete_playlist = dispatch(DashboardAction::DeletePlaylist);
    let on_toggle_automation = dispatch(DashboardAction::ToggleAutomation);
    let on_delete_automation = dispatch(DashboardAction::DeleteAutomation);

    let on_demo = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::EnterDemoMode))
    };

    let on_forget = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::ForgetCredential))
    };

    let on_settings = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::OpenSettings))
    };

    let on_dismiss_error = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| dashboard.dispatch(DashboardAction::DismissStorageError))
    };

    let on_search = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| {
            let plan = dashboard.search_plan();
            dashboard.dispatch(DashboardAction::SubmitSearch);

            if let SearchPlan::Fetch { query, api_key } = plan {
                let dashboard = dashboard.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = search_videos(&query, &api_key).await;
                    dashboard.dispatch(DashboardAction::SearchFinished { query, outcome });
                });
            }
        })
    };

    let on_automate = {
        let dashboard = dashboard.clone();
        Callback::from(move |_| {
            dashboard.dispatch(DashboardAction::CreateAutomation { now: Utc::now() })
        })
    };

    let on_create_playlist = {
        let dashboard = dashboard.clone();
        Callback::from(move |name: String| {
            dashboard.dispatch(DashboardAction::CreatePlaylist {
                name,
                now: Utc::now(),
            })
        })
    };

    if dashboard.show_gate {
        return html! {
            <CredentialGate
                credential={dashboard.credential.clone()}
                on_save={on_save_credential}
                on_demo={on_demo}
                on_forget={on_forget}
            />
        };
    }

    let tab_buttons = Tab::all_variants().into_iter().map(|tab| {
        let dashboard = dashboard.clone();
        let class = if dashboard.active_tab == tab {
            "text-red-500 border-b-2 border-red-500"
        } else {
            "text-gray-400 hover:text-white"
        };
        html! {
            <button
                onclick={move |_| dashboard.dispatch(DashboardAction::SelectTab(tab))}
                class={classes!("px-6", "py-3", "font-semibold", "transition", class)}
            >
                { tab.display_name() }
            </button>
        }
    });

    let content = match dashboard.active_tab {
        Tab::Search => html! {
            <div>
                <SearchBar
                    query={dashboard.query.clone()}
                    loading={dashboard.loading}
                    on_input={on_query_input}
                    on_search={on_search}
                    on_automate={on_automate}
                />
                {
                    if dashboard.demo_mode && dashboard.credential.is_none() {
                        html! {
                            <p class="text-xs text-gray-500 mb-4">{"Demo mode: results are generated locally."}</p>
                        }
                    } else {
                        html! {}
                    }
                }
                <SelectionBar
                    selected_count={dashboard.selection.len()}
                    playlists={dashboard.playlists.clone()}
                    on_add={on_add_to_playlist}
                />
                <VideoGrid
                    videos={dashboard.videos.clone()}
                    selection={dashboard.selection.clone()}
                    on_toggle={on_toggle_selection}
                />
            </div>
        },
        Tab::Playlists => html! {
            <PlaylistsTab
                playlists={dashboard.playlists.clone()}
                on_create={on_create_playlist}
                on_delete={on_delete_playlist}
            />
        },
        Tab::Automations => {
            let rows: Vec<RuleRow> = dashboard
                .automations
                .iter()
                .map(|rule| RuleRow {
                    rule: rule.clone(),
                    target: dashboard.rule_target(rule),
                })
                .collect();
            html! {
                <AutomationsTab
                    rows={rows}
                    on_toggle={on_toggle_automation}
                    on_delete={on_delete_automation}
                />
            }
        }
    };

    let dangling = dashboard
        .automations
        .iter()
        .filter(|rule| dashboard.has_dangling_target(rule))
        .count();

    html! {
        <div class="min-h-screen">
            <header class="bg-gray-900 border-b border-gray-800 sticky top-0 z-50">
                <div class="container mx-auto px-4 py-4">
                    <div class="flex items-center justify-between">
                        <div class="flex items-center space-x-2">
                            <span class="text-red-600 text-3xl">{"▶"}</span>
                            <h1 class="text-2xl font-bold">{ ENV.app_name.clone() }</h1>
                        </div>
                        <button
                            onclick={on_settings}
                            class="px-4 py-2 text-sm bg-gray-800 hover:bg-gray-700 rounded-lg transition"
                        >
                            {"API Settings"}
                        </button>
                    </div>
                </div>
            </header>

            <div class="container mx-auto px-4 py-6">
                <StorageErrorBanner
                    message={dashboard.storage_error.clone()}
                    on_dismiss={on_dismiss_error}
                />

                <div class="flex space-x-2 mb-6 border-b border-gray-800">
                    { for tab_buttons }
                    {
                        if dangling > 0 {
                            html! {
                                <span class="ml-auto self-center text-xs text-red-400">
                                    { format!("{dangling} rule(s) point at deleted playlists") }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                { content }
            </div>
        </div>
    }
}
