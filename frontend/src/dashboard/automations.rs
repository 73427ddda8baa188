use crate::dashboard::state::RuleTarget;
use crate::models::AutomationRule;
use crate::utils::format_locale_datetime;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct RuleRow {
    pub rule: AutomationRule,
    pub target: RuleTarget,
}

#[derive(Properties, PartialEq)]
pub struct AutomationsTabProps {
    pub rows: Vec<RuleRow>,
    pub on_toggle: Callback<String>,
    pub on_delete: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct RuleCardProps {
    pub row: RuleRow,
    pub on_toggle: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(AutomationsTab)]
pub fn automations_tab(props: &AutomationsTabProps) -> Html {
    html! {
        <div>
            <div class="mb-6 p-6 bg-gray-900 rounded-lg">
                <h2 class="text-xl font-bold mb-2">{"Automation Rules"}</h2>
                <p class="text-gray-400">
                    {"Create rules to automatically search, collect, and organize YouTube videos."}
                </p>
            </div>

            <div class="space-y-4">
                { for props.rows.iter().map(|row| html! {
                    <RuleCard
                        key={row.rule.id.clone()}
                        row={row.clone()}
                        on_toggle={props.on_toggle.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })}

                {
                    if props.rows.is_empty() {
                        html! {
                            <div class="text-center py-12 text-gray-400">
                                <p>{"No automation rules yet. Search for videos and click \"Automate\" to create one."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

fn target_badge(target: &RuleTarget) -> Html {
    match target {
        RuleTarget::Unset => html! {},
        RuleTarget::Playlist(name) => html! {
            <span class="text-sm text-gray-400">{ format!("→ {name}") }</span>
        },
        RuleTarget::Missing(id) => html! {
            <span class="px-3 py-1 rounded-full text-xs font-semibold bg-red-500/20 text-red-400" title={id.clone()}>
                {"Missing playlist"}
            </span>
        },
    }
}

#[function_component(RuleCard)]
pub fn rule_card(props: &RuleCardProps) -> Html {
    let rule = &props.row.rule;

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        let rule_id = rule.id.clone();
        Callback::from(move |_| on_toggle.emit(rule_id.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let rule_id = rule.id.clone();
        Callback::from(move |_| on_delete.emit(rule_id.clone()))
    };

    let (status_label, status_class) = if rule.enabled {
        ("Active", "bg-green-500/20 text-green-400")
    } else {
        ("Paused", "bg-gray-700 text-gray-400")
    };

    let toggle_class = if rule.enabled {
        "bg-gray-700 hover:bg-gray-600"
    } else {
        "bg-green-600 hover:bg-green-700"
    };

    html! {
        <div class="bg-gray-900 rounded-lg p-4">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center space-x-3 mb-2">
                        <span class={classes!("px-3", "py-1", "rounded-full", "text-xs", "font-semibold", status_class)}>
                            { status_label }
                        </span>
                        <span class="text-sm text-gray-400">{ rule.rule_type.display_name() }</span>
                        { target_badge(&props.row.target) }
                    </div>
                    <h3 class="font-semibold text-lg mb-1">{ format!("Auto-collect: {}", rule.query) }</h3>
                    <p class="text-sm text-gray-400">
                        { format!("{} • Runs {}", rule.action.display_name(), rule.frequency) }
                    </p>
                    {
                        if let Some(last_run) = &rule.last_run {
                            html! {
                                <p class="text-xs text-gray-500 mt-1">
                                    { format!("Last run: {}", format_locale_datetime(last_run)) }
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="flex space-x-2">
                    <button
                        onclick={on_toggle}
                        class={classes!("px-4", "py-2", "rounded-lg", "font-semibold", "transition", toggle_class)}
                    >
                        { if rule.enabled { "Pause" } else { "Enable" } }
                    </button>
                    <button
                        onclick={on_delete}
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-semibold transition"
                    >
                        {"🗑"}
                    </button>
                </div>
            </div>
        </div>
    }
}
