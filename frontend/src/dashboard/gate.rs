use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CredentialGateProps {
    pub credential: Option<String>,
    pub on_save: Callback<String>,
    pub on_demo: Callback<()>,
    pub on_forget: Callback<()>,
}

/// First-run prompt for the YouTube Data API key, also reachable from
/// "API Settings".
#[function_component(CredentialGate)]
pub fn credential_gate(props: &CredentialGateProps) -> Html {
    let key_input = use_state(|| props.credential.clone().unwrap_or_default());

    let on_key_input = {
        let key_input = key_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            key_input.set(input_value);
        })
    };

    let on_submit = {
        let key_input = key_input.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_save.emit((*key_input).clone());
        })
    };

    let on_demo = {
        let on_demo = props.on_demo.clone();
        Callback::from(move |_| on_demo.emit(()))
    };

    let on_forget = {
        let on_forget = props.on_forget.clone();
        let key_input = key_input.clone();
        Callback::from(move |_| {
            key_input.set(String::new());
            on_forget.emit(());
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <form onsubmit={on_submit} class="bg-gray-900 p-8 rounded-lg shadow-xl max-w-md w-full">
                <h2 class="text-2xl font-bold mb-4">{"YouTube API Key"}</h2>
                <p class="text-gray-400 mb-4">
                    {"Enter your YouTube Data API v3 key to get started. You can get one from the Google Cloud Console."}
                </p>
                <input
                    type="text"
                    class="w-full px-4 py-2 bg-gray-800 border border-gray-700 rounded-lg mb-4 focus:outline-none focus:border-red-500"
                    placeholder="AIzaSy..."
                    value={(*key_input).clone()}
                    oninput={on_key_input}
                />
                <button
                    type="submit"
                    class="w-full px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg font-semibold transition"
                >
                    {"Save & Continue"}
                </button>
                <button
                    type="button"
                    onclick={on_demo}
                    class="w-full px-4 py-2 mt-2 bg-gray-700 hover:bg-gray-600 rounded-lg font-semibold transition"
                >
                    {"Skip (Use Demo Mode)"}
                </button>
                {
                    if props.credential.is_some() {
                        html! {
                            <button
                                type="button"
                                onclick={on_forget}
                                class="w-full px-4 py-2 mt-2 text-sm text-gray-400 hover:text-red-500 transition"
                            >
                                {"Forget saved key"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
        </div>
    }
}
