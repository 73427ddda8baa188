mod dashboard;
mod env_variable_utils;
mod logging;
mod models;
mod router;
mod search;
mod storage;
mod utils;

use crate::env_variable_utils::ENV;
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logging::init_logger(ENV.debug_mode);
    log::info!("Starting {} against {}", ENV.app_name, ENV.backend_url);
    log::debug!("Runtime config: {:?}", *ENV);

    yew::Renderer::<App>::new().render();
}
