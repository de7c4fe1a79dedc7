use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod header_bus;
mod lottie;
mod scroll;

mod components {
    pub mod chart_animation;
    pub mod contact;
    pub mod cta;
    pub mod fade_in;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod results;
    pub mod services;
}

mod pages {
    pub mod home;
    pub mod questionario;
}

mod questionario {
    pub mod adicionais;
    pub mod agradecimento;
    pub mod button;
    pub mod contato;
    pub mod empresa;
    pub mod estrutura;
    pub mod revisao;
    pub mod servicos;
    pub mod state;
    pub mod validate;
}

use components::header::Header;
use header_bus::HeaderBus;
use pages::{home::Home, questionario::QuestionarioPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/questionario")]
    Questionario,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Questionario => {
            info!("Rendering Questionario page");
            html! { <QuestionarioPage /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // One bus for the whole page view; the results section publishes and
    // the header subscribes.
    let bus = use_state(HeaderBus::new);

    html! {
        <BrowserRouter>
            <ContextProvider<HeaderBus> context={(*bus).clone()}>
                <Header />
                <Switch<Route> render={switch} />
            </ContextProvider<HeaderBus>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
