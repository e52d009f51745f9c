use yew::prelude::*;
use yew_router::prelude::*;
use stylist::yew::Global;
use stylist::css;
use log::info;
use web_sys::window;

mod config;
mod content;
mod device;
mod components {
    pub mod accordion;
    pub mod faq;
    pub mod footer;
    pub mod store_buttons;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            // Single page site, unknown paths get the landing page too.
            info!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(content::SITE_TITLE);
                if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                    let _ = meta.set_attribute("content", content::SITE_DESCRIPTION);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Global css={css!(r#"
                :root {
                    --brand: #2db3ff;
                }

                * {
                    box-sizing: border-box;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    background: #111315;
                    color: #fff;
                    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
                }

                h1, h2, h3, p {
                    margin: 0;
                }

                .container-page {
                    margin-left: auto;
                    margin-right: auto;
                    width: 100%;
                    max-width: 1120px;
                    padding-left: 1.25rem;
                    padding-right: 1.25rem;
                }

                .pill {
                    display: inline-flex;
                    align-items: center;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 0.25rem 0.875rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }

                .section-title {
                    font-size: 1.5rem;
                    font-weight: 600;
                }

                .underline {
                    margin-top: 0.5rem;
                    height: 4px;
                    width: 3rem;
                    border-radius: 9999px;
                    background: var(--brand);
                }

                .card-soft {
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(12px);
                }

                .shadow-soft {
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.35);
                }

                .btn-store {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.625rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.6);
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    color: #fff;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .btn-store:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                @media (min-width: 768px) {
                    .section-title {
                        font-size: 1.875rem;
                    }
                }
            "#)} />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
