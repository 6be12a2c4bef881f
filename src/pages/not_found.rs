use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off into the shadows."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to recruitments"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: center;
                }

                .not-found h1 {
                    font-size: 4rem;
                    color: #EAB308;
                }

                .not-found-link {
                    color: #EAB308;
                }
                "#}
            </style>
        </div>
    }
}
