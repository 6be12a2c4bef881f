use chrono::{DateTime, Utc};
use web_sys::HtmlMediaElement;
use log::debug;
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::config::{BACKGROUND_AUDIO, BACKGROUND_VIDEO, HEADLINE, HEADLINE_REVEAL_MS};
use crate::hooks::{use_countdown, use_typewriter};
use crate::media::{open_in_new_tab, play_background_audio, play_muted_loop};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub deadline: DateTime<Utc>,
    pub apply_url: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let time_left = use_countdown(props.deadline);
    let headline = use_typewriter(HEADLINE, HEADLINE_REVEAL_MS);

    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_mount(move || {
            match video_ref.cast::<HtmlMediaElement>() {
                Some(video) => play_muted_loop(&video),
                None => debug!("Background video element missing on mount"),
            }
            play_background_audio(BACKGROUND_AUDIO);
        });
    }

    let on_apply = {
        let apply_url = props.apply_url.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&apply_url))
    };

    html! {
        <header id="home" class="hero">
            <video ref={video_ref} class="hero-video" autoplay={true} loop={true} muted={true}>
                <source src={BACKGROUND_VIDEO} type="video/mp4" />
            </video>
            <div class="hero-overlay"></div>

            <div class="hero-content">
                <h1 class="hero-title" aria-label={HEADLINE}>{headline}</h1>
                <p class="hero-quote">
                    {"\"In the shadows of data, we weave the threads of destiny.\" - Anonymous, Dark Web"}
                </p>

                <div class={classes!("countdown", time_left.is_zero().then_some("countdown-closed"))}>
                    { for time_left.cells().into_iter().map(|(unit, value)| html! {
                        <div class="countdown-cell" key={unit}>
                            <div class="countdown-face">
                                // New key per value so the flip animation replays on every change.
                                <div class="countdown-value" key={value.to_string()}>{value}</div>
                            </div>
                            <p class="countdown-unit">{unit}</p>
                        </div>
                    }) }
                </div>

                <button class="apply-button" onclick={on_apply}>{"APPLY NOW"}</button>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                }

                .hero-video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to bottom,
                        rgba(0, 0, 0, 0.7) 0%,
                        rgba(0, 0, 0, 0.5) 50%,
                        rgba(0, 0, 0, 1) 100%
                    );
                }

                .hero-content {
                    position: relative;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                }

                .hero-title {
                    font-family: 'Protest Guerrilla', 'Montserrat', sans-serif;
                    font-size: 3.75rem;
                    font-weight: 700;
                    min-height: 1.2em;
                    margin-bottom: 1.5rem;
                    color: transparent;
                    -webkit-text-stroke: 2px #EAB308;
                }

                .hero-quote {
                    font-size: 1.25rem;
                    font-style: italic;
                    color: #9ca3af;
                    margin-bottom: 1.5rem;
                }

                .countdown {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2rem;
                    perspective: 400px;
                }

                .countdown-closed .countdown-value {
                    background: #6b7280;
                }

                .countdown-cell {
                    text-align: center;
                }

                .countdown-value {
                    width: 5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.5rem;
                    background: #EAB308;
                    color: #000000;
                    font-size: 2.25rem;
                    font-weight: 700;
                    animation: flipIn 0.5s ease-out;
                }

                .countdown-unit {
                    margin-top: 0.5rem;
                    text-transform: capitalize;
                }

                @keyframes flipIn {
                    from {
                        transform: rotateX(-90deg);
                        opacity: 0;
                    }
                    to {
                        transform: rotateX(0deg);
                        opacity: 1;
                    }
                }

                .apply-button {
                    background: #EAB308;
                    color: #000000;
                    font-weight: 700;
                    font-size: 1.125rem;
                    padding: 1.5rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .apply-button:hover {
                    background: #CA8A04;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.25rem;
                    }

                    .hero-quote {
                        font-size: 1.125rem;
                    }

                    .countdown-value {
                        width: 4rem;
                        height: 4rem;
                        font-size: 1.5rem;
                    }

                    .countdown-unit {
                        font-size: 0.875rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
