use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config::SiteConfig;
use crate::pages::{faq::Faq, hero::Hero};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero deadline={props.config.deadline} apply_url={props.config.apply_url} />
            <Faq />
            <Footer />
        </div>
    }
}
