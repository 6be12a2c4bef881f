use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#home", "Home"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(Self { open })
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer_eq(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Anchor navigation still happens, only the menu collapses.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logos">
                    <img src="/Srmseal.png" alt="SRM Logo" />
                    <img src="/acmnav.svg" alt="ACM SIGKDD Logo" />
                </div>

                <button
                    class={classes!("burger-menu", menu.open.then_some("open"))}
                    aria-label={if menu.open { "Close menu" } else { "Open menu" }}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>
            </div>
            {
                if menu.open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(4px);
                    border-bottom: 1px solid rgba(234, 179, 8, 0.2);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logos {
                    display: flex;
                    align-items: center;
                }

                .nav-logos img {
                    height: 3rem;
                    width: 4.5rem;
                    object-fit: contain;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: #ffffff;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #EAB308;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: space-between;
                    width: 1.5rem;
                    height: 1.1rem;
                    background: none;
                    border: none;
                    padding: 0;
                    cursor: pointer;
                }

                .burger-menu span {
                    display: block;
                    height: 2px;
                    width: 100%;
                    background: #EAB308;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(0.5rem) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-0.5rem) rotate(-45deg);
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                    }

                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        border-top: 1px solid rgba(234, 179, 8, 0.2);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn toggle_flips() {
        let closed = MenuState::default();
        let open = apply(closed, MenuAction::Toggle);
        assert!(open.open);
        assert!(!apply(open, MenuAction::Toggle).open);
    }

    #[test]
    fn close_always_closes() {
        assert!(!apply(MenuState { open: true }, MenuAction::Close).open);
        assert!(!apply(MenuState { open: false }, MenuAction::Close).open);
    }

    #[test]
    fn unchanged_state_is_reused() {
        let state = Rc::new(MenuState::default());
        let next = state.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
