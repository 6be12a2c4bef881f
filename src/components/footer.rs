use yew::prelude::*;

pub const CONTACT_EMAIL: &str = "srmacmsigkdd@gmail.com";

pub struct Contact {
    pub role: &'static str,
    pub name: &'static str,
    pub phone: &'static str,
}

pub const CONTACTS: [Contact; 3] = [
    Contact { role: "Chair", name: "Srijan", phone: "+91 83368 94338" },
    Contact { role: "Vice Chair", name: "Saakshi", phone: "+91 97358 44700" },
    Contact { role: "Treasurer", name: "Nilesh", phone: "+91 93412 07002" },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-content">
                <div class="footer-logos">
                    <img src="/BIG_400x400.png" alt="SRM Logo" />
                    <img src="/acmnav.svg" alt="ACM SIGKDD Logo" />
                </div>
                <p class="footer-mission">
                    {"SRM ACM SIGKDD is dedicated to fostering innovation in Data Science, Machine Learning, and AI."}
                </p>
                <div class="footer-contacts">
                    { for CONTACTS.iter().map(|contact| html! {
                        <div class="footer-contact">
                            <span class="contact-icon">{"👤"}</span>
                            <p>
                                <span class="contact-role">{format!("{}:", contact.role)}</span>
                                {format!(" {} ({})", contact.name, contact.phone)}
                            </p>
                        </div>
                    }) }
                    <div class="footer-contact">
                        <span class="contact-icon">{"✉"}</span>
                        <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </div>
                </div>
                <div class="footer-socials">
                    <a href="#" aria-label="Instagram">{"Instagram"}</a>
                    <a href="#" aria-label="LinkedIn">{"LinkedIn"}</a>
                </div>
                <p class="footer-copyright">{"© 2024 SRM ACM SIGKDD. All rights reserved."}</p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #000000;
                    border-top: 1px solid rgba(234, 179, 8, 0.2);
                    padding: 3rem 0;
                }

                .footer-content {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    text-align: center;
                }

                .footer-logos {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .footer-logos img {
                    height: 3.5rem;
                    width: 3.5rem;
                }

                .footer-mission {
                    color: #9ca3af;
                    max-width: 32rem;
                    margin: 0 auto 1.5rem;
                }

                .footer-contacts {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    color: #d1d5db;
                    margin-bottom: 1.5rem;
                }

                .footer-contact {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-contact p {
                    margin: 0;
                }

                .footer-contact a {
                    color: inherit;
                    text-decoration: none;
                }

                .contact-icon {
                    color: #EAB308;
                }

                .contact-role {
                    font-weight: 600;
                }

                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }

                .footer-socials a {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-socials a:hover {
                    color: #EAB308;
                }

                .footer-copyright {
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
