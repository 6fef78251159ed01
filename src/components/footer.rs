use yew::prelude::*;

use crate::config;
use crate::content::OPENING_HOURS;
use crate::navigation::{scroll_callback, SectionId};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background-color: #1B5E20;
                        color: white;
                        padding: 60px 20px 20px;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto 40px;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 40px;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        margin-bottom: 20px;
                    }
                    .footer-brand img {
                        width: 60px;
                        height: 60px;
                        margin-right: 15px;
                    }
                    .site-footer h4 {
                        font-size: 1.3rem;
                        margin-bottom: 20px;
                    }
                    .site-footer p, .footer-muted {
                        color: rgba(255, 255, 255, 0.9);
                        line-height: 1.6;
                    }
                    .footer-partner {
                        color: #FFD700;
                        font-weight: bold;
                        font-size: 0.9rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-links li {
                        margin-bottom: 10px;
                    }
                    .footer-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .footer-link:hover {
                        color: #FFD700;
                    }
                    .footer-hours div {
                        display: flex;
                        justify-content: space-between;
                        margin-bottom: 10px;
                    }
                    .footer-hours span:last-child {
                        color: #FFD700;
                        font-weight: bold;
                    }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 0 auto;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        padding-top: 20px;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 10px;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <img src="/logo.png" alt={config::BRAND_NAME} />
                        <div>
                            <h3 style="margin: 0 0 5px 0;">{config::BRAND_NAME}</h3>
                            <span class="footer-muted">{config::BRAND_TAGLINE}</span>
                        </div>
                    </div>
                    <p>
                        {"From the fertile volcanic soils of Gihundwe, Rusizi, Rwanda, we bring you the finest Muhari coffee. \
                          Experience the rich flavors that tell the story of our land and our love for exceptional coffee."}
                    </p>
                    <p class="footer-partner">{"🤝 In Partnership with Gihanga Coffee Company"}</p>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { for SectionId::ALL.into_iter().map(|section| html! {
                            <li key={section.anchor()}>
                                <button class="footer-link" onclick={scroll_callback::<MouseEvent>(section)}>
                                    {section.label()}
                                </button>
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact Info"}</h4>
                    <p>{format!("📍 {}", config::LOCATION)}</p>
                    <p>{format!("📞 {}", config::PHONE_LOCAL)}</p>
                    <p>{format!("📞 {}", config::PHONE_INTERNATIONAL_DISPLAY)}</p>
                    <p>{format!("✉️ {}", config::CONTACT_EMAIL)}</p>
                </div>

                <div class="footer-hours">
                    <h4>{"Opening Hours"}</h4>
                    { for OPENING_HOURS.iter().map(|(day, hours)| html! {
                        <div key={*day}>
                            <span class="footer-muted">{format!("{}:", day)}</span>
                            <span>{*hours}</span>
                        </div>
                    }) }
                </div>
            </div>

            <div class="footer-bottom">
                <span class="footer-muted">
                    {format!("© 2025 {}. All rights reserved. | Premium Muhari Coffee from Rwanda", config::BRAND_NAME)}
                </span>
                <span class="footer-muted">{"Made with ❤️ for coffee lovers worldwide"}</span>
            </div>
        </footer>
    }
}
