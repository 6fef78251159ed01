use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    footer::Footer,
    header::Header,
    whatsapp_button::WhatsappButton,
};
use crate::config;
use crate::pages::{
    contact::Contact,
    gallery::Gallery,
    hero::Hero,
    story::Story,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    use_title(config::PAGE_TITLE.to_string());

    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Story />
                <Gallery />
                <Testimonials />
                <Contact />
            </main>
            <Footer />
            <WhatsappButton />
        </div>
    }
}
