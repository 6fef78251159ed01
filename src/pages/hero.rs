use yew::prelude::*;

use crate::navigation::{scroll_callback, SectionId};
use crate::reveal::{Offset, Reveal, RevealPlan};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        text-align: center;
                        color: white;
                        padding: 100px 20px 60px;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-image: linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5)), url('/1.jpg');
                        background-size: cover;
                        background-position: center;
                        z-index: -1;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        font-weight: bold;
                        margin-bottom: 20px;
                    }
                    .hero-title span {
                        color: #FFD700;
                    }
                    .hero-subtitle {
                        font-size: 1.3rem;
                        max-width: 700px;
                        margin: 0 auto 40px;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 20px;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .hero-cta {
                        padding: 15px 35px;
                        border-radius: 30px;
                        font-size: 1.1rem;
                        font-weight: bold;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta.primary {
                        background: #228B22;
                        color: white;
                        border: none;
                    }
                    .hero-cta.secondary {
                        background: transparent;
                        color: white;
                        border: 2px solid white;
                    }
                    .scroll-cue {
                        position: absolute;
                        bottom: 30px;
                        left: 50%;
                        transform: translateX(-50%);
                        background: none;
                        border: none;
                        color: white;
                        font-size: 2rem;
                        cursor: pointer;
                        animation: cueBounce 2s ease-in-out infinite;
                    }
                    @keyframes cueBounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 10px); }
                    }
                    @media (max-width: 768px) {
                        .hero-title {
                            font-size: 2.3rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-background"></div>
            <Reveal plan={RevealPlan::new(Offset::Up)}>
                <h1 class="hero-title">{"Premium "}<span>{"Muhari Coffee"}</span></h1>
                <p class="hero-subtitle">
                    {"Grown in the volcanic hills of Gihundwe, Rusizi. Hand-picked, carefully processed and \
                      roasted to bring the very best of Rwanda to your cup."}
                </p>
                <div class="hero-cta-group">
                    <button class="hero-cta primary" onclick={scroll_callback::<MouseEvent>(SectionId::Gallery)}>
                        {"Explore Our Journey"}
                    </button>
                    <button class="hero-cta secondary" onclick={scroll_callback::<MouseEvent>(SectionId::Contact)}>
                        {"Order Now"}
                    </button>
                </div>
            </Reveal>
            <button class="scroll-cue" aria-label="Scroll down" onclick={scroll_callback::<MouseEvent>(SectionId::Gallery)}>
                {"⌄"}
            </button>
        </section>
    }
}
