use yew::prelude::*;

use crate::content::STORY_BADGES;
use crate::navigation::SectionId;
use crate::reveal::{Offset, Reveal, RevealPlan, Side};

#[function_component(Story)]
pub fn story() -> Html {
    html! {
        <section id={SectionId::Story.anchor()} class="story page-section">
            <style>
                {r#"
                    .story {
                        background-color: #f8f9fa;
                    }
                    .story-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 40px;
                        align-items: center;
                    }
                    .story-image {
                        width: 100%;
                        height: 400px;
                        object-fit: cover;
                        border-radius: 15px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
                    }
                    .story-copy {
                        text-align: left;
                    }
                    .story-copy h3 {
                        font-size: 2rem;
                        color: #228B22;
                        margin-bottom: 24px;
                    }
                    .story-copy p {
                        font-size: 1.2rem;
                        line-height: 1.8;
                        color: #555;
                        margin-bottom: 20px;
                    }
                    .partner-box {
                        background-color: #228B22;
                        color: white;
                        padding: 20px;
                        border-radius: 15px;
                        margin-bottom: 30px;
                        text-align: center;
                    }
                    .partner-box p {
                        color: white;
                        font-size: 1.1rem;
                        margin: 0;
                    }
                    .story-badges {
                        display: flex;
                        gap: 15px;
                        flex-wrap: wrap;
                    }
                    .story-badge {
                        background-color: #228B22;
                        color: white;
                        padding: 10px 20px;
                        border-radius: 25px;
                        font-size: 14px;
                        font-weight: bold;
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal plan={RevealPlan::new(Offset::Up)}>
                    <h2 class="section-title">{"The Muhari Coffee Story"}</h2>
                </Reveal>
                <div class="story-grid">
                    <Reveal plan={RevealPlan::new(Offset::FromSide(Side::Left)).delayed(200)}>
                        <img src="/2.jpg" alt="Muhari Coffee Beans" class="story-image" />
                    </Reveal>
                    <Reveal class={classes!("story-copy")} plan={RevealPlan::new(Offset::FromSide(Side::Right)).delayed(400)}>
                        <h3>{"Why Muhari Coffee is the Best"}</h3>
                        <p>
                            <strong>{"Muhari coffee"}</strong>
                            {" represents the pinnacle of Rwandan coffee excellence. Grown at high altitudes in the \
                              mineral-rich volcanic soils of Gihundwe, our coffee beans develop a unique complexity and \
                              depth of flavor that sets them apart."}
                        </p>
                        <p>
                            {"What makes Muhari coffee truly exceptional is our commitment to traditional processing \
                              methods combined with modern quality standards. Each bean is hand-selected by experienced \
                              farmers who have perfected their craft over generations."}
                        </p>
                        <p>
                            {"The result? A coffee with bright acidity, rich body, and notes of chocolate, citrus, and \
                              floral undertones that create an unforgettable tasting experience. "}
                            <strong>{"This is why Muhari coffee is simply the best."}</strong>
                        </p>
                        <div class="partner-box">
                            <h4>{"🤝 Strategic Partnership"}</h4>
                            <p>
                                {"We are proud to be in "}
                                <strong>{"partnership with Gihanga Coffee Company"}</strong>
                                {", combining our expertise to deliver the finest Rwandan coffee to the world."}
                            </p>
                        </div>
                        <div class="story-badges">
                            { for STORY_BADGES.iter().map(|badge| html! {
                                <span key={*badge} class="story-badge">{*badge}</span>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
