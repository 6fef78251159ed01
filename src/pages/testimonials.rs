use yew::prelude::*;

use crate::config;
use crate::content::{TestimonialEntry, MAX_RATING, TESTIMONIALS};
use crate::navigation::{scroll_callback, SectionId};
use crate::reveal::{stagger_delay, Offset, Reveal, RevealPlan};

/// Cards come in one after another.
fn card_plan(index: usize) -> RevealPlan {
    RevealPlan::new(Offset::Grow)
        .delayed(stagger_delay(index))
        .lasting(config::TESTIMONIAL_REVEAL_MS)
}

/// Stars pop in left to right once their card is visible.
fn star_plan(star: u8) -> RevealPlan {
    RevealPlan::new(Offset::Grow)
        .delayed(stagger_delay(usize::from(star)))
        .lasting(config::TESTIMONIAL_REVEAL_MS)
}

fn render_stars(rating: u8) -> Html {
    html! {
        <div class="stars">
            { for (0..MAX_RATING).map(|i| html! {
                <Reveal key={i.to_string()} class={classes!("star-slot")} plan={star_plan(i)}>
                    <span class={classes!("star", (i >= rating).then(|| "empty"))}>{"⭐"}</span>
                </Reveal>
            }) }
        </div>
    }
}

fn render_testimonial(index: usize, testimonial: &TestimonialEntry) -> Html {
    html! {
        <Reveal key={index.to_string()} class={classes!("testimonial-card")} plan={card_plan(index)}>
            <div class="quote-mark">{"\u{201C}"}</div>
            { render_stars(testimonial.rating) }
            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
            <div class="testimonial-author">
                <div class="testimonial-avatar">{testimonial.avatar}</div>
                <div>
                    <h4>{testimonial.name}</h4>
                    <p>{testimonial.location}</p>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id={SectionId::Testimonials.anchor()} class="testimonials page-section">
            <style>
                {r#"
                    .testimonials {
                        background-color: #f8f9fa;
                    }
                    .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
                        gap: 30px;
                    }
                    .testimonial-card {
                        position: relative;
                        background: white;
                        padding: 40px 30px 30px;
                        border-radius: 20px;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                        border: 1px solid rgba(34, 139, 34, 0.1);
                    }
                    .quote-mark {
                        position: absolute;
                        top: 10px;
                        left: 20px;
                        font-size: 60px;
                        color: #228B22;
                        opacity: 0.2;
                        line-height: 1;
                    }
                    .stars {
                        text-align: center;
                        margin-bottom: 20px;
                    }
                    .star-slot {
                        display: inline-block;
                    }
                    .star {
                        font-size: 24px;
                        margin-right: 5px;
                    }
                    .star.empty {
                        filter: grayscale(1);
                        opacity: 0.3;
                    }
                    .testimonial-quote {
                        font-size: 1.05rem;
                        line-height: 1.7;
                        color: #555;
                        font-style: italic;
                        text-align: center;
                        margin-bottom: 25px;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .testimonial-avatar {
                        font-size: 40px;
                        margin-right: 15px;
                    }
                    .testimonial-author h4 {
                        color: #228B22;
                        margin: 0 0 5px 0;
                    }
                    .testimonial-author p {
                        color: #888;
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    .partnership-highlight {
                        margin: 40px auto 30px;
                        max-width: 800px;
                        background: linear-gradient(135deg, #228B22, #1B5E20);
                        color: white;
                        padding: 30px;
                        border-radius: 20px;
                        text-align: center;
                    }
                    .partnership-highlight blockquote {
                        color: #FFD700;
                        font-weight: bold;
                        margin: 0;
                    }
                    .testimonials-cta {
                        text-align: center;
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal plan={RevealPlan::new(Offset::Up)}>
                    <h2 class="section-title">{"What Our Happy Clients Say"}</h2>
                    <p class="section-lead">
                        {"Don't just take our word for it - hear from coffee lovers who have experienced the magic of Muhari coffee"}
                    </p>
                </Reveal>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| render_testimonial(i, t)) }
                </div>

                <Reveal plan={RevealPlan::new(Offset::Up)}>
                    <div class="partnership-highlight">
                        <h3>{"🤝 Strategic Partnership"}</h3>
                        <p>
                            <strong>{"United Fast Services"}</strong>
                            {" is proud to partner with "}
                            <strong>{"Gihanga Coffee Company"}</strong>
                            {", a leading name in Rwandan coffee excellence. Together, we combine decades of expertise, \
                              sustainable farming practices, and a shared commitment to delivering world-class coffee."}
                        </p>
                        <blockquote>{"\"Two companies, one vision: Premium Rwandan coffee for the world\""}</blockquote>
                    </div>
                </Reveal>

                <Reveal class={classes!("testimonials-cta")} plan={RevealPlan::new(Offset::Up)}>
                    <button class="cta-button" onclick={scroll_callback::<MouseEvent>(SectionId::Contact)}>
                        {"Join Our Happy Customers Today! ☕"}
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_staggered_by_position() {
        let delays: Vec<u32> = (0..TESTIMONIALS.len()).map(|i| card_plan(i).delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300, 400, 500]);
        assert_eq!(card_plan(3).duration_ms, 600);
    }

    #[test]
    fn stars_follow_each_other() {
        assert_eq!(star_plan(0).delay_ms, 0);
        assert_eq!(star_plan(4).delay_ms, 400);
        assert_eq!(star_plan(4).duration_ms, 600);
    }
}
