use yew::prelude::*;
use log::debug;

use crate::content::{TimelineEntry, TIMELINE};
use crate::navigation::SectionId;
use crate::reveal::{use_reveal, Offset, Reveal, RevealPlan, Side};

// Press-and-hold zoom on a timeline image. Purely visual.
fn zoom_callback<E: 'static>(zoomed: &UseStateHandle<bool>, on: bool) -> Callback<E> {
    let zoomed = zoomed.clone();
    Callback::from(move |_: E| zoomed.set(on))
}

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    entry: TimelineEntry,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let entry = props.entry;
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let zoomed = use_state_eq(|| false);
    let plan = RevealPlan::timeline(entry.index());

    {
        let id = entry.id;
        use_effect_with_deps(
            move |revealed| {
                if *revealed {
                    debug!("Timeline step {} revealed", id);
                }
                || ()
            },
            revealed,
        );
    }

    let side_class = match entry.side() {
        Side::Left => "timeline-item left",
        Side::Right => "timeline-item right",
    };

    html! {
        <div ref={node} class={side_class} style={plan.style(revealed)}>
            <div class="timeline-dot">
                <img
                    src={entry.image}
                    alt={entry.title}
                    class={classes!("timeline-image", (*zoomed).then(|| "zoomed"))}
                    onmousedown={zoom_callback::<MouseEvent>(&zoomed, true)}
                    onmouseup={zoom_callback::<MouseEvent>(&zoomed, false)}
                    onmouseleave={zoom_callback::<MouseEvent>(&zoomed, false)}
                    ontouchstart={zoom_callback::<TouchEvent>(&zoomed, true)}
                    ontouchend={zoom_callback::<TouchEvent>(&zoomed, false)}
                />
            </div>
            <div class="timeline-content">
                <div class="timeline-card">
                    <h3>{entry.title}</h3>
                    <p>{entry.description}</p>
                    <div class="timeline-step">{format!("Step {} of {}", entry.id, TIMELINE.len())}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id={SectionId::Gallery.anchor()} class="gallery page-section">
            <style>
                {r#"
                    .gallery {
                        background: linear-gradient(rgba(255, 255, 255, 0.95), rgba(255, 255, 255, 0.95)), url('/behind.jpg');
                        background-size: cover;
                        background-position: center;
                        background-attachment: fixed;
                    }
                    .timeline {
                        position: relative;
                        max-width: 1000px;
                        margin: 0 auto;
                        padding: 0 20px;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        background: linear-gradient(to bottom, #228B22, #1B5E20);
                        transform: translateX(-50%);
                        border-radius: 2px;
                    }
                    .timeline-item {
                        position: relative;
                        display: flex;
                        align-items: center;
                        margin-bottom: 60px;
                    }
                    .timeline-item.left {
                        flex-direction: row;
                    }
                    .timeline-item.right {
                        flex-direction: row-reverse;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        transition: transform 0.3s ease;
                    }
                    .timeline-dot:hover {
                        transform: translateX(-50%) scale(1.2);
                    }
                    .timeline-image {
                        width: 80px;
                        height: 80px;
                        object-fit: cover;
                        border-radius: 50%;
                        border: 4px solid white;
                        cursor: pointer;
                        position: relative;
                        z-index: 10;
                        transition: transform 0.3s ease, border-radius 0.3s ease, box-shadow 0.3s ease;
                    }
                    .timeline-image.zoomed {
                        transform: scale(3);
                        z-index: 1000;
                        border-radius: 10px;
                        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.5);
                    }
                    .timeline-content {
                        width: calc(50% - 60px);
                    }
                    .timeline-card {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(15px);
                        padding: 20px;
                        border-radius: 15px;
                        box-shadow: 0 8px 25px rgba(0, 0, 0, 0.1);
                        border: 1px solid rgba(34, 139, 34, 0.1);
                        transition: transform 0.3s ease;
                    }
                    .timeline-card:hover {
                        transform: translateY(-5px) scale(1.02);
                    }
                    .timeline-card h3 {
                        color: #228B22;
                        font-size: 1.3rem;
                        margin-bottom: 8px;
                    }
                    .timeline-card p {
                        color: #555;
                        font-size: 0.95rem;
                        line-height: 1.5;
                        margin-bottom: 10px;
                    }
                    .timeline-step {
                        display: inline-block;
                        background: #228B22;
                        color: white;
                        padding: 4px 12px;
                        border-radius: 12px;
                        font-size: 0.8rem;
                        font-weight: bold;
                    }
                    @media (max-width: 768px) {
                        .timeline-line {
                            left: 40px;
                        }
                        .timeline-item.left, .timeline-item.right {
                            flex-direction: row;
                            padding-left: 90px;
                        }
                        .timeline-dot {
                            left: 40px;
                        }
                        .timeline-content {
                            width: 100%;
                        }
                        .timeline-image {
                            width: 60px;
                            height: 60px;
                        }
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal plan={RevealPlan::new(Offset::Up)}>
                    <h2 class="section-title">{"Our Coffee Journey"}</h2>
                    <p class="section-lead">{"Follow the complete journey of our Muhari coffee from farm to cup"}</p>
                </Reveal>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for TIMELINE.iter().map(|entry| html! {
                        <TimelineItem key={entry.id.to_string()} entry={*entry} />
                    }) }
                </div>
            </div>
        </section>
    }
}
