use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;

use crate::config;
use crate::navigation::{scroll_to_section, MenuAction, MenuState, SectionId};

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_reducer(MenuState::default);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > 50.0;

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let navigate = {
        let menu = menu.dispatcher();
        Callback::from(move |section: SectionId| {
            info!("Navigating to {}", section.anchor());
            scroll_to_section(section.anchor());
            menu.dispatch(MenuAction::Close);
        })
    };

    let nav_button = |section: SectionId, class: &'static str| {
        let navigate = navigate.clone();
        html! {
            <button class={class} onclick={Callback::from(move |_: MouseEvent| navigate.emit(section))}>
                {section.label()}
            </button>
        }
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 10px 20px;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(10px);
                        transition: box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
                    }
                    .header-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .header-brand {
                        display: flex;
                        align-items: center;
                    }
                    .header-logo {
                        width: 50px;
                        height: 50px;
                        margin-right: 12px;
                        transition: transform 0.5s ease;
                    }
                    .header-logo:hover {
                        transform: scale(1.1) rotate(360deg);
                    }
                    .header-title {
                        font-size: 20px;
                        font-weight: bold;
                        color: #228B22;
                        margin: 0;
                    }
                    .header-subtitle {
                        font-size: 12px;
                        color: #666;
                        margin: 0;
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 30px;
                    }
                    .nav-item {
                        background: none;
                        border: none;
                        font-size: 16px;
                        font-weight: 500;
                        color: #333;
                        cursor: pointer;
                        padding: 8px 0;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-item:hover {
                        color: #228B22;
                        transform: scale(1.1);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 24px;
                        color: #228B22;
                        cursor: pointer;
                        padding: 8px;
                    }
                    .mobile-menu {
                        background: white;
                        border-top: 1px solid #eee;
                        padding: 20px;
                        animation: menuOpen 0.2s ease-out;
                    }
                    .mobile-menu-item {
                        display: block;
                        width: 100%;
                        text-align: left;
                        background: none;
                        border: none;
                        border-bottom: 1px solid #eee;
                        font-size: 18px;
                        font-weight: 500;
                        color: #333;
                        cursor: pointer;
                        padding: 12px 0;
                    }
                    @keyframes menuOpen {
                        from { opacity: 0; transform: translateY(-10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .desktop-nav {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .header-subtitle {
                            display: none;
                        }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="header-brand">
                    <img src="/logo.png" alt={config::BRAND_NAME} class="header-logo" />
                    <div>
                        <h1 class="header-title">{config::BRAND_NAME}</h1>
                        <p class="header-subtitle">{config::BRAND_TAGLINE}</p>
                    </div>
                </div>

                <nav class="desktop-nav">
                    { for SectionId::ALL.into_iter().map(|section| nav_button(section, "nav-item")) }
                </nav>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    if menu.open {
                        {"✕"}
                    } else {
                        {"☰"}
                    }
                </button>
            </div>

            if menu.open {
                <div class="mobile-menu">
                    { for SectionId::ALL.into_iter().map(|section| nav_button(section, "mobile-menu-item")) }
                </div>
            }
        </header>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn menu_is_open(root: &Element) -> bool {
        root.query_selector(".mobile-menu").unwrap().is_some()
    }

    #[wasm_bindgen_test]
    async fn choosing_a_section_closes_the_menu() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Header>::with_root(root.clone()).render();
        TimeoutFuture::new(20).await;
        assert!(!menu_is_open(&root));

        // No section exists in the document: the scroll is a no-op
        click(&root, ".burger-menu");
        TimeoutFuture::new(20).await;
        assert!(menu_is_open(&root));
        click(&root, ".mobile-menu-item:nth-child(3)");
        TimeoutFuture::new(20).await;
        assert!(!menu_is_open(&root));

        let gallery = document.create_element("section").unwrap();
        gallery.set_id("gallery");
        document.body().unwrap().append_child(&gallery).unwrap();

        click(&root, ".burger-menu");
        TimeoutFuture::new(20).await;
        assert!(menu_is_open(&root));
        click(&root, ".mobile-menu-item:nth-child(3)");
        TimeoutFuture::new(20).await;
        assert!(!menu_is_open(&root));

        app.destroy();
        gallery.remove();
        root.remove();
    }
}
