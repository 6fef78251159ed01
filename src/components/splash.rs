use yew::prelude::*;

use crate::config;

/// Full-screen branded view shown while the app is loading.
#[function_component(Splash)]
pub fn splash() -> Html {
    html! {
        <div class="splash">
            <style>
                {r#"
                    .splash {
                        min-height: 100vh;
                        background-color: #228B22;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .splash-content {
                        text-align: center;
                        animation: splashIn 0.8s ease-out both;
                    }
                    .splash-logo {
                        width: 128px;
                        height: 128px;
                        margin: 0 auto 16px;
                        display: block;
                        animation: splashSpin 2s linear infinite;
                    }
                    .splash-title {
                        color: white;
                        font-size: 24px;
                        font-weight: bold;
                        animation: splashRise 0.5s ease-out 0.5s both;
                    }
                    .splash-tagline {
                        color: rgba(255, 255, 255, 0.8);
                        margin-top: 8px;
                        animation: splashFade 0.5s ease-out 1s both;
                    }
                    @keyframes splashIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes splashSpin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes splashRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes splashFade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <div class="splash-content">
                <img src="/logo.png" alt={config::BRAND_NAME} class="splash-logo" />
                <h2 class="splash-title">{config::BRAND_NAME}</h2>
                <p class="splash-tagline">{config::BRAND_ORIGIN}</p>
            </div>
        </div>
    }
}
