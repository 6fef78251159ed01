use yew::prelude::*;

use crate::contact::mailto::open_whatsapp_chat;

#[function_component(WhatsappButton)]
pub fn whatsapp_button() -> Html {
    let onclick = Callback::from(|_: MouseEvent| open_whatsapp_chat());

    html! {
        <>
            <style>
                {r#"
                    .whatsapp-float {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        width: 60px;
                        height: 60px;
                        border-radius: 50%;
                        border: none;
                        background: #25D366;
                        color: white;
                        font-size: 30px;
                        cursor: pointer;
                        box-shadow: 0 4px 20px rgba(37, 211, 102, 0.4);
                        z-index: 999;
                        animation: whatsappPop 0.4s ease-out both;
                        transition: transform 0.2s ease;
                    }
                    .whatsapp-float:hover {
                        transform: scale(1.1);
                    }
                    .whatsapp-float:active {
                        transform: scale(0.9);
                    }
                    @keyframes whatsappPop {
                        from { opacity: 0; transform: scale(0); }
                        to { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <button class="whatsapp-float" aria-label="Chat on WhatsApp" {onclick}>
                {"💬"}
            </button>
        </>
    }
}
