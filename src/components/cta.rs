use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fade_in::{FadeDirection, FadeInSection};
use crate::Route;

#[function_component(CallToActionSection)]
pub fn call_to_action_section() -> Html {
    let navigator = use_navigator().unwrap();
    let go_to_questionario = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Questionario);
    });

    let go_to_contact = Callback::from(|_: MouseEvent| {
        crate::components::header::scroll_to_section("contato");
    });

    html! {
        <section class="cta-section">
            <FadeInSection direction={FadeDirection::Up}>
                <div class="cta-inner">
                    <h2>{"Pronto para transformar a contabilidade da sua empresa?"}</h2>
                    <p>
                        {"Responda nosso questionário e receba uma proposta sob medida, ou fale direto com o nosso time."}
                    </p>
                    <div class="cta-buttons">
                        <button class="cta-primary" onclick={go_to_questionario}>
                            {"Cadastre-se"}
                        </button>
                        <button class="cta-secondary" onclick={go_to_contact}>
                            {"Fale Conosco"}
                        </button>
                    </div>
                </div>
            </FadeInSection>
            <style>
                {r#"
                    .cta-section {
                        padding: 5rem 1.5rem;
                        background: linear-gradient(120deg, #024570, #0a6aa5);
                    }
                    .cta-inner {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        color: #fff;
                    }
                    .cta-inner h2 {
                        font-size: 2rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .cta-inner p {
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 2rem;
                    }
                    .cta-buttons {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .cta-primary {
                        background: #35c13e;
                        color: #fff;
                        border: none;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-size: 1rem;
                        font-weight: 600;
                        transition: background 0.3s ease;
                    }
                    .cta-primary:hover {
                        background: #2aa020;
                    }
                    .cta-secondary {
                        background: transparent;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-size: 1rem;
                        transition: background 0.3s ease;
                    }
                    .cta-secondary:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                "#}
            </style>
        </section>
    }
}
