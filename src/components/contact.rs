use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fade_in::{FadeDirection, FadeInSection};
use crate::Route;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let navigator = use_navigator().unwrap();
    let go_to_questionario = Callback::from(move |_: MouseEvent| {
        navigator.push(&Route::Questionario);
    });

    html! {
        <section id="contato" class="contact-section">
            <div class="contact-inner">
                <FadeInSection direction={FadeDirection::Right}>
                    <div class="contact-card">
                        <h2>{"Solicite uma Proposta"}</h2>
                        <p>{"Receba uma consultoria gratuita em até 24h"}</p>
                        <p class="contact-card-text">
                            {"Conte um pouco sobre a sua empresa no nosso questionário e nossa equipe prepara uma proposta personalizada para o seu momento."}
                        </p>
                        <button class="contact-cta" onclick={go_to_questionario}>
                            {"Preencher questionário"}
                        </button>
                    </div>
                </FadeInSection>
                <FadeInSection direction={FadeDirection::Left} delay={0.15}>
                    <div class="contact-card">
                        <h2>{"Contato Imediato"}</h2>
                        <p>{"Converse agora com nosso time especializado"}</p>
                        <ul class="contact-channels">
                            <li>
                                <span class="contact-label">{"Telefone"}</span>
                                <a href="tel:+555433551234">{"(54) 3355-1234"}</a>
                            </li>
                            <li>
                                <span class="contact-label">{"WhatsApp"}</span>
                                <a href="https://wa.me/5554933551234" target="_blank" rel="noopener noreferrer">
                                    {"(54) 93355-1234"}
                                </a>
                            </li>
                            <li>
                                <span class="contact-label">{"E-mail"}</span>
                                <a href="mailto:contato@bozzacontabilidade.com.br">
                                    {"contato@bozzacontabilidade.com.br"}
                                </a>
                            </li>
                        </ul>
                    </div>
                </FadeInSection>
            </div>
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1.5rem;
                        background: #f7f6f2;
                    }
                    .contact-inner {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .contact-card {
                        height: 100%;
                        background: #fff;
                        border-radius: 16px;
                        border: 1px solid rgba(2, 69, 112, 0.08);
                        box-shadow: 0 8px 24px rgba(2, 69, 112, 0.06);
                        padding: 2.5rem;
                    }
                    .contact-card h2 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #024570;
                        margin-bottom: 0.25rem;
                    }
                    .contact-card > p {
                        color: #35c13e;
                        font-weight: 500;
                        margin-bottom: 1.25rem;
                    }
                    .contact-card-text {
                        color: #4b5563 !important;
                        font-weight: 400 !important;
                    }
                    .contact-cta {
                        margin-top: 1rem;
                        background: linear-gradient(90deg, #024570, #35c13e);
                        color: #fff;
                        border: none;
                        padding: 0.75rem 1.75rem;
                        border-radius: 8px;
                        font-weight: 500;
                        transition: transform 0.2s ease;
                    }
                    .contact-cta:hover {
                        transform: scale(1.03);
                    }
                    .contact-channels {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-label {
                        display: block;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #9ca3af;
                    }
                    .contact-channels a {
                        color: #024570;
                        font-weight: 500;
                    }
                    .contact-channels a:hover {
                        color: #35c13e;
                    }
                "#}
            </style>
        </section>
    }
}
