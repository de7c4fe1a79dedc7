use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Agradecimento)]
pub fn agradecimento() -> Html {
    html! {
        <section class="form-section thank-you">
            <svg class="checkmark" xmlns="http://www.w3.org/2000/svg" width="80" height="80" viewBox="0 0 52 52">
                <circle class="checkmark-circle" cx="26" cy="26" r="25" fill="none" stroke="#2ecc71" stroke-width="2" />
                <path class="checkmark-check" fill="none" stroke="#2ecc71" stroke-width="2" d="M14.1 27.2l7.1 7.2 16.7-16.8" />
            </svg>

            <h2>{"Obrigado pelo envio!"}</h2>
            <p>
                {"Recebemos suas informações com sucesso. Nossa equipe analisará os dados e entrará em contato o mais breve possível para apresentar uma proposta personalizada para sua empresa."}
            </p>
            <p>
                {"Se tiver alguma dúvida ou precisar adicionar mais informações, não hesite em entrar em contato conosco pelos canais disponíveis no rodapé do site."}
            </p>

            <Link<Route> to={Route::Home} classes="thank-you-link">
                {"Voltar para a Página Inicial"}
            </Link<Route>>

            <style>
                {r#"
                    .checkmark {
                        display: block;
                        margin: 0 auto 1.5rem;
                    }
                    .checkmark-circle {
                        stroke-dasharray: 166;
                        stroke-dashoffset: 166;
                        animation: checkmark-stroke 0.6s cubic-bezier(0.65, 0, 0.45, 1) forwards;
                    }
                    .checkmark-check {
                        transform-origin: 50% 50%;
                        stroke-dasharray: 48;
                        stroke-dashoffset: 48;
                        animation: checkmark-stroke 0.3s cubic-bezier(0.65, 0, 0.45, 1) 0.6s forwards;
                    }
                    @keyframes checkmark-stroke {
                        100% { stroke-dashoffset: 0; }
                    }
                "#}
            </style>
        </section>
    }
}
