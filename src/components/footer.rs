use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::header::scroll_to_section;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_link = |id: &'static str, label: &'static str| {
        html! {
            <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}>
                {label}
            </button>
        }
    };

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-column">
                    <span class="footer-logo">{"Bozza Contabilidade"}</span>
                    <p>
                        {"Soluções contábeis completas para empresas que querem crescer com segurança."}
                    </p>
                </div>
                <div class="footer-column">
                    <h4>{"Navegação"}</h4>
                    { footer_link("inicio", "Início") }
                    { footer_link("servicos", "Serviços") }
                    { footer_link("resultados", "Resultados") }
                    { footer_link("contato", "Contato") }
                </div>
                <div class="footer-column">
                    <h4>{"Endereço"}</h4>
                    <p>{"Rua André da Rocha 126"}</p>
                    <p>{"Centro, Lagoa Vermelha - RS"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2025 Bozza Contabilidade. Todos os direitos reservados."}</p>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #02344f;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .footer-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 3.5rem 1.5rem 2rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                    }
                    .footer-logo {
                        display: block;
                        font-size: 1.2rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.75rem;
                    }
                    .footer-column h4 {
                        color: #fff;
                        font-size: 0.95rem;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        margin-bottom: 0.75rem;
                    }
                    .footer-column p {
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                    .footer-link {
                        display: block;
                        background: none;
                        border: none;
                        padding: 0.2rem 0;
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 0.9rem;
                        text-align: left;
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover {
                        color: #35c13e;
                    }
                    .footer-bottom {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.25rem 1.5rem;
                        text-align: center;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
        </footer>
    }
}
