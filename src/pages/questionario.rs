use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::questionario::adicionais::InformacoesAdicionais;
use crate::questionario::agradecimento::Agradecimento;
use crate::questionario::contato::Contato;
use crate::questionario::empresa::InformacoesEmpresa;
use crate::questionario::estrutura::EstruturaOperacao;
use crate::questionario::revisao::Revisao;
use crate::questionario::servicos::ServicosNecessidades;
use crate::questionario::state::Questionario;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    progress: f64,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div class="progress-track">
            <div class="progress-fill" style={format!("width: {}%;", props.progress)}></div>
        </div>
    }
}

#[function_component(QuestionarioPage)]
pub fn questionario_page() -> Html {
    let state = use_state(Questionario::new);
    let submitting = use_state(|| false);
    let submit_error = use_state(|| None::<String>);

    let handle_next = {
        let state = state.clone();
        Callback::from(move |data: serde_json::Map<String, serde_json::Value>| {
            let mut next = (*state).clone();
            next.advance(Some(data));
            state.set(next);
            scroll_to_top();
        })
    };

    let handle_previous = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.retreat();
            state.set(next);
            scroll_to_top();
        })
    };

    // Sends the accumulated record to the proposal endpoint. The thank-you
    // step is only reached on success; a failure keeps the review step and
    // shows a dismissible notice.
    let handle_submit = {
        let state = state.clone();
        let submitting = submitting.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |_| {
            if *submitting {
                return;
            }
            let answers = state.answers().clone();
            log!(
                "Enviando questionário:",
                serde_json::to_string(&answers).unwrap_or_default()
            );
            submitting.set(true);
            submit_error.set(None);

            let state = state.clone();
            let submitting = submitting.clone();
            let submit_error = submit_error.clone();
            spawn_local(async move {
                let request = Request::post(&format!("{}/api/proposta", config::get_backend_url()))
                    .json(&answers)
                    .unwrap();
                match request.send().await {
                    Ok(response) if response.ok() => {
                        let mut next = (*state).clone();
                        next.advance(None);
                        state.set(next);
                        scroll_to_top();
                    }
                    Ok(response) => {
                        log!("Envio recusado com status:", response.status());
                        submit_error.set(Some(format!(
                            "Não foi possível enviar suas informações (erro {}). Tente novamente em instantes.",
                            response.status()
                        )));
                    }
                    Err(err) => {
                        log!("Falha de rede no envio:", err.to_string());
                        submit_error.set(Some(
                            "Não foi possível enviar suas informações. Verifique sua conexão e tente novamente."
                                .to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let dismiss_error = {
        let submit_error = submit_error.clone();
        Callback::from(move |_| submit_error.set(None))
    };

    let step = match state.current_step() {
        1 => html! { <InformacoesEmpresa on_next={handle_next.clone()} /> },
        2 => html! {
            <EstruturaOperacao
                on_next={handle_next.clone()}
                on_previous={handle_previous.clone()}
            />
        },
        3 => html! {
            <ServicosNecessidades
                on_next={handle_next.clone()}
                on_previous={handle_previous.clone()}
            />
        },
        4 => html! {
            <InformacoesAdicionais
                on_next={handle_next.clone()}
                on_previous={handle_previous.clone()}
            />
        },
        5 => html! {
            <Contato
                on_next={handle_next.clone()}
                on_previous={handle_previous.clone()}
            />
        },
        6 => html! {
            <Revisao
                answers={state.answers().clone()}
                on_submit={handle_submit}
                on_previous={handle_previous.clone()}
                submitting={*submitting}
            />
        },
        _ => html! { <Agradecimento /> },
    };

    html! {
        <div class="questionario-page">
            <div class="questionario-background">
                <div class="blur-circle blur-top"></div>
                <div class="blur-circle blur-bottom"></div>
            </div>

            <div class="questionario-container">
                <header class="questionario-header">
                    <h1>{"Questionário para Elaboração de Proposta"}</h1>
                    <p>
                        {"Preencha o formulário abaixo para recebermos as informações necessárias para elaborar uma proposta personalizada para sua empresa."}
                    </p>
                </header>

                <ProgressBar progress={state.progress_percent()} />

                {
                    if let Some(message) = (*submit_error).as_ref() {
                        html! {
                            <div class="submit-error">
                                <span>{message}</span>
                                <button class="submit-error-dismiss" onclick={dismiss_error}>
                                    {"×"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                { step }
            </div>

            <style>
                {r#"
                    .questionario-page {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        padding: 8rem 1rem 4rem;
                        background: linear-gradient(to bottom, #f7f6f2, #eef2f6);
                    }
                    .questionario-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                    }
                    .blur-circle {
                        position: absolute;
                        width: 18rem;
                        height: 18rem;
                        border-radius: 50%;
                        opacity: 0.1;
                        filter: blur(64px);
                    }
                    .blur-top {
                        top: 0;
                        right: 0;
                        background: #3b82f6;
                        transform: translate(50%, -50%);
                    }
                    .blur-bottom {
                        bottom: 0;
                        left: 0;
                        background: #d4af37;
                        transform: translate(-50%, 50%);
                    }
                    .questionario-container {
                        position: relative;
                        z-index: 10;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .questionario-header {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .questionario-header h1 {
                        font-size: 1.8rem;
                        color: #024570;
                        margin-bottom: 0.75rem;
                    }
                    .questionario-header p {
                        color: #4b5563;
                        max-width: 36rem;
                        margin: 0 auto;
                    }
                    .progress-track {
                        height: 8px;
                        background: rgba(2, 69, 112, 0.1);
                        border-radius: 9999px;
                        overflow: hidden;
                        margin-bottom: 2rem;
                    }
                    .progress-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #024570, #35c13e);
                        border-radius: 9999px;
                        transition: width 0.4s ease;
                    }
                    .submit-error {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        color: #b91c1c;
                        border-radius: 8px;
                        padding: 0.75rem 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .submit-error-dismiss {
                        background: none;
                        border: none;
                        color: #b91c1c;
                        font-size: 1.25rem;
                        line-height: 1;
                    }
                    .form-section {
                        background: #fff;
                        border-radius: 16px;
                        border: 1px solid rgba(2, 69, 112, 0.08);
                        box-shadow: 0 8px 24px rgba(2, 69, 112, 0.06);
                        padding: 2.5rem;
                        animation: section-enter 0.5s ease-out;
                    }
                    @keyframes section-enter {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .section-title {
                        font-size: 1.4rem;
                        color: #024570;
                        margin-bottom: 1.5rem;
                    }
                    .form-group {
                        margin-bottom: 1.25rem;
                    }
                    .form-group label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.4rem;
                    }
                    .form-group input,
                    .form-group textarea,
                    .form-group select {
                        width: 100%;
                        padding: 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 8px;
                        font-size: 0.95rem;
                        font-family: inherit;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .form-group input:focus,
                    .form-group textarea:focus,
                    .form-group select:focus {
                        outline: none;
                        border-color: #3b82f6;
                        box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.15);
                    }
                    .required {
                        color: #ef4444;
                    }
                    .error-message {
                        display: none;
                        color: #ef4444;
                        font-size: 0.85rem;
                        margin-top: 0.3rem;
                    }
                    .has-error input,
                    .has-error textarea,
                    .has-error select {
                        border-color: #f87171;
                    }
                    .has-error .error-message {
                        display: block;
                    }
                    .radio-group,
                    .checkbox-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem 1.5rem;
                    }
                    .radio-group-stacked {
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .radio-item,
                    .checkbox-item {
                        display: flex;
                        align-items: center;
                        gap: 0.4rem;
                    }
                    .radio-item input,
                    .checkbox-item input {
                        width: auto;
                    }
                    .radio-item label,
                    .checkbox-item label {
                        margin-bottom: 0;
                        font-weight: 400;
                    }
                    .btn-container {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 2rem;
                    }
                    .questionario-btn {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: none;
                        border-radius: 8px;
                        padding: 0.75rem 1.75rem;
                        color: #fff;
                        font-size: 0.95rem;
                        font-weight: 500;
                        transition: filter 0.2s ease, transform 0.2s ease;
                    }
                    .questionario-btn:hover {
                        filter: brightness(1.05);
                        transform: translateY(-1px);
                    }
                    .questionario-btn:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .btn-next {
                        background: linear-gradient(90deg, #36c03b, #2aa020);
                    }
                    .btn-prev {
                        background: linear-gradient(90deg, #5c7693, #475b73);
                    }
                    .btn-submit {
                        background: linear-gradient(90deg, #3e5992, #1d4d85);
                    }
                    .review-intro {
                        color: #6b7280;
                        margin-bottom: 1.5rem;
                    }
                    .review-section {
                        border: 1px solid rgba(2, 69, 112, 0.08);
                        border-radius: 12px;
                        padding: 1.25rem;
                        margin-bottom: 1.25rem;
                    }
                    .review-section h3 {
                        color: #024570;
                        font-size: 1.05rem;
                        margin-bottom: 0.75rem;
                    }
                    .review-item {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.25rem 0;
                        font-size: 0.92rem;
                    }
                    .review-item strong {
                        color: #374151;
                        flex-shrink: 0;
                    }
                    .review-item span {
                        color: #6b7280;
                    }
                    .thank-you {
                        text-align: center;
                    }
                    .thank-you h2 {
                        color: #024570;
                        margin-bottom: 1rem;
                    }
                    .thank-you p {
                        color: #4b5563;
                        margin-bottom: 1.5rem;
                    }
                    .thank-you-link {
                        display: inline-block;
                        background: #3b82f6;
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 8px;
                        font-weight: 500;
                        transition: background 0.3s ease;
                    }
                    .thank-you-link:hover {
                        background: #2563eb;
                    }
                "#}
            </style>
        </div>
    }
}
