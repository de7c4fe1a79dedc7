use serde_json::{Map, Value};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};

const PRAZOS: [&str; 4] = [
    "Urgente (até 2 dias)",
    "Rápido (3 a 5 dias)",
    "Normal (1 a 2 semanas)",
    "Sem pressa (mais de 2 semanas)",
];

const ORCAMENTOS: [&str; 7] = [
    "Até R$ 500/mês",
    "De R$ 501 a R$ 1.000/mês",
    "De R$ 1.001 a R$ 2.000/mês",
    "De R$ 2.001 a R$ 3.000/mês",
    "De R$ 3.001 a R$ 5.000/mês",
    "Acima de R$ 5.000/mês",
    "A definir conforme proposta",
];

#[derive(Properties, PartialEq)]
pub struct InformacoesAdicionaisProps {
    pub on_next: Callback<Map<String, Value>>,
    pub on_previous: Callback<()>,
}

#[function_component(InformacoesAdicionais)]
pub fn informacoes_adicionais(props: &InformacoesAdicionaisProps) -> Html {
    let sistema_gestao = use_state(|| "Não".to_string());
    let sistema_gestao_nome = use_state(String::new);
    let contabilidade_atual = use_state(|| "Não".to_string());
    let motivo_troca = use_state(String::new);
    let prazo_entrega = use_state(String::new);
    let expectativas = use_state(String::new);
    let orcamento = use_state(String::new);
    let outras_informacoes = use_state(String::new);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let bind_area = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            state.set(area.value());
        })
    };
    let bind_select = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.set(select.value());
        })
    };

    let yes_no = |name: &'static str, state: &UseStateHandle<String>| {
        let state_value = (**state).clone();
        html! {
            <div class="radio-group">
                {
                    ["Não", "Sim"].iter().map(|option| {
                        let option = *option;
                        let state = state.clone();
                        let onchange = Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            state.set(input.value());
                        });
                        html! {
                            <div class="radio-item">
                                <input
                                    type="radio"
                                    id={format!("{}-{}", name, option)}
                                    name={name}
                                    value={option}
                                    checked={state_value == option}
                                    {onchange}
                                />
                                <label for={format!("{}-{}", name, option)}>{option}</label>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    let select_options = |options: &[&'static str], selected: &str| {
        html! {
            <>
                <option value="" selected={selected.is_empty()}>{"Selecione uma opção"}</option>
                {
                    options.iter().map(|option| html! {
                        <option value={*option} selected={selected == *option}>{option}</option>
                    }).collect::<Html>()
                }
            </>
        }
    };

    let handle_next = {
        let sistema_gestao = sistema_gestao.clone();
        let sistema_gestao_nome = sistema_gestao_nome.clone();
        let contabilidade_atual = contabilidade_atual.clone();
        let motivo_troca = motivo_troca.clone();
        let prazo_entrega = prazo_entrega.clone();
        let expectativas = expectativas.clone();
        let orcamento = orcamento.clone();
        let outras_informacoes = outras_informacoes.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            let mut data = Map::new();
            data.insert("sistema_gestao".into(), Value::String((*sistema_gestao).clone()));
            data.insert(
                "sistema_gestao_nome".into(),
                Value::String((*sistema_gestao_nome).clone()),
            );
            data.insert(
                "contabilidade_atual".into(),
                Value::String((*contabilidade_atual).clone()),
            );
            data.insert("motivo_troca".into(), Value::String((*motivo_troca).clone()));
            data.insert("prazo_entrega".into(), Value::String((*prazo_entrega).clone()));
            data.insert("expectativas".into(), Value::String((*expectativas).clone()));
            data.insert("orcamento".into(), Value::String((*orcamento).clone()));
            data.insert(
                "outras_informacoes".into(),
                Value::String((*outras_informacoes).clone()),
            );
            on_next.emit(data);
        })
    };

    let handle_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_| on_previous.emit(()))
    };

    html! {
        <section class="form-section">
            <h2 class="section-title">{"Informações Adicionais"}</h2>

            <div class="form-group">
                <label>{"Utiliza algum sistema de gestão (ERP)?"}</label>
                { yes_no("sistema-gestao", &sistema_gestao) }
            </div>

            {
                if *sistema_gestao == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="sistema-nome">{"Qual sistema utiliza?"}</label>
                            <input type="text" id="sistema-nome" value={(*sistema_gestao_nome).clone()} onchange={bind(&sistema_gestao_nome)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Já possui contabilidade atualmente?"}</label>
                { yes_no("contabilidade-atual", &contabilidade_atual) }
            </div>

            {
                if *contabilidade_atual == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="motivo-troca">{"Motivo da troca:"}</label>
                            <textarea id="motivo-troca" rows="3" value={(*motivo_troca).clone()} onchange={bind_area(&motivo_troca)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label for="prazo-entrega">{"Qual o prazo que você necessita para receber uma proposta?"}</label>
                <select id="prazo-entrega" onchange={bind_select(&prazo_entrega)}>
                    { select_options(&PRAZOS, &prazo_entrega) }
                </select>
            </div>

            <div class="form-group">
                <label for="expectativas">{"Quais são suas principais expectativas em relação aos serviços contábeis?"}</label>
                <textarea id="expectativas" rows="4" value={(*expectativas).clone()} onchange={bind_area(&expectativas)} />
            </div>

            <div class="form-group">
                <label for="orcamento">{"Qual o orçamento disponível para serviços contábeis?"}</label>
                <select id="orcamento" onchange={bind_select(&orcamento)}>
                    { select_options(&ORCAMENTOS, &orcamento) }
                </select>
            </div>

            <div class="form-group">
                <label for="outras-informacoes">{"Outras informações relevantes:"}</label>
                <textarea id="outras-informacoes" rows="4" value={(*outras_informacoes).clone()} onchange={bind_area(&outras_informacoes)} />
            </div>

            <div class="btn-container">
                <QuestionarioButton variant={ButtonVariant::Prev} onclick={handle_previous}>
                    {"Anterior"}
                </QuestionarioButton>
                <QuestionarioButton variant={ButtonVariant::Next} onclick={handle_next}>
                    {"Próximo"}
                </QuestionarioButton>
            </div>
        </section>
    }
}
