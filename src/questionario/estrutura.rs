use serde_json::{Map, Value};
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};

const ATIVO_IMOBILIZADO: [&str; 4] = [
    "Não",
    "Sim, poucos itens (até 20)",
    "Sim, quantidade média (21 a 100)",
    "Sim, muitos itens (mais de 100)",
];

#[derive(Properties, PartialEq)]
pub struct EstruturaOperacaoProps {
    pub on_next: Callback<Map<String, Value>>,
    pub on_previous: Callback<()>,
}

#[function_component(EstruturaOperacao)]
pub fn estrutura_operacao(props: &EstruturaOperacaoProps) -> Html {
    let possui_filiais = use_state(|| "Não".to_string());
    let filiais_quantidade = use_state(String::new);
    let filiais_endereco = use_state(String::new);
    let possui_socios = use_state(|| "Não".to_string());
    let socios_quantidade = use_state(String::new);
    let notas_entrada = use_state(String::new);
    let notas_saida = use_state(String::new);
    let vendas_fora_estado = use_state(|| "Não".to_string());
    let importacao_exportacao = use_state(|| "Não".to_string());
    let importacao_exportacao_detalhes = use_state(String::new);
    let ativo_imobilizado = use_state(|| "Não".to_string());

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

    let handle_next = {
        let possui_filiais = possui_filiais.clone();
        let filiais_quantidade = filiais_quantidade.clone();
        let filiais_endereco = filiais_endereco.clone();
        let possui_socios = possui_socios.clone();
        let socios_quantidade = socios_quantidade.clone();
        let notas_entrada = notas_entrada.clone();
        let notas_saida = notas_saida.clone();
        let vendas_fora_estado = vendas_fora_estado.clone();
        let importacao_exportacao = importacao_exportacao.clone();
        let importacao_exportacao_detalhes = importacao_exportacao_detalhes.clone();
        let ativo_imobilizado = ativo_imobilizado.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            let mut data = Map::new();
            data.insert("possui_filiais".into(), Value::String((*possui_filiais).clone()));
            data.insert(
                "filiais_quantidade".into(),
                Value::String((*filiais_quantidade).clone()),
            );
            data.insert("filiais_endereco".into(), Value::String((*filiais_endereco).clone()));
            data.insert("possui_socios".into(), Value::String((*possui_socios).clone()));
            data.insert(
                "socios_quantidade".into(),
                Value::String((*socios_quantidade).clone()),
            );
            data.insert("notas_entrada".into(), Value::String((*notas_entrada).clone()));
            data.insert("notas_saida".into(), Value::String((*notas_saida).clone()));
            data.insert(
                "vendas_fora_estado".into(),
                Value::String((*vendas_fora_estado).clone()),
            );
            data.insert(
                "importacao_exportacao".into(),
                Value::String((*importacao_exportacao).clone()),
            );
            data.insert(
                "importacao_exportacao_detalhes".into(),
                Value::String((*importacao_exportacao_detalhes).clone()),
            );
            data.insert(
                "ativo_imobilizado".into(),
                Value::String((*ativo_imobilizado).clone()),
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
            <h2 class="section-title">{"Estrutura e Operação"}</h2>

            <div class="form-group">
                <label>{"A empresa possui filiais?"}</label>
                { yes_no("possui-filiais", &possui_filiais) }
            </div>

            {
                if *possui_filiais == "Sim" {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="filiais-quantidade">{"Quantas filiais?"}</label>
                                <input type="number" id="filiais-quantidade" value={(*filiais_quantidade).clone()} onchange={bind(&filiais_quantidade)} />
                            </div>
                            <div class="form-group">
                                <label for="filiais-endereco">{"Endereços das filiais:"}</label>
                                <textarea id="filiais-endereco" rows="3" value={(*filiais_endereco).clone()} onchange={bind_area(&filiais_endereco)} />
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Possui sócios?"}</label>
                { yes_no("possui-socios", &possui_socios) }
            </div>

            {
                if *possui_socios == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="socios-quantidade">{"Quantos sócios?"}</label>
                            <input type="number" id="socios-quantidade" value={(*socios_quantidade).clone()} onchange={bind(&socios_quantidade)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label for="notas-entrada">{"Volume médio mensal de notas fiscais de entrada (compras):"}</label>
                <input type="number" id="notas-entrada" value={(*notas_entrada).clone()} onchange={bind(&notas_entrada)} />
            </div>

            <div class="form-group">
                <label for="notas-saida">{"Volume médio mensal de notas fiscais de saída (vendas):"}</label>
                <input type="number" id="notas-saida" value={(*notas_saida).clone()} onchange={bind(&notas_saida)} />
            </div>

            <div class="form-group">
                <label>{"Possui vendas para fora do estado?"}</label>
                { yes_no("vendas-fora-estado", &vendas_fora_estado) }
            </div>

            <div class="form-group">
                <label>{"Realiza operações de importação ou exportação?"}</label>
                { yes_no("importacao-exportacao", &importacao_exportacao) }
            </div>

            {
                if *importacao_exportacao == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="importacao-detalhes">{"Especifique:"}</label>
                            <input type="text" id="importacao-detalhes" value={(*importacao_exportacao_detalhes).clone()} onchange={bind(&importacao_exportacao_detalhes)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Possui algum tipo de ativo imobilizado?"}</label>
                <div class="radio-group radio-group-stacked">
                    {
                        ATIVO_IMOBILIZADO.iter().map(|option| {
                            let option = *option;
                            let state = ativo_imobilizado.clone();
                            let checked = *ativo_imobilizado == option;
                            let onchange = Callback::from(move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                state.set(input.value());
                            });
                            html! {
                                <div class="radio-item">
                                    <input
                                        type="radio"
                                        id={format!("ativo-{}", option)}
                                        name="ativo-imobilizado"
                                        value={option}
                                        {checked}
                                        {onchange}
                                    />
                                    <label for={format!("ativo-{}", option)}>{option}</label>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
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
