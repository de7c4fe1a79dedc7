use serde_json::{Map, Value};
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};

const SERVICOS_CONTABEIS: [&str; 6] = [
    "Lançamentos Contábeis",
    "Demonstrações Contábeis",
    "Conciliações Bancárias",
    "Relatórios Gerenciais",
    "Atendimento a Auditorias",
    "Outro",
];

const SERVICOS_FISCAIS: [&str; 6] = [
    "Escrituração Fiscal",
    "Apuração de Impostos",
    "Obrigações Acessórias",
    "Emissão de Notas Fiscais",
    "Atendimento a Fiscalizações",
    "Outro",
];

const CONSULTORIA_EMPRESARIAL: [&str; 5] = [
    "Consultoria Financeira",
    "Gestão de Custos",
    "Controles Internos",
    "Melhoria de Processos",
    "Outro",
];

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

#[derive(Properties, PartialEq)]
pub struct ServicosNecessidadesProps {
    pub on_next: Callback<Map<String, Value>>,
    pub on_previous: Callback<()>,
}

#[function_component(ServicosNecessidades)]
pub fn servicos_necessidades(props: &ServicosNecessidadesProps) -> Html {
    let servicos_contabeis = use_state(Vec::<String>::new);
    let servicos_contabeis_outro = use_state(String::new);
    let servicos_fiscais = use_state(Vec::<String>::new);
    let servicos_fiscais_outro = use_state(String::new);
    let folha_pagamento = use_state(|| "Não".to_string());
    let folha_pagamento_funcionarios = use_state(String::new);
    let consultoria_empresarial = use_state(Vec::<String>::new);
    let consultoria_empresarial_outro = use_state(String::new);
    let planejamento_tributario = use_state(|| "Não".to_string());
    let consultoria_societaria = use_state(|| "Não".to_string());
    let necessidades_especificas = use_state(String::new);

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

    // Checked entries join the list, unchecked ones leave it.
    let checkbox_group = |name: &'static str,
                         options: &[&'static str],
                         state: &UseStateHandle<Vec<String>>| {
        let selected = (**state).clone();
        html! {
            <div class="checkbox-group">
                {
                    options.iter().map(|option| {
                        let option = *option;
                        let state = state.clone();
                        let onchange = Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let mut values = (*state).clone();
                            if input.checked() {
                                values.push(input.value());
                            } else {
                                values.retain(|v| v != &input.value());
                            }
                            state.set(values);
                        });
                        html! {
                            <div class="checkbox-item">
                                <input
                                    type="checkbox"
                                    id={format!("{}-{}", name, option)}
                                    name={name}
                                    value={option}
                                    checked={selected.iter().any(|v| v == option)}
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
        let servicos_contabeis = servicos_contabeis.clone();
        let servicos_contabeis_outro = servicos_contabeis_outro.clone();
        let servicos_fiscais = servicos_fiscais.clone();
        let servicos_fiscais_outro = servicos_fiscais_outro.clone();
        let folha_pagamento = folha_pagamento.clone();
        let folha_pagamento_funcionarios = folha_pagamento_funcionarios.clone();
        let consultoria_empresarial = consultoria_empresarial.clone();
        let consultoria_empresarial_outro = consultoria_empresarial_outro.clone();
        let planejamento_tributario = planejamento_tributario.clone();
        let consultoria_societaria = consultoria_societaria.clone();
        let necessidades_especificas = necessidades_especificas.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            let mut data = Map::new();
            data.insert("servicos_contabeis".into(), string_array(&servicos_contabeis));
            data.insert(
                "servicos_contabeis_outro".into(),
                Value::String((*servicos_contabeis_outro).clone()),
            );
            data.insert("servicos_fiscais".into(), string_array(&servicos_fiscais));
            data.insert(
                "servicos_fiscais_outro".into(),
                Value::String((*servicos_fiscais_outro).clone()),
            );
            data.insert("folha_pagamento".into(), Value::String((*folha_pagamento).clone()));
            data.insert(
                "folha_pagamento_funcionarios".into(),
                Value::String((*folha_pagamento_funcionarios).clone()),
            );
            data.insert(
                "consultoria_empresarial".into(),
                string_array(&consultoria_empresarial),
            );
            data.insert(
                "consultoria_empresarial_outro".into(),
                Value::String((*consultoria_empresarial_outro).clone()),
            );
            data.insert(
                "planejamento_tributario".into(),
                Value::String((*planejamento_tributario).clone()),
            );
            data.insert(
                "consultoria_societaria".into(),
                Value::String((*consultoria_societaria).clone()),
            );
            data.insert(
                "necessidades_especificas".into(),
                Value::String((*necessidades_especificas).clone()),
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
            <h2 class="section-title">{"Serviços e Necessidades"}</h2>

            <div class="form-group">
                <label>{"Quais serviços contábeis você necessita?"}</label>
                { checkbox_group("servicos-contabeis", &SERVICOS_CONTABEIS, &servicos_contabeis) }
            </div>

            {
                if servicos_contabeis.iter().any(|v| v == "Outro") {
                    html! {
                        <div class="form-group">
                            <label for="contabeis-outro">{"Especifique:"}</label>
                            <input type="text" id="contabeis-outro" value={(*servicos_contabeis_outro).clone()} onchange={bind(&servicos_contabeis_outro)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Quais serviços fiscais você necessita?"}</label>
                { checkbox_group("servicos-fiscais", &SERVICOS_FISCAIS, &servicos_fiscais) }
            </div>

            {
                if servicos_fiscais.iter().any(|v| v == "Outro") {
                    html! {
                        <div class="form-group">
                            <label for="fiscais-outro">{"Especifique:"}</label>
                            <input type="text" id="fiscais-outro" value={(*servicos_fiscais_outro).clone()} onchange={bind(&servicos_fiscais_outro)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Necessita de serviços de folha de pagamento?"}</label>
                { yes_no("folha-pagamento", &folha_pagamento) }
            </div>

            {
                if *folha_pagamento == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="folha-funcionarios">{"Quantidade de funcionários na folha:"}</label>
                            <input type="number" id="folha-funcionarios" value={(*folha_pagamento_funcionarios).clone()} onchange={bind(&folha_pagamento_funcionarios)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Necessita de serviços de consultoria empresarial?"}</label>
                { checkbox_group("consultoria-empresarial", &CONSULTORIA_EMPRESARIAL, &consultoria_empresarial) }
            </div>

            {
                if consultoria_empresarial.iter().any(|v| v == "Outro") {
                    html! {
                        <div class="form-group">
                            <label for="consultoria-outro">{"Especifique:"}</label>
                            <input type="text" id="consultoria-outro" value={(*consultoria_empresarial_outro).clone()} onchange={bind(&consultoria_empresarial_outro)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class="form-group">
                <label>{"Necessita de planejamento tributário?"}</label>
                { yes_no("planejamento-tributario", &planejamento_tributario) }
            </div>

            <div class="form-group">
                <label>{"Necessita de consultoria societária?"}</label>
                { yes_no("consultoria-societaria", &consultoria_societaria) }
            </div>

            <div class="form-group">
                <label for="necessidades-especificas">{"Necessidades específicas ou problemas que precisam ser resolvidos:"}</label>
                <textarea id="necessidades-especificas" rows="4" value={(*necessidades_especificas).clone()} onchange={bind_area(&necessidades_especificas)} />
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
