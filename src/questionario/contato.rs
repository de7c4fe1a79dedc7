use serde_json::{Map, Value};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};
use crate::questionario::validate::{is_filled, is_valid_email, is_valid_phone};

const MEIOS_CONTATO: [&str; 5] = ["E-mail", "Telefone", "WhatsApp", "Videochamada", "Presencial"];

const HORARIOS: [&str; 4] = [
    "Manhã (8h às 12h)",
    "Tarde (13h às 18h)",
    "Noite (após 18h)",
    "Qualquer horário comercial",
];

struct ContatoFields<'a> {
    nome: &'a str,
    email: &'a str,
    telefone: &'a str,
    celular: &'a str,
    meio_contato: &'a str,
}

/// Name, a valid e-mail, at least one valid phone and a preferred channel
/// are required; each failing field gets its own key.
fn field_errors(fields: &ContatoFields) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !is_filled(fields.nome) {
        errors.push("nome_contato");
    }
    if !is_filled(fields.email) || !is_valid_email(fields.email.trim()) {
        errors.push("email_contato");
    }
    if !is_filled(fields.telefone) && !is_filled(fields.celular) {
        errors.push("telefone_contato");
        errors.push("celular_contato");
    } else {
        if is_filled(fields.telefone) && !is_valid_phone(fields.telefone.trim()) {
            errors.push("telefone_contato");
        }
        if is_filled(fields.celular) && !is_valid_phone(fields.celular.trim()) {
            errors.push("celular_contato");
        }
    }
    if fields.meio_contato.is_empty() {
        errors.push("meio_contato_preferido");
    }
    errors
}

#[derive(Properties, PartialEq)]
pub struct ContatoProps {
    pub on_next: Callback<Map<String, Value>>,
    pub on_previous: Callback<()>,
}

#[function_component(Contato)]
pub fn contato(props: &ContatoProps) -> Html {
    let nome_contato = use_state(String::new);
    let cargo_contato = use_state(String::new);
    let email_contato = use_state(String::new);
    let telefone_contato = use_state(String::new);
    let celular_contato = use_state(String::new);
    let whatsapp = use_state(|| "Não".to_string());
    let meio_contato_preferido = use_state(String::new);
    let horario_contato_preferido = use_state(String::new);
    let agendamento = use_state(|| "Não".to_string());
    let data_horario_agendamento = use_state(String::new);
    let errors = use_state(Vec::<&'static str>::new);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
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

    let has_error = |key: &str| errors.iter().any(|e| *e == key);
    let group_class = |key: &str| {
        if has_error(key) {
            "form-group has-error"
        } else {
            "form-group"
        }
    };

    let handle_next = {
        let nome_contato = nome_contato.clone();
        let cargo_contato = cargo_contato.clone();
        let email_contato = email_contato.clone();
        let telefone_contato = telefone_contato.clone();
        let celular_contato = celular_contato.clone();
        let whatsapp = whatsapp.clone();
        let meio_contato_preferido = meio_contato_preferido.clone();
        let horario_contato_preferido = horario_contato_preferido.clone();
        let agendamento = agendamento.clone();
        let data_horario_agendamento = data_horario_agendamento.clone();
        let errors = errors.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            let found = field_errors(&ContatoFields {
                nome: &nome_contato,
                email: &email_contato,
                telefone: &telefone_contato,
                celular: &celular_contato,
                meio_contato: &meio_contato_preferido,
            });
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());

            let mut data = Map::new();
            data.insert("nome_contato".into(), Value::String((*nome_contato).clone()));
            data.insert("cargo_contato".into(), Value::String((*cargo_contato).clone()));
            data.insert("email_contato".into(), Value::String((*email_contato).clone()));
            data.insert(
                "telefone_contato".into(),
                Value::String((*telefone_contato).clone()),
            );
            data.insert(
                "celular_contato".into(),
                Value::String((*celular_contato).clone()),
            );
            data.insert("whatsapp".into(), Value::String((*whatsapp).clone()));
            data.insert(
                "meio_contato_preferido".into(),
                Value::String((*meio_contato_preferido).clone()),
            );
            data.insert(
                "horario_contato_preferido".into(),
                Value::String((*horario_contato_preferido).clone()),
            );
            data.insert("agendamento".into(), Value::String((*agendamento).clone()));
            data.insert(
                "data_horario_agendamento".into(),
                Value::String((*data_horario_agendamento).clone()),
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
            <h2 class="section-title">{"Informações de Contato"}</h2>

            <div class={group_class("nome_contato")}>
                <label for="nome-contato">{"Nome Completo "}<span class="required">{"*"}</span></label>
                <input type="text" id="nome-contato" value={(*nome_contato).clone()} onchange={bind(&nome_contato)} />
                <div class="error-message">{"Este campo é obrigatório"}</div>
            </div>

            <div class="form-group">
                <label for="cargo-contato">{"Cargo"}</label>
                <input type="text" id="cargo-contato" value={(*cargo_contato).clone()} onchange={bind(&cargo_contato)} />
            </div>

            <div class={group_class("email_contato")}>
                <label for="email-contato">{"E-mail "}<span class="required">{"*"}</span></label>
                <input type="email" id="email-contato" value={(*email_contato).clone()} onchange={bind(&email_contato)} />
                <div class="error-message">{"Informe um e-mail válido"}</div>
            </div>

            <div class={group_class("telefone_contato")}>
                <label for="telefone-contato">{"Telefone Comercial "}<span class="required">{"*"}</span></label>
                <input type="tel" id="telefone-contato" placeholder="(00) 0000-0000" value={(*telefone_contato).clone()} onchange={bind(&telefone_contato)} />
                <div class="error-message">{"Informe pelo menos um telefone válido"}</div>
            </div>

            <div class={group_class("celular_contato")}>
                <label for="celular-contato">{"Celular "}<span class="required">{"*"}</span></label>
                <input type="tel" id="celular-contato" placeholder="(00) 00000-0000" value={(*celular_contato).clone()} onchange={bind(&celular_contato)} />
                <div class="error-message">{"Informe pelo menos um telefone válido"}</div>
            </div>

            <div class="form-group">
                <label>{"O celular tem WhatsApp?"}</label>
                { yes_no("whatsapp", &whatsapp) }
            </div>

            <div class={group_class("meio_contato_preferido")}>
                <label for="meio-contato">{"Meio de contato preferido "}<span class="required">{"*"}</span></label>
                <select id="meio-contato" onchange={bind_select(&meio_contato_preferido)}>
                    <option value="" selected={meio_contato_preferido.is_empty()}>{"Selecione uma opção"}</option>
                    {
                        MEIOS_CONTATO.iter().map(|option| html! {
                            <option value={*option} selected={*meio_contato_preferido == *option}>{option}</option>
                        }).collect::<Html>()
                    }
                </select>
                <div class="error-message">{"Selecione uma opção"}</div>
            </div>

            <div class="form-group">
                <label for="horario-contato">{"Horário preferido para contato"}</label>
                <select id="horario-contato" onchange={bind_select(&horario_contato_preferido)}>
                    <option value="" selected={horario_contato_preferido.is_empty()}>{"Selecione uma opção"}</option>
                    {
                        HORARIOS.iter().map(|option| html! {
                            <option value={*option} selected={*horario_contato_preferido == *option}>{option}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <div class="form-group">
                <label>{"Gostaria de agendar uma reunião para discutir a proposta?"}</label>
                { yes_no("agendamento", &agendamento) }
            </div>

            {
                if *agendamento == "Sim" {
                    html! {
                        <div class="form-group">
                            <label for="agendamento-data">{"Data e horário preferidos para a reunião:"}</label>
                            <input type="text" id="agendamento-data" placeholder="Ex: 15/04/2025 às 14:00" value={(*data_horario_agendamento).clone()} onchange={bind(&data_horario_agendamento)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_with_valid_phone_reports_exactly_the_email() {
        let fields = ContatoFields {
            nome: "Maria Souza",
            email: "maria@",
            telefone: "(54) 3355-1234",
            celular: "",
            meio_contato: "E-mail",
        };
        assert_eq!(field_errors(&fields), vec!["email_contato"]);
    }

    #[test]
    fn both_phones_empty_flags_both() {
        let fields = ContatoFields {
            nome: "Maria Souza",
            email: "maria@empresa.com.br",
            telefone: "",
            celular: "",
            meio_contato: "WhatsApp",
        };
        assert_eq!(
            field_errors(&fields),
            vec!["telefone_contato", "celular_contato"]
        );
    }

    #[test]
    fn one_valid_phone_is_enough() {
        let fields = ContatoFields {
            nome: "Maria Souza",
            email: "maria@empresa.com.br",
            telefone: "",
            celular: "(54) 93355-1234",
            meio_contato: "WhatsApp",
        };
        assert!(field_errors(&fields).is_empty());
    }
}
