use serde_json::{Map, Value};
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};
use crate::questionario::validate::{is_filled, is_valid_cnpj, is_valid_email, is_valid_phone};

const REGIMES: [&str; 5] = [
    "Simples Nacional",
    "Lucro Presumido",
    "Lucro Real",
    "MEI",
    "Outro",
];

const SETORES: [&str; 5] = [
    "Comércio",
    "Serviços",
    "Indústria",
    "Comércio e Serviços",
    "Outro",
];

const FATURAMENTOS: [&str; 6] = [
    "Até R$ 10.000",
    "De R$ 10.001 a R$ 30.000",
    "De R$ 30.001 a R$ 100.000",
    "De R$ 100.001 a R$ 300.000",
    "De R$ 300.001 a R$ 1.000.000",
    "Acima de R$ 1.000.000",
];

const FUNCIONARIOS: [&str; 6] = ["Nenhum", "1 a 5", "6 a 10", "11 a 20", "21 a 50", "Mais de 50"];

struct EmpresaFields<'a> {
    razao_social: &'a str,
    cnpj: &'a str,
    telefone: &'a str,
    email: &'a str,
    regime_tributario: &'a str,
    setor_atuacao: &'a str,
    atividade_principal: &'a str,
    faturamento: &'a str,
    funcionarios: &'a str,
}

/// Required fields plus the format checks; returns the keys in error.
fn field_errors(fields: &EmpresaFields) -> Vec<&'static str> {
    let mut errors = Vec::new();
    if !is_filled(fields.razao_social) {
        errors.push("razao_social");
    }
    if !is_filled(fields.cnpj) || !is_valid_cnpj(fields.cnpj.trim()) {
        errors.push("cnpj");
    }
    if !is_filled(fields.telefone) || !is_valid_phone(fields.telefone.trim()) {
        errors.push("telefone");
    }
    if !is_filled(fields.email) || !is_valid_email(fields.email.trim()) {
        errors.push("email");
    }
    if fields.regime_tributario.is_empty() {
        errors.push("regime_tributario");
    }
    if fields.setor_atuacao.is_empty() {
        errors.push("setor_atuacao");
    }
    if !is_filled(fields.atividade_principal) {
        errors.push("atividade_principal");
    }
    if fields.faturamento.is_empty() {
        errors.push("faturamento");
    }
    if fields.funcionarios.is_empty() {
        errors.push("funcionarios");
    }
    errors
}

#[derive(Properties, PartialEq)]
pub struct InformacoesEmpresaProps {
    pub on_next: Callback<Map<String, Value>>,
}

#[function_component(InformacoesEmpresa)]
pub fn informacoes_empresa(props: &InformacoesEmpresaProps) -> Html {
    let razao_social = use_state(String::new);
    let nome_fantasia = use_state(String::new);
    let cnpj = use_state(String::new);
    let data_fundacao = use_state(String::new);
    let endereco = use_state(String::new);
    let telefone = use_state(String::new);
    let email = use_state(String::new);
    let site = use_state(String::new);
    let regime_tributario = use_state(String::new);
    let regime_tributario_outro = use_state(String::new);
    let setor_atuacao = use_state(String::new);
    let setor_atuacao_outro = use_state(String::new);
    let atividade_principal = use_state(String::new);
    let faturamento = use_state(String::new);
    let funcionarios = use_state(String::new);
    let errors = use_state(Vec::<&'static str>::new);

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

    let has_error = |key: &str| errors.iter().any(|e| *e == key);

    let handle_next = {
        let razao_social = razao_social.clone();
        let nome_fantasia = nome_fantasia.clone();
        let cnpj = cnpj.clone();
        let data_fundacao = data_fundacao.clone();
        let endereco = endereco.clone();
        let telefone = telefone.clone();
        let email = email.clone();
        let site = site.clone();
        let regime_tributario = regime_tributario.clone();
        let regime_tributario_outro = regime_tributario_outro.clone();
        let setor_atuacao = setor_atuacao.clone();
        let setor_atuacao_outro = setor_atuacao_outro.clone();
        let atividade_principal = atividade_principal.clone();
        let faturamento = faturamento.clone();
        let funcionarios = funcionarios.clone();
        let errors = errors.clone();
        let on_next = props.on_next.clone();
        Callback::from(move |_| {
            let found = field_errors(&EmpresaFields {
                razao_social: &razao_social,
                cnpj: &cnpj,
                telefone: &telefone,
                email: &email,
                regime_tributario: &regime_tributario,
                setor_atuacao: &setor_atuacao,
                atividade_principal: &atividade_principal,
                faturamento: &faturamento,
                funcionarios: &funcionarios,
            });
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(Vec::new());

            let mut data = Map::new();
            data.insert("razao_social".into(), Value::String((*razao_social).clone()));
            data.insert("nome_fantasia".into(), Value::String((*nome_fantasia).clone()));
            data.insert("cnpj".into(), Value::String((*cnpj).clone()));
            data.insert("data_fundacao".into(), Value::String((*data_fundacao).clone()));
            data.insert("endereco".into(), Value::String((*endereco).clone()));
            data.insert("telefone".into(), Value::String((*telefone).clone()));
            data.insert("email".into(), Value::String((*email).clone()));
            data.insert("site".into(), Value::String((*site).clone()));
            data.insert(
                "regime_tributario".into(),
                Value::String((*regime_tributario).clone()),
            );
            data.insert(
                "regime_tributario_outro".into(),
                Value::String((*regime_tributario_outro).clone()),
            );
            data.insert("setor_atuacao".into(), Value::String((*setor_atuacao).clone()));
            data.insert(
                "setor_atuacao_outro".into(),
                Value::String((*setor_atuacao_outro).clone()),
            );
            data.insert(
                "atividade_principal".into(),
                Value::String((*atividade_principal).clone()),
            );
            data.insert("faturamento".into(), Value::String((*faturamento).clone()));
            data.insert("funcionarios".into(), Value::String((*funcionarios).clone()));
            on_next.emit(data);
        })
    };

    let radio_group = |name: &'static str,
                       options: &[&'static str],
                       state: &UseStateHandle<String>| {
        let state_value = (**state).clone();
        html! {
            <div class="radio-group">
                {
                    options.iter().map(|option| {
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

    let group_class = |key: &str| {
        if has_error(key) {
            "form-group has-error"
        } else {
            "form-group"
        }
    };

    html! {
        <section class="form-section">
            <h2 class="section-title">{"Informações da Empresa"}</h2>

            <div class={group_class("razao_social")}>
                <label for="razao-social">{"Razão Social "}<span class="required">{"*"}</span></label>
                <input type="text" id="razao-social" value={(*razao_social).clone()} onchange={bind(&razao_social)} />
                <div class="error-message">{"Este campo é obrigatório"}</div>
            </div>

            <div class="form-group">
                <label for="nome-fantasia">{"Nome Fantasia"}</label>
                <input type="text" id="nome-fantasia" value={(*nome_fantasia).clone()} onchange={bind(&nome_fantasia)} />
            </div>

            <div class={group_class("cnpj")}>
                <label for="cnpj">{"CNPJ "}<span class="required">{"*"}</span></label>
                <input type="text" id="cnpj" placeholder="00.000.000/0000-00" value={(*cnpj).clone()} onchange={bind(&cnpj)} />
                <div class="error-message">{"Informe um CNPJ válido"}</div>
            </div>

            <div class="form-group">
                <label for="data-fundacao">{"Data de Fundação"}</label>
                <input type="text" id="data-fundacao" placeholder="dd/mm/aaaa" value={(*data_fundacao).clone()} onchange={bind(&data_fundacao)} />
            </div>

            <div class="form-group">
                <label for="endereco">{"Endereço Completo"}</label>
                <input type="text" id="endereco" value={(*endereco).clone()} onchange={bind(&endereco)} />
            </div>

            <div class={group_class("telefone")}>
                <label for="telefone">{"Telefone "}<span class="required">{"*"}</span></label>
                <input type="tel" id="telefone" placeholder="(00) 0000-0000" value={(*telefone).clone()} onchange={bind(&telefone)} />
                <div class="error-message">{"Informe um telefone válido"}</div>
            </div>

            <div class={group_class("email")}>
                <label for="email">{"E-mail para Contato "}<span class="required">{"*"}</span></label>
                <input type="email" id="email" value={(*email).clone()} onchange={bind(&email)} />
                <div class="error-message">{"E-mail inválido"}</div>
            </div>

            <div class="form-group">
                <label for="site">{"Site (se houver)"}</label>
                <input type="text" id="site" value={(*site).clone()} onchange={bind(&site)} />
            </div>

            <div class={group_class("regime_tributario")}>
                <label>{"Regime Tributário Atual "}<span class="required">{"*"}</span></label>
                { radio_group("regime-tributario", &REGIMES, &regime_tributario) }
                <div class="error-message">{"Selecione uma opção"}</div>
            </div>

            {
                if *regime_tributario == "Outro" {
                    html! {
                        <div class="form-group">
                            <label for="regime-outro">{"Especifique:"}</label>
                            <input type="text" id="regime-outro" value={(*regime_tributario_outro).clone()} onchange={bind(&regime_tributario_outro)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class={group_class("setor_atuacao")}>
                <label>{"Setor de Atuação "}<span class="required">{"*"}</span></label>
                { radio_group("setor-atuacao", &SETORES, &setor_atuacao) }
                <div class="error-message">{"Selecione uma opção"}</div>
            </div>

            {
                if *setor_atuacao == "Outro" {
                    html! {
                        <div class="form-group">
                            <label for="setor-outro">{"Especifique:"}</label>
                            <input type="text" id="setor-outro" value={(*setor_atuacao_outro).clone()} onchange={bind(&setor_atuacao_outro)} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <div class={group_class("atividade_principal")}>
                <label for="atividade-principal">{"Detalhamento da Atividade Principal "}<span class="required">{"*"}</span></label>
                <textarea id="atividade-principal" rows="4" value={(*atividade_principal).clone()} onchange={bind_area(&atividade_principal)} />
                <div class="error-message">{"Este campo é obrigatório"}</div>
            </div>

            <div class={group_class("faturamento")}>
                <label>{"Faturamento Médio Mensal "}<span class="required">{"*"}</span></label>
                { radio_group("faturamento", &FATURAMENTOS, &faturamento) }
                <div class="error-message">{"Selecione uma opção"}</div>
            </div>

            <div class={group_class("funcionarios")}>
                <label>{"Número de Funcionários "}<span class="required">{"*"}</span></label>
                { radio_group("funcionarios", &FUNCIONARIOS, &funcionarios) }
                <div class="error-message">{"Selecione uma opção"}</div>
            </div>

            <div class="btn-container">
                <span></span>
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

    fn valid_fields() -> EmpresaFields<'static> {
        EmpresaFields {
            razao_social: "Padaria Estrela LTDA",
            cnpj: "12.345.678/0001-90",
            telefone: "(54) 3355-1234",
            email: "contato@estrela.com.br",
            regime_tributario: "Simples Nacional",
            setor_atuacao: "Comércio",
            atividade_principal: "Padaria e confeitaria",
            faturamento: "Até R$ 10.000",
            funcionarios: "1 a 5",
        }
    }

    #[test]
    fn complete_fields_pass() {
        assert!(field_errors(&valid_fields()).is_empty());
    }

    #[test]
    fn bad_cnpj_is_the_only_error_when_everything_else_is_valid() {
        let mut fields = valid_fields();
        fields.cnpj = "12345678000190";
        assert_eq!(field_errors(&fields), vec!["cnpj"]);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let fields = EmpresaFields {
            razao_social: "",
            cnpj: "",
            telefone: "",
            email: "",
            regime_tributario: "",
            setor_atuacao: "",
            atividade_principal: "",
            faturamento: "",
            funcionarios: "",
        };
        assert_eq!(field_errors(&fields).len(), 9);
    }
}
