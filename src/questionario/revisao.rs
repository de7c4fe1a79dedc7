use serde_json::{Map, Value};
use yew::prelude::*;

use crate::questionario::button::{ButtonVariant, QuestionarioButton};

#[derive(Properties, PartialEq)]
pub struct RevisaoProps {
    pub answers: Map<String, Value>,
    pub on_submit: Callback<()>,
    pub on_previous: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .filter_map(|item| item.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    }
}

/// Read-only recap of everything answered so far. Empty fields are simply
/// not shown.
#[function_component(Revisao)]
pub fn revisao(props: &RevisaoProps) -> Html {
    let review_item = |label: &'static str, key: &str| {
        match props.answers.get(key).and_then(display_value) {
            Some(value) => html! {
                <div class="review-item">
                    <strong>{label}{":"}</strong>
                    <span>{value}</span>
                </div>
            },
            None => html! {},
        }
    };

    let review_section = |title: &'static str, fields: &[(&'static str, &'static str)]| {
        let has_content = fields
            .iter()
            .any(|(_, key)| props.answers.get(*key).and_then(display_value).is_some());
        if !has_content {
            return html! {};
        }
        html! {
            <div class="review-section">
                <h3>{title}</h3>
                { for fields.iter().map(|&(label, key)| review_item(label, key)) }
            </div>
        }
    };

    let handle_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };
    let handle_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_| on_previous.emit(()))
    };

    html! {
        <section class="form-section">
            <h2 class="section-title">{"Revisão das Informações"}</h2>
            <p class="review-intro">
                {"Confira os dados abaixo antes de enviar. Você pode voltar para corrigir qualquer etapa."}
            </p>

            { review_section("Empresa", &[
                ("Razão Social", "razao_social"),
                ("Nome Fantasia", "nome_fantasia"),
                ("CNPJ", "cnpj"),
                ("Data de Fundação", "data_fundacao"),
                ("Endereço", "endereco"),
                ("Telefone", "telefone"),
                ("E-mail", "email"),
                ("Site", "site"),
                ("Regime Tributário", "regime_tributario"),
                ("Setor de Atuação", "setor_atuacao"),
                ("Atividade Principal", "atividade_principal"),
                ("Faturamento Médio Mensal", "faturamento"),
                ("Número de Funcionários", "funcionarios"),
            ]) }

            { review_section("Estrutura e Operação", &[
                ("Possui filiais", "possui_filiais"),
                ("Quantidade de filiais", "filiais_quantidade"),
                ("Endereços das filiais", "filiais_endereco"),
                ("Possui sócios", "possui_socios"),
                ("Quantidade de sócios", "socios_quantidade"),
                ("Notas fiscais de entrada/mês", "notas_entrada"),
                ("Notas fiscais de saída/mês", "notas_saida"),
                ("Vendas para fora do estado", "vendas_fora_estado"),
                ("Importação/Exportação", "importacao_exportacao"),
                ("Detalhes de importação/exportação", "importacao_exportacao_detalhes"),
                ("Ativo imobilizado", "ativo_imobilizado"),
            ]) }

            { review_section("Serviços e Necessidades", &[
                ("Serviços contábeis", "servicos_contabeis"),
                ("Outros serviços contábeis", "servicos_contabeis_outro"),
                ("Serviços fiscais", "servicos_fiscais"),
                ("Outros serviços fiscais", "servicos_fiscais_outro"),
                ("Folha de pagamento", "folha_pagamento"),
                ("Funcionários na folha", "folha_pagamento_funcionarios"),
                ("Consultoria empresarial", "consultoria_empresarial"),
                ("Outra consultoria", "consultoria_empresarial_outro"),
                ("Planejamento tributário", "planejamento_tributario"),
                ("Consultoria societária", "consultoria_societaria"),
                ("Necessidades específicas", "necessidades_especificas"),
            ]) }

            { review_section("Informações Adicionais", &[
                ("Sistema de gestão", "sistema_gestao"),
                ("Qual sistema", "sistema_gestao_nome"),
                ("Contabilidade atual", "contabilidade_atual"),
                ("Motivo da troca", "motivo_troca"),
                ("Prazo para a proposta", "prazo_entrega"),
                ("Expectativas", "expectativas"),
                ("Orçamento", "orcamento"),
                ("Outras informações", "outras_informacoes"),
            ]) }

            { review_section("Contato", &[
                ("Nome", "nome_contato"),
                ("Cargo", "cargo_contato"),
                ("E-mail", "email_contato"),
                ("Telefone Comercial", "telefone_contato"),
                ("Celular", "celular_contato"),
                ("WhatsApp", "whatsapp"),
                ("Meio de contato preferido", "meio_contato_preferido"),
                ("Horário preferido", "horario_contato_preferido"),
                ("Agendar reunião", "agendamento"),
                ("Data e horário da reunião", "data_horario_agendamento"),
            ]) }

            <div class="btn-container">
                <QuestionarioButton variant={ButtonVariant::Prev} onclick={handle_previous} disabled={props.submitting}>
                    {"Anterior"}
                </QuestionarioButton>
                <QuestionarioButton variant={ButtonVariant::Submit} onclick={handle_submit} disabled={props.submitting}>
                    { if props.submitting { "Enviando..." } else { "Enviar" } }
                </QuestionarioButton>
            </div>
        </section>
    }
}
