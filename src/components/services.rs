use yew::prelude::*;

use crate::components::fade_in::FadeInSection;

struct Service {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        title: "Contabilidade Empresarial",
        description: "Serviços contábeis completos para empresas de todos os portes, garantindo conformidade e organização fiscal.",
        icon: "M9 7h6m0 10v-3m-3 3h.01M9 17h.01M9 14h.01M12 14h.01M15 11h.01M12 11h.01M9 11h.01M7 21h10a2 2 0 002-2V5a2 2 0 00-2-2H7a2 2 0 00-2 2v14a2 2 0 002 2z",
    },
    Service {
        title: "Consultoria Fiscal",
        description: "Orientação especializada em impostos e obrigações fiscais para otimizar a carga tributária da sua empresa.",
        icon: "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    },
    Service {
        title: "Departamento Pessoal",
        description: "Gestão completa de folha de pagamento, admissões, demissões e todas as rotinas trabalhistas.",
        icon: "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3m-6-4h.01M9 16h.01",
    },
    Service {
        title: "Abertura de Empresas",
        description: "Assessoria completa na constituição de empresas, desde o registro até a obtenção de todas as licenças necessárias.",
        icon: "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16m14 0h2m-2 0h-5m-9 0H3m2 0h5M9 7h1m-1 4h1m4-4h1m-1 4h1m-5 10v-5a1 1 0 011-1h2a1 1 0 011 1v5m-4 0h4",
    },
    Service {
        title: "Análise Financeira",
        description: "Relatórios financeiros detalhados e análises para tomada de decisões estratégicas em seu negócio.",
        icon: "M11 3.055A9.001 9.001 0 1020.945 13H11V3.055z",
    },
    Service {
        title: "Planejamento Tributário",
        description: "Estratégias personalizadas para reduzir a carga tributária de forma legal e maximizar os resultados da sua empresa.",
        icon: "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
    },
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <section id="servicos" class="services-section">
            <div class="services-inner">
                <FadeInSection>
                    <h2 class="services-title">{"Nossos Serviços"}</h2>
                    <p class="services-subtitle">
                        {"Soluções completas para que você cuide do seu negócio enquanto cuidamos dos números."}
                    </p>
                </FadeInSection>
                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <FadeInSection delay={0.1 * index as f64}>
                                <div class="service-card">
                                    <div class="service-icon">
                                        <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                            <path d={service.icon} />
                                        </svg>
                                    </div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                </div>
                            </FadeInSection>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .services-section {
                        padding: 5rem 0;
                        background: #fff;
                    }
                    .services-inner {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .services-title {
                        text-align: center;
                        font-size: 2rem;
                        font-weight: 700;
                        color: #024570;
                        margin-bottom: 0.75rem;
                    }
                    .services-subtitle {
                        text-align: center;
                        color: #6b7280;
                        max-width: 36rem;
                        margin: 0 auto 3rem;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .service-card {
                        height: 100%;
                        background: #fff;
                        border: 1px solid rgba(2, 69, 112, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 8px 24px rgba(2, 69, 112, 0.06);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                        box-shadow: 0 16px 32px rgba(2, 69, 112, 0.12);
                    }
                    .service-icon {
                        color: #35c13e;
                        margin-bottom: 1rem;
                    }
                    .service-card h3 {
                        font-size: 1.2rem;
                        font-weight: 600;
                        color: #1e40af;
                        margin-bottom: 0.5rem;
                    }
                    .service-card p {
                        color: #4b5563;
                        font-size: 0.95rem;
                    }
                "#}
            </style>
        </section>
    }
}
