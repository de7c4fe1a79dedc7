use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const ROTATING_WORDS: [&str; 4] = [
    "contabilidade",
    "consultoria",
    "assessoria",
    "planejamento",
];

/// How long each word stays on screen before the next takes over. Long
/// enough for a full type/pause/delete cycle.
const WORD_ROTATION_MS: u32 = 6_000;

#[derive(Properties, PartialEq)]
struct TypingEffectProps {
    text: String,
    #[prop_or(60)]
    speed: u32,
    #[prop_or(3_000)]
    pause_for: u32,
}

/// Types the word out, holds it, deletes it, and starts over. One pending
/// timeout at a time; changing the word cancels it.
#[function_component(TypingEffect)]
fn typing_effect(props: &TypingEffectProps) -> Html {
    let shown = use_state(|| 0usize);
    let deleting = use_state(|| false);

    {
        let shown_setter = shown.clone();
        let deleting_setter = deleting.clone();
        let speed = props.speed;
        let pause_for = props.pause_for;
        use_effect_with_deps(
            move |(current, is_deleting, text): &(usize, bool, String)| {
                let len = text.chars().count();
                let current = (*current).min(len);
                let (delay, next_shown, next_deleting) = if !*is_deleting && current == len {
                    // Word complete: hold it, then start erasing.
                    (pause_for, current, true)
                } else if *is_deleting && current == 0 {
                    (speed, 0, false)
                } else if *is_deleting {
                    (speed / 2, current - 1, true)
                } else {
                    (speed, current + 1, false)
                };

                let timeout = Timeout::new(delay, move || {
                    shown_setter.set(next_shown);
                    deleting_setter.set(next_deleting);
                });
                move || drop(timeout)
            },
            (*shown, *deleting, props.text.clone()),
        );
    }

    let display: String = props.text.chars().take(*shown).collect();

    html! {
        <div class="typing-effect">
            <span>{display}</span>
            <div class="typing-underline"></div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let word_index = use_state(|| 0usize);

    {
        let word_setter = word_index.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let next = (*current + 1) % ROTATING_WORDS.len();
                let timeout = Timeout::new(WORD_ROTATION_MS, move || {
                    word_setter.set(next);
                });
                move || drop(timeout)
            },
            *word_index,
        );
    }

    let navigator = use_navigator().unwrap();
    let go_to_questionario = Callback::from(move |_: web_sys::MouseEvent| {
        navigator.push(&Route::Questionario);
    });

    html! {
        <section id="inicio" class="hero-section">
            <div class="hero-pattern"></div>
            <div class="hero-inner">
                <div class="hero-badge">{"Há mais de 50 anos no mercado"}</div>
                <h2 class="hero-title">{"Soluções em"}</h2>
                <div class="hero-word">
                    <TypingEffect text={ROTATING_WORDS[*word_index].to_string()} />
                </div>
                <button class="hero-cta" onclick={go_to_questionario}>
                    {"Solicite uma proposta exclusiva"}
                </button>
            </div>
            <div class="hero-waves">
                <svg xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="none" viewBox="0 0 1440 320">
                    <path
                        d="M0,256L48,240C96,224,192,192,288,186.7C384,181,480,203,576,224C672,245,768,267,864,266.7C960,267,1056,245,1152,213.3C1248,181,1344,139,1392,117.3L1440,96L1440,320L0,320Z"
                        fill="#024570"
                        fill-opacity="0.25"
                    />
                    <path
                        d="M0,192L48,197.3C96,203,192,213,288,229.3C384,245,480,267,576,266.7C672,267,768,245,864,240C960,235,1056,245,1152,234.7C1248,224,1344,192,1392,176L1440,160L1440,320L0,320Z"
                        fill="#024570"
                        fill-opacity="1"
                    />
                </svg>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(160deg, #f7f6f2 0%, #e8f1f7 100%);
                    }
                    .hero-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.1;
                        background-image: radial-gradient(#024570 1px, transparent 1px);
                        background-size: 30px 30px;
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 7rem 1.5rem 10rem;
                        max-width: 42rem;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        margin-bottom: 0.75rem;
                        border-radius: 9999px;
                        background: linear-gradient(45deg, #024570, #35c13e);
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        font-weight: 700;
                        color: #024570;
                        letter-spacing: 0.025em;
                    }
                    .hero-word {
                        height: 7rem;
                        overflow: hidden;
                    }
                    .typing-effect span {
                        font-size: 4.5rem;
                        font-weight: 700;
                        background: linear-gradient(45deg, #024570, #35c13e);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .typing-underline {
                        height: 4px;
                        margin-top: 0.5rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #35c13e, rgba(2, 69, 112, 0.5));
                        animation: underline-grow 0.4s ease-out forwards;
                    }
                    @keyframes underline-grow {
                        from { width: 0; opacity: 0; }
                        to { width: 100%; opacity: 1; }
                    }
                    .hero-cta {
                        margin-top: 2rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(90deg, #024570, #35c13e);
                        color: #fff;
                        font-weight: 500;
                        font-size: 1rem;
                        box-shadow: 0 10px 25px -5px rgba(2, 69, 112, 0.5);
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-waves {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 155px;
                        overflow: hidden;
                        z-index: 20;
                    }
                    .hero-waves svg {
                        position: absolute;
                        bottom: -1px;
                        width: 100%;
                        height: 100%;
                    }
                    @media (max-width: 640px) {
                        .hero-title { font-size: 2.5rem; }
                        .typing-effect span { font-size: 3rem; }
                        .hero-word { height: 5rem; }
                    }
                "#}
            </style>
        </section>
    }
}
