use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::cta::CallToActionSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::results::ResultsSection;
use crate::components::services::ServicesSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <Hero />
            <ServicesSection />
            <ResultsSection />
            <CallToActionSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
